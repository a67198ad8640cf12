use crate::ElbowParamsError;
use linfa::ParamGuard;
use std::ops::Range;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
/// The range of candidate cluster counts swept by the
/// [elbow method](crate::compute_square_distances).
pub struct ElbowValidParams {
    /// Smallest candidate cluster count, inclusive.
    k_min: usize,
    /// Largest candidate cluster count, exclusive.
    k_max: usize,
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
/// An helper struct used to construct a set of [valid hyperparameters](ElbowValidParams)
/// for the elbow method (using the builder pattern).
pub struct ElbowParams(ElbowValidParams);

impl Default for ElbowParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ElbowParams {
    /// Sweep the candidates `[k_min, k_max)`.
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `k_min = 1`
    /// * `k_max = 12`
    pub fn new() -> Self {
        Self(ElbowValidParams { k_min: 1, k_max: 12 })
    }

    /// Change the value of `k_min`
    pub fn k_min(mut self, k_min: usize) -> Self {
        self.0.k_min = k_min;
        self
    }

    /// Change the value of `k_max`
    pub fn k_max(mut self, k_max: usize) -> Self {
        self.0.k_max = k_max;
        self
    }
}

impl ParamGuard for ElbowParams {
    type Checked = ElbowValidParams;
    type Error = ElbowParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.k_min == 0 {
            Err(ElbowParamsError::KMin)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl ElbowValidParams {
    pub fn k_min(&self) -> usize {
        self.k_min
    }

    pub fn k_max(&self) -> usize {
        self.k_max
    }

    /// The candidate cluster counts in increasing order. Empty when `k_max <= k_min`.
    pub fn candidates(&self) -> Range<usize> {
        self.k_min..self.k_max.max(self.k_min)
    }

    /// Number of candidates, `k_max - k_min` or 0.
    pub fn n_candidates(&self) -> usize {
        self.k_max.saturating_sub(self.k_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<ElbowParams>();
        has_autotraits::<ElbowValidParams>();
    }

    #[test]
    fn defaults_sweep_one_to_eleven() {
        let params = ElbowParams::default().check().unwrap();
        assert_eq!(params.k_min(), 1);
        assert_eq!(params.k_max(), 12);
        assert_eq!(params.candidates().collect::<Vec<_>>(), (1..12).collect::<Vec<_>>());
    }

    #[test]
    fn k_min_cannot_be_zero() {
        let res = ElbowParams::new().k_min(0).check();
        assert_eq!(res, Err(ElbowParamsError::KMin));
    }

    #[test]
    fn inverted_range_has_no_candidates() {
        let params = ElbowParams::new().k_min(5).k_max(3).check().unwrap();
        assert_eq!(params.n_candidates(), 0);
        assert_eq!(params.candidates().count(), 0);
    }

    #[test]
    fn candidate_count_matches_range() {
        let params = ElbowParams::new().k_min(2).k_max(7).check_unwrap();
        assert_eq!(params.n_candidates(), 5);
        assert_eq!(params.candidates().len(), 5);
    }
}
