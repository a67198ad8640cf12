use crate::error::Result;
use crate::estimator::InertiaEstimator;
use crate::hyperparams::{ElbowParams, ElbowValidParams};
use linfa::{DatasetBase, Float, ParamGuard};
use ndarray::{Array1, ArrayBase, Data, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// Inertia of a clustering for each candidate cluster count.
///
/// Cluster counts are strictly increasing and `inertia[i]` belongs to `n_clusters[i]`.
pub struct SweepResult<F: Float> {
    n_clusters: Vec<usize>,
    inertia: Array1<F>,
}

impl<F: Float> SweepResult<F> {
    /// The candidate cluster counts, in increasing order.
    pub fn n_clusters(&self) -> &[usize] {
        &self.n_clusters
    }

    /// The inertia of each candidate, aligned with [`n_clusters`](Self::n_clusters).
    pub fn inertia(&self) -> &Array1<F> {
        &self.inertia
    }

    pub fn len(&self) -> usize {
        self.n_clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_clusters.is_empty()
    }

    /// Iterate over `(n_clusters, inertia)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, F)> + '_ {
        self.n_clusters
            .iter()
            .copied()
            .zip(self.inertia.iter().copied())
    }
}

impl ElbowValidParams {
    /// Fit one fresh model per candidate in `[k_min, k_max)` on the whole dataset and collect
    /// its inertia.
    ///
    /// The first failing fit aborts the sweep and its error is returned; no partial result is
    /// produced.
    pub fn compute_square_distances<F, D, T, E>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
        estimator: &E,
    ) -> Result<SweepResult<F>>
    where
        F: Float,
        D: Data<Elem = F>,
        E: InertiaEstimator<F> + ?Sized,
    {
        let _span = tracing::debug_span!(
            "elbow_sweep",
            k_min = self.k_min(),
            k_max = self.k_max()
        )
        .entered();

        let observations = dataset.records().view();
        let n_clusters: Vec<usize> = self.candidates().collect();
        let mut inertia = Array1::zeros(n_clusters.len());

        for (slot, &k) in inertia.iter_mut().zip(n_clusters.iter()) {
            *slot = estimator.inertia(k, observations)?;
            tracing::debug!(n_clusters = k, inertia = ?*slot, "fitted candidate");
        }

        Ok(SweepResult {
            n_clusters,
            inertia,
        })
    }
}

/// Sweep the candidate cluster counts `[k_min, k_max)` with `estimator`.
///
/// This is a shorthand for checking `ElbowParams::new().k_min(k_min).k_max(k_max)` and calling
/// [`ElbowValidParams::compute_square_distances`].
///
/// ```
/// use linfa::DatasetBase;
/// use linfa_elbow::{compute_square_distances, KMeansInertia};
/// use ndarray::array;
///
/// let dataset = DatasetBase::from(array![[0., 0.], [0., 1.], [10., 10.], [10., 11.]]);
/// let sweep = compute_square_distances(&dataset, 1, 4, &KMeansInertia::new(42)).unwrap();
///
/// assert_eq!(sweep.n_clusters(), &[1, 2, 3]);
/// assert!(sweep.inertia()[1] < sweep.inertia()[0]);
/// ```
pub fn compute_square_distances<F, D, T, E>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
    k_min: usize,
    k_max: usize,
    estimator: &E,
) -> Result<SweepResult<F>>
where
    F: Float,
    D: Data<Elem = F>,
    E: InertiaEstimator<F> + ?Sized,
{
    ElbowParams::new()
        .k_min(k_min)
        .k_max(k_max)
        .check()?
        .compute_square_distances(dataset, estimator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElbowError;
    use ndarray::{array, Array2, ArrayView2};
    use std::cell::RefCell;

    /// Records the requested cluster counts and reports `100 / k`.
    struct Recording {
        calls: RefCell<Vec<usize>>,
    }

    impl Recording {
        fn new() -> Self {
            Recording {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl InertiaEstimator<f64> for Recording {
        fn inertia(&self, n_clusters: usize, observations: ArrayView2<f64>) -> Result<f64> {
            assert_eq!(observations.nrows(), 4);
            self.calls.borrow_mut().push(n_clusters);
            Ok(100. / n_clusters as f64)
        }
    }

    /// Fails once `n_clusters` reaches the wrapped count.
    struct FailingAt(usize);

    impl InertiaEstimator<f64> for FailingAt {
        fn inertia(&self, n_clusters: usize, observations: ArrayView2<f64>) -> Result<f64> {
            if n_clusters >= self.0 {
                Err(ElbowError::NotEnoughSamples {
                    n_clusters,
                    n_samples: observations.nrows(),
                })
            } else {
                Ok(1.0)
            }
        }
    }

    fn records() -> Array2<f64> {
        array![[0., 0.], [1., 1.], [2., 2.], [3., 3.]]
    }

    #[test]
    fn every_candidate_is_fitted_in_order() {
        let estimator = Recording::new();
        let dataset = DatasetBase::from(records());
        let sweep = compute_square_distances(&dataset, 2, 6, &estimator).unwrap();

        assert_eq!(*estimator.calls.borrow(), vec![2, 3, 4, 5]);
        assert_eq!(sweep.n_clusters(), &[2, 3, 4, 5]);
        assert_eq!(
            sweep.iter().collect::<Vec<_>>(),
            vec![(2, 50.), (3, 100. / 3.), (4, 25.), (5, 20.)]
        );
    }

    #[test]
    fn empty_range_fits_nothing() {
        let estimator = Recording::new();
        let dataset = DatasetBase::from(records());
        let sweep = compute_square_distances(&dataset, 2, 2, &estimator).unwrap();

        assert!(sweep.is_empty());
        assert_eq!(sweep.inertia().len(), 0);
        assert!(estimator.calls.borrow().is_empty());
    }

    #[test]
    fn zero_k_min_fails_before_fitting() {
        let estimator = Recording::new();
        let res = compute_square_distances(&DatasetBase::from(records()), 0, 3, &estimator);

        assert!(matches!(res, Err(ElbowError::InvalidParams(_))));
        assert!(estimator.calls.borrow().is_empty());
    }

    #[test]
    fn first_failure_aborts_the_sweep() {
        let res = compute_square_distances(&DatasetBase::from(records()), 1, 8, &FailingAt(5));
        assert!(matches!(
            res,
            Err(ElbowError::NotEnoughSamples { n_clusters: 5, .. })
        ));
    }

    #[test]
    fn params_and_shorthand_agree() {
        let dataset = DatasetBase::from(records());
        let params = ElbowParams::new().k_min(3).k_max(5).check().unwrap();
        let a = params
            .compute_square_distances(&dataset, &Recording::new())
            .unwrap();
        let b = compute_square_distances(&dataset, 3, 5, &Recording::new()).unwrap();
        assert_eq!(a, b);
    }
}
