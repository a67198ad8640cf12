//! Clustering models that report their inertia.
//!
//! The sweep never constructs a clustering model itself, it asks an [`InertiaEstimator`]
//! to fit a fresh model per candidate. [`KMeansInertia`] is the estimator backed by
//! `linfa-clustering`'s K-Means.

use crate::error::{ElbowError, Result};
use linfa::traits::Fit;
use linfa::{DatasetBase, Float};
use linfa_clustering::{KMeans, KMeansInit};
use ndarray::ArrayView2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

/// Fits a clustering model with a given number of clusters and returns its inertia.
pub trait InertiaEstimator<F: Float> {
    /// Fit a fresh model with `n_clusters` clusters on all rows of `observations` and return
    /// the sum of squared distances of each row to its assigned cluster center.
    fn inertia(&self, n_clusters: usize, observations: ArrayView2<F>) -> Result<F>;
}

impl<F: Float, E: InertiaEstimator<F> + ?Sized> InertiaEstimator<F> for &E {
    fn inertia(&self, n_clusters: usize, observations: ArrayView2<F>) -> Result<F> {
        (**self).inertia(n_clusters, observations)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// K-Means estimator.
///
/// Every call starts from a copy of the same random generator, so fitting the same
/// observations twice gives the same inertia and no state leaks between candidates.
///
/// Defaults follow `linfa-clustering`:
/// * `n_runs = 10`
/// * `tolerance = 1e-4`
/// * `max_n_iterations = 300`
/// * `init = KMeansPlusPlus`
pub struct KMeansInertia<F: Float, R: Rng = Xoshiro256Plus> {
    rng: R,
    n_runs: usize,
    tolerance: F,
    max_n_iterations: u64,
    init: KMeansInit<F>,
}

impl<F: Float> KMeansInertia<F, Xoshiro256Plus> {
    /// Estimator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Xoshiro256Plus::seed_from_u64(seed))
    }
}

impl<F: Float> Default for KMeansInertia<F, Xoshiro256Plus> {
    fn default() -> Self {
        Self::new(42)
    }
}

impl<F: Float, R: Rng + SeedableRng + Clone> KMeansInertia<F, R> {
    pub fn with_rng(rng: R) -> Self {
        KMeansInertia {
            rng,
            n_runs: 10,
            tolerance: F::cast(1e-4),
            max_n_iterations: 300,
            init: KMeansInit::KMeansPlusPlus,
        }
    }

    /// Change the value of `n_runs`
    pub fn n_runs(mut self, n_runs: usize) -> Self {
        self.n_runs = n_runs;
        self
    }

    /// Change the value of `tolerance`
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Change the value of `max_n_iterations`
    pub fn max_n_iterations(mut self, max_n_iterations: u64) -> Self {
        self.max_n_iterations = max_n_iterations;
        self
    }

    /// Change the value of `init`
    pub fn init_method(mut self, init: KMeansInit<F>) -> Self {
        self.init = init;
        self
    }
}

impl<F: Float, R: Rng + SeedableRng + Clone> InertiaEstimator<F> for KMeansInertia<F, R> {
    fn inertia(&self, n_clusters: usize, observations: ArrayView2<F>) -> Result<F> {
        let n_samples = observations.nrows();
        if n_clusters > n_samples {
            return Err(ElbowError::NotEnoughSamples {
                n_clusters,
                n_samples,
            });
        }

        let dataset = DatasetBase::from(observations);
        let model = KMeans::params_with_rng(n_clusters, self.rng.clone())
            .n_runs(self.n_runs)
            .tolerance(self.tolerance)
            .max_n_iterations(self.max_n_iterations)
            .init_method(self.init.clone())
            .fit(&dataset)
            .map_err(ElbowError::KMeans)?;

        // the fitted model reports the mean over all samples
        Ok(model.inertia() * F::cast(n_samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<KMeansInertia<f64>>();
    }

    #[test]
    fn single_cluster_inertia_is_total_variance() {
        let observations = array![[0., 0.], [2., 0.], [0., 2.], [2., 2.]];
        let inertia = KMeansInertia::new(7)
            .inertia(1, observations.view())
            .unwrap();
        // centroid at (1, 1), every corner is at squared distance 2
        assert_abs_diff_eq!(inertia, 8.0, epsilon = 1e-3);
    }

    #[test]
    fn one_cluster_per_sample_has_zero_inertia() {
        let observations = array![[0., 0.], [10., 0.], [0., 10.]];
        let inertia = KMeansInertia::new(7)
            .inertia(3, observations.view())
            .unwrap();
        assert_abs_diff_eq!(inertia, 0.0, epsilon = 1e-8);
    }

    #[test]
    fn too_many_clusters_is_rejected() {
        let observations = Array2::<f64>::zeros((3, 2));
        let err = KMeansInertia::new(7)
            .inertia(4, observations.view())
            .unwrap_err();
        assert!(matches!(
            err,
            ElbowError::NotEnoughSamples {
                n_clusters: 4,
                n_samples: 3
            }
        ));
    }

    #[test]
    fn invalid_kmeans_params_propagate() {
        let observations = array![[0., 0.], [1., 1.]];
        let err = KMeansInertia::new(7)
            .n_runs(0)
            .inertia(1, observations.view())
            .unwrap_err();
        assert!(matches!(err, ElbowError::KMeans(_)));
    }

    #[test]
    fn same_seed_same_inertia() {
        let observations = array![[0., 0.], [1., 0.], [5., 5.], [6., 5.], [9., 0.], [9., 1.]];
        let a = KMeansInertia::new(3).inertia(2, observations.view()).unwrap();
        let b = KMeansInertia::new(3).inertia(2, observations.view()).unwrap();
        assert_eq!(a, b);
    }
}
