//! Seeded synthetic inputs with a known number of clusters

use crate::Table;
use linfa::DatasetBase;
use ndarray::{Array, Array2, ArrayBase, Axis, Data, Ix2};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

/// Points scattered with unit variance around each row of `centroids`.
///
/// See [`blobs_with_distribution`] for the layout of the result.
pub fn blobs(
    blob_size: usize,
    centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    blobs_with_distribution(blob_size, centroids, StandardNormal, rng)
}

/// Synthetic clustering input with one cluster per row of `centroids`.
///
/// The result has `blob_size * n_centroids` rows. Rows `i * blob_size..(i + 1) * blob_size`
/// are `centroids.row(i)` plus noise drawn from `distribution`, so a sweep over well separated
/// centroids shows its elbow at `n_centroids`.
pub fn blobs_with_distribution(
    blob_size: usize,
    centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let (n_centroids, n_features) = centroids.dim();
    let mut points = Array2::zeros((n_centroids * blob_size, n_features));
    if blob_size == 0 {
        return points;
    }

    for (mut cluster, centroid) in points
        .axis_chunks_iter_mut(Axis(0), blob_size)
        .zip(centroids.rows())
    {
        let noise: Array2<f64> =
            Array::random_using((blob_size, n_features), distribution.clone(), rng);
        cluster.assign(&(noise + &centroid));
    }
    points
}

/// Same as [`blobs`], with the columns named for charts and logs.
pub fn named_blobs<S: Into<String>>(
    blob_size: usize,
    centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    feature_names: Vec<S>,
    rng: &mut impl Rng,
) -> Table {
    DatasetBase::from(blobs(blob_size, centroids, rng)).with_feature_names(feature_names)
}
