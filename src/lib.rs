//! `linfa-elbow` helps choosing the number of clusters of a K-Means model with the
//! *elbow method*.
//!
//! ## The big picture
//!
//! `linfa-elbow` is a crate in the `linfa` ecosystem. It fits a clustering model for every
//! candidate cluster count in a range, records the model's inertia (the sum of squared
//! distances of each sample to its cluster center) and draws inertia against cluster count.
//! The count where the curve stops dropping sharply, the "elbow", is a good candidate.
//!
//! Nothing is picked automatically, the chart is meant to be looked at.
//!
//! ## Current state
//!
//! * [`compute_square_distances`] sweeps a range of cluster counts with any
//!   [`InertiaEstimator`]; [`KMeansInertia`] wraps `linfa-clustering`'s K-Means.
//! * [`plot_elbow_method`] runs the sweep and hands the resulting [`Figure`] to a
//!   [`ChartRenderer`], e.g. [`BitMapRenderer`] or [`SvgRenderer`].
//! * [`format_spines`] applies the light border styling used by the chart.
//!
//! ```
//! use linfa::DatasetBase;
//! use linfa_elbow::{ElbowParams, KMeansInertia};
//! use linfa::ParamGuard;
//! use ndarray::array;
//!
//! let dataset = DatasetBase::from(array![[0., 0.], [0., 1.], [9., 9.], [9., 10.], [5., 0.]]);
//! let sweep = ElbowParams::new()
//!     .k_min(1)
//!     .k_max(4)
//!     .check()
//!     .unwrap()
//!     .compute_square_distances(&dataset, &KMeansInertia::new(42))
//!     .unwrap();
//!
//! assert_eq!(sweep.len(), 3);
//! ```

pub mod chart;
mod error;
mod estimator;
mod hyperparams;
mod plot;
mod sweep;

pub use chart::{
    draw_figure, format_spines, Axes, BitMapRenderer, ChartRenderer, Figure, LineStyle, Marker,
    Rgb, Series, Spines, SvgRenderer, Title,
};
pub use error::*;
pub use estimator::*;
pub use hyperparams::*;
pub use plot::*;
pub use sweep::*;
