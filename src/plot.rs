use crate::chart::{format_spines, ChartRenderer, Figure, LineStyle, Marker, Rgb};
use crate::error::Result;
use crate::estimator::InertiaEstimator;
use crate::hyperparams::{ElbowParams, ElbowValidParams};
use crate::sweep::SweepResult;
use linfa::{DatasetBase, Float, ParamGuard};
use ndarray::{ArrayBase, Data, Ix2};

pub const X_LABEL: &str = "Number of Clusters";
pub const Y_LABEL: &str = "Sum of Square Dist";
pub const TITLE_SIZE: u32 = 14;

/// Title naming the first two features, `"Elbow Method - a and b"`.
///
/// With a single feature only that one is named, without any the prefix stands alone.
pub fn elbow_title<S: AsRef<str>>(feature_names: &[S]) -> String {
    match feature_names {
        [] => "Elbow Method".to_string(),
        [first] => format!("Elbow Method - {}", first.as_ref()),
        [first, second, ..] => format!(
            "Elbow Method - {} and {}",
            first.as_ref(),
            second.as_ref()
        ),
    }
}

/// Build the elbow chart of `sweep`: inertia against cluster count as a blue line with circle
/// markers, with the right border hidden.
pub fn elbow_figure<F: Float, S: AsRef<str>>(
    sweep: &SweepResult<F>,
    feature_names: &[S],
) -> Figure {
    let mut figure = Figure::default();
    let axes = &mut figure.axes;

    axes.plot(
        sweep
            .iter()
            .map(|(k, inertia)| (k as f64, inertia.to_f64().unwrap_or(f64::NAN))),
        LineStyle::new(Rgb::BLUE).marker(Marker::Circle),
    );
    format_spines(axes, false);
    axes.set_xlabel(X_LABEL);
    axes.set_ylabel(Y_LABEL);
    axes.set_title(elbow_title(feature_names), TITLE_SIZE);

    figure
}

impl ElbowValidParams {
    /// Sweep the candidates with `estimator` and show the elbow chart with `renderer`.
    ///
    /// Returns once the renderer has presented the chart.
    pub fn plot_elbow_method<F, D, T, E, C>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
        estimator: &E,
        renderer: &mut C,
    ) -> Result<()>
    where
        F: Float,
        D: Data<Elem = F>,
        E: InertiaEstimator<F> + ?Sized,
        C: ChartRenderer + ?Sized,
    {
        let sweep = self.compute_square_distances(dataset, estimator)?;
        let feature_names = dataset.feature_names();
        let figure = elbow_figure(&sweep, &feature_names[..]);
        renderer.show(&figure)
    }
}

/// Sweep `[k_min, k_max)` with `estimator` and show the elbow chart with `renderer`.
///
/// ```no_run
/// use linfa::DatasetBase;
/// use linfa_elbow::{plot_elbow_method, BitMapRenderer, KMeansInertia};
/// use ndarray::array;
///
/// let dataset = DatasetBase::from(array![[0., 0.], [0., 1.], [10., 10.], [10., 11.]])
///     .with_feature_names(vec!["width", "height"]);
/// let mut renderer = BitMapRenderer::new("elbow.png");
///
/// plot_elbow_method(&dataset, 1, 4, &KMeansInertia::new(42), &mut renderer).unwrap();
/// ```
pub fn plot_elbow_method<F, D, T, E, C>(
    dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
    k_min: usize,
    k_max: usize,
    estimator: &E,
    renderer: &mut C,
) -> Result<()>
where
    F: Float,
    D: Data<Elem = F>,
    E: InertiaEstimator<F> + ?Sized,
    C: ChartRenderer + ?Sized,
{
    ElbowParams::new()
        .k_min(k_min)
        .k_max(k_max)
        .check()?
        .plot_elbow_method(dataset, estimator, renderer)
}
