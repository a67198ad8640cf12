use super::{Figure, Marker, Rgb};
use crate::error::{ElbowError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Presents a [`Figure`].
///
/// `show` blocks until the figure has been drawn and handed over, e.g. written to disk.
pub trait ChartRenderer {
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

impl<C: ChartRenderer + ?Sized> ChartRenderer for &mut C {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }
}

/// Writes figures as bitmap images, the format is chosen from the file extension.
#[derive(Clone, Debug)]
pub struct BitMapRenderer {
    path: PathBuf,
}

impl BitMapRenderer {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        BitMapRenderer {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartRenderer for BitMapRenderer {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let root =
            BitMapBackend::new(&self.path, (figure.width, figure.height)).into_drawing_area();
        draw_figure(&root, figure).map_err(|err| ElbowError::Render(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), "chart written");
        Ok(())
    }
}

/// Writes figures as SVG documents.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    path: PathBuf,
}

impl SvgRenderer {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        SvgRenderer {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartRenderer for SvgRenderer {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let root = SVGBackend::new(&self.path, (figure.width, figure.height)).into_drawing_area();
        draw_figure(&root, figure).map_err(|err| ElbowError::Render(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), "chart written");
        Ok(())
    }
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Draws `figure` on any plotters drawing area and presents it.
pub fn draw_figure<DB>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let axes = &figure.axes;
    root.fill(&WHITE)?;

    let (x_range, y_range) = axes.bounds();
    let mut builder = ChartBuilder::on(root);
    builder
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60);
    if let Some(title) = &axes.title {
        builder.caption(&title.text, ("sans-serif", f64::from(title.size)));
    }
    let mut chart = builder.build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart.plotting_area().fill(&color(axes.face_color))?;

    // borders are drawn below, the mesh only contributes tick labels and descriptions
    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh().axis_style(color(axes.face_color).mix(0.0));
        if let Some(label) = &axes.x_label {
            mesh.x_desc(label.as_str());
        }
        if let Some(label) = &axes.y_label {
            mesh.y_desc(label.as_str());
        }
        mesh.draw()?;
    }

    for series in axes.series() {
        let line_color = color(series.style.color);
        if series.style.connected {
            chart.draw_series(LineSeries::new(
                series.points.iter().copied(),
                line_color.stroke_width(2),
            ))?;
        }
        if let Some(Marker::Circle) = series.style.marker {
            chart.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, 4, line_color.filled())),
            )?;
        }
    }

    let (x0, x1) = (x_range.start, x_range.end);
    let (y0, y1) = (y_range.start, y_range.end);
    let borders = vec![
        (vec![(x0, y0), (x1, y0)], axes.spines.bottom),
        (vec![(x0, y0), (x0, y1)], axes.spines.left),
        (vec![(x0, y1), (x1, y1)], axes.spines.top),
        (vec![(x1, y0), (x1, y1)], axes.spines.right),
    ];
    for (path, spine) in borders {
        chart.draw_series(std::iter::once(PathElement::new(
            path,
            color(spine).stroke_width(1),
        )))?;
    }

    root.present()?;
    Ok(())
}
