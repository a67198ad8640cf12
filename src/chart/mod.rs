//! A small in-memory chart model and the port used to draw it.
//!
//! A [`Figure`] owns a single [`Axes`], which holds the borders ("spines"), the background,
//! labels and line series. Nothing is drawn until the figure is handed to a
//! [`ChartRenderer`]; this keeps chart construction free of backend state and lets tests
//! inspect exactly what would have been drawn.

mod render;
mod spines;

pub use render::*;
pub use spines::*;

use std::ops::Range;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const BLUE: Rgb = Rgb(0x00, 0x00, 0xFF);
    /// `#CCCCCC`
    pub const LIGHT_GRAY: Rgb = Rgb(0xCC, 0xCC, 0xCC);
}

/// Colors of the four borders around the plotting area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spines {
    pub top: Rgb,
    pub bottom: Rgb,
    pub left: Rgb,
    pub right: Rgb,
}

impl Default for Spines {
    fn default() -> Self {
        Spines {
            top: Rgb::BLACK,
            bottom: Rgb::BLACK,
            left: Rgb::BLACK,
            right: Rgb::BLACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
}

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStyle {
    pub color: Rgb,
    pub marker: Option<Marker>,
    /// Join consecutive points with a line.
    pub connected: bool,
}

impl LineStyle {
    /// A plain connected line without markers.
    pub fn new(color: Rgb) -> Self {
        LineStyle {
            color,
            marker: None,
            connected: true,
        }
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub points: Vec<(f64, f64)>,
    pub style: LineStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    pub text: String,
    pub size: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    pub spines: Spines,
    /// Background of the plotting area.
    pub face_color: Rgb,
    pub title: Option<Title>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    series: Vec<Series>,
}

impl Default for Axes {
    fn default() -> Self {
        Axes {
            spines: Spines::default(),
            face_color: Rgb::WHITE,
            title: None,
            x_label: None,
            y_label: None,
            series: Vec::new(),
        }
    }
}

impl Axes {
    /// Add a series through `points`, in the given order.
    pub fn plot<I: IntoIterator<Item = (f64, f64)>>(&mut self, points: I, style: LineStyle) {
        self.series.push(Series {
            points: points.into_iter().collect(),
            style,
        });
    }

    pub fn set_xlabel<S: Into<String>>(&mut self, label: S) {
        self.x_label = Some(label.into());
    }

    pub fn set_ylabel<S: Into<String>>(&mut self, label: S) {
        self.y_label = Some(label.into());
    }

    pub fn set_title<S: Into<String>>(&mut self, text: S, size: u32) {
        self.title = Some(Title {
            text: text.into(),
            size,
        });
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Data ranges covering every point with a 5% margin on each side.
    ///
    /// Falls back to `0..1` on an axis without extent.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points = self.series.iter().flat_map(|s| s.points.iter().copied());
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in points.filter(|(x, y)| x.is_finite() && y.is_finite()) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        (padded(x_min, x_max), padded(y_min, y_max))
    }
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = if max > min {
        0.05 * (max - min)
    } else {
        0.5 * min.abs().max(1.0)
    };
    (min - pad)..(max + pad)
}

/// A figure with a single set of axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub axes: Axes,
}

impl Figure {
    pub fn new(width: u32, height: u32) -> Self {
        Figure {
            width,
            height,
            axes: Axes::default(),
        }
    }
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new(800, 600)
    }
}
