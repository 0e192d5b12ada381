use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Pixel area a view renders into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Map a percentage position (`0..=100` on both axes) into this viewport.
    pub fn project(&self, x_pct: f64, y_pct: f64) -> Point {
        Point::new(
            self.x + x_pct / 100.0 * self.width,
            self.y + y_pct / 100.0 * self.height,
        )
    }

    /// Inverse of [`Viewport::project`]. Returns percentages, which may fall
    /// outside `0..=100` when `pos` lies outside the viewport.
    pub fn unproject(&self, pos: Point) -> (f64, f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0.0, 0.0);
        }
        (
            (pos.x - self.x) / self.width * 100.0,
            (pos.y - self.y) / self.height * 100.0,
        )
    }
}

/// Which selector produced a geometry. Only point selection is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    #[default]
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("{axis} coordinate is not finite")]
    NonFinite { axis: Axis },
    #[error("{axis} coordinate {value} is outside 0..=100")]
    OutOfRange { axis: Axis, value: f64 },
}

/// Normalized position of a marker, independent of image resolution.
///
/// Coordinates are percentages of the image width/height. A `Geometry` can
/// only be built with finite values in `0..=100`, both through
/// [`Geometry::point`] and through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct Geometry {
    kind: SelectorKind,
    x: f64,
    y: f64,
}

impl Geometry {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn point(x: f64, y: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            kind: SelectorKind::Point,
            x: check_axis(Axis::X, x)?,
            y: check_axis(Axis::Y, y)?,
        })
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared euclidean distance to `(x, y)` in percentage units.
    pub fn sq_dist_from(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}

fn check_axis(axis: Axis, value: f64) -> Result<f64, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { axis });
    }
    if !(Geometry::MIN..=Geometry::MAX).contains(&value) {
        return Err(GeometryError::OutOfRange { axis, value });
    }
    Ok(value)
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(default)]
    kind: SelectorKind,
    x: f64,
    y: f64,
}

impl TryFrom<RawGeometry> for Geometry {
    type Error = GeometryError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        match raw.kind {
            SelectorKind::Point => Self::point(raw.x, raw.y),
        }
    }
}
