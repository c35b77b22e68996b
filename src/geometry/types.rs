use serde::Serialize;

use super::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    pub(crate) fn check(self, role: &'static str) -> Result<Self, GeometryError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::NonFiniteCoordinate {
                role,
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// The person a connector starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkSource {
    pub position: Point,
    /// Zero-based index of the partnership this link belongs to.
    pub family: u32,
    /// The box stands for an unknown person and carries no data.
    pub is_placeholder: bool,
}

impl LinkSource {
    pub fn new(position: impl Into<Point>, family: u32) -> Self {
        Self {
            position: position.into(),
            family,
            is_placeholder: false,
        }
    }

    pub fn placeholder(position: impl Into<Point>, family: u32) -> Self {
        Self {
            position: position.into(),
            family,
            is_placeholder: true,
        }
    }
}

/// Everything needed to draw one connector.
///
/// A datum without a `target` is a spouse link; with a `target` it is a
/// descendant link from the source (or couple) down to one child.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDatum {
    pub source: LinkSource,
    pub spouse: Option<Point>,
    pub target: Option<Point>,
    /// Additional spouses sitting between `spouse` and `source`, in order.
    ///
    /// An empty list draws one flush segment, exactly like `None`. Charts
    /// drawn by earlier versions of this layout drew nothing in that case;
    /// the difference is intentional.
    pub coords: Option<Vec<Point>>,
}

impl LinkDatum {
    pub fn descendant(source: LinkSource, spouse: Option<Point>, target: Point) -> Self {
        Self {
            source,
            spouse,
            target: Some(target),
            coords: None,
        }
    }

    pub fn spouses(source: LinkSource, spouse: Point, coords: Option<Vec<Point>>) -> Self {
        Self {
            source,
            spouse: Some(spouse),
            target: None,
            coords,
        }
    }

    pub fn is_spouse_link(&self) -> bool {
        self.target.is_none()
    }
}
