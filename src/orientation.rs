use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;

/// Direction in which generations are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationKind {
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl OrientationKind {
    pub const ALL: [OrientationKind; 4] = [
        OrientationKind::TopBottom,
        OrientationKind::BottomTop,
        OrientationKind::LeftRight,
        OrientationKind::RightLeft,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "top-bottom" | "topbottom" | "tb" => Some(Self::TopBottom),
            "bottom-top" | "bottomtop" | "bt" => Some(Self::BottomTop),
            "left-right" | "leftright" | "lr" => Some(Self::LeftRight),
            "right-left" | "rightleft" | "rl" => Some(Self::RightLeft),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopBottom => "top-bottom",
            Self::BottomTop => "bottom-top",
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
        }
    }

    /// Children are placed beside their parents instead of below/above them.
    pub fn is_sideways(self) -> bool {
        matches!(self, Self::LeftRight | Self::RightLeft)
    }

    /// `1.0` when children follow their parents along the positive axis.
    pub fn direction(self) -> f32 {
        match self {
            Self::TopBottom | Self::LeftRight => 1.0,
            Self::BottomTop | Self::RightLeft => -1.0,
        }
    }
}

impl std::fmt::Display for OrientationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Box dimensions and spacing for one chart direction.
///
/// Built once per chart and shared read-only by every image box and
/// connector computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Orientation {
    kind: OrientationKind,
    box_width: f32,
    box_height: f32,
    x_offset: f32,
    y_offset: f32,
}

impl Orientation {
    /// Orientation with the default box size and spacing of `kind`.
    pub fn new(kind: OrientationKind) -> Self {
        let (box_width, box_height, x_offset, y_offset) = if kind.is_sideways() {
            (300.0, 80.0, 40.0, 20.0)
        } else {
            (150.0, 220.0, 30.0, 40.0)
        };
        Self {
            kind,
            box_width,
            box_height,
            x_offset,
            y_offset,
        }
    }

    pub fn top_bottom() -> Self {
        Self::new(OrientationKind::TopBottom)
    }

    pub fn bottom_top() -> Self {
        Self::new(OrientationKind::BottomTop)
    }

    pub fn left_right() -> Self {
        Self::new(OrientationKind::LeftRight)
    }

    pub fn right_left() -> Self {
        Self::new(OrientationKind::RightLeft)
    }

    /// Orientation with explicit constants.
    pub fn with_dimensions(
        kind: OrientationKind,
        box_width: f32,
        box_height: f32,
        x_offset: f32,
        y_offset: f32,
    ) -> Result<Self, GeometryError> {
        check_dimension("boxWidth", box_width, true)?;
        check_dimension("boxHeight", box_height, true)?;
        check_dimension("xOffset", x_offset, false)?;
        check_dimension("yOffset", y_offset, false)?;
        Ok(Self {
            kind,
            box_width,
            box_height,
            x_offset,
            y_offset,
        })
    }

    pub fn kind(&self) -> OrientationKind {
        self.kind
    }

    pub fn box_width(&self) -> f32 {
        self.box_width
    }

    pub fn box_height(&self) -> f32 {
        self.box_height
    }

    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    pub fn direction(&self) -> f32 {
        self.kind.direction()
    }

    pub fn is_sideways(&self) -> bool {
        self.kind.is_sideways()
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::top_bottom()
    }
}

fn check_dimension(field: &'static str, value: f32, positive: bool) -> Result<(), GeometryError> {
    if !value.is_finite() || (positive && value <= 0.0) {
        return Err(GeometryError::InvalidOrientation { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_generation_axis() {
        assert_eq!(Orientation::top_bottom().direction(), 1.0);
        assert_eq!(Orientation::left_right().direction(), 1.0);
        assert_eq!(Orientation::bottom_top().direction(), -1.0);
        assert_eq!(Orientation::right_left().direction(), -1.0);
    }

    #[test]
    fn only_horizontal_layouts_are_sideways() {
        let sideways: Vec<_> = OrientationKind::ALL
            .iter()
            .filter(|kind| kind.is_sideways())
            .copied()
            .collect();
        assert_eq!(
            sideways,
            vec![OrientationKind::LeftRight, OrientationKind::RightLeft]
        );
    }

    #[test]
    fn parses_tokens() {
        assert_eq!(
            OrientationKind::from_token("Top-Bottom"),
            Some(OrientationKind::TopBottom)
        );
        assert_eq!(OrientationKind::from_token("RL"), Some(OrientationKind::RightLeft));
        assert_eq!(OrientationKind::from_token("diagonal"), None);
        assert_eq!(OrientationKind::from_token("td"), None);
        for kind in OrientationKind::ALL {
            assert_eq!(OrientationKind::from_token(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn rejects_degenerate_boxes() {
        let err = Orientation::with_dimensions(OrientationKind::TopBottom, 0.0, 80.0, 40.0, 20.0)
            .unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidOrientation { field: "boxWidth", .. }
        ));
        assert!(
            Orientation::with_dimensions(OrientationKind::LeftRight, 300.0, 80.0, f32::NAN, 20.0)
                .is_err()
        );
        assert!(
            Orientation::with_dimensions(OrientationKind::LeftRight, 300.0, 80.0, 0.0, 0.0).is_ok()
        );
    }
}
