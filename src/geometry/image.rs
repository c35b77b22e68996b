use serde::Serialize;

use crate::config::GeometryConfig;
use crate::orientation::Orientation;

/// Frame of the portrait drawn inside every person box.
///
/// Coordinates are relative to the center of the person box. The frame is
/// always square; only its placement depends on the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBox {
    padding_x: f32,
    padding_y: f32,
    image_radius: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rx: f32,
    ry: f32,
}

impl ImageBox {
    pub fn new(orientation: &Orientation, corner_radius: f32, config: &GeometryConfig) -> Self {
        let (padding_x, padding_y) = config.image_padding(orientation.kind());
        let image_radius = (config.fixed_node_height - padding_x * 2.0) / 2.0;
        let half_width = orientation.box_width() / 2.0;

        // Sideways boxes keep the portrait against their leading edge.
        let x = if orientation.is_sideways() {
            -(half_width - padding_x)
        } else {
            -(half_width - image_radius + padding_x)
        };
        let y = -(orientation.box_height() / 2.0) + padding_y;
        let corner = corner_radius - padding_x;

        Self {
            padding_x,
            padding_y,
            image_radius,
            x,
            y,
            width: image_radius * 2.0,
            height: image_radius * 2.0,
            rx: corner,
            ry: corner,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn rx(&self) -> f32 {
        self.rx
    }

    pub fn ry(&self) -> f32 {
        self.ry
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding_x(&self) -> f32 {
        self.padding_x
    }

    pub fn padding_y(&self) -> f32 {
        self.padding_y
    }

    pub fn image_radius(&self) -> f32 {
        self.image_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::OrientationKind;

    fn image_for(kind: OrientationKind) -> ImageBox {
        ImageBox::new(&Orientation::new(kind), 20.0, &GeometryConfig::default())
    }

    #[test]
    fn frame_is_square_in_every_layout() {
        for kind in OrientationKind::ALL {
            let image = image_for(kind);
            assert_eq!(image.width(), image.height(), "{kind}");
            assert_eq!(image.width(), image.image_radius() * 2.0, "{kind}");
            assert_eq!(image.image_radius(), 35.0, "{kind}");
        }
    }

    #[test]
    fn padding_depends_on_sideways() {
        for kind in OrientationKind::ALL {
            let image = image_for(kind);
            let expected_y = if kind.is_sideways() { 5.0 } else { 10.0 };
            assert_eq!(image.padding_x(), 5.0, "{kind}");
            assert_eq!(image.padding_y(), expected_y, "{kind}");
        }
    }

    #[test]
    fn sideways_frame_hugs_leading_edge() {
        let orientation =
            Orientation::with_dimensions(OrientationKind::LeftRight, 300.0, 80.0, 40.0, 20.0)
                .unwrap();
        let image = ImageBox::new(&orientation, 20.0, &GeometryConfig::default());
        assert_eq!(image.x(), -145.0);
        assert_eq!(image.y(), -35.0);
        assert_eq!(image.rx(), 15.0);
        assert_eq!(image.ry(), 15.0);
    }

    #[test]
    fn vertical_frame_clears_its_radius() {
        let orientation =
            Orientation::with_dimensions(OrientationKind::BottomTop, 150.0, 220.0, 30.0, 40.0)
                .unwrap();
        let image = ImageBox::new(&orientation, 20.0, &GeometryConfig::default());
        assert_eq!(image.x(), -(75.0 - 35.0 + 5.0));
        assert_eq!(image.y(), -100.0);
        assert_eq!(image.width(), 70.0);
    }

    #[test]
    fn follows_configured_constants() {
        let config = GeometryConfig {
            fixed_node_height: 100.0,
            vertical_image_padding: (10.0, 12.0),
            ..GeometryConfig::default()
        };
        let image = ImageBox::new(&Orientation::top_bottom(), 30.0, &config);
        assert_eq!(image.image_radius(), 40.0);
        assert_eq!(image.width(), 80.0);
        assert_eq!(image.y(), -110.0 + 12.0);
        assert_eq!(image.rx(), 20.0);
    }
}
