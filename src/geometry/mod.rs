mod connector;
mod error;
mod image;
mod path;
mod types;

pub use connector::{SegmentPosition, connector_path, spouse_path};
pub use error::GeometryError;
pub use image::ImageBox;
pub use path::{Path, PathCommand};
pub use types::{LinkDatum, LinkSource, Point};

use anyhow::Result;
use serde::Serialize;

use crate::config::GeometryConfig;
use crate::ir::Chart;
use crate::orientation::Orientation;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGeometry {
    pub id: String,
    /// Center of the box.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub placeholder: bool,
    pub image_href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Descendant,
    Spouse,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkGeometry {
    pub source: String,
    pub target: Option<String>,
    pub kind: LinkKind,
    pub path: Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    fn include(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

/// Everything a renderer needs to paint one chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartGeometry {
    pub orientation: Orientation,
    pub corner_radius: f32,
    pub image: ImageBox,
    pub nodes: Vec<NodeGeometry>,
    pub links: Vec<LinkGeometry>,
    pub bounds: Bounds,
}

pub fn compute_chart_geometry(chart: &Chart, config: &GeometryConfig) -> Result<ChartGeometry> {
    let orientation = chart.orientation;
    let corner_radius = chart.corner_radius.unwrap_or(config.corner_radius);
    let image = ImageBox::new(&orientation, corner_radius, config);

    let mut bounds: Option<Bounds> = None;
    let mut grow = |x: f32, y: f32| {
        bounds
            .get_or_insert(Bounds {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            })
            .include(x, y);
    };

    let width = orientation.box_width();
    let height = orientation.box_height();
    let mut nodes = Vec::with_capacity(chart.nodes().len());
    for node in chart.nodes() {
        node.position().check("node")?;
        grow(node.x - width / 2.0, node.y - height / 2.0);
        grow(node.x + width / 2.0, node.y + height / 2.0);
        nodes.push(NodeGeometry {
            id: node.id.clone(),
            x: node.x,
            y: node.y,
            width,
            height,
            placeholder: node.is_placeholder(),
            image_href: node.person.as_ref().and_then(|person| person.image.clone()),
        });
    }

    let mut links = Vec::with_capacity(chart.links().len());
    for link in chart.links() {
        let datum = chart.link_datum(link)?;
        let path = connector_path(&datum, &orientation, config)?;
        for point in path.points() {
            grow(point.x, point.y);
        }
        links.push(LinkGeometry {
            source: link.source.clone(),
            target: link.target.clone(),
            kind: if datum.is_spouse_link() {
                LinkKind::Spouse
            } else {
                LinkKind::Descendant
            },
            path,
        });
    }

    tracing::debug!(
        orientation = %orientation.kind(),
        nodes = nodes.len(),
        links = links.len(),
        "chart geometry computed"
    );

    Ok(ChartGeometry {
        orientation,
        corner_radius,
        image,
        nodes,
        links,
        bounds: bounds.unwrap_or_default(),
    })
}
