use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::ir::{Chart, ChartLink, Person, PersonNode};
use crate::orientation::{Orientation, OrientationKind};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OrientationSpec {
    Name(String),
    Detailed(OrientationFile),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrientationFile {
    kind: String,
    box_width: Option<f32>,
    box_height: Option<f32>,
    x_offset: Option<f32>,
    y_offset: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeFile {
    id: String,
    x: f32,
    y: f32,
    #[serde(default)]
    family: u32,
    #[serde(default)]
    person: Option<Person>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkFile {
    source: String,
    #[serde(default)]
    spouse: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    coords: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartFile {
    #[serde(default)]
    orientation: Option<OrientationSpec>,
    #[serde(default)]
    corner_radius: Option<f32>,
    nodes: Vec<NodeFile>,
    #[serde(default)]
    links: Vec<LinkFile>,
}

/// Parses a chart description (JSON or JSON5).
///
/// Nodes must already carry their laid-out position. A node without a
/// `person` entry is drawn as an unknown partner.
pub fn parse_chart(input: &str) -> Result<Chart> {
    let file: ChartFile = json5::from_str(input).context("Invalid chart description")?;

    let orientation = match file.orientation {
        None => Orientation::default(),
        Some(spec) => resolve_orientation(spec)?,
    };

    let mut chart = Chart::new(orientation);
    chart.corner_radius = file.corner_radius;

    for node in file.nodes {
        chart.add_node(PersonNode {
            id: node.id,
            x: node.x,
            y: node.y,
            family: node.family,
            person: node.person,
        })?;
    }

    for link in file.links {
        chart.add_link(ChartLink {
            source: link.source,
            spouse: link.spouse,
            target: link.target,
            coords: link.coords,
        })?;
    }

    tracing::debug!(
        orientation = %chart.orientation.kind(),
        nodes = chart.nodes().len(),
        links = chart.links().len(),
        "parsed chart"
    );
    Ok(chart)
}

fn resolve_orientation(spec: OrientationSpec) -> Result<Orientation> {
    match spec {
        OrientationSpec::Name(name) => Ok(Orientation::new(parse_kind(&name)?)),
        OrientationSpec::Detailed(file) => {
            let defaults = Orientation::new(parse_kind(&file.kind)?);
            let orientation = Orientation::with_dimensions(
                defaults.kind(),
                file.box_width.unwrap_or(defaults.box_width()),
                file.box_height.unwrap_or(defaults.box_height()),
                file.x_offset.unwrap_or(defaults.x_offset()),
                file.y_offset.unwrap_or(defaults.y_offset()),
            )?;
            Ok(orientation)
        }
    }
}

fn parse_kind(name: &str) -> Result<OrientationKind> {
    OrientationKind::from_token(name).ok_or_else(|| anyhow!("Unknown orientation: {name}"))
}
