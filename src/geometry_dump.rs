use crate::geometry::{ChartGeometry, LinkKind};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryDump {
    pub orientation: String,
    pub box_width: f32,
    pub box_height: f32,
    pub direction: f32,
    pub image: ImageDump,
    pub width: f32,
    pub height: f32,
    pub links: Vec<LinkDump>,
}

#[derive(Debug, Serialize)]
pub struct ImageDump {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rx: f32,
    pub ry: f32,
}

#[derive(Debug, Serialize)]
pub struct LinkDump {
    pub source: String,
    pub target: Option<String>,
    pub kind: LinkKind,
    pub path: String,
    pub segments: usize,
    pub points: Vec<[f32; 2]>,
}

impl GeometryDump {
    pub fn from_geometry(geometry: &ChartGeometry) -> Self {
        let image = &geometry.image;
        let links = geometry
            .links
            .iter()
            .map(|link| LinkDump {
                source: link.source.clone(),
                target: link.target.clone(),
                kind: link.kind,
                path: link.path.to_string(),
                segments: link.path.segment_count(),
                points: link.path.points().map(|p| [p.x, p.y]).collect(),
            })
            .collect();

        GeometryDump {
            orientation: geometry.orientation.kind().to_string(),
            box_width: geometry.orientation.box_width(),
            box_height: geometry.orientation.box_height(),
            direction: geometry.orientation.direction(),
            image: ImageDump {
                x: image.x(),
                y: image.y(),
                width: image.width(),
                height: image.height(),
                rx: image.rx(),
                ry: image.ry(),
            },
            width: geometry.bounds.width(),
            height: geometry.bounds.height(),
            links,
        }
    }
}

pub fn geometry_dump_json(geometry: &ChartGeometry) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&GeometryDump::from_geometry(geometry))?)
}

pub fn write_geometry_dump(path: &Path, geometry: &ChartGeometry) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = GeometryDump::from_geometry(geometry);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
