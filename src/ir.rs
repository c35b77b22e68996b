use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::geometry::{LinkDatum, LinkSource, Point};
use crate::orientation::{Orientation, OrientationKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A box already positioned by the host's tree layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonNode {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub family: u32,
    /// `None` for the box of an unknown partner.
    pub person: Option<Person>,
}

impl PersonNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_placeholder(&self) -> bool {
        self.person.is_none()
    }
}

/// A relationship between nodes, by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLink {
    pub source: String,
    pub spouse: Option<String>,
    pub target: Option<String>,
    pub coords: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Chart {
    pub orientation: Orientation,
    pub corner_radius: Option<f32>,
    nodes: Vec<PersonNode>,
    links: Vec<ChartLink>,
    index: BTreeMap<String, usize>,
}

impl Chart {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            corner_radius: None,
            nodes: Vec::new(),
            links: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    pub fn add_node(&mut self, node: PersonNode) -> Result<()> {
        if self.index.contains_key(&node.id) {
            return Err(anyhow!("Duplicate node id: {}", node.id));
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Adds a link after checking that every id it names exists.
    pub fn add_link(&mut self, link: ChartLink) -> Result<()> {
        self.require(&link.source)?;
        for id in link.spouse.iter().chain(link.target.iter()) {
            self.require(id)?;
        }
        if let Some(coords) = &link.coords {
            if link.spouse.is_none() {
                return Err(anyhow!(
                    "Link from {} lists additional spouses but no spouse",
                    link.source
                ));
            }
            for id in coords {
                self.require(id)?;
            }
        }
        if link.target.is_none() && link.spouse.is_none() {
            return Err(anyhow!(
                "Link from {} needs a target or a spouse",
                link.source
            ));
        }
        self.links.push(link);
        Ok(())
    }

    pub fn nodes(&self) -> &[PersonNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[ChartLink] {
        &self.links
    }

    pub fn node(&self, id: &str) -> Option<&PersonNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Switches the layout direction, keeping box size and spacing.
    pub fn set_orientation_kind(&mut self, kind: OrientationKind) -> Result<()> {
        let current = self.orientation;
        self.orientation = Orientation::with_dimensions(
            kind,
            current.box_width(),
            current.box_height(),
            current.x_offset(),
            current.y_offset(),
        )?;
        Ok(())
    }

    /// Resolves the ids of `link` into the positions the connector needs.
    pub fn link_datum(&self, link: &ChartLink) -> Result<LinkDatum> {
        let source = self.require(&link.source)?;
        let spouse = link
            .spouse
            .as_deref()
            .map(|id| self.require(id).map(PersonNode::position))
            .transpose()?;
        let target = link
            .target
            .as_deref()
            .map(|id| self.require(id).map(PersonNode::position))
            .transpose()?;
        let coords = link
            .coords
            .as_ref()
            .map(|ids| {
                ids.iter()
                    .map(|id| self.require(id).map(PersonNode::position))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        Ok(LinkDatum {
            source: LinkSource {
                position: source.position(),
                family: source.family,
                is_placeholder: source.is_placeholder(),
            },
            spouse,
            target,
            coords,
        })
    }

    fn require(&self, id: &str) -> Result<&PersonNode> {
        self.node(id)
            .ok_or_else(|| anyhow!("Link references unknown node: {id}"))
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}
