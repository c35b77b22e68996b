use std::fmt;

use serde::{Serialize, Serializer};

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => *point,
        }
    }
}

/// An open polyline made of move-to and line-to commands.
///
/// Displays as an SVG path description (`M10,20L10,40`), the same shape
/// d3-path emits, so it can be dropped straight into a `d` attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of drawn line segments.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::LineTo(_)))
            .count()
    }

    /// Each drawn segment as a `(from, to)` pair.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut segments = Vec::new();
        let mut cursor: Option<Point> = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(point) => cursor = Some(point),
                PathCommand::LineTo(point) => {
                    if let Some(from) = cursor {
                        segments.push((from, point));
                    }
                    cursor = Some(point);
                }
            }
        }
        segments
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().map(PathCommand::point)
    }

    /// Swaps x and y of every point.
    pub(crate) fn transposed(self) -> Self {
        let commands = self
            .commands
            .into_iter()
            .map(|cmd| match cmd {
                PathCommand::MoveTo(point) => PathCommand::MoveTo(point.transposed()),
                PathCommand::LineTo(point) => PathCommand::LineTo(point.transposed()),
            })
            .collect();
        Self { commands }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            let (op, point) = match cmd {
                PathCommand::MoveTo(point) => ('M', point),
                PathCommand::LineTo(point) => ('L', point),
            };
            write!(f, "{op}{},{}", Coord(point.x), Coord(point.y))?;
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Coord(f32);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // normalizes -0 to 0 like d3-path
        if self.0 == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}
