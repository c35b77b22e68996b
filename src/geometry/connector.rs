use crate::config::GeometryConfig;
use crate::orientation::Orientation;

use super::{GeometryError, LinkDatum, Path, Point};

/// Builds the orthogonal connector for one link.
///
/// Links with a target run from the parent (or the couple) to the child;
/// links without one join the source to its spouses.
pub fn connector_path(
    datum: &LinkDatum,
    orientation: &Orientation,
    config: &GeometryConfig,
) -> Result<Path, GeometryError> {
    let frame = Frame::new(orientation);
    let path = match datum.target {
        Some(target) => descendant_path(datum, target, &frame)?,
        None => spouse_segments(datum, &frame, config)?,
    };
    tracing::trace!(
        orientation = %orientation.kind(),
        family = datum.source.family,
        segments = path.segment_count(),
        "connector built"
    );
    Ok(frame.to_chart(path))
}

/// Lines between a person and one or more partners.
///
/// Each partnership after the first is shifted by `spouse_line_offset` so
/// the lines of one person do not overlap.
pub fn spouse_path(
    datum: &LinkDatum,
    orientation: &Orientation,
    config: &GeometryConfig,
) -> Result<Path, GeometryError> {
    let frame = Frame::new(orientation);
    spouse_segments(datum, &frame, config).map(|path| frame.to_chart(path))
}

/// Where a spouse-line segment sits in the chain from the first spouse to
/// the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    /// The only segment: spouse straight to source.
    Sole,
    First,
    Interior,
    /// Back to the source after the last additional spouse.
    Last,
}

impl SegmentPosition {
    pub fn of(index: usize, count: usize) -> Self {
        if count <= 1 {
            Self::Sole
        } else if index == 0 {
            Self::First
        } else if index + 1 == count {
            Self::Last
        } else {
            Self::Interior
        }
    }

    /// `(start, end)` gap left at each end of the segment.
    pub fn insets(self, inset: f32) -> (f32, f32) {
        match self {
            Self::Sole => (0.0, 0.0),
            Self::First => (0.0, inset),
            Self::Interior | Self::Last => (inset, inset),
        }
    }
}

/// Maps chart coordinates into a frame where `x` runs across siblings and
/// `y` runs along generations, so one routine serves all four layouts.
struct Frame {
    sideways: bool,
    direction: f32,
    across: f32,
    along: f32,
    sibling_spacing: f32,
    generation_spacing: f32,
}

impl Frame {
    fn new(orientation: &Orientation) -> Self {
        if orientation.is_sideways() {
            Self {
                sideways: true,
                direction: orientation.direction(),
                across: orientation.box_height(),
                along: orientation.box_width(),
                sibling_spacing: orientation.y_offset(),
                generation_spacing: orientation.x_offset(),
            }
        } else {
            Self {
                sideways: false,
                direction: orientation.direction(),
                across: orientation.box_width(),
                along: orientation.box_height(),
                sibling_spacing: orientation.x_offset(),
                generation_spacing: orientation.y_offset(),
            }
        }
    }

    fn local(&self, point: Point, role: &'static str) -> Result<Point, GeometryError> {
        let point = point.check(role)?;
        Ok(if self.sideways { point.transposed() } else { point })
    }

    fn to_chart(&self, path: Path) -> Path {
        if self.sideways { path.transposed() } else { path }
    }
}

fn descendant_path(datum: &LinkDatum, target: Point, frame: &Frame) -> Result<Path, GeometryError> {
    let source = frame.local(datum.source.position, "source")?;
    let target = frame.local(target, "target")?;
    let spouse = datum
        .spouse
        .map(|spouse| frame.local(spouse, "spouse"))
        .transpose()?;

    let direction = frame.direction;
    let half_along = frame.along / 2.0;
    let half_spacing = frame.generation_spacing / 2.0;

    let mut origin = source;
    if datum.source.family == 0 {
        // The first family's line starts between the person and the spouse.
        if let Some(spouse) = spouse {
            origin.x -= (source.x - spouse.x) / 2.0;
        }
    } else {
        origin.y += half_along * direction;
    }

    if datum.source.is_placeholder {
        origin.x -= frame.across / 2.0 + frame.sibling_spacing / 4.0;
        origin.y += half_along * direction;
    }

    let target_y = target.y - direction * (half_along + half_spacing);

    let mut path = Path::new();
    path.move_to(origin.x, origin.y);
    path.line_to(origin.x, target_y);
    path.line_to(target.x, target_y);
    path.line_to(target.x, target_y + direction * half_spacing);
    Ok(path)
}

fn spouse_segments(
    datum: &LinkDatum,
    frame: &Frame,
    config: &GeometryConfig,
) -> Result<Path, GeometryError> {
    let source = frame.local(datum.source.position, "source")?;
    let spouse = frame.local(datum.spouse.ok_or(GeometryError::MissingSpouse)?, "spouse")?;

    let baseline = if datum.source.family > 0 {
        spouse.y - datum.source.family as f32 * frame.direction * config.spouse_line_offset
    } else {
        source.y
    };

    let mut chain = vec![spouse.x];
    for coord in datum.coords.iter().flatten() {
        chain.push(frame.local(*coord, "additional spouse")?.x);
    }
    chain.push(source.x);

    let half = frame.across / 2.0;
    let count = chain.len() - 1;
    let mut path = Path::new();
    for (index, pair) in chain.windows(2).enumerate() {
        let (start_inset, end_inset) =
            SegmentPosition::of(index, count).insets(config.line_start_offset);
        path.move_to(pair[0] + half + start_inset, baseline);
        path.line_to(pair[1] - half - end_inset, baseline);
    }
    Ok(path)
}
