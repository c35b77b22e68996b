use thiserror::Error;

/// Inputs the geometry core refuses to turn into coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{role} has a non-finite position ({x}, {y})")]
    NonFiniteCoordinate { role: &'static str, x: f32, y: f32 },

    #[error("spouse link from a person without a spouse position")]
    MissingSpouse,

    #[error("orientation field `{field}` has an unusable value {value}")]
    InvalidOrientation { field: &'static str, value: f32 },
}
