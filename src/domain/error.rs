use thiserror::Error;

/// Failures of coordinate validation.
///
/// Raised at construction time, and by a generation step whose survivors
/// would cross the accepted coordinate range. Either way the condition
/// surfaces to the caller; coordinates never silently wrap.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// A component too close to the i64 boundary. Its neighbors (or its
    /// neighbors' neighbors, during candidate evaluation) would wrap around
    /// and alias an unrelated coordinate, corrupting live-set membership.
    #[error("coordinate {axis} component {value} is too close to the i64 boundary")]
    Overflow { axis: char, value: i64 },

    /// A textual coordinate pair that does not parse as two integers.
    #[error("malformed coordinate pair: {0:?}")]
    Invalid(String),
}
