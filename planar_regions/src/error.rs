//! Error type shared by shape construction and the boolean pipeline.
use thiserror::Error;

/// Errors produced while building polygons or running a boolean operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Input geometry or handles that cannot be used (open face loop, non-finite coordinate, arc
    /// sweeping more than a half circle, unknown edge handle, ...).
    #[error("illegal parameters: {0}")]
    IllegalParameters(String),
    /// Stitching left dangling edge ends, or a face walk did not close.
    #[error("cannot complete boolean operation: {unresolved} unresolved intersection(s)")]
    CannotCompleteBooleanOperation { unresolved: usize },
    /// Both ends of an edge chain disagree about which side of the other operand it lies on.
    #[error("unresolved boundary conflict between chain ends")]
    UnresolvedBoundaryConflict,
    /// Arc with coincident end points.
    #[error("division by zero: arc end points coincide")]
    ZeroDivision,
}

pub type Result<V> = std::result::Result<V, RegionError>;
