//! Numeric traits and plain 2D math shared by the shape and region modules.
pub mod math;
pub mod traits;
