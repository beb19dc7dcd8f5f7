//! Multi-polygons with segment and arc edges and boolean operations between them.
mod boolean;
pub mod contains;
mod edge;
mod face;
pub(crate) mod internal;
mod planar_set;
mod polygon;
mod types;

pub use boolean::boolean_fold;
pub use edge::Edge;
pub use face::Face;
pub use planar_set::PlanarSet;
pub use polygon::{FaceEdges, Polygon};
pub use types::{BooleanOp, BooleanOptions, EdgeKey, FaceKey, Inclusion, Orientation, Overlap};
