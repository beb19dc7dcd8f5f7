//! Stages of the boolean operation pipeline, driven by
//! [Polygon::clip_opt](crate::region::Polygon::clip_opt).
mod inclusion;
mod intersections;
mod prune;
mod rebuild;
mod split;
mod stitch;

pub(crate) use inclusion::{classify_edges, mark_overlaps, reconcile_boundary_conflicts};
pub(crate) use intersections::{find_intersections, Operand};
pub(crate) use prune::{classify_untouched_faces, drop_untouched_faces, prune_chains};
pub(crate) use rebuild::rebuild_faces;
pub(crate) use split::split_edges;
pub(crate) use stitch::stitch;
