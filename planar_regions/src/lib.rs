//! Boolean operations (union, intersection, subtraction) on planar multi-polygons whose
//! boundaries are made of line segments and circular arcs.
//!
//! Arcs are stored the bulge way: `bulge = tan(sweep / 4)`, positive for counter clockwise arcs
//! and zero for line segments.
//!
//! # Examples
//!
//! ```
//! # use planar_regions::polygon;
//! # use planar_regions::region::*;
//! # use planar_regions::core::traits::*;
//! let a: Polygon = polygon![[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (2.0, 2.0, 0.0), (0.0, 2.0, 0.0)]]
//!     .unwrap();
//! let b: Polygon = polygon![[(1.0, 1.0, 0.0), (3.0, 1.0, 0.0), (3.0, 3.0, 0.0), (1.0, 3.0, 0.0)]]
//!     .unwrap();
//!
//! assert!(a.union(&b).unwrap().area().fuzzy_eq(7.0));
//! assert!(a.intersect(&b).unwrap().area().fuzzy_eq(1.0));
//! assert!(a.subtract(&b).unwrap().area().fuzzy_eq(3.0));
//! ```
#[macro_use]
mod macros;

pub mod core;
pub mod error;
pub mod region;
pub mod shape;

pub use static_aabb2d_index::AABB;
