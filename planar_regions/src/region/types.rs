use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Handle to an [Edge](super::Edge) stored in a [Polygon](super::Polygon).
    pub struct EdgeKey;

    /// Handle to a [Face](super::Face) stored in a [Polygon](super::Polygon).
    pub struct FaceKey;
}

/// Where something lies relative to the other operand of a boolean operation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inclusion {
    Inside,
    Outside,
    Boundary,
}

/// Relation of an edge to a coincident edge of the other operand.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// Coincident and running in the same direction.
    Same,
    /// Coincident and running in opposite directions.
    Opposite,
}

/// Orientation of a face loop.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter clockwise (positive area), islands.
    Ccw,
    /// Clockwise (negative area), holes.
    Cw,
    /// Zero area, direction cannot be determined.
    NotOrientable,
}

/// Boolean operation to apply between two polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BooleanOp {
    /// Region covered by either polygon.
    Union,
    /// Region covered by both polygons.
    Intersect,
    /// Region of the first polygon not covered by the second.
    Subtract,
}

/// Options for [Polygon::boolean_opt](super::Polygon::boolean_opt) and friends.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
}

impl<T> BooleanOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
        }
    }
}

impl<T> Default for BooleanOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
