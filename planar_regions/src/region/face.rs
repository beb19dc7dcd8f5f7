use super::EdgeKey;

/// Closed loop of edges. Geometry (area, orientation, bounding box) is derived from the edges
/// through the owning [Polygon](super::Polygon).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub(crate) first: EdgeKey,
    pub(crate) last: EdgeKey,
    pub(crate) size: usize,
}

impl Face {
    #[inline]
    pub fn first(&self) -> EdgeKey {
        self.first
    }

    #[inline]
    pub fn last(&self) -> EdgeKey {
        self.last
    }

    /// Number of edges in the loop.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}
