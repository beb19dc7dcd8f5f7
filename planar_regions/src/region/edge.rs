use super::{EdgeKey, FaceKey, Inclusion, Overlap};
use crate::core::traits::Real;
use crate::shape::Shape;

/// One boundary piece of a face, linked to its neighbours in the face loop.
///
/// `next`/`prev` are only `None` transiently while a boolean operation relinks edges; every edge
/// of a polygon handed back to the caller is part of a closed loop.
#[derive(Debug, Clone)]
pub struct Edge<T = f64>
where
    T: Real,
{
    pub(crate) shape: Shape<T>,
    pub(crate) next: Option<EdgeKey>,
    pub(crate) prev: Option<EdgeKey>,
    pub(crate) face: Option<FaceKey>,
    /// Path length from the start of the face to the start of this edge.
    pub(crate) arc_length: T,
    pub(crate) bv_start: Option<Inclusion>,
    pub(crate) bv_end: Option<Inclusion>,
    pub(crate) bv: Option<Inclusion>,
    pub(crate) overlap: Option<Overlap>,
}

impl<T> Edge<T>
where
    T: Real,
{
    pub(crate) fn new(shape: Shape<T>) -> Self {
        Self {
            shape,
            next: None,
            prev: None,
            face: None,
            arc_length: T::zero(),
            bv_start: None,
            bv_end: None,
            bv: None,
            overlap: None,
        }
    }

    #[inline]
    pub fn shape(&self) -> &Shape<T> {
        &self.shape
    }

    #[inline]
    pub fn next(&self) -> Option<EdgeKey> {
        self.next
    }

    #[inline]
    pub fn prev(&self) -> Option<EdgeKey> {
        self.prev
    }

    #[inline]
    pub fn face(&self) -> Option<FaceKey> {
        self.face
    }

    #[inline]
    pub fn arc_length(&self) -> T {
        self.arc_length
    }

    #[inline]
    pub fn length(&self) -> T {
        self.shape.length()
    }

    /// Classification of the edge against the other operand of the last boolean operation that
    /// touched it.
    #[inline]
    pub fn inclusion(&self) -> Option<Inclusion> {
        self.bv
    }

    #[inline]
    pub fn overlap(&self) -> Option<Overlap> {
        self.overlap
    }

    pub(crate) fn reset_flags(&mut self) {
        self.bv_start = None;
        self.bv_end = None;
        self.bv = None;
        self.overlap = None;
    }
}
