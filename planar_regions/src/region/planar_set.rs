use super::EdgeKey;
use crate::core::traits::Real;
use slotmap::SecondaryMap;
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};
use std::fmt;

struct PackedIndex<T>
where
    T: Real,
{
    index: StaticAABB2DIndex<T>,
    keys: Vec<EdgeKey>,
}

/// Bounding box index over the edges of a polygon.
///
/// Boxes are kept per edge, the packed [StaticAABB2DIndex] is built by [PlanarSet::rebuild]. Any
/// mutation drops the packed index and searches fall back to scanning every box until the next
/// rebuild. Searches may return edges whose boxes only touch the query box.
pub struct PlanarSet<T>
where
    T: Real,
{
    boxes: SecondaryMap<EdgeKey, AABB<T>>,
    packed: Option<PackedIndex<T>>,
}

#[inline]
fn boxes_overlap<T>(a: &AABB<T>, b: &AABB<T>) -> bool
where
    T: Real,
{
    a.min_x <= b.max_x && a.max_x >= b.min_x && a.min_y <= b.max_y && a.max_y >= b.min_y
}

impl<T> PlanarSet<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            boxes: SecondaryMap::new(),
            packed: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// `true` if the packed index is current.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.packed.is_some()
    }

    /// Add `key` with `bounding_box`, replacing the box if `key` is already present.
    pub fn add(&mut self, key: EdgeKey, bounding_box: AABB<T>) {
        self.boxes.insert(key, bounding_box);
        self.packed = None;
    }

    /// Remove `key`, returns `false` if it was not present.
    pub fn delete(&mut self, key: EdgeKey) -> bool {
        let removed = self.boxes.remove(key).is_some();
        if removed {
            self.packed = None;
        }
        removed
    }

    /// Edges whose boxes overlap `query` (boxes touching at the border count).
    pub fn search(&self, query: &AABB<T>) -> Vec<EdgeKey> {
        match &self.packed {
            Some(packed) => packed
                .index
                .query(query.min_x, query.min_y, query.max_x, query.max_y)
                .into_iter()
                .map(|i| packed.keys[i])
                .collect(),
            None => self
                .boxes
                .iter()
                .filter(|(_, b)| boxes_overlap(b, query))
                .map(|(k, _)| k)
                .collect(),
        }
    }

    /// Build the packed index from the current boxes.
    pub fn rebuild(&mut self) {
        self.packed = None;
        if self.boxes.is_empty() {
            return;
        }

        let mut builder = StaticAABB2DIndexBuilder::new(self.boxes.len());
        let mut keys = Vec::with_capacity(self.boxes.len());
        for (key, b) in self.boxes.iter() {
            builder.add(b.min_x, b.min_y, b.max_x, b.max_y);
            keys.push(key);
        }

        match builder.build() {
            Ok(index) => self.packed = Some(PackedIndex { index, keys }),
            Err(e) => {
                // searches keep working through the linear scan
                log::debug!("planar set index build failed: {e}");
            }
        }
    }
}

impl<T> Default for PlanarSet<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PlanarSet<T>
where
    T: Real,
{
    /// The packed index is not cloned, the clone searches linearly until rebuilt.
    fn clone(&self) -> Self {
        Self {
            boxes: self.boxes.clone(),
            packed: None,
        }
    }
}

impl<T> fmt::Debug for PlanarSet<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanarSet")
            .field("len", &self.boxes.len())
            .field("packed", &self.packed.is_some())
            .finish()
    }
}
