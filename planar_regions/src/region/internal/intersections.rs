use crate::core::{math::Vector2, traits::Real};
use crate::region::{EdgeKey, FaceKey, Polygon};
use slotmap::SecondaryMap;
use static_aabb2d_index::AABB;
use std::cmp::Ordering;
use std::ops::{Index, IndexMut, Range};

/// Where an intersection point sits on the edge it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VertexFlag {
    NotVertex,
    StartVertex,
    EndVertex,
}

/// Which input of the boolean operation a record or edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    Subject,
    Clip,
}

/// Dense handle shared by the two records describing the same intersection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct IntersectionId(pub usize);

/// One intersection point as seen from one operand.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntersectionPoint<T>
where
    T: Real,
{
    pub pt: Vector2<T>,
    /// Path length from the face start to `pt`.
    pub arc_length: T,
    /// Edge the point was found on, tracks the piece still holding the point while splitting.
    pub edge: EdgeKey,
    pub edge_before: Option<EdgeKey>,
    pub edge_after: Option<EdgeKey>,
    pub face: Option<FaceKey>,
    pub vertex: VertexFlag,
}

/// Records of one operand plus their sorted order.
#[derive(Debug, Clone)]
pub(crate) struct OperandIntersections<T>
where
    T: Real,
{
    pub points: Vec<IntersectionPoint<T>>,
    /// Ids ordered by (face, arc length).
    pub sorted: Vec<IntersectionId>,
}

impl<T> Index<IntersectionId> for OperandIntersections<T>
where
    T: Real,
{
    type Output = IntersectionPoint<T>;

    #[inline]
    fn index(&self, id: IntersectionId) -> &Self::Output {
        &self.points[id.0]
    }
}

impl<T> IndexMut<IntersectionId> for OperandIntersections<T>
where
    T: Real,
{
    #[inline]
    fn index_mut(&mut self, id: IntersectionId) -> &mut Self::Output {
        &mut self.points[id.0]
    }
}

#[inline]
fn total_cmp<T>(a: T, b: T) -> Ordering
where
    T: Real,
{
    let a = a.to_f64().unwrap_or(f64::NAN);
    let b = b.to_f64().unwrap_or(f64::NAN);
    a.total_cmp(&b)
}

impl<T> OperandIntersections<T>
where
    T: Real,
{
    fn new() -> Self {
        Self {
            points: Vec::new(),
            sorted: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = IntersectionId> {
        (0..self.points.len()).map(IntersectionId)
    }

    /// Sort by (face rank, arc length), faces ranked by first appearance. Runs of fuzzy equal
    /// arc lengths are ordered by id.
    pub fn sort(&mut self, pos_equal_eps: T) {
        let mut rank: SecondaryMap<FaceKey, usize> = SecondaryMap::new();
        for f in self.points.iter().filter_map(|p| p.face) {
            if !rank.contains_key(f) {
                let next = rank.len();
                rank.insert(f, next);
            }
        }

        let face_rank = |p: &IntersectionPoint<T>| -> usize {
            p.face
                .and_then(|f| rank.get(f).copied())
                .unwrap_or(usize::MAX)
        };

        let points = &self.points;
        let mut sorted: Vec<IntersectionId> = (0..points.len()).map(IntersectionId).collect();
        sorted.sort_by(|&a, &b| {
            let (pa, pb) = (&points[a.0], &points[b.0]);
            face_rank(pa)
                .cmp(&face_rank(pb))
                .then_with(|| total_cmp(pa.arc_length, pb.arc_length))
                .then_with(|| a.cmp(&b))
        });

        let mut start = 0;
        while start < sorted.len() {
            let mut end = start + 1;
            while end < sorted.len() {
                let prev = &points[sorted[end - 1].0];
                let cur = &points[sorted[end].0];
                if prev.face != cur.face
                    || !prev.arc_length.fuzzy_eq_eps(cur.arc_length, pos_equal_eps)
                {
                    break;
                }
                end += 1;
            }
            sorted[start..end].sort();
            start = end;
        }

        self.sorted = sorted;
    }

    /// Ranges into `sorted` of records at the same position of the same face.
    pub fn pools(&self, pos_equal_eps: T) -> Vec<Range<usize>> {
        let mut result = Vec::new();
        let mut start = 0;
        while start < self.sorted.len() {
            let first = &self[self.sorted[start]];
            let mut end = start + 1;
            while end < self.sorted.len() {
                let cur = &self[self.sorted[end]];
                if cur.face != first.face
                    || !cur.arc_length.fuzzy_eq_eps(first.arc_length, pos_equal_eps)
                {
                    break;
                }
                end += 1;
            }
            result.push(start..end);
            start = end;
        }

        result
    }

    /// Chains as (from pool, to pool) pairs: consecutive pools of a face, the last pool of a face
    /// wrapping to its first.
    pub fn chains(&self, pos_equal_eps: T) -> Vec<(Range<usize>, Range<usize>)> {
        let pools = self.pools(pos_equal_eps);
        let mut result = Vec::with_capacity(pools.len());
        let mut face_start = 0;
        while face_start < pools.len() {
            let face = self[self.sorted[pools[face_start].start]].face;
            let mut face_end = face_start + 1;
            while face_end < pools.len() && self[self.sorted[pools[face_end].start]].face == face {
                face_end += 1;
            }

            for i in face_start..face_end {
                let next = if i + 1 < face_end { i + 1 } else { face_start };
                result.push((pools[i].clone(), pools[next].clone()));
            }

            face_start = face_end;
        }

        result
    }

    /// Ids of the records in `range` (a pool) of `sorted`.
    #[inline]
    pub fn pool_ids(&self, range: &Range<usize>) -> &[IntersectionId] {
        &self.sorted[range.clone()]
    }

    /// Map edge and face handles through the remaps produced by
    /// [Polygon::absorb](crate::region::Polygon), handles missing from the maps become `None`.
    pub fn remap(
        &mut self,
        edge_map: &SecondaryMap<EdgeKey, EdgeKey>,
        face_map: &SecondaryMap<FaceKey, FaceKey>,
    ) {
        for p in self.points.iter_mut() {
            p.edge_before = p.edge_before.and_then(|k| edge_map.get(k).copied());
            p.edge_after = p.edge_after.and_then(|k| edge_map.get(k).copied());
            p.face = p.face.and_then(|k| face_map.get(k).copied());
            if let Some(&k) = edge_map.get(p.edge) {
                p.edge = k;
            }
        }
    }
}

/// Correlated records of both operands, `subject[id]` and `clip[id]` are the same point.
#[derive(Debug, Clone)]
pub(crate) struct Intersections<T>
where
    T: Real,
{
    pub subject: OperandIntersections<T>,
    pub clip: OperandIntersections<T>,
}

impl<T> Intersections<T>
where
    T: Real,
{
    #[inline]
    pub fn len(&self) -> usize {
        self.subject.len()
    }

    pub fn sort(&mut self, pos_equal_eps: T) {
        self.subject.sort(pos_equal_eps);
        self.clip.sort(pos_equal_eps);
    }

    /// Remove records that duplicate another record on both operands (same position and same
    /// edges before and after), renumber the rest and sort again. Returns the number removed.
    pub fn remove_duplicates(&mut self, pos_equal_eps: T) -> usize {
        let mut duplicate = vec![false; self.len()];
        mark_duplicates(&self.subject, &self.clip, &mut duplicate, pos_equal_eps);
        mark_duplicates(&self.clip, &self.subject, &mut duplicate, pos_equal_eps);

        let removed = duplicate.iter().filter(|&&d| d).count();
        if removed == 0 {
            return 0;
        }

        let mut flags = duplicate.iter();
        self.subject.points.retain(|_| !flags.next().copied().unwrap_or(false));
        let mut flags = duplicate.iter();
        self.clip.points.retain(|_| !flags.next().copied().unwrap_or(false));
        self.sort(pos_equal_eps);
        removed
    }
}

fn same_edges<T>(a: &IntersectionPoint<T>, b: &IntersectionPoint<T>) -> bool
where
    T: Real,
{
    a.edge_before == b.edge_before && a.edge_after == b.edge_after
}

/// Within each pool of `primary`, flag every record that has the same edges as an earlier
/// unflagged record on both `primary` and `secondary`.
fn mark_duplicates<T>(
    primary: &OperandIntersections<T>,
    secondary: &OperandIntersections<T>,
    duplicate: &mut [bool],
    pos_equal_eps: T,
) where
    T: Real,
{
    for pool in primary.pools(pos_equal_eps) {
        let ids = primary.pool_ids(&pool);
        for (i, &keep) in ids.iter().enumerate() {
            if duplicate[keep.0] {
                continue;
            }
            for &other in &ids[i + 1..] {
                if !duplicate[other.0]
                    && same_edges(&primary[keep], &primary[other])
                    && same_edges(&secondary[keep], &secondary[other])
                {
                    duplicate[other.0] = true;
                }
            }
        }
    }
}

/// Build the record for `pt` on edge `key` of `polygon`, `None` if the edge is not on a face.
fn make_record<T>(
    polygon: &Polygon<T>,
    key: EdgeKey,
    pt: Vector2<T>,
    pos_equal_eps: T,
) -> Option<IntersectionPoint<T>>
where
    T: Real,
{
    let edge = polygon.edges.get(key)?;
    let face = edge.face?;
    let length = edge.shape.length();
    let offset = edge.shape.length_to(pt);
    if !offset.is_finite_value() {
        return None;
    }

    let vertex = if pt.fuzzy_eq_eps(edge.shape.start(), pos_equal_eps)
        || offset.fuzzy_eq_zero_eps(pos_equal_eps)
    {
        VertexFlag::StartVertex
    } else if pt.fuzzy_eq_eps(edge.shape.end(), pos_equal_eps)
        || offset.fuzzy_eq_eps(length, pos_equal_eps)
    {
        VertexFlag::EndVertex
    } else {
        VertexFlag::NotVertex
    };

    let arc_length = match vertex {
        VertexFlag::StartVertex => edge.arc_length,
        VertexFlag::EndVertex => {
            let next_starts_face = edge
                .next
                .and_then(|n| polygon.edges.get(n))
                .map_or(false, |n| n.arc_length.fuzzy_eq_zero_eps(pos_equal_eps));
            if next_starts_face {
                T::zero()
            } else {
                edge.arc_length + length
            }
        }
        VertexFlag::NotVertex => edge.arc_length + offset,
    };

    Some(IntersectionPoint {
        pt,
        arc_length,
        edge: key,
        edge_before: None,
        edge_after: None,
        face: Some(face),
        vertex,
    })
}

/// Find every intersection between the edges of `subject` and `clip`.
///
/// Candidates come from the clip planar set queried with each subject edge box grown by
/// `pos_equal_eps`. A point only produces records if it can be placed on both edges so ids stay
/// correlated.
pub(crate) fn find_intersections<T>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    pos_equal_eps: T,
) -> Intersections<T>
where
    T: Real,
{
    let eps = pos_equal_eps;
    let mut result = Intersections {
        subject: OperandIntersections::new(),
        clip: OperandIntersections::new(),
    };

    for (k1, e1) in subject.edges.iter() {
        let bb = e1.shape.bounding_box();
        let query = AABB::new(bb.min_x - eps, bb.min_y - eps, bb.max_x + eps, bb.max_y + eps);
        for k2 in clip.index.search(&query) {
            let Some(e2) = clip.edges.get(k2) else {
                continue;
            };

            for pt in e1.shape.intersect(&e2.shape, eps) {
                if let (Some(r1), Some(r2)) = (
                    make_record(subject, k1, pt, eps),
                    make_record(clip, k2, pt, eps),
                ) {
                    result.subject.points.push(r1);
                    result.clip.points.push(r2);
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{math::vec2, traits::FuzzyEq};

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        let mut p = Polygon::new();
        p.add_vertex_loop([(x0, y0, 0.0), (x1, y0, 0.0), (x1, y1, 0.0), (x0, y1, 0.0)])
            .unwrap();
        p
    }

    #[test]
    fn crossing_rectangles() {
        let a = rect(0.0, 0.0, 150.0, 30.0);
        let b = rect(100.0, 20.0, 200.0, 40.0);
        let mut ints = find_intersections(&a, &b, 1e-5);
        assert_eq!(ints.len(), 2);
        ints.sort(1e-5);
        let first = ints.subject[ints.subject.sorted[0]];
        assert!(first.pt.fuzzy_eq(vec2(150.0, 20.0)));
        assert_fuzzy_eq!(first.arc_length, 170.0);
        assert_eq!(first.vertex, VertexFlag::NotVertex);
        let second = ints.subject[ints.subject.sorted[1]];
        assert_fuzzy_eq!(second.arc_length, 230.0);
        assert_eq!(ints.subject.chains(1e-5).len(), 2);
    }

    #[test]
    fn vertex_at_face_start_wraps_to_zero() {
        // corner (0, 0) of `a` touches the top side of `b`
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(-1.0, -1.0, 1.0, 0.0);
        let mut ints = find_intersections(&a, &b, 1e-5);
        ints.sort(1e-5);
        let at_origin: Vec<_> = ints
            .subject
            .points
            .iter()
            .filter(|p| p.pt.fuzzy_eq(vec2(0.0, 0.0)))
            .collect();
        assert!(!at_origin.is_empty());
        assert!(at_origin.iter().all(|p| p.arc_length.fuzzy_eq(0.0)));
    }
}
