use super::intersections::{OperandIntersections, VertexFlag};
use crate::core::traits::Real;
use crate::error::{RegionError, Result};
use crate::region::Polygon;

/// Split the edges of `polygon` at every record of `records` and fill in the edges before and
/// after each point.
///
/// Records must be sorted. Points on the same edge are visited by increasing arc length, so after
/// a split the remaining points still lie on the piece keeping the original handle. Points within
/// `pos_equal_eps` of an edge end are snapped to it instead of splitting.
pub(crate) fn split_edges<T>(
    polygon: &mut Polygon<T>,
    records: &mut OperandIntersections<T>,
    pos_equal_eps: T,
) -> Result<()>
where
    T: Real,
{
    let eps = pos_equal_eps;
    for i in 0..records.sorted.len() {
        let id = records.sorted[i];
        let rec = records[id];
        let Some(edge) = polygon.edges.get(rec.edge) else {
            return Err(RegionError::CannotCompleteBooleanOperation { unresolved: 1 });
        };

        let shape = edge.shape;
        let prev = edge.prev;
        let face = edge.face;

        let (vertex, pt) = if rec.pt.fuzzy_eq_eps(shape.start(), eps) {
            (VertexFlag::StartVertex, shape.start())
        } else if rec.pt.fuzzy_eq_eps(shape.end(), eps) {
            (VertexFlag::EndVertex, shape.end())
        } else {
            (VertexFlag::NotVertex, rec.pt)
        };

        let before = match vertex {
            VertexFlag::StartVertex => {
                prev.ok_or(RegionError::CannotCompleteBooleanOperation { unresolved: 1 })?
            }
            VertexFlag::EndVertex => rec.edge,
            VertexFlag::NotVertex => polygon.add_vertex(rec.edge, pt, eps)?,
        };

        let rec = &mut records[id];
        rec.pt = pt;
        rec.edge = before;
        rec.edge_before = Some(before);
        rec.vertex = VertexFlag::EndVertex;
        rec.face = face;
    }

    for p in records.points.iter_mut() {
        p.edge_after = p
            .edge_before
            .and_then(|k| polygon.edges.get(k))
            .and_then(|e| e.next);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::region::internal::intersections::find_intersections;

    #[test]
    fn split_crossing_rectangles() {
        let mut a: Polygon = Polygon::new();
        a.add_vertex_loop([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 2.0, 0.0), (0.0, 2.0, 0.0)])
            .unwrap();
        let mut b: Polygon = Polygon::new();
        b.add_vertex_loop([(2.0, 1.0, 0.0), (6.0, 1.0, 0.0), (6.0, 3.0, 0.0), (2.0, 3.0, 0.0)])
            .unwrap();

        let mut ints = find_intersections(&a, &b, 1e-5);
        ints.sort(1e-5);
        split_edges(&mut a, &mut ints.subject, 1e-5).unwrap();
        split_edges(&mut b, &mut ints.clip, 1e-5).unwrap();

        assert_eq!(a.edge_count(), 6);
        assert_eq!(b.edge_count(), 6);
        for (records, poly) in [(&ints.subject, &a), (&ints.clip, &b)] {
            for rec in records.points.iter() {
                let before = poly.edge(rec.edge_before.unwrap()).unwrap();
                let after = poly.edge(rec.edge_after.unwrap()).unwrap();
                assert!(before.shape().end().fuzzy_eq(rec.pt));
                assert!(after.shape().start().fuzzy_eq(rec.pt));
            }
        }

        let pts: Vec<_> = ints.subject.points.iter().map(|p| p.pt).collect();
        assert!(pts.iter().any(|p| p.fuzzy_eq(vec2(4.0, 1.0))));
        assert!(pts.iter().any(|p| p.fuzzy_eq(vec2(2.0, 2.0))));
    }

    #[test]
    fn point_on_vertex_does_not_split() {
        let mut a: Polygon = Polygon::new();
        a.add_vertex_loop([(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (2.0, 2.0, 0.0), (0.0, 2.0, 0.0)])
            .unwrap();
        // triangle touching the corner (2, 2) from outside
        let mut b: Polygon = Polygon::new();
        b.add_vertex_loop([(2.0, 2.0, 0.0), (4.0, 2.0, 0.0), (4.0, 4.0, 0.0)])
            .unwrap();

        let mut ints = find_intersections(&a, &b, 1e-5);
        ints.sort(1e-5);
        split_edges(&mut a, &mut ints.subject, 1e-5).unwrap();
        assert_eq!(a.edge_count(), 4);
        assert!(ints
            .subject
            .points
            .iter()
            .all(|p| p.edge_before.is_some() && p.edge_after.is_some()));
    }
}
