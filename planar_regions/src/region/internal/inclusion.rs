use super::intersections::OperandIntersections;
use crate::core::traits::Real;
use crate::error::{RegionError, Result};
use crate::region::{contains::classify_point, EdgeKey, Inclusion, Overlap, Polygon};
use crate::shape::Shape;

/// Classify the edges adjacent to intersection points of `polygon` against `other`.
///
/// Edge ends at an intersection point are [Inclusion::Boundary], other ends are classified
/// against `other`. An edge is outside (or inside) if either end is, an edge with both ends on
/// the boundary is classified by its midpoint.
pub(crate) fn classify_edges<T>(
    polygon: &mut Polygon<T>,
    records: &OperandIntersections<T>,
    other: &Polygon<T>,
    pos_equal_eps: T,
) where
    T: Real,
{
    let touched: Vec<EdgeKey> = records
        .points
        .iter()
        .flat_map(|p| [p.edge_before, p.edge_after])
        .flatten()
        .collect();

    for &key in &touched {
        if let Some(e) = polygon.edges.get_mut(key) {
            e.reset_flags();
        }
    }

    for p in records.points.iter() {
        if let Some(e) = p.edge_before.and_then(|k| polygon.edges.get_mut(k)) {
            e.bv_end = Some(Inclusion::Boundary);
        }
        if let Some(e) = p.edge_after.and_then(|k| polygon.edges.get_mut(k)) {
            e.bv_start = Some(Inclusion::Boundary);
        }
    }

    for key in touched {
        set_inclusion(polygon, key, other, pos_equal_eps);
    }
}

/// Fill in the missing end classifications of `key` and derive its inclusion, no-op if already
/// classified.
fn set_inclusion<T>(polygon: &mut Polygon<T>, key: EdgeKey, other: &Polygon<T>, pos_equal_eps: T)
where
    T: Real,
{
    let Some(edge) = polygon.edges.get(key) else {
        return;
    };

    if edge.bv.is_some() {
        return;
    }

    let shape = edge.shape;
    let start = edge
        .bv_start
        .unwrap_or_else(|| classify_point(other, shape.start(), pos_equal_eps));
    let end = edge
        .bv_end
        .unwrap_or_else(|| classify_point(other, shape.end(), pos_equal_eps));

    let bv = if start == Inclusion::Outside || end == Inclusion::Outside {
        Inclusion::Outside
    } else if start == Inclusion::Inside || end == Inclusion::Inside {
        Inclusion::Inside
    } else {
        classify_point(other, shape.midpoint(), pos_equal_eps)
    };

    if let Some(edge) = polygon.edges.get_mut(key) {
        edge.bv_start = Some(start);
        edge.bv_end = Some(end);
        edge.bv = Some(bv);
    }
}

#[inline]
fn inclusion_of<T>(polygon: &Polygon<T>, key: EdgeKey) -> Option<Inclusion>
where
    T: Real,
{
    polygon.edges.get(key).and_then(|e| e.bv)
}

fn set_bv<T>(polygon: &mut Polygon<T>, key: EdgeKey, bv: Inclusion)
where
    T: Real,
{
    if let Some(e) = polygon.edges.get_mut(key) {
        e.bv = Some(bv);
    }
}

/// Make both end edges of every chain of `polygon` agree on their inclusion.
///
/// A chain runs between consecutive intersection points of a face. When one end edge is on the
/// boundary it takes the classification of the other end. When both are on the boundary the
/// edges in between decide. Fails with [RegionError::UnresolvedBoundaryConflict] if the chain
/// has both inside and outside parts.
pub(crate) fn reconcile_boundary_conflicts<T>(
    polygon: &mut Polygon<T>,
    records: &OperandIntersections<T>,
    other_records: &OperandIntersections<T>,
    other: &Polygon<T>,
    pos_equal_eps: T,
) -> Result<()>
where
    T: Real,
{
    for (from_pool, to_pool) in records.chains(pos_equal_eps) {
        let from_id = records.pool_ids(&from_pool)[0];
        let other_face = other_records[from_id].face;
        let Some(&to_id) = records
            .pool_ids(&to_pool)
            .iter()
            .find(|&&id| other_records[id].face == other_face)
        else {
            continue;
        };

        let (Some(from), Some(to)) = (records[from_id].edge_after, records[to_id].edge_before)
        else {
            continue;
        };

        let (Some(bv_from), Some(bv_to)) = (inclusion_of(polygon, from), inclusion_of(polygon, to))
        else {
            continue;
        };

        match (bv_from, bv_to) {
            (Inclusion::Boundary, Inclusion::Boundary) => {
                if from == to {
                    continue;
                }

                let Some(resolved) = classify_chain_middle(polygon, from, to, other, pos_equal_eps)?
                else {
                    continue;
                };
                set_bv(polygon, from, resolved);
                set_bv(polygon, to, resolved);
            }
            (Inclusion::Boundary, v) => set_bv(polygon, from, v),
            (v, Inclusion::Boundary) => set_bv(polygon, to, v),
            (a, b) if a != b => return Err(RegionError::UnresolvedBoundaryConflict),
            _ => {}
        }
    }

    Ok(())
}

/// Classify the edges strictly between `from` and `to` by their midpoints, returns the common
/// non boundary inclusion if there is one.
fn classify_chain_middle<T>(
    polygon: &mut Polygon<T>,
    from: EdgeKey,
    to: EdgeKey,
    other: &Polygon<T>,
    pos_equal_eps: T,
) -> Result<Option<Inclusion>>
where
    T: Real,
{
    let mut middle = Vec::new();
    let guard = polygon.edges.len();
    let mut current = polygon.edges.get(from).and_then(|e| e.next);
    while let Some(key) = current {
        if key == to || key == from || middle.len() >= guard {
            break;
        }
        middle.push(key);
        current = polygon.edges.get(key).and_then(|e| e.next);
    }

    let mut resolved = None;
    for key in middle {
        if let Some(e) = polygon.edges.get_mut(key) {
            e.bv_start = Some(Inclusion::Boundary);
            e.bv_end = Some(Inclusion::Boundary);
            e.bv = None;
        }
        set_inclusion(polygon, key, other, pos_equal_eps);
        match (resolved, inclusion_of(polygon, key)) {
            (_, None) | (_, Some(Inclusion::Boundary)) => {}
            (None, Some(v)) => resolved = Some(v),
            (Some(r), Some(v)) if r != v => return Err(RegionError::UnresolvedBoundaryConflict),
            _ => {}
        }
    }

    Ok(resolved)
}

/// Flag coincident boundary edges of the two operands as running in the same or opposite
/// direction.
///
/// Only chains made of a single boundary edge are considered, the matching edge of the other
/// operand must connect the same two intersection points (in either order).
pub(crate) fn mark_overlaps<T>(
    subject: &mut Polygon<T>,
    subject_records: &OperandIntersections<T>,
    clip: &mut Polygon<T>,
    clip_records: &OperandIntersections<T>,
    pos_equal_eps: T,
) where
    T: Real,
{
    for (from_pool, to_pool) in subject_records.chains(pos_equal_eps) {
        let from_ids = subject_records.pool_ids(&from_pool);
        let to_ids = subject_records.pool_ids(&to_pool);
        let (Some(edge), Some(edge_to)) = (
            subject_records[from_ids[0]].edge_after,
            subject_records[to_ids[0]].edge_before,
        ) else {
            continue;
        };

        if edge != edge_to || inclusion_of(subject, edge) != Some(Inclusion::Boundary) {
            continue;
        }

        let Some(s1) = subject.edges.get(edge).map(|e| e.shape) else {
            continue;
        };

        // the same two records can be joined by more than one clip edge (the two halves of a
        // circle), take the first one covering the same curve
        let matching = from_ids.iter().find_map(|&a| {
            to_ids.iter().find_map(|&b| {
                let forward = clip_records[a]
                    .edge_after
                    .filter(|&k| clip_records[b].edge_before == Some(k));
                let reverse = clip_records[b]
                    .edge_after
                    .filter(|&k| clip_records[a].edge_before == Some(k));
                [forward, reverse].into_iter().flatten().find_map(|k| {
                    if inclusion_of(clip, k) != Some(Inclusion::Boundary) {
                        return None;
                    }
                    let s2 = clip.edges.get(k)?.shape;
                    shape_overlap(&s1, &s2, pos_equal_eps).map(|overlap| (k, overlap))
                })
            })
        });

        let Some((clip_edge, overlap)) = matching else {
            continue;
        };

        if let Some(e) = subject.edges.get_mut(edge) {
            e.overlap.get_or_insert(overlap);
        }
        if let Some(e) = clip.edges.get_mut(clip_edge) {
            e.overlap.get_or_insert(overlap);
        }
    }
}

/// Direction relation of two shapes covering the same curve, `None` if they differ.
fn shape_overlap<T>(s1: &Shape<T>, s2: &Shape<T>, pos_equal_eps: T) -> Option<Overlap>
where
    T: Real,
{
    let eps = pos_equal_eps;
    if s1.is_arc() != s2.is_arc() {
        return None;
    }

    if s1.is_arc() && !s1.midpoint().fuzzy_eq_eps(s2.midpoint(), eps) {
        return None;
    }

    if s1.start().fuzzy_eq_eps(s2.start(), eps) && s1.end().fuzzy_eq_eps(s2.end(), eps) {
        Some(Overlap::Same)
    } else if s1.start().fuzzy_eq_eps(s2.end(), eps) && s1.end().fuzzy_eq_eps(s2.start(), eps) {
        Some(Overlap::Opposite)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::region::internal::{intersections::find_intersections, split::split_edges};

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        let mut p = Polygon::new();
        p.add_vertex_loop([(x0, y0, 0.0), (x1, y0, 0.0), (x1, y1, 0.0), (x0, y1, 0.0)])
            .unwrap();
        p
    }

    #[test]
    fn overlap_direction() {
        let s = Shape::segment(vec2(0.0, 0.0), vec2(1.0, 0.0));
        assert_eq!(shape_overlap(&s, &s, 1e-5), Some(Overlap::Same));
        assert_eq!(shape_overlap(&s, &s.reversed(), 1e-5), Some(Overlap::Opposite));

        let arc = Shape::arc(vec2(0.0, 0.0), vec2(1.0, 0.0), 0.5).unwrap();
        assert_eq!(shape_overlap(&s, &arc, 1e-5), None);
        let other_side = Shape::arc(vec2(1.0, 0.0), vec2(0.0, 0.0), 0.5).unwrap();
        assert_eq!(shape_overlap(&arc, &other_side, 1e-5), None);
        assert_eq!(
            shape_overlap(&arc, &arc.reversed(), 1e-5),
            Some(Overlap::Opposite)
        );
    }

    #[test]
    fn classify_crossing_rectangles() {
        let eps = 1e-5;
        let mut a = rect(0.0, 0.0, 4.0, 2.0);
        let mut b = rect(2.0, 1.0, 6.0, 3.0);
        let mut ints = find_intersections(&a, &b, eps);
        ints.sort(eps);
        split_edges(&mut a, &mut ints.subject, eps).unwrap();
        split_edges(&mut b, &mut ints.clip, eps).unwrap();
        classify_edges(&mut a, &ints.subject, &b, eps);
        reconcile_boundary_conflicts(&mut a, &ints.subject, &ints.clip, &b, eps).unwrap();

        let inside: Vec<_> = a
            .edges()
            .filter(|(_, e)| e.inclusion() == Some(Inclusion::Inside))
            .map(|(_, e)| *e.shape())
            .collect();
        // (4, 1) -> (4, 2) and (4, 2) -> (2, 2)
        assert_eq!(inside.len(), 2);
        assert!(inside
            .iter()
            .any(|s| s.start().fuzzy_eq(vec2(4.0, 1.0)) && s.end().fuzzy_eq(vec2(4.0, 2.0))));

        let outside = a
            .edges()
            .filter(|(_, e)| e.inclusion() == Some(Inclusion::Outside))
            .count();
        assert_eq!(outside, 2);
    }

    #[test]
    fn identical_squares_overlap_same() {
        let eps = 1e-5;
        let mut a = rect(0.0, 0.0, 1.0, 1.0);
        let mut b = rect(0.0, 0.0, 1.0, 1.0);
        let mut ints = find_intersections(&a, &b, eps);
        ints.sort(eps);
        split_edges(&mut a, &mut ints.subject, eps).unwrap();
        split_edges(&mut b, &mut ints.clip, eps).unwrap();
        ints.remove_duplicates(eps);
        assert_eq!(ints.len(), 4);
        classify_edges(&mut a, &ints.subject, &b, eps);
        classify_edges(&mut b, &ints.clip, &a, eps);
        mark_overlaps(&mut a, &ints.subject, &mut b, &ints.clip, eps);

        assert!(a
            .edges()
            .all(|(_, e)| e.inclusion() == Some(Inclusion::Boundary)
                && e.overlap() == Some(Overlap::Same)));
        assert!(b.edges().all(|(_, e)| e.overlap() == Some(Overlap::Same)));
    }

    #[test]
    fn circle_against_reversed_circle_overlap_opposite() {
        let eps = 1e-5;
        let circle = || {
            let mut p: Polygon = Polygon::new();
            p.add_circle(vec2(0.0, 0.0), 1.0, true).unwrap();
            p
        };
        let mut a = circle();
        let mut b = circle();
        b.reverse();
        let mut ints = find_intersections(&a, &b, eps);
        ints.sort(eps);
        split_edges(&mut a, &mut ints.subject, eps).unwrap();
        split_edges(&mut b, &mut ints.clip, eps).unwrap();
        ints.remove_duplicates(eps);
        classify_edges(&mut a, &ints.subject, &b, eps);
        classify_edges(&mut b, &ints.clip, &a, eps);
        mark_overlaps(&mut a, &ints.subject, &mut b, &ints.clip, eps);

        // each half circle of `b` joins the same two points as both halves of `a`
        assert!(a
            .edges()
            .all(|(_, e)| e.overlap() == Some(Overlap::Opposite)));
        assert!(b
            .edges()
            .all(|(_, e)| e.overlap() == Some(Overlap::Opposite)));
    }
}
