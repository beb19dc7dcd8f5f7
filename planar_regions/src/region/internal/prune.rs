use super::intersections::{Operand, OperandIntersections};
use crate::core::traits::Real;
use crate::region::{contains::classify_point, BooleanOp, FaceKey, Inclusion, Overlap, Polygon};
use std::collections::HashSet;

/// `true` if a piece of `operand` lying `inclusion` the other operand is not part of the result.
fn drop_by_inclusion(inclusion: Inclusion, op: BooleanOp, operand: Operand) -> bool {
    match inclusion {
        Inclusion::Inside => {
            op == BooleanOp::Union || (op == BooleanOp::Subtract && operand == Operand::Subject)
        }
        Inclusion::Outside => {
            op == BooleanOp::Intersect || (op == BooleanOp::Subtract && operand == Operand::Clip)
        }
        Inclusion::Boundary => false,
    }
}

/// Decide whether a chain whose end edges are classified `from` and `to` is dropped.
///
/// Coincident boundary chains keep one copy when running the same way (the clip copy) and are
/// dropped from both operands when running in opposite directions. The clip operand is already
/// reversed for subtraction.
fn drop_chain(
    from: Option<Inclusion>,
    to: Option<Inclusion>,
    overlap: Option<Overlap>,
    op: BooleanOp,
    operand: Operand,
) -> bool {
    match (from, to) {
        (Some(Inclusion::Boundary), Some(Inclusion::Boundary)) => match overlap {
            Some(Overlap::Same) => operand == Operand::Subject,
            Some(Overlap::Opposite) => true,
            None => {
                log::warn!("boundary chain without overlap flag kept ({:?}, {:?})", op, operand);
                false
            }
        },
        (Some(a), Some(b)) if a == b => drop_by_inclusion(a, op, operand),
        _ => false,
    }
}

/// Remove the chains of `polygon` that are not part of the result of `op`.
///
/// The records at both ends of a removed chain lose their `edge_after` (start of the chain) or
/// `edge_before` (end of the chain). Returns the number of removed edges.
pub(crate) fn prune_chains<T>(
    polygon: &mut Polygon<T>,
    records: &mut OperandIntersections<T>,
    op: BooleanOp,
    operand: Operand,
    pos_equal_eps: T,
) -> usize
where
    T: Real,
{
    let mut removed = 0;
    for (from_pool, to_pool) in records.chains(pos_equal_eps) {
        let from_ids = records.pool_ids(&from_pool).to_vec();
        let to_ids = records.pool_ids(&to_pool).to_vec();
        let (Some(from), Some(to)) = (records[from_ids[0]].edge_after, records[to_ids[0]].edge_before)
        else {
            continue;
        };

        let (Some(from_edge), Some(to_edge)) = (polygon.edges.get(from), polygon.edges.get(to))
        else {
            continue;
        };

        if !drop_chain(from_edge.bv, to_edge.bv, from_edge.overlap, op, operand) {
            continue;
        }

        removed += polygon.remove_chain(from, to);
        for id in from_ids {
            records[id].edge_after = None;
        }
        for id in to_ids {
            records[id].edge_before = None;
        }
    }

    removed
}

/// Classify every face of `polygon` without an intersection record against `other`.
///
/// Probes the start then the midpoint of each edge until one is not on the boundary of `other`.
/// A face lying entirely on the boundary is [Inclusion::Boundary].
pub(crate) fn classify_untouched_faces<T>(
    polygon: &Polygon<T>,
    records: &OperandIntersections<T>,
    other: &Polygon<T>,
    pos_equal_eps: T,
) -> Vec<(FaceKey, Inclusion)>
where
    T: Real,
{
    let touched: HashSet<FaceKey> = records.points.iter().filter_map(|p| p.face).collect();
    polygon
        .faces
        .keys()
        .filter(|f| !touched.contains(f))
        .map(|face| {
            let inclusion = polygon
                .face_edges(face)
                .flat_map(|(_, e)| [e.shape.start(), e.shape.midpoint()])
                .map(|pt| classify_point(other, pt, pos_equal_eps))
                .find(|&c| c != Inclusion::Boundary)
                .unwrap_or(Inclusion::Boundary);
            (face, inclusion)
        })
        .collect()
}

/// Delete the untouched faces that are not part of the result of `op`, returns how many.
pub(crate) fn drop_untouched_faces<T>(
    polygon: &mut Polygon<T>,
    faces: &[(FaceKey, Inclusion)],
    op: BooleanOp,
    operand: Operand,
) -> usize
where
    T: Real,
{
    let mut dropped = 0;
    for &(face, inclusion) in faces {
        if drop_by_inclusion(inclusion, op, operand) {
            polygon.delete_face(face);
            dropped += 1;
        }
    }

    dropped
}
