use super::intersections::{IntersectionId, Intersections, Operand, OperandIntersections};
use crate::core::{
    math::{normalize_radians, Vector2},
    traits::Real,
};
use crate::error::{RegionError, Result};
use crate::region::{EdgeKey, Polygon};
use std::collections::BTreeMap;

type Slot = (Operand, IntersectionId);

/// Intersection records of both operands grouped by position.
///
/// Positions are bucketed on a grid of `pos_equal_eps` cells, lookups compare against the
/// neighbouring cells so points straddling a cell border still land in the same class.
struct PointClasses<T>
where
    T: Real,
{
    pos_equal_eps: T,
    buckets: BTreeMap<(i64, i64), Vec<usize>>,
    points: Vec<Vector2<T>>,
    members: Vec<Vec<Slot>>,
}

impl<T> PointClasses<T>
where
    T: Real,
{
    fn new(pos_equal_eps: T) -> Self {
        Self {
            pos_equal_eps,
            buckets: BTreeMap::new(),
            points: Vec::new(),
            members: Vec::new(),
        }
    }

    fn cell(&self, pt: Vector2<T>) -> (i64, i64) {
        let x = (pt.x / self.pos_equal_eps).round().to_i64().unwrap_or(0);
        let y = (pt.y / self.pos_equal_eps).round().to_i64().unwrap_or(0);
        (x, y)
    }

    fn insert(&mut self, pt: Vector2<T>, slot: Slot) {
        let (cx, cy) = self.cell(pt);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(classes) = self.buckets.get(&(cx.saturating_add(dx), cy.saturating_add(dy)))
                else {
                    continue;
                };
                if let Some(&c) = classes
                    .iter()
                    .find(|&&c| self.points[c].fuzzy_eq_eps(pt, self.pos_equal_eps))
                {
                    self.members[c].push(slot);
                    return;
                }
            }
        }

        let c = self.points.len();
        self.points.push(pt);
        self.members.push(vec![slot]);
        self.buckets.entry((cx, cy)).or_default().push(c);
    }
}

fn record_edges<T>(intrs: &Intersections<T>, slot: Slot) -> (Option<EdgeKey>, Option<EdgeKey>)
where
    T: Real,
{
    let records = match slot.0 {
        Operand::Subject => &intrs.subject,
        Operand::Clip => &intrs.clip,
    };
    let p = &records[slot.1];
    (p.edge_before, p.edge_after)
}

fn push_unique(keys: &mut Vec<EdgeKey>, key: Option<EdgeKey>) {
    if let Some(k) = key {
        if !keys.contains(&k) {
            keys.push(k);
        }
    }
}

/// Link the remaining edges of `polygon` into closed loops.
///
/// `polygon` holds the edges of both operands (after pruning) and `intrs` the records remapped
/// onto it. At every intersection point the edges arriving there are connected to the edges
/// leaving it. With one of each they are linked directly, otherwise each arrival takes the
/// departure reached by the smallest clockwise turn from the direction it came from.
///
/// Fails with [RegionError::CannotCompleteBooleanOperation] if an edge is left with an open end.
pub(crate) fn stitch<T>(
    polygon: &mut Polygon<T>,
    intrs: &mut Intersections<T>,
    pos_equal_eps: T,
) -> Result<()>
where
    T: Real,
{
    let mut classes = PointClasses::new(pos_equal_eps);
    for id in intrs.subject.ids() {
        classes.insert(intrs.subject[id].pt, (Operand::Subject, id));
    }
    for id in intrs.clip.ids() {
        classes.insert(intrs.clip[id].pt, (Operand::Clip, id));
    }

    let mut complex = Vec::new();
    for (c, members) in classes.members.iter().enumerate() {
        let mut arrivals = Vec::new();
        let mut departures = Vec::new();
        for &slot in members {
            let (before, after) = record_edges(intrs, slot);
            push_unique(&mut arrivals, before);
            push_unique(&mut departures, after);
        }

        if arrivals.is_empty() && departures.is_empty() {
            continue;
        }

        if let ([arrival], [departure]) = (arrivals.as_slice(), departures.as_slice()) {
            let arrival_next = polygon.edges.get(*arrival).map(|e| e.next);
            let departure_prev = polygon.edges.get(*departure).map(|e| e.prev);
            match (arrival_next, departure_prev) {
                (Some(None), Some(None)) => {
                    polygon.link(*arrival, *departure);
                    continue;
                }
                (Some(Some(n)), _) if n == *departure => continue,
                _ => {}
            }
        }

        complex.push((c, arrivals, departures));
    }

    for (c, arrivals, departures) in complex {
        // detach links made inside the class so every pairing is decided by angle
        for &arrival in &arrivals {
            let next = polygon.edges.get(arrival).and_then(|e| e.next);
            if let Some(d) = next.filter(|d| departures.contains(d)) {
                if let Some(e) = polygon.edges.get_mut(arrival) {
                    e.next = None;
                }
                if let Some(e) = polygon.edges.get_mut(d) {
                    e.prev = None;
                }
            }
        }

        let pt = classes.points[c];
        for &arrival in &arrivals {
            let Some(arrival_edge) = polygon.edges.get(arrival) else {
                continue;
            };
            if arrival_edge.next.is_some() {
                continue;
            }

            let back = (-arrival_edge.shape.tangent_at(arrival_edge.shape.end())).direction_angle();
            let chosen = departures
                .iter()
                .filter_map(|&d| polygon.edges.get(d).map(|e| (d, e)))
                .filter(|(_, e)| e.prev.is_none())
                .map(|(d, e)| {
                    let out = e.shape.tangent_at(e.shape.start()).direction_angle();
                    let mut turn = normalize_radians(back - out);
                    if turn.fuzzy_eq_zero_eps(T::fuzzy_epsilon()) {
                        turn = T::tau();
                    }
                    (d, turn)
                })
                .fold(None, |best: Option<(EdgeKey, T)>, (d, turn)| match best {
                    Some((_, best_turn)) if best_turn <= turn => best,
                    _ => Some((d, turn)),
                });

            if let Some((departure, turn)) = chosen {
                log::trace!(
                    "link at ({:?}, {:?}): {:?} -> {:?}, turn {:?}",
                    pt.x,
                    pt.y,
                    arrival,
                    departure,
                    turn
                );
                polygon.link(arrival, departure);
            }
        }
    }

    let half_set = normalize_records(polygon, &mut intrs.subject)
        + normalize_records(polygon, &mut intrs.clip);

    let open_edges = polygon
        .edges
        .values()
        .filter(|e| e.next.is_none() || e.prev.is_none())
        .count();

    let unresolved = half_set + open_edges;
    if unresolved > 0 {
        return Err(RegionError::CannotCompleteBooleanOperation { unresolved });
    }

    Ok(())
}

/// Make each record's edges follow the final links, returns how many records have only one of
/// them.
fn normalize_records<T>(polygon: &Polygon<T>, records: &mut OperandIntersections<T>) -> usize
where
    T: Real,
{
    let mut half_set = 0;
    for p in records.points.iter_mut() {
        if let Some(before) = p.edge_before {
            p.edge_after = polygon.edges.get(before).and_then(|e| e.next);
        } else if let Some(after) = p.edge_after {
            p.edge_before = polygon.edges.get(after).and_then(|e| e.prev);
        }

        if p.edge_before.is_some() != p.edge_after.is_some() {
            half_set += 1;
        }
    }

    half_set
}
