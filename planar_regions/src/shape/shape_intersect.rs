use super::{arc_radius_and_center, Shape};
use crate::core::{
    math::{
        angle, angle_from_bulge, angle_is_within_sweep_eps, circle_circle_intr, delta_angle,
        dist_squared, line_circle_intr, line_line_intr, normalize_radians, point_from_parametric,
        point_within_arc_sweep, CircleCircleIntr, LineCircleIntr, LineLineIntr, Vector2,
    },
    traits::Real,
};

/// Result of intersecting two shapes with [shape_intr].
#[derive(Debug, Copy, Clone)]
pub enum ShapeIntr<T>
where
    T: Real,
{
    NoIntersect,
    /// One tangent intersect point found.
    TangentIntersect { point: Vector2<T> },
    /// One non-tangent intersect point found.
    OneIntersect { point: Vector2<T> },
    /// Two intersect points, ordered along the second shape.
    TwoIntersects {
        point1: Vector2<T>,
        point2: Vector2<T>,
    },
    /// Both shapes are segments sharing a run, end points ordered along the second shape.
    OverlappingLines {
        point1: Vector2<T>,
        point2: Vector2<T>,
    },
    /// Both shapes are arcs sharing a run, end points ordered along the second shape.
    OverlappingArcs {
        point1: Vector2<T>,
        point2: Vector2<T>,
    },
}

/// Finds the intersects between shapes `s1` and `s2`.
///
/// `pos_equal_eps` is the position tolerance used for all range and coincidence checks.
pub fn shape_intr<T>(s1: &Shape<T>, s2: &Shape<T>, pos_equal_eps: T) -> ShapeIntr<T>
where
    T: Real,
{
    use ShapeIntr::*;
    let eps = pos_equal_eps;

    match (*s1, *s2) {
        (Shape::Segment { start: v1, end: v2 }, Shape::Segment { start: u1, end: u2 }) => {
            match line_line_intr(v1, v2, u1, u2, eps) {
                LineLineIntr::NoIntersect => NoIntersect,
                LineLineIntr::TrueIntersect { seg1_t, .. } => OneIntersect {
                    point: point_from_parametric(v1, v2, seg1_t),
                },
                LineLineIntr::Overlapping { seg2_t0, seg2_t1 } => {
                    let point1 = point_from_parametric(u1, u2, seg2_t0);
                    let point2 = point_from_parametric(u1, u2, seg2_t1);
                    if point1.fuzzy_eq_eps(point2, eps) {
                        // collinear segments touching end to end
                        OneIntersect { point: point1 }
                    } else {
                        OverlappingLines { point1, point2 }
                    }
                }
            }
        }
        (Shape::Segment { start, end }, Shape::Arc { .. }) => {
            line_arc_intr(start, end, s2, false, eps)
        }
        (Shape::Arc { .. }, Shape::Segment { start, end }) => {
            line_arc_intr(start, end, s1, true, eps)
        }
        (
            Shape::Arc {
                start: v1,
                end: v2,
                bulge: v_bulge,
            },
            Shape::Arc {
                start: u1,
                end: u2,
                bulge: u_bulge,
            },
        ) => arc_arc_intr(v1, v2, v_bulge, u1, u2, u_bulge, eps),
    }
}

fn line_arc_intr<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    arc: &Shape<T>,
    line_is_second: bool,
    eps: T,
) -> ShapeIntr<T>
where
    T: Real,
{
    use ShapeIntr::*;
    let (a1, a2, bulge) = match *arc {
        Shape::Arc { start, end, bulge } => (start, end, bulge),
        Shape::Segment { .. } => unreachable!("line_arc_intr called without an arc"),
    };

    let (arc_radius, arc_center) = arc_radius_and_center(a1, a2, bulge);
    let line_length = (p1 - p0).length();

    let point_in_sweep = |t: T| -> Option<Vector2<T>> {
        if !(t * line_length).fuzzy_in_range_eps(T::zero(), line_length, eps) {
            return None;
        }

        let p = point_from_parametric(p0, p1, t);
        let within_sweep = point_within_arc_sweep(arc_center, a1, a2, bulge < T::zero(), p)
            || p.fuzzy_eq_eps(a1, eps)
            || p.fuzzy_eq_eps(a2, eps);
        if within_sweep {
            Some(p)
        } else {
            None
        }
    };

    match line_circle_intr(p0, p1, arc_radius, arc_center, eps) {
        LineCircleIntr::NoIntersect => NoIntersect,
        LineCircleIntr::TangentIntersect { t0 } => {
            if let Some(point) = point_in_sweep(t0) {
                TangentIntersect { point }
            } else {
                NoIntersect
            }
        }
        LineCircleIntr::TwoIntersects { t0, t1 } => {
            match (point_in_sweep(t0), point_in_sweep(t1)) {
                (None, None) => NoIntersect,
                (None, Some(point)) | (Some(point), None) => OneIntersect { point },
                (Some(point1), Some(point2)) => {
                    // ordered along the second shape
                    if line_is_second || dist_squared(point1, a1) < dist_squared(point2, a1) {
                        TwoIntersects { point1, point2 }
                    } else {
                        TwoIntersects {
                            point1: point2,
                            point2: point1,
                        }
                    }
                }
            }
        }
    }
}

fn arc_arc_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    v_bulge: T,
    u1: Vector2<T>,
    u2: Vector2<T>,
    u_bulge: T,
    eps: T,
) -> ShapeIntr<T>
where
    T: Real,
{
    use ShapeIntr::*;
    let (arc1_radius, arc1_center) = arc_radius_and_center(v1, v2, v_bulge);
    let (arc2_radius, arc2_center) = arc_radius_and_center(u1, u2, u_bulge);

    let both_arcs_sweep_point = |pt: Vector2<T>| -> bool {
        let in_arc1 = point_within_arc_sweep(arc1_center, v1, v2, v_bulge < T::zero(), pt)
            || pt.fuzzy_eq_eps(v1, eps)
            || pt.fuzzy_eq_eps(v2, eps);
        let in_arc2 = point_within_arc_sweep(arc2_center, u1, u2, u_bulge < T::zero(), pt)
            || pt.fuzzy_eq_eps(u1, eps)
            || pt.fuzzy_eq_eps(u2, eps);
        in_arc1 && in_arc2
    };

    match circle_circle_intr(arc1_radius, arc1_center, arc2_radius, arc2_center, eps) {
        CircleCircleIntr::NoIntersect => NoIntersect,
        CircleCircleIntr::TangentIntersect { point } => {
            if both_arcs_sweep_point(point) {
                TangentIntersect { point }
            } else {
                NoIntersect
            }
        }
        CircleCircleIntr::TwoIntersects { point1, point2 } => {
            match (both_arcs_sweep_point(point1), both_arcs_sweep_point(point2)) {
                (true, true) => TwoIntersects { point1, point2 },
                (true, false) => OneIntersect { point: point1 },
                (false, true) => OneIntersect { point: point2 },
                (false, false) => NoIntersect,
            }
        }
        CircleCircleIntr::Overlapping => {
            // angular tolerance matching the position tolerance on this circle
            let ang_eps = eps / arc1_radius;
            let start_and_sweep = |sp: Vector2<T>, bulge: T| -> (T, T) {
                (
                    normalize_radians(angle(arc1_center, sp)),
                    angle_from_bulge(bulge),
                )
            };

            // make both sweeps go the same direction to simplify the checks
            let same_direction_arcs = (v_bulge < T::zero()) == (u_bulge < T::zero());
            let (arc1_start, arc1_sweep) = start_and_sweep(v1, v_bulge);
            let (arc2_start, arc2_sweep) = if same_direction_arcs {
                start_and_sweep(u1, u_bulge)
            } else {
                start_and_sweep(u2, -u_bulge)
            };

            let arc1_end = arc1_start + arc1_sweep;
            let arc2_end = arc2_start + arc2_sweep;

            match (
                delta_angle(arc1_start, arc2_end).fuzzy_eq_zero_eps(ang_eps),
                delta_angle(arc2_start, arc1_end).fuzzy_eq_zero_eps(ang_eps),
            ) {
                (true, true) => TwoIntersects {
                    point1: u1,
                    point2: u2,
                },
                // only the start of arc1 touches
                (true, false) => OneIntersect { point: v1 },
                // only the start of arc2 (in arc1 direction) touches
                (false, true) => OneIntersect {
                    point: if same_direction_arcs { u1 } else { u2 },
                },
                (false, false) => {
                    let within_arc1 = |a: T| angle_is_within_sweep_eps(a, arc1_start, arc1_sweep, ang_eps);
                    let arc2_starts_in_arc1 = within_arc1(arc2_start);
                    let arc2_ends_in_arc1 = within_arc1(arc2_end);
                    if arc2_starts_in_arc1 && arc2_ends_in_arc1 {
                        // arc2 fully covered by arc1
                        OverlappingArcs {
                            point1: u1,
                            point2: u2,
                        }
                    } else if arc2_starts_in_arc1 {
                        if same_direction_arcs {
                            OverlappingArcs {
                                point1: u1,
                                point2: v2,
                            }
                        } else {
                            OverlappingArcs {
                                point1: v2,
                                point2: u2,
                            }
                        }
                    } else if arc2_ends_in_arc1 {
                        if same_direction_arcs {
                            OverlappingArcs {
                                point1: v1,
                                point2: u2,
                            }
                        } else {
                            OverlappingArcs {
                                point1: u1,
                                point2: v1,
                            }
                        }
                    } else if angle_is_within_sweep_eps(arc1_start, arc2_start, arc2_sweep, ang_eps)
                    {
                        // arc1 fully covered by arc2
                        if same_direction_arcs {
                            OverlappingArcs {
                                point1: v1,
                                point2: v2,
                            }
                        } else {
                            OverlappingArcs {
                                point1: v2,
                                point2: v1,
                            }
                        }
                    } else {
                        NoIntersect
                    }
                }
            }
        }
    }
}

impl<T> Shape<T>
where
    T: Real,
{
    /// Intersection points of this shape with `other`.
    ///
    /// Overlapping runs report their two end points. End points of either shape lying on the
    /// other shape are always reported, points within `pos_equal_eps` of an end point are snapped
    /// to it and the result holds no two points within `pos_equal_eps` of each other.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::core::math::*;
    /// # use planar_regions::shape::Shape;
    /// let s1 = Shape::segment(vec2(0.0, 0.0), vec2(2.0, 2.0));
    /// let s2 = Shape::segment(vec2(0.0, 2.0), vec2(2.0, 0.0));
    /// let points = s1.intersect(&s2, 1e-5);
    /// assert_eq!(points.len(), 1);
    /// assert!(points[0].fuzzy_eq(vec2(1.0, 1.0)));
    ///
    /// // collinear overlap reports the overlap end points
    /// let s3 = Shape::segment(vec2(1.0, 1.0), vec2(3.0, 3.0));
    /// assert_eq!(s1.intersect(&s3, 1e-5).len(), 2);
    /// ```
    pub fn intersect(&self, other: &Shape<T>, pos_equal_eps: T) -> Vec<Vector2<T>> {
        use ShapeIntr::*;
        let eps = pos_equal_eps;
        let mut points = Vec::with_capacity(4);
        match shape_intr(self, other, eps) {
            NoIntersect => {}
            TangentIntersect { point } | OneIntersect { point } => points.push(point),
            TwoIntersects { point1, point2 }
            | OverlappingLines { point1, point2 }
            | OverlappingArcs { point1, point2 } => {
                points.push(point1);
                points.push(point2);
            }
        }

        for pt in [self.start(), self.end()] {
            if other.contains_point(pt, eps) {
                points.push(pt);
            }
        }

        for pt in [other.start(), other.end()] {
            if self.contains_point(pt, eps) {
                points.push(pt);
            }
        }

        let ends = [self.start(), self.end(), other.start(), other.end()];
        let mut result: Vec<Vector2<T>> = Vec::with_capacity(points.len());
        for p in points {
            let p = ends
                .iter()
                .copied()
                .find(|e| e.fuzzy_eq_eps(p, eps))
                .unwrap_or(p);
            if !result.iter().any(|r| r.fuzzy_eq_eps(p, eps)) {
                result.push(p);
            }
        }

        result
    }
}
