//! Boundary primitives: line segments and bulge arcs.
//!
//! An arc is stored by its end points and a bulge value, `bulge = tan(sweep / 4)`, positive for
//! counter clockwise arcs. Arcs never sweep more than a half circle (`|bulge| <= 1`), full
//! circles are made of two half arcs (see [Shape::circle]).
mod shape_intersect;

pub use shape_intersect::{shape_intr, ShapeIntr};

use crate::core::{
    math::{
        angle, angle_from_bulge, angle_is_within_sweep, bulge_from_angle, delta_angle_signed,
        dist_squared, is_left, is_left_or_equal, line_seg_closest_point, midpoint, min_max,
        point_on_circle, point_within_arc_sweep, Vector2,
    },
    traits::Real,
};
use crate::error::{RegionError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_aabb2d_index::AABB;

/// A single piece of a face boundary.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<T = f64> {
    /// Straight line segment.
    Segment { start: Vector2<T>, end: Vector2<T> },
    /// Circular arc, `bulge` is never (fuzzy) zero and `|bulge| <= 1`.
    Arc {
        start: Vector2<T>,
        end: Vector2<T>,
        bulge: T,
    },
}

#[inline]
fn is_finite_point<T>(p: Vector2<T>) -> bool
where
    T: Real,
{
    p.x.is_finite_value() && p.y.is_finite_value()
}

/// Radius and center of the arc going from `start` to `end` with `bulge`.
///
/// `bulge` must not be zero and `start` must not be on top of `end`.
pub(crate) fn arc_radius_and_center<T>(
    start: Vector2<T>,
    end: Vector2<T>,
    bulge: T,
) -> (T, Vector2<T>)
where
    T: Real,
{
    let abs_bulge = bulge.abs();
    let chord_v = end - start;
    let chord_len = chord_v.length();
    let radius = chord_len * (abs_bulge * abs_bulge + T::one()) / (T::four() * abs_bulge);

    let s = abs_bulge * chord_len / T::two();
    let m = radius - s;
    let mut offs_x = -m * chord_v.y / chord_len;
    let mut offs_y = m * chord_v.x / chord_len;
    if bulge < T::zero() {
        offs_x = -offs_x;
        offs_y = -offs_y;
    }

    let center = Vector2::new(
        start.x + chord_v.x / T::two() + offs_x,
        start.y + chord_v.y / T::two() + offs_y,
    );

    (radius, center)
}

impl<T> Shape<T>
where
    T: Real,
{
    #[inline]
    pub fn segment(start: Vector2<T>, end: Vector2<T>) -> Self {
        Shape::Segment { start, end }
    }

    /// Create an arc from `start` to `end` with the given `bulge`.
    ///
    /// A (fuzzy) zero bulge gives a [Shape::Segment]. Fails with
    /// [RegionError::IllegalParameters] for non-finite input or `|bulge| > 1` and with
    /// [RegionError::ZeroDivision] if the end points coincide.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::core::math::*;
    /// # use planar_regions::core::traits::*;
    /// # use planar_regions::shape::Shape;
    /// # use planar_regions::error::RegionError;
    /// // half circle going counter clockwise from (0, 0) to (2, 0), radius 1
    /// let arc = Shape::arc(vec2(0.0, 0.0), vec2(2.0, 0.0), 1.0).unwrap();
    /// assert!(arc.length().fuzzy_eq(std::f64::consts::PI));
    /// assert!(arc.midpoint().fuzzy_eq(vec2(1.0, -1.0)));
    ///
    /// assert!(matches!(
    ///     Shape::arc(vec2(0.0, 0.0), vec2(2.0, 0.0), 1.5),
    ///     Err(RegionError::IllegalParameters(_))
    /// ));
    /// assert_eq!(
    ///     Shape::arc(vec2(1.0, 1.0), vec2(1.0, 1.0), 0.5),
    ///     Err(RegionError::ZeroDivision)
    /// );
    /// ```
    pub fn arc(start: Vector2<T>, end: Vector2<T>, bulge: T) -> Result<Self> {
        if !is_finite_point(start) || !is_finite_point(end) || !bulge.is_finite_value() {
            return Err(RegionError::IllegalParameters(
                "arc coordinates and bulge must be finite".to_string(),
            ));
        }

        if bulge.fuzzy_eq_zero() {
            return Ok(Shape::Segment { start, end });
        }

        if bulge.abs() > T::one() + T::fuzzy_epsilon() {
            return Err(RegionError::IllegalParameters(format!(
                "arc bulge {bulge:?} sweeps more than a half circle"
            )));
        }

        if start.fuzzy_eq(end) {
            return Err(RegionError::ZeroDivision);
        }

        let bulge = if bulge > T::one() {
            T::one()
        } else if bulge < -T::one() {
            -T::one()
        } else {
            bulge
        };

        Ok(Shape::Arc { start, end, bulge })
    }

    /// Full circle as two half arcs, starting and ending at `center + (radius, 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::core::math::*;
    /// # use planar_regions::core::traits::*;
    /// # use planar_regions::shape::Shape;
    /// let [a, b] = Shape::circle(vec2(0.0, 0.0), 2.0, true).unwrap();
    /// let area = a.area_contribution() + b.area_contribution();
    /// assert!(area.fuzzy_eq(std::f64::consts::PI * 4.0));
    /// assert!(a.end().fuzzy_eq(b.start()));
    /// ```
    pub fn circle(center: Vector2<T>, radius: T, ccw: bool) -> Result<[Self; 2]> {
        if !is_finite_point(center) || !radius.is_finite_value() {
            return Err(RegionError::IllegalParameters(
                "circle center and radius must be finite".to_string(),
            ));
        }

        if radius <= T::zero() {
            return Err(RegionError::IllegalParameters(format!(
                "circle radius must be positive, got {radius:?}"
            )));
        }

        let right = Vector2::new(center.x + radius, center.y);
        let left = Vector2::new(center.x - radius, center.y);
        let bulge = if ccw { T::one() } else { -T::one() };
        Ok([
            Shape::Arc {
                start: right,
                end: left,
                bulge,
            },
            Shape::Arc {
                start: left,
                end: right,
                bulge,
            },
        ])
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        match *self {
            Shape::Segment { start, .. } | Shape::Arc { start, .. } => start,
        }
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        match *self {
            Shape::Segment { end, .. } | Shape::Arc { end, .. } => end,
        }
    }

    /// Bulge of the shape, zero for segments.
    #[inline]
    pub fn bulge(&self) -> T {
        match *self {
            Shape::Segment { .. } => T::zero(),
            Shape::Arc { bulge, .. } => bulge,
        }
    }

    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self, Shape::Arc { .. })
    }

    /// Radius and center if the shape is an arc.
    pub fn arc_radius_and_center(&self) -> Option<(T, Vector2<T>)> {
        match *self {
            Shape::Segment { .. } => None,
            Shape::Arc { start, end, bulge } => Some(arc_radius_and_center(start, end, bulge)),
        }
    }

    /// Path length of the shape.
    pub fn length(&self) -> T {
        match *self {
            Shape::Segment { start, end } => (end - start).length(),
            Shape::Arc { start, end, bulge } => {
                let (radius, _) = arc_radius_and_center(start, end, bulge);
                radius * angle_from_bulge(bulge).abs()
            }
        }
    }

    /// Path length from the start of the shape to `point`, `point` is assumed to lie on the shape.
    pub fn length_to(&self, point: Vector2<T>) -> T {
        match *self {
            Shape::Segment { start, .. } => (point - start).length(),
            Shape::Arc { start, end, bulge } => {
                let (radius, center) = arc_radius_and_center(start, end, bulge);
                if point.fuzzy_eq(center) {
                    return T::zero();
                }
                let start_angle = angle(center, start);
                let point_angle = angle(center, point);
                radius * delta_angle_signed(start_angle, point_angle, bulge < T::zero()).abs()
            }
        }
    }

    /// Point halfway along the shape.
    pub fn midpoint(&self) -> Vector2<T> {
        match *self {
            Shape::Segment { start, end } => midpoint(start, end),
            Shape::Arc { start, end, bulge } => {
                let (radius, center) = arc_radius_and_center(start, end, bulge);
                let start_angle = angle(center, start);
                let mid_angle = start_angle + angle_from_bulge(bulge) / T::two();
                point_on_circle(radius, center, mid_angle)
            }
        }
    }

    /// Exact axis aligned bounding box (arcs include the circle extremes they sweep over).
    pub fn bounding_box(&self) -> AABB<T> {
        match *self {
            Shape::Segment { start, end } => {
                let (min_x, max_x) = min_max(start.x, end.x);
                let (min_y, max_y) = min_max(start.y, end.y);
                AABB::new(min_x, min_y, max_x, max_y)
            }
            Shape::Arc { start, end, bulge } => {
                let (radius, center) = arc_radius_and_center(start, end, bulge);
                let start_angle = angle(center, start);
                let sweep_angle = angle_from_bulge(bulge);

                let crosses_angle = |a| angle_is_within_sweep(a, start_angle, sweep_angle);

                let min_x = if crosses_angle(T::pi()) {
                    center.x - radius
                } else {
                    num_traits::real::Real::min(start.x, end.x)
                };

                let min_y = if crosses_angle(T::from(1.5).unwrap() * T::pi()) {
                    center.y - radius
                } else {
                    num_traits::real::Real::min(start.y, end.y)
                };

                let max_x = if crosses_angle(T::zero()) {
                    center.x + radius
                } else {
                    num_traits::real::Real::max(start.x, end.x)
                };

                let max_y = if crosses_angle(T::from(0.5).unwrap() * T::pi()) {
                    center.y + radius
                } else {
                    num_traits::real::Real::max(start.y, end.y)
                };

                AABB::new(min_x, min_y, max_x, max_y)
            }
        }
    }

    /// Split the shape at `point` (assumed to lie on the shape).
    ///
    /// Returns the piece before and the piece after the point. A point within `pos_equal_eps` of
    /// an end point gives a single piece (the whole shape) on the corresponding side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::core::math::*;
    /// # use planar_regions::core::traits::*;
    /// # use planar_regions::shape::Shape;
    /// let arc = Shape::arc(vec2(0.0, 0.0), vec2(2.0, 0.0), 1.0).unwrap();
    /// let [first, second] = arc.split(vec2(1.0, -1.0), 1e-5);
    /// let (first, second) = (first.unwrap(), second.unwrap());
    /// let quarter_circle_bulge = (std::f64::consts::PI / 8.0).tan();
    /// assert!(first.bulge().fuzzy_eq(quarter_circle_bulge));
    /// assert!(second.bulge().fuzzy_eq(quarter_circle_bulge));
    /// assert!(first.end().fuzzy_eq(second.start()));
    ///
    /// let [before, after] = arc.split(vec2(2.0, 0.0), 1e-5);
    /// assert_eq!(before, Some(arc));
    /// assert!(after.is_none());
    /// ```
    pub fn split(&self, point: Vector2<T>, pos_equal_eps: T) -> [Option<Self>; 2] {
        if point.fuzzy_eq_eps(self.start(), pos_equal_eps) {
            return [None, Some(*self)];
        }

        if point.fuzzy_eq_eps(self.end(), pos_equal_eps) {
            return [Some(*self), None];
        }

        match *self {
            Shape::Segment { start, end } => [
                Some(Shape::Segment { start, end: point }),
                Some(Shape::Segment { start: point, end }),
            ],
            Shape::Arc { start, end, bulge } => {
                let (_, center) = arc_radius_and_center(start, end, bulge);
                let is_cw = bulge < T::zero();
                let point_angle = angle(center, point);

                let start_angle = angle(center, start);
                let theta1 = delta_angle_signed(start_angle, point_angle, is_cw);
                let bulge1 = bulge_from_angle(theta1);

                let end_angle = angle(center, end);
                let theta2 = delta_angle_signed(point_angle, end_angle, is_cw);
                let bulge2 = bulge_from_angle(theta2);

                let piece = |s: Vector2<T>, e: Vector2<T>, b: T| {
                    if b.fuzzy_eq_zero() {
                        Shape::Segment { start: s, end: e }
                    } else {
                        Shape::Arc {
                            start: s,
                            end: e,
                            bulge: b,
                        }
                    }
                };

                [
                    Some(piece(start, point, bulge1)),
                    Some(piece(point, end, bulge2)),
                ]
            }
        }
    }

    /// Direction the shape travels in at `point` (not normalized).
    pub fn tangent_at(&self, point: Vector2<T>) -> Vector2<T> {
        match *self {
            Shape::Segment { start, end } => end - start,
            Shape::Arc { start, end, bulge } => {
                let (_, center) = arc_radius_and_center(start, end, bulge);
                let radial = point - center;
                if bulge > T::zero() {
                    radial.perp()
                } else {
                    -radial.perp()
                }
            }
        }
    }

    /// Closest point on the shape to `point`. If there are several one is chosen.
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        match *self {
            Shape::Segment { start, end } => line_seg_closest_point(start, end, point),
            Shape::Arc { start, end, bulge } => {
                let (radius, center) = arc_radius_and_center(start, end, bulge);
                if point.fuzzy_eq(center) {
                    return start;
                }

                if point_within_arc_sweep(center, start, end, bulge < T::zero(), point) {
                    return (point - center).normalize().scale(radius) + center;
                }

                if dist_squared(start, point) < dist_squared(end, point) {
                    start
                } else {
                    end
                }
            }
        }
    }

    #[inline]
    pub fn distance_to(&self, point: Vector2<T>) -> T {
        (self.closest_point(point) - point).length()
    }

    /// `true` if `point` is within `pos_equal_eps` of the shape.
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>, pos_equal_eps: T) -> bool {
        self.distance_to(point) < pos_equal_eps
    }

    /// Same geometry travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        match *self {
            Shape::Segment { start, end } => Shape::Segment {
                start: end,
                end: start,
            },
            Shape::Arc { start, end, bulge } => Shape::Arc {
                start: end,
                end: start,
                bulge: -bulge,
            },
        }
    }

    /// Contribution of the shape to the winding number of a closed loop around `point`.
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        match *self {
            Shape::Segment { start: v1, end: v2 } => {
                if v1.y <= point.y {
                    if v2.y > point.y && is_left(v1, v2, point) {
                        // left and upward crossing
                        return 1;
                    }
                } else if v2.y <= point.y && !is_left(v1, v2, point) {
                    // right and downward crossing
                    return -1;
                }

                0
            }
            Shape::Arc {
                start: v1,
                end: v2,
                bulge,
            } => arc_winding(v1, v2, bulge, point),
        }
    }

    /// Signed area between the shape and the origin (shoelace term plus the circular segment of
    /// arcs). Summed over a closed loop gives the loop area, positive if counter clockwise.
    pub fn area_contribution(&self) -> T {
        let start = self.start();
        let end = self.end();
        let mut double_area = start.x * end.y - start.y * end.x;
        if let Shape::Arc { bulge, .. } = *self {
            let b = bulge.abs();
            let sweep_angle = angle_from_bulge(b);
            let triangle_base = (end - start).length();
            let radius = triangle_base * ((b * b + T::one()) / (T::four() * b));
            let sagitta = b * triangle_base / T::two();
            let triangle_height = radius - sagitta;
            let double_sector_area = sweep_angle * radius * radius;
            let double_triangle_area = triangle_base * triangle_height;
            let mut double_arc_area = double_sector_area - double_triangle_area;
            if bulge < T::zero() {
                double_arc_area = -double_arc_area;
            }

            double_area = double_area + double_arc_area;
        }

        double_area / T::two()
    }
}

fn arc_winding<T>(v1: Vector2<T>, v2: Vector2<T>, bulge: T, point: Vector2<T>) -> i32
where
    T: Real,
{
    let is_ccw = bulge > T::zero();
    let point_is_left = if is_ccw {
        is_left(v1, v2, point)
    } else {
        is_left_or_equal(v1, v2, point)
    };

    let dist_to_arc_center_less_than_radius = || {
        let (arc_radius, arc_center) = arc_radius_and_center(v1, v2, bulge);
        dist_squared(arc_center, point) < arc_radius * arc_radius
    };

    let mut result = 0;

    if v1.y <= point.y {
        if v2.y > point.y {
            // upward crossing of arc chord
            if is_ccw {
                if point_is_left || dist_to_arc_center_less_than_radius() {
                    result += 1;
                }
            } else if point_is_left && !dist_to_arc_center_less_than_radius() {
                result += 1;
            }
        } else if is_ccw
            && !point_is_left
            && v2.x < point.x
            && point.x < v1.x
            && dist_to_arc_center_less_than_radius()
        {
            // chord below, point inside the arc sector
            result += 1;
        } else if !is_ccw
            && point_is_left
            && v1.x < point.x
            && point.x < v2.x
            && dist_to_arc_center_less_than_radius()
        {
            result -= 1;
        }
    } else if v2.y <= point.y {
        // downward crossing of arc chord
        if is_ccw {
            if !point_is_left && !dist_to_arc_center_less_than_radius() {
                result -= 1;
            }
        } else if !point_is_left || dist_to_arc_center_less_than_radius() {
            result -= 1;
        }
    } else if is_ccw
        && !point_is_left
        && v1.x < point.x
        && point.x < v2.x
        && dist_to_arc_center_less_than_radius()
    {
        // chord above, point inside the arc sector
        result += 1;
    } else if !is_ccw
        && point_is_left
        && v2.x < point.x
        && point.x < v1.x
        && dist_to_arc_center_less_than_radius()
    {
        result -= 1;
    }

    result
}
