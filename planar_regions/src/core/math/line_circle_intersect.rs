use super::base_math::{min_max, parametric_from_point};
use super::Vector2;
use crate::core::traits::Real;

/// Result of intersecting an (infinite) line with a circle, as parametric values of the line
/// through `p0` and `p1`.
#[derive(Debug, Copy, Clone)]
pub enum LineCircleIntr<T>
where
    T: Real,
{
    NoIntersect,
    TangentIntersect { t0: T },
    /// `t0 <= t1`.
    TwoIntersects { t0: T, t1: T },
}

/// Intersect the line through `p0`, `p1` with a circle.
///
/// Solved in cartesian form (`Ax + By + C = 0`) with the circle moved to the origin, then mapped
/// back to parametric values, which is more stable than solving the parametric quadratic.
pub fn line_circle_intr<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    radius: T,
    circle_center: Vector2<T>,
    epsilon: T,
) -> LineCircleIntr<T>
where
    T: Real,
{
    use LineCircleIntr::*;

    let eps = epsilon;
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let h = circle_center.x;
    let k = circle_center.y;

    if p0.fuzzy_eq_eps(p1, eps) {
        // degenerate line, only a point on the circle counts
        let xh = (p0.x + p1.x) / T::two() - h;
        let yk = (p0.y + p1.y) / T::two() - k;
        if (xh * xh + yk * yk).fuzzy_eq_eps(radius * radius, eps) {
            return TangentIntersect { t0: T::zero() };
        }
        return NoIntersect;
    }

    let p0_shifted = p0 - circle_center;
    let p1_shifted = p1 - circle_center;

    let (a, b, c) = if dx.fuzzy_eq_zero() {
        // vertical line: x = x_pos
        let x_pos = (p1_shifted.x + p0_shifted.x) / T::two();
        (T::one(), T::zero(), -x_pos)
    } else {
        // y = m * x + q rewritten as m * x - y + q = 0
        let m = dy / dx;
        (m, -T::one(), p1_shifted.y - m * p1_shifted.x)
    };

    let a2_b2 = a * a + b * b;
    let shortest_dist = c.abs() / a2_b2.sqrt();

    if shortest_dist > radius + eps {
        return NoIntersect;
    }

    // foot of the perpendicular from the center, shifted back to world coordinates
    let x0 = -a * c / a2_b2 + h;
    let y0 = -b * c / a2_b2 + k;

    if shortest_dist.fuzzy_eq_eps(radius, eps) {
        let t = parametric_from_point(p0, p1, Vector2::new(x0, y0), eps);
        return TangentIntersect { t0: t };
    }

    let d = radius * radius - c * c / a2_b2;
    // abs guards sqrt against a tiny negative from rounding
    let mult = (d / a2_b2).abs().sqrt();

    let sol1 = parametric_from_point(
        p0,
        p1,
        Vector2::new(x0 + b * mult, y0 - a * mult),
        eps,
    );
    let sol2 = parametric_from_point(
        p0,
        p1,
        Vector2::new(x0 - b * mult, y0 + a * mult),
        eps,
    );
    let (t0, t1) = min_max(sol1, sol2);
    TwoIntersects { t0, t1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn horizontal_line_through_circle() {
        let r = line_circle_intr(vec2(-2.0, 0.0), vec2(2.0, 0.0), 1.0, vec2(0.0, 0.0), 1e-5);
        match r {
            LineCircleIntr::TwoIntersects { t0, t1 } => {
                assert!(t0.fuzzy_eq(0.25));
                assert!(t1.fuzzy_eq(0.75));
            }
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[test]
    fn vertical_tangent_line() {
        let r = line_circle_intr(vec2(1.0, -1.0), vec2(1.0, 1.0), 1.0, vec2(0.0, 0.0), 1e-5);
        match r {
            LineCircleIntr::TangentIntersect { t0 } => assert!(t0.fuzzy_eq(0.5)),
            r => panic!("unexpected result: {r:?}"),
        }
    }
}
