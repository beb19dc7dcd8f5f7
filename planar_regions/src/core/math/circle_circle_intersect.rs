use super::Vector2;
use crate::core::traits::Real;

/// Result of intersecting two circles.
#[derive(Debug, Copy, Clone)]
pub enum CircleCircleIntr<T>
where
    T: Real,
{
    NoIntersect,
    TangentIntersect { point: Vector2<T> },
    TwoIntersects { point1: Vector2<T>, point2: Vector2<T> },
    /// Same center and radius.
    Overlapping,
}

/// Intersect two circles (radical line construction).
pub fn circle_circle_intr<T>(
    radius1: T,
    center1: Vector2<T>,
    radius2: T,
    center2: Vector2<T>,
    epsilon: T,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    use CircleCircleIntr::*;

    let cv = center2 - center1;
    let d2 = cv.dot(cv);
    let d = d2.sqrt();

    if d.fuzzy_eq_zero_eps(epsilon) {
        if radius1.fuzzy_eq_eps(radius2, epsilon) {
            return Overlapping;
        }
        return NoIntersect;
    }

    if !d.fuzzy_lt_eps(radius1 + radius2, epsilon)
        || !d.fuzzy_gt_eps((radius1 - radius2).abs(), epsilon)
    {
        // too far apart or one inside the other
        return NoIntersect;
    }

    let rad1_sq = radius1 * radius1;
    let a = (rad1_sq - radius2 * radius2 + d2) / (T::two() * d);
    let chord_mid = center1 + cv.scale(a / d);
    let diff = rad1_sq - a * a;

    if diff < T::zero() {
        return TangentIntersect { point: chord_mid };
    }

    let h_over_d = diff.sqrt() / d;
    let x_term = h_over_d * cv.y;
    let y_term = h_over_d * cv.x;

    let point1 = Vector2::new(chord_mid.x + x_term, chord_mid.y - y_term);
    let point2 = Vector2::new(chord_mid.x - x_term, chord_mid.y + y_term);

    if point1.fuzzy_eq_eps(point2, epsilon) {
        return TangentIntersect { point: point1 };
    }

    TwoIntersects { point1, point2 }
}
