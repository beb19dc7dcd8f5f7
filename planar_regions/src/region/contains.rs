//! Point classification against a polygon.
use super::{Inclusion, Polygon};
use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

/// Classify `point` against `polygon`.
///
/// [Inclusion::Boundary] if the point is within `pos_equal_eps` of an edge, otherwise faces are
/// combined even-odd: the point is inside if an odd number of faces wind around it.
pub fn classify_point<T>(polygon: &Polygon<T>, point: Vector2<T>, pos_equal_eps: T) -> Inclusion
where
    T: Real,
{
    let eps = pos_equal_eps;
    let query = AABB::new(point.x - eps, point.y - eps, point.x + eps, point.y + eps);
    let on_boundary = polygon
        .index
        .search(&query)
        .into_iter()
        .filter_map(|k| polygon.edges.get(k))
        .any(|e| e.shape.contains_point(point, eps));

    if on_boundary {
        return Inclusion::Boundary;
    }

    let covering = polygon
        .faces
        .keys()
        .filter(|&f| polygon.face_winding_number(f, point) != 0)
        .count();

    if covering % 2 == 1 {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}
