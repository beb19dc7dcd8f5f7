use super::intersections::Intersections;
use crate::core::traits::Real;
use crate::error::Result;
use crate::region::{EdgeKey, Polygon};

/// Recreate the faces touched by the operation from the stitched edge loops.
///
/// Faces referenced by intersection records are dropped (their edges stay), then a face is built
/// for every loop that has no live face, starting from the edges leaving intersection points so
/// face starts are deterministic. Returns the number of faces built.
pub(crate) fn rebuild_faces<T>(polygon: &mut Polygon<T>, intrs: &Intersections<T>) -> Result<usize>
where
    T: Real,
{
    for p in intrs.subject.points.iter().chain(intrs.clip.points.iter()) {
        if let Some(face) = p.face {
            polygon.faces.remove(face);
        }
    }

    let mut built = 0;
    let starts = intrs
        .subject
        .points
        .iter()
        .chain(intrs.clip.points.iter())
        .filter_map(|p| p.edge_after);
    for start in starts {
        let has_face = polygon
            .edges
            .get(start)
            .map_or(true, |e| polygon.has_face(e.face));
        if !has_face {
            polygon.build_face_loop(start)?;
            built += 1;
        }
    }

    let orphans: Vec<EdgeKey> = polygon.edges.keys().collect();
    for key in orphans {
        let has_face = polygon
            .edges
            .get(key)
            .map_or(true, |e| polygon.has_face(e.face));
        if !has_face {
            polygon.build_face_loop(key)?;
            built += 1;
        }
    }

    Ok(built)
}
