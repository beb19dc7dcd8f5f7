use planar_regions::{
    core::traits::FuzzyEq,
    region::{FaceKey, Polygon},
};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a face for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct FaceProperties {
    pub edge_count: usize,
    pub area: f64,
    pub path_length: f64,
    pub extents: AABB<f64>,
}

impl FaceProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        edge_count: usize,
        area: f64,
        path_length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            edge_count,
            area,
            path_length,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_face(polygon: &Polygon, face: FaceKey) -> Self {
        Self {
            edge_count: polygon.face_edges(face).count(),
            area: polygon.face_area(face),
            path_length: polygon.face_edges(face).map(|(_, e)| e.length()).sum(),
            extents: polygon.face_bounding_box(face).unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if self.edge_count != other.edge_count {
            return false;
        }
        if !self.area.fuzzy_eq_eps(other.area, eps) {
            return false;
        }
        if !self.path_length.fuzzy_eq_eps(other.path_length, eps) {
            return false;
        }
        if !aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps) {
            return false;
        }
        true
    }
}

pub fn create_property_set(polygon: &Polygon) -> Vec<FaceProperties> {
    polygon
        .faces()
        .map(|(face, _)| FaceProperties::from_face(polygon, face))
        .collect()
}

pub fn property_sets_match(result_set: &[FaceProperties], expected_set: &[FaceProperties]) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // simple N^2 comparisons, sets are small
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, FaceProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

/// Every face is a closed loop whose edges point back at it, and the handed out polygon has no
/// dangling links.
pub fn assert_well_formed(polygon: &Polygon) {
    let mut seen = 0;
    for (face_key, face) in polygon.faces() {
        let edges: Vec<_> = polygon.face_edges(face_key).collect();
        assert_eq!(edges.len(), face.size());
        for (key, edge) in edges.iter() {
            assert_eq!(edge.face(), Some(face_key));
            let next = polygon.edge(edge.next().unwrap()).unwrap();
            assert_eq!(next.prev(), Some(*key));
            assert!(edge.shape().end().fuzzy_eq_eps(next.shape().start(), 1e-5));
        }
        assert_eq!(polygon.edge(face.last()).unwrap().next(), Some(face.first()));
        seen += edges.len();
    }
    assert_eq!(seen, polygon.edge_count());
}
