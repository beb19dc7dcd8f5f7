#![allow(dead_code)]
mod loop_modifiers;
mod region_test_properties;

pub use loop_modifiers::*;
pub use region_test_properties::*;

use planar_regions::region::Polygon;

/// Route `log` output of the crate through the test harness (`RUST_LOG=debug cargo test`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Counter clockwise rectangle vertex loop.
pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<(f64, f64, f64)> {
    vec![
        (min_x, min_y, 0.0),
        (max_x, min_y, 0.0),
        (max_x, max_y, 0.0),
        (min_x, max_y, 0.0),
    ]
}

/// Counter clockwise circle vertex loop made of two half arcs, starting at the leftmost point.
pub fn circle(center_x: f64, center_y: f64, radius: f64) -> Vec<(f64, f64, f64)> {
    vec![
        (center_x - radius, center_y, 1.0),
        (center_x + radius, center_y, 1.0),
    ]
}

/// Same loop travelled the other way (island to hole and back).
pub fn reversed_loop(vertexes: &[(f64, f64, f64)]) -> Vec<(f64, f64, f64)> {
    let n = vertexes.len();
    (0..n)
        .map(|i| {
            let (x, y, _) = vertexes[(n - i) % n];
            // the bulge of the shape ending at this vertex, negated
            let (_, _, b) = vertexes[(2 * n - i - 1) % n];
            (x, y, -b)
        })
        .collect()
}

/// Polygon with one face per vertex loop.
pub fn polygon_from_loops(loops: &[Vec<(f64, f64, f64)>]) -> Polygon {
    let mut polygon = Polygon::new();
    for vertexes in loops {
        polygon.add_vertex_loop(vertexes.iter().copied()).unwrap();
    }
    polygon
}
