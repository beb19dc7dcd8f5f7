mod test_utils;

use planar_regions::{
    core::math::vec2,
    region::{boolean_fold, BooleanOp, BooleanOptions, Orientation, Polygon},
};
use std::f64::consts::PI;
use test_utils::{
    assert_well_formed, circle, create_property_set, for_each_start_position, init_logging,
    polygon_from_loops, property_sets_match, rectangle, reversed_loop, FaceProperties,
};

type Loop = Vec<(f64, f64, f64)>;

/// Run every case for every combination of start positions of the first loop of both operands.
fn run_boolean_tests(loops1: &[Loop], loops2: &[Loop], cases: &[(BooleanOp, Vec<FaceProperties>)]) {
    init_logging();
    for_each_start_position(&loops1[0], |first1, n1| {
        let mut l1 = loops1.to_vec();
        l1[0] = first1;
        let p1 = polygon_from_loops(&l1);
        for_each_start_position(&loops2[0], |first2, n2| {
            let mut l2 = loops2.to_vec();
            l2[0] = first2;
            let p2 = polygon_from_loops(&l2);
            for (op, expected) in cases {
                let result = p1.boolean(&p2, *op).unwrap_or_else(|e| {
                    panic!("boolean op: {:?}, start positions: ({}, {}): {}", op, n1, n2, e)
                });
                assert_well_formed(&result);
                let result_set = create_property_set(&result);
                assert!(
                    property_sets_match(&result_set, expected),
                    "boolean op: {:?}, start positions: ({}, {})",
                    op,
                    n1,
                    n2
                );
            }
        });
    });
}

fn run_same_boolean_tests(input: Loop, properties: FaceProperties) {
    run_boolean_tests(
        &[input.clone()],
        &[input],
        &[
            (BooleanOp::Union, vec![properties]),
            (BooleanOp::Intersect, vec![properties]),
            (BooleanOp::Subtract, vec![]),
        ],
    );
}

mod test_same {
    use super::*;

    #[test]
    fn rectangle_with_itself() {
        run_same_boolean_tests(
            rectangle(0.0, 0.0, 20.0, 10.0),
            FaceProperties::new(4, 200.0, 60.0, 0.0, 0.0, 20.0, 10.0),
        );
    }

    #[test]
    fn circle_with_itself() {
        run_same_boolean_tests(
            circle(0.0, 0.0, 1.0),
            FaceProperties::new(2, PI, 2.0 * PI, -1.0, -1.0, 1.0, 1.0),
        );
    }

    #[test]
    fn stadium_with_itself() {
        run_same_boolean_tests(
            vec![(0.0, 0.0, 0.0), (4.0, 0.0, 1.0), (4.0, 2.0, 0.0), (0.0, 2.0, 1.0)],
            FaceProperties::new(4, 8.0 + PI, 8.0 + 2.0 * PI, -1.0, 0.0, 5.0, 2.0),
        );
    }
}

mod test_simple {
    use super::*;

    #[test]
    fn crossing_rectangles() {
        run_boolean_tests(
            &[rectangle(0.0, 0.0, 2.0, 2.0)],
            &[rectangle(1.0, 1.0, 3.0, 3.0)],
            &[
                (
                    BooleanOp::Union,
                    vec![FaceProperties::new(8, 7.0, 12.0, 0.0, 0.0, 3.0, 3.0)],
                ),
                (
                    BooleanOp::Intersect,
                    vec![FaceProperties::new(4, 1.0, 4.0, 1.0, 1.0, 2.0, 2.0)],
                ),
                (
                    BooleanOp::Subtract,
                    vec![FaceProperties::new(6, 3.0, 8.0, 0.0, 0.0, 2.0, 2.0)],
                ),
            ],
        );
    }

    #[test]
    fn disjoint_rectangles() {
        let a = FaceProperties::new(4, 1.0, 4.0, 0.0, 0.0, 1.0, 1.0);
        let b = FaceProperties::new(4, 1.0, 4.0, 5.0, 5.0, 6.0, 6.0);
        run_boolean_tests(
            &[rectangle(0.0, 0.0, 1.0, 1.0)],
            &[rectangle(5.0, 5.0, 6.0, 6.0)],
            &[
                (BooleanOp::Union, vec![a, b]),
                (BooleanOp::Intersect, vec![]),
                (BooleanOp::Subtract, vec![a]),
            ],
        );
    }

    #[test]
    fn contained_rectangle() {
        let outer = FaceProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0);
        let inner = FaceProperties::new(4, 4.0, 8.0, 2.0, 2.0, 4.0, 4.0);
        let hole = FaceProperties::new(4, -4.0, 8.0, 2.0, 2.0, 4.0, 4.0);
        run_boolean_tests(
            &[rectangle(0.0, 0.0, 10.0, 10.0)],
            &[rectangle(2.0, 2.0, 4.0, 4.0)],
            &[
                (BooleanOp::Union, vec![outer]),
                (BooleanOp::Intersect, vec![inner]),
                (BooleanOp::Subtract, vec![outer, hole]),
            ],
        );

        // subtracting the container leaves nothing
        run_boolean_tests(
            &[rectangle(2.0, 2.0, 4.0, 4.0)],
            &[rectangle(0.0, 0.0, 10.0, 10.0)],
            &[(BooleanOp::Subtract, vec![])],
        );
    }

    #[test]
    fn corner_touching_rectangles() {
        let a = FaceProperties::new(4, 1.0, 4.0, 0.0, 0.0, 1.0, 1.0);
        let b = FaceProperties::new(4, 1.0, 4.0, 1.0, 1.0, 2.0, 2.0);
        run_boolean_tests(
            &[rectangle(0.0, 0.0, 1.0, 1.0)],
            &[rectangle(1.0, 1.0, 2.0, 2.0)],
            &[
                (BooleanOp::Union, vec![a, b]),
                (BooleanOp::Intersect, vec![]),
                (BooleanOp::Subtract, vec![a]),
            ],
        );
    }

    #[test]
    fn rectangles_sharing_a_side() {
        run_boolean_tests(
            &[rectangle(0.0, 0.0, 1.0, 1.0)],
            &[rectangle(1.0, 0.0, 2.0, 1.0)],
            &[
                (
                    BooleanOp::Union,
                    vec![FaceProperties::new(6, 2.0, 6.0, 0.0, 0.0, 2.0, 1.0)],
                ),
                (BooleanOp::Intersect, vec![]),
                (
                    BooleanOp::Subtract,
                    vec![FaceProperties::new(4, 1.0, 4.0, 0.0, 0.0, 1.0, 1.0)],
                ),
            ],
        );
    }

    #[test]
    fn wide_rectangle_and_offset_rectangle() {
        run_boolean_tests(
            &[rectangle(0.0, 0.0, 150.0, 30.0)],
            &[rectangle(100.0, 20.0, 200.0, 40.0)],
            &[
                (
                    BooleanOp::Union,
                    vec![FaceProperties::new(8, 6000.0, 480.0, 0.0, 0.0, 200.0, 40.0)],
                ),
                (
                    BooleanOp::Intersect,
                    vec![FaceProperties::new(4, 500.0, 120.0, 100.0, 20.0, 150.0, 30.0)],
                ),
                (
                    BooleanOp::Subtract,
                    vec![FaceProperties::new(6, 4000.0, 360.0, 0.0, 0.0, 150.0, 30.0)],
                ),
            ],
        );

        let a = polygon_from_loops(&[rectangle(0.0, 0.0, 150.0, 30.0)]);
        let b = polygon_from_loops(&[rectangle(100.0, 20.0, 200.0, 40.0)]);
        let vertexes = a.union(&b).unwrap().vertexes();
        let has = |x: f64, y: f64| vertexes.iter().any(|v| v.fuzzy_eq(vec2(x, y)));
        for (x, y) in [(0.0, 0.0), (0.0, 30.0), (200.0, 20.0), (200.0, 40.0), (100.0, 40.0)] {
            assert!(has(x, y), "missing vertex ({}, {})", x, y);
        }
        // corners covered by the other rectangle
        assert!(!has(150.0, 30.0));
        assert!(!has(100.0, 20.0));
    }

    #[test]
    fn half_disks_sharing_a_diameter() {
        let upper = vec![(-1.0, 0.0, 0.0), (1.0, 0.0, 1.0)];
        let lower = vec![(1.0, 0.0, 0.0), (-1.0, 0.0, 1.0)];
        run_boolean_tests(
            &[upper],
            &[lower],
            &[
                (
                    BooleanOp::Union,
                    vec![FaceProperties::new(2, PI, 2.0 * PI, -1.0, -1.0, 1.0, 1.0)],
                ),
                (BooleanOp::Intersect, vec![]),
                (
                    BooleanOp::Subtract,
                    vec![FaceProperties::new(2, PI / 2.0, PI + 2.0, -1.0, 0.0, 1.0, 1.0)],
                ),
            ],
        );
    }

    #[test]
    fn union_is_commutative() {
        let pairs = [
            (rectangle(0.0, 0.0, 2.0, 2.0), rectangle(1.0, 1.0, 3.0, 3.0)),
            (circle(0.0, 0.0, 1.0), circle(0.6, 0.8, 1.0)),
            (rectangle(0.0, 0.0, 2.0, 2.0), circle(2.0, 1.0, 1.0)),
        ];
        for (l1, l2) in pairs {
            let a = polygon_from_loops(&[l1]);
            let b = polygon_from_loops(&[l2]);
            let ab = a.union(&b).unwrap();
            let ba = b.union(&a).unwrap();
            assert_eq!(ab.face_count(), ba.face_count());
            assert_eq!(ab.edge_count(), ba.edge_count());
            assert!((ab.area() - ba.area()).abs() < 1e-9);
            assert!(property_sets_match(
                &create_property_set(&ab),
                &create_property_set(&ba)
            ));
        }
    }

    #[test]
    fn overlapping_circles() {
        // centers 1 apart, the lens subtends 2 * PI / 3 on both circles
        let lens_area = 2.0 * PI / 3.0 - 3.0f64.sqrt() / 2.0;
        let h = 0.75f64.sqrt();
        run_boolean_tests(
            &[circle(0.0, 0.0, 1.0)],
            &[circle(0.6, 0.8, 1.0)],
            &[
                (
                    BooleanOp::Union,
                    vec![FaceProperties::new(
                        4,
                        2.0 * PI - lens_area,
                        8.0 * PI / 3.0,
                        -1.0,
                        -1.0,
                        1.6,
                        1.8,
                    )],
                ),
                (
                    BooleanOp::Intersect,
                    vec![FaceProperties::new(
                        4,
                        lens_area,
                        4.0 * PI / 3.0,
                        -0.4,
                        -0.2,
                        1.0,
                        1.0,
                    )],
                ),
                (
                    BooleanOp::Subtract,
                    vec![FaceProperties::new(
                        4,
                        PI - lens_area,
                        2.0 * PI,
                        -1.0,
                        -1.0,
                        0.3 + 0.8 * h,
                        0.4 + 0.6 * h,
                    )],
                ),
            ],
        );
    }

    #[test]
    fn rectangle_and_tangent_circle() {
        // circle tangent to the top and bottom sides at the right corners
        run_boolean_tests(
            &[rectangle(0.0, 0.0, 2.0, 2.0)],
            &[circle(2.0, 1.0, 1.0)],
            &[
                (
                    BooleanOp::Union,
                    vec![FaceProperties::new(
                        5,
                        4.0 + PI / 2.0,
                        6.0 + PI,
                        0.0,
                        0.0,
                        3.0,
                        2.0,
                    )],
                ),
                (
                    BooleanOp::Intersect,
                    vec![FaceProperties::new(3, PI / 2.0, 2.0 + PI, 1.0, 0.0, 2.0, 2.0)],
                ),
                (
                    BooleanOp::Subtract,
                    vec![FaceProperties::new(
                        5,
                        4.0 - PI / 2.0,
                        6.0 + PI,
                        0.0,
                        0.0,
                        2.0,
                        2.0,
                    )],
                ),
            ],
        );
    }
}

mod test_holes {
    use super::*;

    fn square_with_hole() -> Vec<Loop> {
        vec![
            rectangle(0.0, 0.0, 10.0, 10.0),
            reversed_loop(&rectangle(3.0, 3.0, 7.0, 7.0)),
        ]
    }

    #[test]
    fn bar_through_hole_and_outer_side() {
        run_boolean_tests(
            &square_with_hole(),
            &[rectangle(5.0, 4.0, 12.0, 6.0)],
            &[
                (
                    BooleanOp::Union,
                    vec![
                        FaceProperties::new(8, 104.0, 44.0, 0.0, 0.0, 12.0, 10.0),
                        FaceProperties::new(8, -12.0, 20.0, 3.0, 3.0, 7.0, 7.0),
                    ],
                ),
                (
                    BooleanOp::Intersect,
                    vec![FaceProperties::new(4, 6.0, 10.0, 7.0, 4.0, 10.0, 6.0)],
                ),
                (
                    BooleanOp::Subtract,
                    vec![FaceProperties::new(12, 78.0, 58.0, 0.0, 0.0, 10.0, 10.0)],
                ),
            ],
        );
    }

    #[test]
    fn rectangle_covering_circular_hole() {
        let outer = FaceProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0);
        run_boolean_tests(
            &[
                rectangle(0.0, 0.0, 10.0, 10.0),
                reversed_loop(&circle(5.0, 5.0, 2.0)),
            ],
            &[rectangle(2.0, 2.0, 8.0, 8.0)],
            &[
                (BooleanOp::Union, vec![outer]),
                (
                    BooleanOp::Intersect,
                    vec![
                        FaceProperties::new(4, 36.0, 24.0, 2.0, 2.0, 8.0, 8.0),
                        FaceProperties::new(2, -4.0 * PI, 4.0 * PI, 3.0, 3.0, 7.0, 7.0),
                    ],
                ),
                (
                    BooleanOp::Subtract,
                    vec![outer, FaceProperties::new(4, -36.0, 24.0, 2.0, 2.0, 8.0, 8.0)],
                ),
            ],
        );
    }

    #[test]
    fn island_inside_hole() {
        let outer = FaceProperties::new(4, 100.0, 40.0, 0.0, 0.0, 10.0, 10.0);
        let hole = FaceProperties::new(4, -16.0, 16.0, 3.0, 3.0, 7.0, 7.0);
        let island = FaceProperties::new(4, 1.0, 4.0, 4.0, 4.0, 5.0, 5.0);
        run_boolean_tests(
            &square_with_hole(),
            &[rectangle(4.0, 4.0, 5.0, 5.0)],
            &[
                (BooleanOp::Union, vec![outer, hole, island]),
                (BooleanOp::Intersect, vec![]),
                (BooleanOp::Subtract, vec![outer, hole]),
            ],
        );
    }
}

fn unit_square() -> Polygon {
    polygon_from_loops(&[rectangle(0.0, 0.0, 1.0, 1.0)])
}

#[test]
fn empty_operands() {
    init_logging();
    let empty = Polygon::new();
    let square = unit_square();

    let r = empty.union(&square).unwrap();
    assert_eq!(r.face_count(), 1);
    assert_well_formed(&r);
    assert!(empty.intersect(&square).unwrap().is_empty());
    assert!(empty.subtract(&square).unwrap().is_empty());

    assert_eq!(square.union(&empty).unwrap().face_count(), 1);
    assert!(square.intersect(&empty).unwrap().is_empty());
    let r = square.subtract(&empty).unwrap();
    assert_eq!(r.face_count(), 1);
    assert_eq!(r.edge_count(), 4);
}

#[test]
fn inputs_are_not_modified() {
    let a = unit_square();
    let b = polygon_from_loops(&[rectangle(0.5, 0.5, 1.5, 1.5)]);
    let before_a = create_property_set(&a);
    let before_b = create_property_set(&b);
    for op in [BooleanOp::Union, BooleanOp::Intersect, BooleanOp::Subtract] {
        a.boolean(&b, op).unwrap();
    }
    assert!(property_sets_match(&create_property_set(&a), &before_a));
    assert!(property_sets_match(&create_property_set(&b), &before_b));
}

#[test]
fn clip_in_place() {
    let mut a = unit_square();
    let b = polygon_from_loops(&[rectangle(0.5, 0.5, 1.5, 1.5)]);
    a.clip(&b, BooleanOp::Intersect).unwrap();
    assert_well_formed(&a);
    assert!(property_sets_match(
        &create_property_set(&a),
        &[FaceProperties::new(4, 0.25, 2.0, 0.5, 0.5, 1.0, 1.0)]
    ));

    // the result can be used as an operand again, collinear split vertexes at (1, 0.5) and
    // (0.5, 1) stay in the result
    a.clip(&unit_square(), BooleanOp::Union).unwrap();
    assert_well_formed(&a);
    assert!(property_sets_match(
        &create_property_set(&a),
        &[FaceProperties::new(6, 1.0, 4.0, 0.0, 0.0, 1.0, 1.0)]
    ));
}

#[test]
fn result_orientation() {
    let outer = polygon_from_loops(&[rectangle(0.0, 0.0, 10.0, 10.0)]);
    let inner = polygon_from_loops(&[circle(5.0, 5.0, 2.0)]);
    let result = outer.subtract(&inner).unwrap();
    let mut orientations: Vec<_> = result
        .faces()
        .map(|(f, _)| result.face_orientation(f))
        .collect();
    orientations.sort_by_key(|o| *o == Orientation::Cw);
    assert_eq!(orientations, vec![Orientation::Ccw, Orientation::Cw]);
    assert!((result.area() - (100.0 - 4.0 * PI)).abs() < 1e-9);
}

#[test]
fn fold_sequence() {
    init_logging();
    let a = polygon_from_loops(&[rectangle(0.0, 0.0, 2.0, 2.0)]);
    let b = polygon_from_loops(&[rectangle(1.0, 1.0, 3.0, 3.0)]);
    let c = polygon_from_loops(&[rectangle(10.0, 0.0, 11.0, 1.0)]);
    let options = BooleanOptions::new();

    let result = boolean_fold(
        &a,
        [(&b, BooleanOp::Union), (&c, BooleanOp::Union)],
        &options,
    )
    .unwrap();
    assert_eq!(result.face_count(), 2);
    assert!((result.area() - 8.0).abs() < 1e-9);

    let result = boolean_fold(
        &a,
        [(&b, BooleanOp::Union), (&b, BooleanOp::Subtract)],
        &options,
    )
    .unwrap();
    assert_well_formed(&result);
    assert!(property_sets_match(
        &create_property_set(&result),
        &[FaceProperties::new(6, 3.0, 8.0, 0.0, 0.0, 2.0, 2.0)]
    ));

    let no_operands: Vec<(&Polygon, BooleanOp)> = Vec::new();
    let unchanged = boolean_fold(&a, no_operands, &options).unwrap();
    assert_eq!(unchanged.edge_count(), 4);
}

#[test]
fn custom_epsilon() {
    // the gap between the rectangles is below the position epsilon so their sides coincide
    let a = polygon_from_loops(&[rectangle(0.0, 0.0, 1.0, 1.0)]);
    let b = polygon_from_loops(&[rectangle(1.0 + 1e-7, 0.0, 2.0, 1.0)]);
    let options = BooleanOptions { pos_equal_eps: 1e-5 };
    let result = a.boolean_opt(&b, BooleanOp::Union, &options).unwrap();
    assert_eq!(result.face_count(), 1);
    assert!((result.area() - 2.0).abs() < 1e-5);
}
