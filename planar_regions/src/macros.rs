/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        #[allow(unused_imports)]
        use $crate::core::traits::FuzzyEq;
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        #[allow(unused_imports)]
        use $crate::core::traits::FuzzyEq;
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a polygon with one face per bracketed list of (x, y, bulge) vertex tuples, returns
/// a [Result](crate::error::Result) since faces are validated on insertion.
///
/// # Examples
///
/// ```
/// # use planar_regions::polygon;
/// # use planar_regions::region::*;
/// let polygon: Polygon = polygon![
///     [(0.0, 0.0, 0.0), (10.0, 0.0, 0.0), (10.0, 10.0, 0.0), (0.0, 10.0, 0.0)],
///     [(2.0, 2.0, 0.0), (2.0, 4.0, 0.0), (4.0, 4.0, 0.0), (4.0, 2.0, 0.0)],
/// ]
/// .unwrap();
/// assert_eq!(polygon.face_count(), 2);
/// assert_eq!(polygon.face_orientation(polygon.faces().last().unwrap().0), Orientation::Cw);
/// ```
#[macro_export]
macro_rules! polygon {
    ($( [ $( $v:expr ),* $(,)? ] ),* $(,)?) => {
        (|| -> $crate::error::Result<_> {
            let mut polygon = $crate::region::Polygon::new();
            $(
                polygon.add_vertex_loop([$( $v ),*])?;
            )*
            Ok(polygon)
        })()
    };
}
