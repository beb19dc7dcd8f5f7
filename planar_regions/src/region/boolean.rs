use super::internal::{
    classify_edges, classify_untouched_faces, drop_untouched_faces, find_intersections,
    mark_overlaps, prune_chains, rebuild_faces, reconcile_boundary_conflicts, split_edges, stitch,
    Operand,
};
use super::{BooleanOp, BooleanOptions, Polygon};
use crate::core::traits::Real;
use crate::error::Result;

impl<T> Polygon<T>
where
    T: Real,
{
    /// Same as [Polygon::clip_opt] with default options.
    #[inline]
    pub fn clip(&mut self, other: &Polygon<T>, op: BooleanOp) -> Result<()> {
        self.clip_opt(other, op, &BooleanOptions::new())
    }

    /// Apply `op` between `self` and `other` in place, `self` becomes the result.
    ///
    /// Both polygons are expected to have islands counter clockwise and holes clockwise (see
    /// [Polygon::orient_faces]), faces of the result follow the same convention.
    ///
    /// Intersection points of the two boundaries split the edges into chains, each chain is
    /// classified as inside, outside or on the boundary of the other polygon, the chains not
    /// belonging to the result are removed and the rest is stitched back into faces.
    ///
    /// # Errors
    ///
    /// [RegionError::CannotCompleteBooleanOperation](crate::error::RegionError) if edges could
    /// not be linked into closed loops and
    /// [RegionError::UnresolvedBoundaryConflict](crate::error::RegionError) if a chain could not
    /// be classified. On error `self` may be left partially processed, use [Polygon::boolean_opt]
    /// to keep the input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::region::*;
    /// # use planar_regions::core::traits::*;
    /// let mut a: Polygon = Polygon::new();
    /// a.add_vertex_loop([(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (2.0, 2.0, 0.0), (0.0, 2.0, 0.0)])
    ///     .unwrap();
    /// let mut b: Polygon = Polygon::new();
    /// b.add_vertex_loop([(1.0, 1.0, 0.0), (3.0, 1.0, 0.0), (3.0, 3.0, 0.0), (1.0, 3.0, 0.0)])
    ///     .unwrap();
    ///
    /// a.clip_opt(&b, BooleanOp::Union, &BooleanOptions::new()).unwrap();
    /// assert_eq!(a.face_count(), 1);
    /// assert_eq!(a.edge_count(), 8);
    /// assert!(a.area().fuzzy_eq(7.0));
    /// ```
    pub fn clip_opt(
        &mut self,
        other: &Polygon<T>,
        op: BooleanOp,
        options: &BooleanOptions<T>,
    ) -> Result<()> {
        let eps = options.pos_equal_eps;

        if self.is_empty() {
            if op == BooleanOp::Union {
                *self = other.clone();
                self.refresh_index();
            }
            return Ok(());
        }

        if other.is_empty() {
            if op == BooleanOp::Intersect {
                *self = Polygon::new();
            }
            return Ok(());
        }

        let mut clip = other.clone();
        if op == BooleanOp::Subtract {
            clip.reverse();
        }

        self.refresh_arc_lengths();
        clip.refresh_arc_lengths();
        self.refresh_index();
        clip.refresh_index();

        let mut intrs = find_intersections(self, &clip, eps);
        log::debug!("{:?}: {} intersection points", op, intrs.len());

        intrs.sort(eps);
        split_edges(self, &mut intrs.subject, eps)?;
        split_edges(&mut clip, &mut intrs.clip, eps)?;
        let duplicates = intrs.remove_duplicates(eps);
        log::debug!(
            "{:?}: split into {} + {} edges, {} duplicate points removed",
            op,
            self.edge_count(),
            clip.edge_count(),
            duplicates
        );

        self.refresh_index();
        clip.refresh_index();

        classify_edges(self, &intrs.subject, &clip, eps);
        classify_edges(&mut clip, &intrs.clip, self, eps);
        reconcile_boundary_conflicts(self, &intrs.subject, &intrs.clip, &clip, eps)?;
        reconcile_boundary_conflicts(&mut clip, &intrs.clip, &intrs.subject, self, eps)?;
        mark_overlaps(self, &intrs.subject, &mut clip, &intrs.clip, eps);

        let subject_faces = classify_untouched_faces(self, &intrs.subject, &clip, eps);
        let clip_faces = classify_untouched_faces(&clip, &intrs.clip, self, eps);

        let pruned_subject = prune_chains(self, &mut intrs.subject, op, Operand::Subject, eps);
        let pruned_clip = prune_chains(&mut clip, &mut intrs.clip, op, Operand::Clip, eps);
        let dropped_faces = drop_untouched_faces(self, &subject_faces, op, Operand::Subject)
            + drop_untouched_faces(&mut clip, &clip_faces, op, Operand::Clip);
        log::debug!(
            "{:?}: pruned {} + {} edges, dropped {} untouched faces",
            op,
            pruned_subject,
            pruned_clip,
            dropped_faces
        );

        let (edge_map, face_map) = self.absorb(clip);
        intrs.clip.remap(&edge_map, &face_map);

        stitch(self, &mut intrs, eps)?;
        let built = rebuild_faces(self, &intrs)?;
        self.refresh_index();
        log::debug!(
            "{:?}: rebuilt {} faces, result has {} faces and {} edges",
            op,
            built,
            self.face_count(),
            self.edge_count()
        );

        Ok(())
    }

    /// Same as [Polygon::boolean_opt] with default options.
    #[inline]
    pub fn boolean(&self, other: &Polygon<T>, op: BooleanOp) -> Result<Polygon<T>> {
        self.boolean_opt(other, op, &BooleanOptions::new())
    }

    /// Result of `op` between `self` and `other` as a new polygon, the inputs are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::region::*;
    /// # use planar_regions::core::traits::*;
    /// # use planar_regions::core::math::*;
    /// let mut square: Polygon = Polygon::new();
    /// square
    ///     .add_vertex_loop([(-2.0, -2.0, 0.0), (2.0, -2.0, 0.0), (2.0, 2.0, 0.0), (-2.0, 2.0, 0.0)])
    ///     .unwrap();
    /// let mut circle: Polygon = Polygon::new();
    /// circle.add_circle(vec2(0.0, 0.0), 1.0, true).unwrap();
    ///
    /// let result = square
    ///     .boolean_opt(&circle, BooleanOp::Subtract, &BooleanOptions::new())
    ///     .unwrap();
    /// assert_eq!(result.face_count(), 2);
    /// assert!(result.area().fuzzy_eq_eps(16.0 - std::f64::consts::PI, 1e-9));
    /// assert_eq!(square.face_count(), 1);
    /// ```
    pub fn boolean_opt(
        &self,
        other: &Polygon<T>,
        op: BooleanOp,
        options: &BooleanOptions<T>,
    ) -> Result<Polygon<T>> {
        let mut result = self.clone();
        result.clip_opt(other, op, options)?;
        Ok(result)
    }

    /// Region covered by `self` or `other`.
    #[inline]
    pub fn union(&self, other: &Polygon<T>) -> Result<Polygon<T>> {
        self.boolean(other, BooleanOp::Union)
    }

    /// Region covered by both `self` and `other`.
    #[inline]
    pub fn intersect(&self, other: &Polygon<T>) -> Result<Polygon<T>> {
        self.boolean(other, BooleanOp::Intersect)
    }

    /// Region covered by `self` but not by `other`.
    #[inline]
    pub fn subtract(&self, other: &Polygon<T>) -> Result<Polygon<T>> {
        self.boolean(other, BooleanOp::Subtract)
    }
}

/// Apply a sequence of boolean operations left to right starting from `init`.
///
/// # Examples
///
/// ```
/// # use planar_regions::region::*;
/// # use planar_regions::core::traits::*;
/// # use planar_regions::core::math::*;
/// let mut a: Polygon = Polygon::new();
/// a.add_vertex_loop([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 4.0, 0.0), (0.0, 4.0, 0.0)])
///     .unwrap();
/// let mut b = a.clone();
/// b.translate(vec2(2.0, 0.0));
/// let mut hole: Polygon = Polygon::new();
/// hole.add_circle(vec2(3.0, 2.0), 1.0, true).unwrap();
///
/// let result = boolean_fold(
///     &a,
///     [(&b, BooleanOp::Union), (&hole, BooleanOp::Subtract)],
///     &BooleanOptions::new(),
/// )
/// .unwrap();
/// assert!(result.area().fuzzy_eq_eps(24.0 - std::f64::consts::PI, 1e-9));
/// ```
pub fn boolean_fold<'a, T, I>(
    init: &Polygon<T>,
    operands: I,
    options: &BooleanOptions<T>,
) -> Result<Polygon<T>>
where
    T: Real,
    I: IntoIterator<Item = (&'a Polygon<T>, BooleanOp)>,
{
    operands
        .into_iter()
        .try_fold(init.clone(), |mut acc, (other, op)| {
            acc.clip_opt(other, op, options)?;
            Ok(acc)
        })
}
