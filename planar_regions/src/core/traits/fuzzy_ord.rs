use super::FuzzyEq;

/// Tolerance based ordering, the inclusive counterpart of [FuzzyEq].
///
/// `fuzzy_gt` and `fuzzy_lt` treat values within epsilon of the bound as passing, which makes
/// range checks on parametric values "sticky" at segment end points.
pub trait FuzzyOrd: FuzzyEq {
    /// `self + fuzzy_epsilon > other`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// `self < other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` lies in `[min, max]` widened by `fuzzy_epsilon` on both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::core::traits::*;
    /// assert!(0.0f64.fuzzy_in_range_eps(1e-9, 1.0, 1e-8));
    /// assert!(1.0f64.fuzzy_in_range_eps(0.0, 1.0, 1e-8));
    /// assert!(!1.1f64.fuzzy_in_range_eps(0.0, 1.0, 1e-8));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }

            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
