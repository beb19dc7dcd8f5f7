use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Real number type the geometry is generic over (`f32` or `f64`).
///
/// Bundles the `num-traits` float operations with fuzzy comparison and the bounds required to
/// store coordinates in a `static_aabb2d_index` spatial index.
pub trait Real:
    num_traits::real::Real + FuzzyOrd + std::default::Default + std::fmt::Debug + IndexableNum + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    /// `true` unless the value is NaN or infinite.
    #[inline]
    fn is_finite_value(self) -> bool {
        // NaN and infinities both produce NaN here
        (self - self) == Self::zero()
    }
}

macro_rules! impl_real {
    ($ty:ident) => {
        impl Real for $ty {
            #[inline]
            fn pi() -> Self {
                std::$ty::consts::PI
            }

            #[inline]
            fn tau() -> Self {
                std::$ty::consts::TAU
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn four() -> Self {
                4.0
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
