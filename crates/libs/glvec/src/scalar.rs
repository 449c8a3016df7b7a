//! Element types admitted in vectors and the conversion rules between them.
//!
//! Only primitive types can be stored in a vector: `bool`, the signed and
//! unsigned integers up to 64 bits, `f32` and `f64`. The set is closed; the
//! [`Scalar`] trait is sealed.
//!
//! Three relations are defined over these types:
//!
//! * [`Promote`] gives the common type two operands are converted to before
//!   an arithmetic operation, following the usual arithmetic conversions of
//!   C-family shading languages.
//! * [`SafeCast`] holds when a conversion never loses information relative
//!   to using the target type directly, i.e. when the target is the common
//!   type of both. These are the conversions allowed to happen through
//!   `From`/`Into`.
//! * [`ScalarCast`] is the explicit conversion between any two scalars,
//!   `bool` included.

use core::{
    fmt::Debug,
    ops::{BitAnd, BitOr, BitXor, Not},
};

/// Coarse classification of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`.
    Boolean,
    /// Signed or unsigned integers.
    Integral,
    /// `f32` and `f64`.
    Floating,
}

impl ScalarKind {
    /// Returns whether the kind is integral.
    pub const fn is_integral(&self) -> bool { matches!(self, Self::Integral) }

    /// Returns whether the kind is floating point.
    pub const fn is_floating(&self) -> bool { matches!(self, Self::Floating) }

    /// Returns whether the kind is boolean.
    pub const fn is_boolean(&self) -> bool { matches!(self, Self::Boolean) }
}

mod sealed {
    pub trait Sealed {}
}

/// Element type of a vector.
///
/// This trait is sealed; it is implemented for `bool`, `i8`, `i16`, `i32`,
/// `i64`, `u8`, `u16`, `u32`, `u64`, `f32` and `f64`.
pub trait Scalar: Copy + Default + PartialEq + Debug + Send + Sync + 'static + sealed::Sealed {
    /// Classification of the type.
    const KIND: ScalarKind;
    /// Shading-language name of the type, used in diagnostics.
    const NAME: &'static str;
}

/// Scalars that support arithmetic: every scalar but `bool`.
pub trait Numeric: Scalar + PartialOrd + num_traits::Num + num_traits::NumCast {}

/// Integer scalars; admitted by bitwise and shift operators.
pub trait Integral: Numeric + Eq + Ord + num_traits::PrimInt {}

/// Floating point scalars; admitted by the transcendental functions.
pub trait Floating: Numeric + num_traits::Float {}

/// Scalars admitted by `&`, `|`, `^` and `!`: integers and `bool`.
pub trait Logical:
    Scalar + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self> + Not<Output = Self>
{
}

macro_rules! impl_scalar {
    ($kind:ident: $($t:ty => $name:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;
                const NAME: &'static str = $name;
            }
        )*
    };
}

impl_scalar!(Boolean: bool => "bool");
impl_scalar!(Integral:
    i8 => "int8_t", i16 => "int16_t", i32 => "int", i64 => "int64_t",
    u8 => "uint8_t", u16 => "uint16_t", u32 => "uint", u64 => "uint64_t",
);
impl_scalar!(Floating: f32 => "float", f64 => "double");

macro_rules! impl_markers {
    ($tr:ident for $($t:ty),*) => {
        $(impl $tr for $t {})*
    };
}

impl_markers!(Numeric for i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_markers!(Integral for i8, i16, i32, i64, u8, u16, u32, u64);
impl_markers!(Floating for f32, f64);
impl_markers!(Logical for bool, i8, i16, i32, i64, u8, u16, u32, u64);

/// Common type of two scalars under the usual arithmetic conversions.
///
/// Two operands of the same type keep it. Otherwise any floating point type
/// wins over any integer and `f64` over `f32`, and integers narrower than 32
/// bits are first promoted to `i32`; then, with
/// equal signedness the wider type wins, an unsigned type at least as wide
/// as the signed one wins, and otherwise the (strictly wider) signed type
/// wins. `bool` only promotes with itself.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The common type.
    type Output: Scalar;

    /// Converts the left-hand operand to the common type.
    fn promote(self) -> Self::Output;

    /// Converts the right-hand operand to the common type.
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

macro_rules! impl_promote {
    ($($lhs:ty: $($rhs:ty => $out:ty),*;)*) => {
        $($(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn promote(self) -> $out { self as $out }

                #[inline(always)]
                fn promote_rhs(rhs: $rhs) -> $out { rhs as $out }
            }
        )*)*
    };
}

impl_promote! {
    i8: i8 => i8, i16 => i32, i32 => i32, i64 => i64, u8 => i32, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    i16: i8 => i32, i16 => i16, i32 => i32, i64 => i64, u8 => i32, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    i32: i8 => i32, i16 => i32, i32 => i32, i64 => i64, u8 => i32, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    i64: i8 => i64, i16 => i64, i32 => i64, i64 => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64, f32 => f32, f64 => f64;
    u8: i8 => i32, i16 => i32, i32 => i32, i64 => i64, u8 => u8, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    u16: i8 => i32, i16 => i32, i32 => i32, i64 => i64, u8 => i32, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    u32: i8 => u32, i16 => u32, i32 => u32, i64 => i64, u8 => u32, u16 => u32, u32 => u32, u64 => u64, f32 => f32, f64 => f64;
    u64: i8 => u64, i16 => u64, i32 => u64, i64 => u64, u8 => u64, u16 => u64, u32 => u64, u64 => u64, f32 => f32, f64 => f64;
    f32: i8 => f32, i16 => f32, i32 => f32, i64 => f32, u8 => f32, u16 => f32, u32 => f32, u64 => f32, f32 => f32, f64 => f64;
    f64: i8 => f64, i16 => f64, i32 => f64, i64 => f64, u8 => f64, u16 => f64, u32 => f64, u64 => f64, f32 => f64, f64 => f64;
}

impl Promote<bool> for bool {
    type Output = bool;

    #[inline(always)]
    fn promote(self) -> bool { self }

    #[inline(always)]
    fn promote_rhs(rhs: bool) -> bool { rhs }
}

/// Implicitly-safe conversion from `Self` to `T`.
///
/// Holds iff `T` is `Self` or `T` is the [`Promote`] output of `Self` and `T`.
/// `bool` never converts implicitly to or from a number.
pub trait SafeCast<T: Scalar>: Scalar {
    /// Converts `self` to `T`.
    fn safe_cast(self) -> T;
}

macro_rules! impl_safe_cast {
    (@identity $($t:ty),*) => {
        $(
            impl SafeCast<$t> for $t {
                #[inline(always)]
                fn safe_cast(self) -> $t { self }
            }
        )*
    };
    ($($to:ty: $($from:ty),*;)*) => {
        $($(
            impl SafeCast<$to> for $from {
                #[inline(always)]
                fn safe_cast(self) -> $to { self as $to }
            }
        )*)*
    };
}

impl_safe_cast!(@identity bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_safe_cast! {
    i32: i8, i16, u8, u16;
    i64: i8, i16, i32, u8, u16, u32;
    u32: i8, i16, i32, u8, u16;
    u64: i8, i16, i32, i64, u8, u16, u32;
    f32: i8, i16, i32, i64, u8, u16, u32, u64;
    f64: i8, i16, i32, i64, u8, u16, u32, u64, f32;
}

/// Explicit conversion between any two scalars.
///
/// Numbers convert with `as` semantics; `bool` converts to `0`/`1` and a
/// number converts to `bool` by comparing against zero.
pub trait ScalarCast<T: Scalar>: Scalar {
    /// Casts `self` to `T`.
    fn cast(self) -> T;
}

macro_rules! impl_scalar_cast {
    ($t0:ty as $($t1:ty),*) => {
        $(
            impl ScalarCast<$t1> for $t0 {
                #[inline(always)]
                fn cast(self) -> $t1 { self as $t1 }
            }
        )*

        impl ScalarCast<bool> for $t0 {
            #[inline(always)]
            fn cast(self) -> bool { self != (0 as $t0) }
        }

        impl ScalarCast<$t0> for bool {
            #[inline(always)]
            fn cast(self) -> $t0 { (self as u8) as $t0 }
        }
    };
}

impl_scalar_cast!(i8 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(i16 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(i32 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(i64 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(u8 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(u16 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(u32 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(u64 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(f32 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_cast!(f64 as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl ScalarCast<bool> for bool {
    #[inline(always)]
    fn cast(self) -> bool { self }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common<A: Promote<B>, B: Scalar>() -> &'static str { <A::Output as Scalar>::NAME }

    #[test]
    fn classification() {
        assert!(<f32 as Scalar>::KIND.is_floating());
        assert!(<u16 as Scalar>::KIND.is_integral());
        assert!(<bool as Scalar>::KIND.is_boolean());
        assert!(!<i64 as Scalar>::KIND.is_floating());
    }

    #[test]
    fn promotion_follows_usual_arithmetic_conversions() {
        assert_eq!(common::<u8, u8>(), "uint8_t");
        assert_eq!(common::<u8, i8>(), "int");
        assert_eq!(common::<u16, u8>(), "int");
        assert_eq!(common::<i32, u32>(), "uint");
        assert_eq!(common::<u32, i64>(), "int64_t");
        assert_eq!(common::<u64, i64>(), "uint64_t");
        assert_eq!(common::<i64, f32>(), "float");
        assert_eq!(common::<f32, f64>(), "double");
        assert_eq!(common::<bool, bool>(), "bool");
    }

    #[test]
    fn promotion_values() {
        assert_eq!(<u8 as Promote<i8>>::promote(200), 200i32);
        assert_eq!(<u8 as Promote<i8>>::promote_rhs(-3), -3i32);
        assert_eq!(<i32 as Promote<f64>>::promote(7), 7.0f64);
    }

    #[test]
    fn safe_casts_match_promotion() {
        fn check<U: SafeCast<T> + Promote<T>, T: Scalar>() {
            assert_eq!(<U::Output as Scalar>::NAME, T::NAME, "{} -> {}", U::NAME, T::NAME);
        }
        check::<i8, i32>();
        check::<u16, i32>();
        check::<i32, u32>();
        check::<u32, i64>();
        check::<i64, u64>();
        check::<u64, f32>();
        check::<i64, f32>();
        check::<f32, f64>();
        check::<u32, f64>();
        check::<u16, u16>();
    }

    #[test]
    fn explicit_casts() {
        assert_eq!(ScalarCast::<i32>::cast(3.9f32), 3);
        assert_eq!(ScalarCast::<u8>::cast(-1i32), 255);
        assert_eq!(ScalarCast::<f32>::cast(true), 1.0);
        assert!(!ScalarCast::<bool>::cast(0.0f64));
        assert!(ScalarCast::<bool>::cast(-2i8));
    }

    #[test]
    fn safe_cast_values() {
        assert_eq!(SafeCast::<f64>::safe_cast(0.5f32), 0.5f64);
        assert_eq!(SafeCast::<i64>::safe_cast(u32::MAX), u32::MAX as i64);
    }
}
