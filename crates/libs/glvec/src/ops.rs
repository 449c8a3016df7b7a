//! Elementwise operators.
//!
//! Binary operators accept any mix of [`Vector`], [`Swizzle`] and raw
//! scalars, with either equal component counts or one side of count one,
//! which is broadcast. They always produce a fresh [`Vector`].
//!
//! Arithmetic operators (`+ - * / %`) first convert both sides to their
//! common type (see [`Promote`]). Bitwise and shift operators (`& | ^ << >>`)
//! keep each side's own type and defer to the scalar operator, so
//! `ivec2 << uvec2` is an `ivec2`. Bitwise operators admit only [`Logical`]
//! scalars and shifts only [`Integral`] ones.
//!
//! Integer overflow follows the scalar operators: it panics in debug builds
//! and wraps in release builds, unsigned types included, so
//! `uvec2(u32::MAX, 0) + 1u32` panics under `debug_assertions`. Integer
//! division by zero always panics. Use [`Vector::map`] with the `wrapping_*`
//! methods where wrapping is wanted.
//!
//! Compound assignment writes back into a [`Vector`] or into a writable view
//! over aliased cells. For arithmetic the right-hand side must convert
//! implicitly to the left-hand element type. Temporaries are not places in
//! Rust, so on a view call the method form: `c.xy().add_assign(v)`.

use crate::{
    pattern::Pattern,
    scalar::{Integral, Logical, Promote, SafeCast, Scalar},
    storage::{Slots, SlotsMut},
    swizzle::Swizzle,
    traits::{VectorLike, VectorLikeMut},
    vector::Vector,
};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul,
    MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// Marker of an elementwise operator.
pub trait Operator: Copy + core::fmt::Debug {}

macro_rules! operators {
    ($($name:ident => $symbol:literal),*) => {
        paste::paste! {
            $(
                #[doc = "Marker of the `" $symbol "` operator."]
                #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                pub struct $name;

                impl Operator for $name {}
            )*
        }
    };
}

operators!(
    OpAdd => "+", OpSub => "-", OpMul => "*", OpDiv => "/", OpRem => "%",
    OpBitAnd => "&", OpBitOr => "|", OpBitXor => "^", OpShl => "<<", OpShr => ">>"
);

/// A binary operator between two scalars.
pub trait ScalarOp<Rhs: Scalar, Op: Operator>: Scalar {
    /// The result type.
    type Output: Scalar;

    /// Applies the operator.
    fn apply(self, rhs: Rhs) -> Self::Output;
}

/// An in-place binary operator between two scalars.
pub trait ScalarAssignOp<Rhs: Scalar, Op: Operator>: Scalar {
    /// Applies the operator, storing the result in `self`.
    fn apply_assign(&mut self, rhs: Rhs);
}

macro_rules! promoting_scalar_ops {
    ($($Trait:ident::$method:ident, $AssignTrait:ident::$assign:ident => $Op:ident;)*) => {
        $(
            impl<L: Promote<R>, R: Scalar> ScalarOp<R, $Op> for L
            where
                L::Output: $Trait<Output = L::Output>,
            {
                type Output = L::Output;

                #[inline(always)]
                fn apply(self, rhs: R) -> L::Output { self.promote().$method(L::promote_rhs(rhs)) }
            }

            impl<L: Scalar + $AssignTrait, R: SafeCast<L>> ScalarAssignOp<R, $Op> for L {
                #[inline(always)]
                fn apply_assign(&mut self, rhs: R) { self.$assign(rhs.safe_cast()) }
            }
        )*
    };
}

promoting_scalar_ops! {
    Add::add, AddAssign::add_assign => OpAdd;
    Sub::sub, SubAssign::sub_assign => OpSub;
    Mul::mul, MulAssign::mul_assign => OpMul;
    Div::div, DivAssign::div_assign => OpDiv;
    Rem::rem, RemAssign::rem_assign => OpRem;
}

macro_rules! plain_scalar_ops {
    ($($Trait:ident::$method:ident, $AssignTrait:ident::$assign:ident => $Op:ident if $Class:ident;)*) => {
        $(
            impl<L: $Class + $Trait<R>, R: $Class> ScalarOp<R, $Op> for L
            where
                <L as $Trait<R>>::Output: Scalar,
            {
                type Output = <L as $Trait<R>>::Output;

                #[inline(always)]
                fn apply(self, rhs: R) -> Self::Output { self.$method(rhs) }
            }

            impl<L: $Class + $AssignTrait<R>, R: $Class> ScalarAssignOp<R, $Op> for L {
                #[inline(always)]
                fn apply_assign(&mut self, rhs: R) { self.$assign(rhs) }
            }
        )*
    };
}

plain_scalar_ops! {
    BitAnd::bitand, BitAndAssign::bitand_assign => OpBitAnd if Logical;
    BitOr::bitor, BitOrAssign::bitor_assign => OpBitOr if Logical;
    BitXor::bitxor, BitXorAssign::bitxor_assign => OpBitXor if Logical;
    Shl::shl, ShlAssign::shl_assign => OpShl if Integral;
    Shr::shr, ShrAssign::shr_assign => OpShr if Integral;
}

/// Index of the component read for logical position `i` of a value of
/// count `C`, broadcasting a single component.
#[inline(always)]
const fn lane<const C: usize>(i: usize) -> usize {
    if C == 1 {
        0
    } else {
        i
    }
}

#[inline]
fn zip_with<A, B, U, F, const N: usize, const M: usize, const K: usize>(a: &A, b: &B, mut f: F) -> Vector<U, K>
where
    A: VectorLike<N>,
    B: VectorLike<M>,
    U: Scalar,
    F: FnMut(A::Elem, B::Elem) -> U,
{
    Vector::from_fn(|i| f(a.get(lane::<N>(i)), b.get(lane::<M>(i))))
}

#[inline]
fn zip_assign<A, B, Op, const N: usize, const M: usize>(a: &mut A, b: &B)
where
    A: VectorLikeMut<N>,
    B: VectorLike<M>,
    A::Elem: ScalarAssignOp<B::Elem, Op>,
    Op: Operator,
{
    let rhs: [B::Elem; N] = core::array::from_fn(|i| b.get(lane::<M>(i)));
    let mut values = a.to_array();
    for (value, rhs) in values.iter_mut().zip(rhs) {
        ScalarAssignOp::<B::Elem, Op>::apply_assign(value, rhs);
    }
    a.set_components(values);
}

macro_rules! binary_ops {
    ($($Trait:ident::$method:ident => $Op:ident;)*) => {
        $(
            binary_ops!(@dims $Trait, $method, $Op;
                1, 1 => 1; 2, 2 => 2; 3, 3 => 3; 4, 4 => 4;
                2, 1 => 2; 3, 1 => 3; 4, 1 => 4;
                1, 2 => 2; 1, 3 => 3; 1, 4 => 4);
            binary_ops!(@scalars $Trait, $method, $Op; bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
        )*
    };
    (@dims $Trait:ident, $method:ident, $Op:ident; $($n:literal, $m:literal => $k:literal);*) => {
        $(
            binary_ops!(@impl $Trait, $method, $Op;
                [] [L: Scalar] Vector<L, $n>, $n;
                [] [R: Scalar] Vector<R, $m>, $m; $k);
            binary_ops!(@impl $Trait, $method, $Op;
                ['l] [SL: Slots, PL: Pattern<$n>] Swizzle<'l, SL, $n, PL>, $n;
                [] [R: Scalar] Vector<R, $m>, $m; $k);
            binary_ops!(@impl $Trait, $method, $Op;
                [] [L: Scalar] Vector<L, $n>, $n;
                ['r] [SR: Slots, PR: Pattern<$m>] Swizzle<'r, SR, $m, PR>, $m; $k);
            binary_ops!(@impl $Trait, $method, $Op;
                ['l] [SL: Slots, PL: Pattern<$n>] Swizzle<'l, SL, $n, PL>, $n;
                ['r] [SR: Slots, PR: Pattern<$m>] Swizzle<'r, SR, $m, PR>, $m; $k);
        )*
    };
    (@impl $Trait:ident, $method:ident, $Op:ident;
        [$($llt:lifetime)?] [$($lg:tt)*] $lhs:ty, $n:literal;
        [$($rlt:lifetime)?] [$($rg:tt)*] $rhs:ty, $m:literal; $k:literal) => {
        impl<$($llt,)? $($rlt,)? $($lg)*, $($rg)*> $Trait<$rhs> for $lhs
        where
            <$lhs as VectorLike<$n>>::Elem: ScalarOp<<$rhs as VectorLike<$m>>::Elem, $Op>,
        {
            type Output = Vector<
                <<$lhs as VectorLike<$n>>::Elem as ScalarOp<<$rhs as VectorLike<$m>>::Elem, $Op>>::Output,
                $k,
            >;

            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                zip_with::<_, _, _, _, $n, $m, $k>(
                    &self,
                    &rhs,
                    <<$lhs as VectorLike<$n>>::Elem as ScalarOp<<$rhs as VectorLike<$m>>::Elem, $Op>>::apply,
                )
            }
        }
    };
    (@scalars $Trait:ident, $method:ident, $Op:ident; $($s:ty),*) => {
        $(
            impl<L: Scalar + ScalarOp<$s, $Op>, const N: usize> $Trait<$s> for Vector<L, N> {
                type Output = Vector<<L as ScalarOp<$s, $Op>>::Output, N>;

                #[inline]
                fn $method(self, rhs: $s) -> Self::Output {
                    zip_with::<_, _, _, _, N, 1, N>(&self, &rhs, <L as ScalarOp<$s, $Op>>::apply)
                }
            }

            impl<'a, S: Slots, P: Pattern<N>, const N: usize> $Trait<$s> for Swizzle<'a, S, N, P>
            where
                S::Elem: ScalarOp<$s, $Op>,
            {
                type Output = Vector<<S::Elem as ScalarOp<$s, $Op>>::Output, N>;

                #[inline]
                fn $method(self, rhs: $s) -> Self::Output {
                    zip_with::<_, _, _, _, N, 1, N>(&self, &rhs, <S::Elem as ScalarOp<$s, $Op>>::apply)
                }
            }

            impl<R: Scalar, const N: usize> $Trait<Vector<R, N>> for $s
            where
                $s: ScalarOp<R, $Op>,
            {
                type Output = Vector<<$s as ScalarOp<R, $Op>>::Output, N>;

                #[inline]
                fn $method(self, rhs: Vector<R, N>) -> Self::Output {
                    zip_with::<_, _, _, _, 1, N, N>(&self, &rhs, <$s as ScalarOp<R, $Op>>::apply)
                }
            }

            impl<'a, S: Slots, P: Pattern<N>, const N: usize> $Trait<Swizzle<'a, S, N, P>> for $s
            where
                $s: ScalarOp<S::Elem, $Op>,
            {
                type Output = Vector<<$s as ScalarOp<S::Elem, $Op>>::Output, N>;

                #[inline]
                fn $method(self, rhs: Swizzle<'a, S, N, P>) -> Self::Output {
                    zip_with::<_, _, _, _, 1, N, N>(&self, &rhs, <$s as ScalarOp<S::Elem, $Op>>::apply)
                }
            }
        )*
    };
}

binary_ops! {
    Add::add => OpAdd;
    Sub::sub => OpSub;
    Mul::mul => OpMul;
    Div::div => OpDiv;
    Rem::rem => OpRem;
    BitAnd::bitand => OpBitAnd;
    BitOr::bitor => OpBitOr;
    BitXor::bitxor => OpBitXor;
    Shl::shl => OpShl;
    Shr::shr => OpShr;
}

macro_rules! assign_ops {
    ($($Trait:ident::$method:ident => $Op:ident;)*) => {
        $(
            assign_ops!(@dims $Trait, $method, $Op;
                1, 1; 2, 2; 3, 3; 4, 4; 2, 1; 3, 1; 4, 1);
            assign_ops!(@scalars $Trait, $method, $Op; bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
        )*
    };
    (@dims $Trait:ident, $method:ident, $Op:ident; $($n:literal, $m:literal);*) => {
        $(
            assign_ops!(@impl $Trait, $method, $Op;
                [] [L: Scalar] Vector<L, $n>, $n;
                [] [R: Scalar] Vector<R, $m>, $m);
            assign_ops!(@impl $Trait, $method, $Op;
                ['l] [SL: SlotsMut, PL: Pattern<$n>] Swizzle<'l, SL, $n, PL>, $n;
                [] [R: Scalar] Vector<R, $m>, $m);
            assign_ops!(@impl $Trait, $method, $Op;
                [] [L: Scalar] Vector<L, $n>, $n;
                ['r] [SR: Slots, PR: Pattern<$m>] Swizzle<'r, SR, $m, PR>, $m);
            assign_ops!(@impl $Trait, $method, $Op;
                ['l] [SL: SlotsMut, PL: Pattern<$n>] Swizzle<'l, SL, $n, PL>, $n;
                ['r] [SR: Slots, PR: Pattern<$m>] Swizzle<'r, SR, $m, PR>, $m);
        )*
    };
    (@impl $Trait:ident, $method:ident, $Op:ident;
        [$($llt:lifetime)?] [$($lg:tt)*] $lhs:ty, $n:literal;
        [$($rlt:lifetime)?] [$($rg:tt)*] $rhs:ty, $m:literal) => {
        impl<$($llt,)? $($rlt,)? $($lg)*, $($rg)*> $Trait<$rhs> for $lhs
        where
            <$lhs as VectorLike<$n>>::Elem: ScalarAssignOp<<$rhs as VectorLike<$m>>::Elem, $Op>,
        {
            #[inline]
            fn $method(&mut self, rhs: $rhs) { zip_assign::<_, _, $Op, $n, $m>(self, &rhs) }
        }
    };
    (@scalars $Trait:ident, $method:ident, $Op:ident; $($s:ty),*) => {
        $(
            impl<L: Scalar + ScalarAssignOp<$s, $Op>, const N: usize> $Trait<$s> for Vector<L, N> {
                #[inline]
                fn $method(&mut self, rhs: $s) { zip_assign::<_, _, $Op, N, 1>(self, &rhs) }
            }

            impl<'a, S: SlotsMut, P: Pattern<N>, const N: usize> $Trait<$s> for Swizzle<'a, S, N, P>
            where
                S::Elem: ScalarAssignOp<$s, $Op>,
            {
                #[inline]
                fn $method(&mut self, rhs: $s) { zip_assign::<_, _, $Op, N, 1>(self, &rhs) }
            }
        )*
    };
}

assign_ops! {
    AddAssign::add_assign => OpAdd;
    SubAssign::sub_assign => OpSub;
    MulAssign::mul_assign => OpMul;
    DivAssign::div_assign => OpDiv;
    RemAssign::rem_assign => OpRem;
    BitAndAssign::bitand_assign => OpBitAnd;
    BitOrAssign::bitor_assign => OpBitOr;
    BitXorAssign::bitxor_assign => OpBitXor;
    ShlAssign::shl_assign => OpShl;
    ShrAssign::shr_assign => OpShr;
}

macro_rules! unary_ops {
    ($($Trait:ident::$method:ident),*) => {
        $(
            impl<T: Scalar + $Trait<Output = T>, const N: usize> $Trait for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $method(self) -> Self::Output { self.map($Trait::$method) }
            }

            impl<'a, S: Slots, P: Pattern<N>, const N: usize> $Trait for Swizzle<'a, S, N, P>
            where
                S::Elem: $Trait<Output = S::Elem>,
            {
                type Output = Vector<S::Elem, N>;

                #[inline]
                fn $method(self) -> Self::Output { self.to_vector().map($Trait::$method) }
            }
        )*
    };
}

unary_ops!(Neg::neg, Not::not);

#[inline]
fn all_equal<A, B, const N: usize>(a: &A, b: &B) -> bool
where
    A: VectorLike<N> + ?Sized,
    B: VectorLike<N> + ?Sized,
    A::Elem: Promote<B::Elem>,
{
    (0..N).all(|i| a.get(i).promote() == <A::Elem as Promote<B::Elem>>::promote_rhs(b.get(i)))
}

impl<'a, S, P, U, const N: usize> PartialEq<Vector<U, N>> for Swizzle<'a, S, N, P>
where
    S: Slots,
    P: Pattern<N>,
    U: Scalar,
    S::Elem: Promote<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool { all_equal(self, other) }
}

impl<'a, S, P, T, const N: usize> PartialEq<Swizzle<'a, S, N, P>> for Vector<T, N>
where
    S: Slots,
    P: Pattern<N>,
    T: Promote<S::Elem>,
{
    fn eq(&self, other: &Swizzle<'a, S, N, P>) -> bool { all_equal(self, other) }
}

impl<'a, 'b, S, P, R, Q, const N: usize> PartialEq<Swizzle<'b, R, N, Q>> for Swizzle<'a, S, N, P>
where
    S: Slots,
    P: Pattern<N>,
    R: Slots,
    Q: Pattern<N>,
    S::Elem: Promote<R::Elem>,
{
    fn eq(&self, other: &Swizzle<'b, R, N, Q>) -> bool { all_equal(self, other) }
}

macro_rules! scalar_eq {
    ($($s:ty),*) => {
        $(
            impl<T: Promote<$s>> PartialEq<$s> for Vector<T, 1> {
                fn eq(&self, other: &$s) -> bool { all_equal(self, other) }
            }

            impl<T: Scalar> PartialEq<Vector<T, 1>> for $s
            where
                $s: Promote<T>,
            {
                fn eq(&self, other: &Vector<T, 1>) -> bool { all_equal(self, other) }
            }

            impl<'a, S: Slots, P: Pattern<1>> PartialEq<$s> for Swizzle<'a, S, 1, P>
            where
                S::Elem: Promote<$s>,
            {
                fn eq(&self, other: &$s) -> bool { all_equal(self, other) }
            }

            impl<'a, S: Slots, P: Pattern<1>> PartialEq<Swizzle<'a, S, 1, P>> for $s
            where
                $s: Promote<S::Elem>,
            {
                fn eq(&self, other: &Swizzle<'a, S, 1, P>) -> bool { all_equal(self, other) }
            }
        )*
    };
}

scalar_eq!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use core::ops::AddAssign;

    #[test]
    fn arithmetic_promotes() {
        let a = ivec3(1, 2, 3);
        let b = vec3(0.5, 0.5, 0.5);
        let c: Vec3 = a + b;
        assert_eq!(c, vec3(1.5, 2.5, 3.5));
        let d: DVec3 = b * dvec3(2.0, 4.0, 8.0);
        assert_eq!(d, dvec3(1.0, 2.0, 4.0));
        let e: Vector<u32, 2> = uvec2(7, 9) % ivec2(4, 5);
        assert_eq!(e, uvec2(3, 4));
        let f: IVec2 = Vector::new([1u8, 2]) + Vector::new([3i16, 4]);
        assert_eq!(f, ivec2(4, 6));
    }

    #[test]
    fn broadcasting() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v * 2.0f32, vec4(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0f32 * v, vec4(2.0, 4.0, 6.0, 8.0));
        assert_eq!(v - Vector::new([1.0f32]), vec4(0.0, 1.0, 2.0, 3.0));
        assert_eq!(Vector::new([1.0f32]) - v, vec4(0.0, -1.0, -2.0, -3.0));
        assert_eq!(v.xyz() / v.w(), vec3(0.25, 0.5, 0.75));
        assert_eq!(10 - ivec2(1, 2).yx(), ivec2(8, 9));
    }

    #[test]
    fn views_mix_with_vectors() {
        let v = ivec4(1, 2, 3, 4);
        assert_eq!(v.xy() + v.zw(), ivec2(4, 6));
        assert_eq!(v.wzyx() - v, ivec4(3, 1, -1, -3));
        assert_eq!(v - v.wzyx(), ivec4(-3, -1, 1, 3));
        assert_eq!(v.xxx() * ivec3(1, 2, 3), ivec3(1, 2, 3));
    }

    #[test]
    fn bitwise_keeps_operand_types() {
        let a = ivec2(0b1100, -1);
        let shifted: IVec2 = a << uvec2(1, 2);
        assert_eq!(shifted, ivec2(0b11000, -4));
        assert_eq!(uvec3(0b1010, 0b0110, 0xff) & 0x0fu32, uvec3(0b1010, 0b0110, 0x0f));
        assert_eq!(bvec2(true, false) ^ bvec2(true, true), bvec2(false, true));
        assert_eq!(!bvec3(true, false, true), bvec3(false, true, false));
        assert_eq!(!uvec2(0, u32::MAX), uvec2(u32::MAX, 0));
        assert_eq!(bvec2(true, false) | true, bvec2(true, true));
    }

    #[test]
    fn bitwise_and_shift_follow_scalar_classes() {
        use crate::ops::{OpBitAnd, OpBitXor, OpShl, OpShr, ScalarAssignOp, ScalarOp};
        use static_assertions::{assert_impl_all, assert_not_impl_any};

        assert_impl_all!(bool: ScalarOp<bool, OpBitAnd>, ScalarAssignOp<bool, OpBitXor>);
        assert_impl_all!(i32: ScalarOp<u32, OpShl>, ScalarOp<i32, OpBitAnd>, ScalarAssignOp<u8, OpShr>);
        assert_not_impl_any!(bool: ScalarOp<bool, OpShl>, ScalarAssignOp<bool, OpShr>);
        assert_not_impl_any!(f32: ScalarOp<f32, OpBitAnd>, ScalarOp<u32, OpShl>);
        assert_not_impl_any!(f64: ScalarAssignOp<f64, OpBitXor>);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn unsigned_overflow_panics_in_debug() { let _ = uvec2(u32::MAX, 0) + 1u32; }

    #[test]
    fn wrapping_goes_through_map() {
        assert_eq!(uvec2(u32::MAX, 0).map(|x| x.wrapping_add(1)), uvec2(0, 1));
        assert_eq!(ivec2(i32::MIN, 3).map(i32::wrapping_neg), ivec2(i32::MIN, -3));
    }

    #[test]
    fn negation() {
        assert_eq!(-vec2(1.0, -2.0), vec2(-1.0, 2.0));
        assert_eq!(-ivec3(1, 2, 3).zyx(), ivec3(-3, -2, -1));
    }

    #[test]
    fn compound_assignment() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += ivec3(1, 1, 1);
        v *= 2u8;
        v -= Vector::new([0.5f32]);
        assert_eq!(v, vec3(3.5, 5.5, 7.5));

        let mut i = ivec4(1, 2, 4, 8);
        i <<= 1u32;
        i |= ivec4(1, 0, 1, 0);
        i %= 5;
        assert_eq!(i, ivec4(3, 4, 4, 1));
    }

    #[test]
    fn compound_assignment_through_views() {
        let mut v = ivec4(1, 2, 3, 4);
        {
            let c = v.alias();
            c.xy().add_assign(c.zw());
            let mut wz = c.wz();
            wz *= 10;
            wz += c.xx();
        }
        assert_eq!(v, ivec4(4, 6, 34, 44));
    }

    #[test]
    fn compound_assignment_reads_before_writing() {
        let mut v = ivec3(1, 2, 3);
        {
            let c = v.alias();
            c.xyz().add_assign(c.zxy());
        }
        assert_eq!(v, ivec3(4, 3, 5));
    }

    #[test]
    fn equality() {
        let v = ivec4(1, 2, 3, 4);
        assert_eq!(v.zw(), ivec2(3, 4));
        assert_eq!(vec2(3.0, 4.0), v.zw());
        assert_eq!(v.xy(), v.wzyx().swizzle(Sel2::<3, 2>));
        assert_eq!(v.y(), 2);
        assert_eq!(2.0, v.y());
        assert_eq!(Vector::new([2u8]), 2u64);
        assert_ne!(v.x(), 1.5f32);
    }

    proptest::proptest! {
        #[test]
        fn scalar_sides_commute(a: i16, b: i16, c: i16, s: i16) {
            let v = Vector::new([a as i32, b as i32, c as i32]);
            let s = s as i32;
            proptest::prop_assert_eq!(v + s, s + v);
            proptest::prop_assert_eq!(v * s, s * v);
        }

        #[test]
        fn single_component_vectors_act_as_scalars(a: i16, b: i16, s: i16) {
            let v = Vector::new([a as i32, b as i32]);
            let one = Vector::new([s as i32]);
            proptest::prop_assert_eq!(v - one, v - s as i32);
            proptest::prop_assert_eq!(one * v, (s as i32) * v);
        }

        #[test]
        fn float_broadcast(a in -1.0e3f32..1.0e3, b in -1.0e3f32..1.0e3, s in -1.0e3f32..1.0e3) {
            let v = vec2(a, b);
            proptest::prop_assert_eq!(v + s, s + v);
            proptest::prop_assert_eq!(v + s, v + Vec2::splat(s));
        }
    }
}
