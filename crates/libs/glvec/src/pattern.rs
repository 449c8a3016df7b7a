//! Compile-time index tuples selecting the components of a swizzle.
//!
//! A [`Pattern`] lists, in logical order, the physical slots a swizzle view
//! reads and writes. Patterns are zero-sized types; the selectors
//! [`Sel1`]..[`Sel4`] carry their indices as const generic parameters, and
//! [`Compose`] chains a pattern over another one (a swizzle of a swizzle).

use crate::storage::Slots;
use core::marker::PhantomData;

/// An ordered tuple of `C` physical indices.
pub trait Pattern<const C: usize>: Copy + 'static {
    /// The physical index of each logical component.
    const INDICES: [usize; C];

    /// Whether the indices are pairwise distinct, i.e. whether a view using
    /// this pattern can be assigned to.
    const WRITABLE: bool = all_distinct(&Self::INDICES);

    /// The largest physical index referenced.
    const MAX_INDEX: usize = max_index(&Self::INDICES);
}

/// Returns `true` if no index appears twice.
pub const fn all_distinct<const C: usize>(indices: &[usize; C]) -> bool {
    let mut i = 0;
    while i < C {
        let mut j = i + 1;
        while j < C {
            if indices[i] == indices[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Returns the largest index of the tuple (`0` for an empty one).
pub const fn max_index<const C: usize>(indices: &[usize; C]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < C {
        if indices[i] > max {
            max = indices[i];
        }
        i += 1;
    }
    max
}

const fn compose<const C: usize, const K: usize>(outer: &[usize; C], inner: &[usize; K]) -> [usize; K] {
    let mut out = [0; K];
    let mut i = 0;
    while i < K {
        out[i] = outer[inner[i]];
        i += 1;
    }
    out
}

macro_rules! impl_selector {
    ($($name:ident<$($idx:ident),+> => $count:literal, $what:literal;)*) => {
        $(
            #[doc = concat!("Selects ", $what, " by physical index.")]
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name<$(const $idx: usize),+>;

            impl<$(const $idx: usize),+> Pattern<$count> for $name<$($idx),+> {
                const INDICES: [usize; $count] = [$($idx),+];
            }
        )*
    };
}

impl_selector! {
    Sel1<A> => 1, "one component";
    Sel2<A, B> => 2, "two components";
    Sel3<A, B, C> => 3, "three components";
    Sel4<A, B, C, D> => 4, "four components";
}

/// The pattern `Q` applied on top of the pattern `P` of count `C`.
///
/// Logical component `k` of the result reads physical slot
/// `P::INDICES[Q::INDICES[k]]`.
pub struct Compose<P, Q, const C: usize>(PhantomData<fn() -> (P, Q)>);

impl<P, Q, const C: usize> Clone for Compose<P, Q, C> {
    fn clone(&self) -> Self { *self }
}

impl<P, Q, const C: usize> Copy for Compose<P, Q, C> {}

impl<P, Q, const C: usize, const K: usize> Pattern<K> for Compose<P, Q, C>
where
    P: Pattern<C>,
    Q: Pattern<K>,
{
    const INDICES: [usize; K] = {
        assert!(Q::MAX_INDEX < C, "nested swizzle index out of range");
        compose(&P::INDICES, &Q::INDICES)
    };
}

/// Compile-time validation of a pattern against a storage.
pub(crate) struct Checked<S, P, const C: usize>(PhantomData<fn() -> (S, P)>);

impl<S: Slots, P: Pattern<C>, const C: usize> Checked<S, P, C> {
    /// Every index addresses a slot of `S` and the count is in `[1, 4]`.
    pub(crate) const IN_RANGE: () = assert!(
        C >= 1 && C <= 4 && P::MAX_INDEX < S::SIZE,
        "swizzle index out of range"
    );

    /// The pattern can be written through.
    pub(crate) const WRITABLE: () = assert!(P::WRITABLE, "swizzle with repeated components is not writable");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writability_tracks_uniqueness() {
        assert!(<Sel3<0, 1, 2> as Pattern<3>>::WRITABLE);
        assert!(<Sel3<0, 2, 1> as Pattern<3>>::WRITABLE);
        assert!(<Sel4<3, 2, 1, 0> as Pattern<4>>::WRITABLE);
        assert!(<Sel1<2> as Pattern<1>>::WRITABLE);
        assert!(!<Sel3<0, 0, 1> as Pattern<3>>::WRITABLE);
        assert!(!<Sel3<1, 1, 1> as Pattern<3>>::WRITABLE);
        assert!(!<Sel2<3, 3> as Pattern<2>>::WRITABLE);
    }

    #[test]
    fn max_index() {
        assert_eq!(<Sel4<0, 3, 1, 2> as Pattern<4>>::MAX_INDEX, 3);
        assert_eq!(<Sel2<1, 0> as Pattern<2>>::MAX_INDEX, 1);
    }

    #[test]
    fn composition() {
        // (wzyx).yx == zw
        type P = Compose<Sel4<3, 2, 1, 0>, Sel2<1, 0>, 4>;
        assert_eq!(<P as Pattern<2>>::INDICES, [2, 3]);
        assert!(<P as Pattern<2>>::WRITABLE);

        // (xy).xx is not writable even though xy is.
        type Q = Compose<Sel2<0, 1>, Sel2<0, 0>, 2>;
        assert_eq!(<Q as Pattern<2>>::INDICES, [0, 0]);
        assert!(!<Q as Pattern<2>>::WRITABLE);
    }

    proptest::proptest! {
        #[test]
        fn distinct_matches_brute_force(a in 0usize..4, b in 0usize..4, c in 0usize..4) {
            let indices = [a, b, c];
            let expected = a != b && b != c && a != c;
            proptest::prop_assert_eq!(all_distinct(&indices), expected);
        }
    }
}
