//! Capabilities shared by every vector-shaped value.

use crate::{
    scalar::{Numeric, SafeCast, Scalar},
    storage::{CellStorage, Storage},
    vector::Vector,
};

/// Anything with `C` readable components of one scalar type.
///
/// Implemented by [`Vector`], by swizzle views, by the storage blocks, and by
/// every scalar type as a vector of one component. Functions and operators
/// taking a `VectorLike` therefore accept all of them interchangeably.
pub trait VectorLike<const C: usize> {
    /// The component type.
    type Elem: Scalar;

    /// Returns the component at logical position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    fn get(&self, index: usize) -> Self::Elem;

    /// Returns the number of components.
    #[inline(always)]
    fn size(&self) -> usize { C }

    /// Copies the components out into an array.
    #[inline]
    fn to_array(&self) -> [Self::Elem; C] { core::array::from_fn(|i| self.get(i)) }

    /// Copies the components out into a fresh vector.
    #[inline]
    fn to_vector(&self) -> Vector<Self::Elem, C> { Vector::new(self.to_array()) }
}

/// A [`VectorLike`] whose components can be written.
pub trait VectorLikeMut<const C: usize>: VectorLike<C> {
    /// Writes the component at logical position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Writes all components, in logical order.
    fn set_components(&mut self, values: [Self::Elem; C]) {
        for (i, value) in values.into_iter().enumerate() {
            self.set(i, value);
        }
    }

    /// Assigns the components of `src`.
    ///
    /// All values are read before any is written, so `src` may alias `self`.
    fn assign<V>(&mut self, src: &V)
    where
        V: VectorLike<C> + ?Sized,
        V::Elem: SafeCast<Self::Elem>,
    {
        let values = core::array::from_fn(|i| src.get(i).safe_cast());
        self.set_components(values);
    }

    /// Adds one to every component and returns the new value.
    fn inc(&mut self) -> Vector<Self::Elem, C>
    where
        Self::Elem: Numeric,
    {
        let next = self.to_vector().map(|x| x + num_traits::one());
        self.set_components(next.to_array());
        next
    }

    /// Subtracts one from every component and returns the new value.
    fn dec(&mut self) -> Vector<Self::Elem, C>
    where
        Self::Elem: Numeric,
    {
        let next = self.to_vector().map(|x| x - num_traits::one());
        self.set_components(next.to_array());
        next
    }

    /// Adds one to every component and returns the previous value.
    fn post_inc(&mut self) -> Vector<Self::Elem, C>
    where
        Self::Elem: Numeric,
    {
        let prev = self.to_vector();
        self.inc();
        prev
    }

    /// Subtracts one from every component and returns the previous value.
    fn post_dec(&mut self) -> Vector<Self::Elem, C>
    where
        Self::Elem: Numeric,
    {
        let prev = self.to_vector();
        self.dec();
        prev
    }
}

impl<V: VectorLike<C> + ?Sized, const C: usize> VectorLike<C> for &V {
    type Elem = V::Elem;

    #[inline(always)]
    fn get(&self, index: usize) -> V::Elem { (**self).get(index) }
}

impl<V: VectorLike<C> + ?Sized, const C: usize> VectorLike<C> for &mut V {
    type Elem = V::Elem;

    #[inline(always)]
    fn get(&self, index: usize) -> V::Elem { (**self).get(index) }
}

impl<V: VectorLikeMut<C> + ?Sized, const C: usize> VectorLikeMut<C> for &mut V {
    #[inline(always)]
    fn set(&mut self, index: usize, value: V::Elem) { (**self).set(index, value) }
}

macro_rules! impl_vector_like_for_scalar {
    ($($t:ty),*) => {
        $(
            impl VectorLike<1> for $t {
                type Elem = $t;

                #[inline(always)]
                fn get(&self, index: usize) -> $t { [*self][index] }
            }
        )*
    };
}

impl_vector_like_for_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: Scalar, const N: usize> VectorLike<N> for Storage<T, N> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, index: usize) -> T { self.0[index] }
}

impl<T: Scalar, const N: usize> VectorLike<N> for CellStorage<T, N> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, index: usize) -> T { CellStorage::get(self, index) }
}

impl<'a, T: Scalar, const N: usize> VectorLikeMut<N> for &'a CellStorage<T, N> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) { CellStorage::set(self, index, value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec3, Swizzle4, Vector};

    fn sum<V: VectorLike<C, Elem = i32>, const C: usize>(v: &V) -> i32 { v.to_array().iter().sum() }

    #[test]
    fn scalars_are_count_one() {
        assert_eq!(VectorLike::<1>::size(&5i32), 1);
        assert_eq!(VectorLike::<1>::get(&5i32, 0), 5);
        assert_eq!(VectorLike::<1>::to_vector(&2.5f64), Vector::new([2.5]));
        assert_eq!(sum(&7), 7);
    }

    #[test]
    #[should_panic]
    fn scalar_index_out_of_range() { let _ = VectorLike::<1>::get(&1u8, 1); }

    #[test]
    fn every_form_reads_alike() {
        let mut v = Vector::new([1, 2, 3, 4]);
        assert_eq!(sum(&v), 10);
        assert_eq!(sum(&v.storage), 10);
        assert_eq!(sum(&v.wzyx()), 10);
        assert_eq!(sum(&&v), 10);
        let cells = v.alias();
        assert_eq!(sum(cells), 10);
        assert_eq!(sum(&cells.xy()), 3);
    }

    #[test]
    fn increment_and_decrement() {
        let mut v = vec3(1.0f32, 2.0, 3.0);
        assert_eq!(v.post_inc(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v, vec3(2.0, 3.0, 4.0));
        assert_eq!(v.dec(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v.post_dec(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v.inc(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn assign_through_cells() {
        let mut v = Vector::new([1u32, 2, 3]);
        {
            let mut cells = v.alias();
            cells.assign(&Vector::new([7u8, 8, 9]));
            cells.set(0, 10);
        }
        assert_eq!(v, Vector::new([10, 8, 9]));
    }
}
