//! Physical storage of vector components.
//!
//! [`Storage`] is the single owner of a vector's components: a fixed array
//! of `N` elements, `N` in `[1, 4]`. [`CellStorage`] is the same block of
//! memory seen as `[Cell<T>; N]`; it is handed out by a unique borrow of a
//! [`Storage`] and lets any number of swizzle views read and write the
//! components at the same time.

use crate::scalar::Scalar;
use core::{
    cell::Cell,
    fmt::{Debug, Formatter},
    ops::{Deref, DerefMut, Index, IndexMut},
};

/// Compile-time check of a vector dimension.
pub(crate) struct Dim<const N: usize>;

impl<const N: usize> Dim<N> {
    pub(crate) const VALID: () = assert!(N >= 1 && N <= 4, "vector dimension must be in [1, 4]");
}

/// Read access to the physical slots behind a swizzle view.
pub trait Slots {
    /// The type of the elements stored.
    type Elem: Scalar;
    /// Number of physical slots.
    const SIZE: usize;

    /// Reads the element in physical slot `index`.
    fn load(&self, index: usize) -> Self::Elem;
}

/// Slots that can be written through a shared reference.
///
/// Only [`CellStorage`] implements this; swizzle views over it are the only
/// views that can be assigned to.
pub trait SlotsMut: Slots {
    /// Writes `value` into physical slot `index`.
    fn store(&self, index: usize, value: Self::Elem);

    /// Returns the cell of physical slot `index`.
    fn cell(&self, index: usize) -> &Cell<Self::Elem>;
}

/// A fixed-sized array of `N` elements stored inline.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Storage<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> Storage<T, N> {
    /// Creates a storage block holding `data`.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        let () = Dim::<N>::VALID;
        Self(data)
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub const fn size(&self) -> usize { N }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn at(&self, index: usize) -> &T { &self.0[index] }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut T { &mut self.0[index] }

    /// Returns a pointer to the first element.
    #[inline]
    pub const fn as_ptr(&self) -> *const T { self.0.as_ptr() }

    /// Returns a mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T { self.0.as_mut_ptr() }

    /// Returns the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns an iterator over the elements in physical order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.0.iter() }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.0.iter_mut() }

    /// Consumes the storage, returning the underlying array.
    #[inline]
    pub fn into_inner(self) -> [T; N] { self.0 }

    /// Views the storage as an array of cells.
    ///
    /// The unique borrow is held for as long as the cells are in use, which
    /// makes every write through the returned reference visible through the
    /// storage once the borrow ends.
    #[inline]
    pub fn as_cells(&mut self) -> &CellStorage<T, N> {
        // SAFETY: `Cell<T>` has the same in-memory representation as `T`,
        // so `[T; N]` and `[Cell<T>; N]` share layout, and `CellStorage` is
        // `repr(transparent)` over the latter. The unique borrow of `self`
        // rules out any other access for the lifetime of the result.
        unsafe { &*(&mut self.0 as *mut [T; N] as *const CellStorage<T, N>) }
    }
}

impl<T: Copy + Default, const N: usize> Default for Storage<T, N> {
    fn default() -> Self { Self::new([T::default(); N]) }
}

impl<T: Debug, const N: usize> Debug for Storage<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Storage({:?})", &self.0))
    }
}

impl<T, const N: usize> Deref for Storage<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T, const N: usize> DerefMut for Storage<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl<T, const N: usize> From<[T; N]> for Storage<T, N> {
    fn from(array: [T; N]) -> Self { Self::new(array) }
}

impl<T, const N: usize> IntoIterator for Storage<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Storage<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Storage<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
}

impl<T: Scalar, const N: usize> Slots for Storage<T, N> {
    type Elem = T;
    const SIZE: usize = N;

    #[inline(always)]
    fn load(&self, index: usize) -> T { self.0[index] }
}

/// The components of a [`Storage`] seen as cells.
///
/// Obtained from [`Storage::as_cells`] or [`Vector::alias`]. Every swizzle
/// view created from the same `CellStorage` aliases the same memory: a write
/// through one of them is immediately visible through all others.
///
/// `CellStorage` is not `Sync`; aliased writes are confined to one thread.
///
/// [`Vector::alias`]: crate::Vector::alias
#[repr(transparent)]
pub struct CellStorage<T, const N: usize>([Cell<T>; N]);

impl<T: Copy, const N: usize> CellStorage<T, N> {
    /// Returns the number of elements.
    #[inline(always)]
    pub const fn size(&self) -> usize { N }

    /// Returns the cell at physical position `index`.
    #[inline]
    pub fn cell_at(&self, index: usize) -> &Cell<T> { &self.0[index] }

    /// Reads the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> T { self.0[index].get() }

    /// Writes the element at `index`.
    #[inline]
    pub fn set(&self, index: usize, value: T) { self.0[index].set(value) }

    /// Writes all elements at once.
    #[inline]
    pub fn set_components(&self, values: [T; N]) {
        for (cell, value) in self.0.iter().zip(values) {
            cell.set(value);
        }
    }

    /// Copies the current elements out.
    #[inline]
    pub fn to_storage(&self) -> Storage<T, N> { Storage::new(core::array::from_fn(|i| self.get(i))) }

    /// Returns an iterator over the current elements in physical order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ { self.0.iter().map(Cell::get) }
}

impl<T: Copy + Debug, const N: usize> Debug for CellStorage<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("CellStorage({:?})", self.to_storage().0))
    }
}

impl<T: Scalar, const N: usize> Slots for CellStorage<T, N> {
    type Elem = T;
    const SIZE: usize = N;

    #[inline(always)]
    fn load(&self, index: usize) -> T { self.0[index].get() }
}

impl<T: Scalar, const N: usize> SlotsMut for CellStorage<T, N> {
    #[inline(always)]
    fn store(&self, index: usize, value: T) { self.0[index].set(value) }

    #[inline(always)]
    fn cell(&self, index: usize) -> &Cell<T> { &self.0[index] }
}

impl<T, const N: usize> Index<usize> for Storage<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T { &self.0[index] }
}

impl<T, const N: usize> IndexMut<usize> for Storage<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.0[index] }
}

static_assertions::assert_eq_size!(Storage<f32, 3>, [f32; 3]);
static_assertions::assert_eq_size!(CellStorage<f64, 4>, [f64; 4]);
static_assertions::assert_not_impl_any!(CellStorage<f32, 4>: Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_access() {
        let mut storage = Storage::new([1, 2, 3]);
        assert_eq!(storage.size(), 3);
        assert_eq!(*storage.at(1), 2);
        *storage.at_mut(2) = 7;
        assert_eq!(storage.as_slice(), &[1, 2, 7]);
        assert_eq!(storage.iter().copied().sum::<i32>(), 10);
        for x in storage.iter_mut() {
            *x *= 2;
        }
        assert_eq!(storage.into_inner(), [2, 4, 14]);
    }

    #[test]
    fn storage_is_contiguous() {
        let storage = Storage::new([1.0f32, 2.0, 3.0, 4.0]);
        let base = storage.as_ptr();
        for i in 0..4 {
            // SAFETY: `i` is within the four elements of the storage.
            assert_eq!(unsafe { *base.add(i) }, storage[i]);
        }
    }

    #[test]
    fn storage_debug() {
        let storage = Storage::new([1, 2]);
        assert_eq!(format!("{:?}", storage), "Storage([1, 2])");
    }

    #[test]
    fn cells_alias_the_storage() {
        let mut storage = Storage::new([1u32, 2, 3, 4]);
        {
            let cells = storage.as_cells();
            let a = cells.cell_at(0);
            let b = cells.cell_at(0);
            a.set(10);
            assert_eq!(b.get(), 10);
            cells.set(3, 40);
            assert_eq!(cells.load(3), 40);
            cells.set_components([5, 6, 7, 8]);
            assert_eq!(cells.iter().collect::<Vec<_>>(), vec![5, 6, 7, 8]);
        }
        assert_eq!(storage.0, [5, 6, 7, 8]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        let storage = Storage::new([1, 2]);
        let _ = storage.at(2);
    }
}
