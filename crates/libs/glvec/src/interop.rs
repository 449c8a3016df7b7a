//! Conversions between vectors and plain arrays and slices.

use crate::{
    error::{Error, Result},
    vector::Vector,
};

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Copies the leading components from `src`, as many as both hold.
    ///
    /// Returns the number of components written. Components past the end of
    /// a shorter `src` are left untouched.
    pub fn copy_from_slice_prefix(&mut self, src: &[T]) -> usize {
        let n = src.len().min(N);
        if n < src.len() {
            log::trace!("Copying {} of {} slice elements into a vector of size {}", n, src.len(), N);
        } else if n < N {
            log::trace!("Slice of {} elements only fills part of a vector of size {}", n, N);
        }
        self.as_mut_array()[..n].copy_from_slice(&src[..n]);
        n
    }

    /// Creates a vector from the first `N` elements of `src`.
    pub fn try_from_slice(src: &[T]) -> Result<Self> {
        match src.get(..N) {
            Some(head) => {
                let mut components = [src[0]; N];
                components.copy_from_slice(head);
                Ok(Self::new(components))
            }
            None => Err(Error::SliceTooShort {
                expected: N,
                found: src.len(),
            }),
        }
    }

    /// Writes the components to the first `N` elements of `dst`.
    pub fn write_to_slice(&self, dst: &mut [T]) -> Result<()> {
        let found = dst.len();
        let head = dst.get_mut(..N).ok_or(Error::SliceTooShort { expected: N, found })?;
        head.copy_from_slice(self.as_array());
        Ok(())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self { Self::new(components) }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self { v.storage.into_inner() }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self> { Self::try_from_slice(src) }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] { self.as_array() }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_array() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn arrays() {
        let v: Vec3 = [1.0, 2.0, 3.0].into();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
        let a: [i32; 2] = ivec2(4, 5).into();
        assert_eq!(a, [4, 5]);
        assert_eq!(uvec3(1, 2, 3).as_ref(), &[1, 2, 3]);
        let mut w = ivec2(0, 0);
        w.as_mut()[1] = 9;
        assert_eq!(w, ivec2(0, 9));
    }

    #[test]
    fn prefix_copy() {
        let mut v = ivec4(0, 0, 0, 0);
        assert_eq!(v.copy_from_slice_prefix(&[1, 2]), 2);
        assert_eq!(v, ivec4(1, 2, 0, 0));
        assert_eq!(v.copy_from_slice_prefix(&[5, 6, 7, 8, 9, 10]), 4);
        assert_eq!(v, ivec4(5, 6, 7, 8));
        assert_eq!(v.copy_from_slice_prefix(&[]), 0);
        assert_eq!(v, ivec4(5, 6, 7, 8));
    }

    #[test]
    fn fallible_slices() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(Vec4::try_from_slice(&data), Ok(vec4(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(Vec2::try_from(&data[3..]), Ok(vec2(4.0, 5.0)));
        assert_eq!(
            Vec4::try_from_slice(&data[..3]),
            Err(Error::SliceTooShort { expected: 4, found: 3 })
        );
        assert!(Vec2::try_from_slice(&[]).is_err());

        let mut out = [0.0f32; 3];
        vec2(7.0, 8.0).write_to_slice(&mut out).unwrap();
        assert_eq!(out, [7.0, 8.0, 0.0]);
        assert_eq!(
            vec4(1.0, 1.0, 1.0, 1.0).write_to_slice(&mut out),
            Err(Error::SliceTooShort { expected: 4, found: 3 })
        );
    }
}
