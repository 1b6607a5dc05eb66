//! Multiplication across value shapes.

use std::ops::{Add, Sub};

use num_complex::Complex;

use super::{collect_array, ShapeMul};
use crate::error::{Error, Result};

/// Scalar pairs, widened like mixed C arithmetic.
macro_rules! scalar_mul {
    ($($lhs:ty, $rhs:ty => $wide:ty;)*) => {$(
        impl ShapeMul<$rhs> for $lhs {
            type Output = $wide;

            #[inline]
            fn shape_mul(self, rhs: $rhs) -> Result<$wide> {
                Ok(self as $wide * rhs as $wide)
            }
        }
    )*};
}

scalar_mul! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

/// Complex numbers use the complex product, with components widened through
/// the scalar rules: `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
impl<T1, T2, W> ShapeMul<Complex<T2>> for Complex<T1>
where
    T1: ShapeMul<T2, Output = W> + Copy,
    T2: Copy,
    W: Add<Output = W> + Sub<Output = W>,
{
    type Output = Complex<W>;

    #[inline]
    fn shape_mul(self, rhs: Complex<T2>) -> Result<Complex<W>> {
        let re = self.re.shape_mul(rhs.re)? - self.im.shape_mul(rhs.im)?;
        let im = self.re.shape_mul(rhs.im)? + self.im.shape_mul(rhs.re)?;
        Ok(Complex::new(re, im))
    }
}

/// Fixed arrays multiply elementwise (Hadamard, not inner product).
impl<T1, T2, const N: usize> ShapeMul<[T2; N]> for [T1; N]
where
    T1: ShapeMul<T2>,
{
    type Output = [T1::Output; N];

    fn shape_mul(self, rhs: [T2; N]) -> Result<Self::Output> {
        let mut out = Vec::with_capacity(N);
        for (a, b) in self.into_iter().zip(rhs) {
            out.push(a.shape_mul(b)?);
        }
        Ok(collect_array(out))
    }
}

/// Growable sequences multiply elementwise; mismatched lengths are a runtime
/// error.
impl<T1, T2> ShapeMul<Vec<T2>> for Vec<T1>
where
    T1: ShapeMul<T2>,
{
    type Output = Vec<T1::Output>;

    fn shape_mul(self, rhs: Vec<T2>) -> Result<Self::Output> {
        if self.len() != rhs.len() {
            return Err(Error::ShapeMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        self.into_iter().zip(rhs).map(|(a, b)| a.shape_mul(b)).collect()
    }
}

/// Scalars broadcast across containers on either side.
macro_rules! broadcast_mul {
    ($($s:ty),*) => {$(
        impl<T, const N: usize> ShapeMul<$s> for [T; N]
        where
            T: ShapeMul<$s>,
        {
            type Output = [T::Output; N];

            fn shape_mul(self, rhs: $s) -> Result<Self::Output> {
                let mut out = Vec::with_capacity(N);
                for a in self {
                    out.push(a.shape_mul(rhs)?);
                }
                Ok(collect_array(out))
            }
        }

        impl<T, const N: usize> ShapeMul<[T; N]> for $s
        where
            $s: ShapeMul<T>,
        {
            type Output = [<$s as ShapeMul<T>>::Output; N];

            fn shape_mul(self, rhs: [T; N]) -> Result<Self::Output> {
                let mut out = Vec::with_capacity(N);
                for b in rhs {
                    out.push(self.shape_mul(b)?);
                }
                Ok(collect_array(out))
            }
        }

        impl<T> ShapeMul<$s> for Vec<T>
        where
            T: ShapeMul<$s>,
        {
            type Output = Vec<T::Output>;

            fn shape_mul(self, rhs: $s) -> Result<Self::Output> {
                self.into_iter().map(|a| a.shape_mul(rhs)).collect()
            }
        }

        impl<T> ShapeMul<Vec<T>> for $s
        where
            $s: ShapeMul<T>,
        {
            type Output = Vec<<$s as ShapeMul<T>>::Output>;

            fn shape_mul(self, rhs: Vec<T>) -> Result<Self::Output> {
                rhs.into_iter().map(|b| self.shape_mul(b)).collect()
            }
        }
    )*};
}

broadcast_mul!(i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_widen() {
        assert_eq!(2i32.shape_mul(3i32).unwrap(), 6i32);
        assert_eq!(2i32.shape_mul(3i64).unwrap(), 6i64);
        assert_eq!(4i64.shape_mul(0.5f64).unwrap(), 2.0f64);
        assert_eq!(1.5f32.shape_mul(2i32).unwrap(), 3.0f32);
    }

    #[test]
    fn complex_uses_the_complex_product() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a.shape_mul(b).unwrap(), Complex::new(-5.0, 10.0));
    }

    #[test]
    fn complex_components_widen() {
        let a = Complex::new(1i32, 2i32);
        let b = Complex::new(3i64, 4i64);
        let p: Complex<i64> = a.shape_mul(b).unwrap();
        assert_eq!(p, Complex::new(-5i64, 10i64));
    }

    #[test]
    fn arrays_multiply_elementwise() {
        let p = [1.0, 2.0, 3.0].shape_mul([4.0, 5.0, 6.0]).unwrap();
        assert_eq!(p, [4.0, 10.0, 18.0]);
    }

    #[test]
    fn vecs_check_length() {
        let p = vec![1, 2, 3].shape_mul(vec![2, 2, 2]).unwrap();
        assert_eq!(p, vec![2, 4, 6]);
        assert!(vec![1].shape_mul(vec![1, 2]).is_err());
    }

    #[test]
    fn scalars_broadcast() {
        assert_eq!([1, 2, 3].shape_mul(2).unwrap(), [2, 4, 6]);
        assert_eq!(2.shape_mul(vec![1, 2, 3]).unwrap(), vec![2, 4, 6]);
    }
}
