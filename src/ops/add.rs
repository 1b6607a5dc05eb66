//! Addition across value shapes.

use num_complex::Complex;

use super::{collect_array, ShapeAdd};
use crate::error::{Error, Result};

/// Scalar pairs, widened like mixed C arithmetic.
macro_rules! scalar_add {
    ($($lhs:ty, $rhs:ty => $wide:ty;)*) => {$(
        impl ShapeAdd<$rhs> for $lhs {
            type Output = $wide;

            #[inline]
            fn shape_add(self, rhs: $rhs) -> Result<$wide> {
                Ok(self as $wide + rhs as $wide)
            }
        }
    )*};
}

scalar_add! {
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

/// Complex numbers add componentwise, widening through the scalar rules.
impl<T1, T2> ShapeAdd<Complex<T2>> for Complex<T1>
where
    T1: ShapeAdd<T2>,
{
    type Output = Complex<T1::Output>;

    #[inline]
    fn shape_add(self, rhs: Complex<T2>) -> Result<Self::Output> {
        Ok(Complex::new(
            self.re.shape_add(rhs.re)?,
            self.im.shape_add(rhs.im)?,
        ))
    }
}

/// Fixed arrays add elementwise. Arrays of different lengths are different
/// types, so a length mismatch never reaches this code.
impl<T1, T2, const N: usize> ShapeAdd<[T2; N]> for [T1; N]
where
    T1: ShapeAdd<T2>,
{
    type Output = [T1::Output; N];

    fn shape_add(self, rhs: [T2; N]) -> Result<Self::Output> {
        let mut out = Vec::with_capacity(N);
        for (a, b) in self.into_iter().zip(rhs) {
            out.push(a.shape_add(b)?);
        }
        Ok(collect_array(out))
    }
}

/// Growable sequences add elementwise; mismatched lengths are a runtime
/// error.
impl<T1, T2> ShapeAdd<Vec<T2>> for Vec<T1>
where
    T1: ShapeAdd<T2>,
{
    type Output = Vec<T1::Output>;

    fn shape_add(self, rhs: Vec<T2>) -> Result<Self::Output> {
        if self.len() != rhs.len() {
            return Err(Error::ShapeMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        self.into_iter().zip(rhs).map(|(a, b)| a.shape_add(b)).collect()
    }
}

/// Scalars broadcast across containers on either side.
macro_rules! broadcast_add {
    ($($s:ty),*) => {$(
        impl<T, const N: usize> ShapeAdd<$s> for [T; N]
        where
            T: ShapeAdd<$s>,
        {
            type Output = [T::Output; N];

            fn shape_add(self, rhs: $s) -> Result<Self::Output> {
                let mut out = Vec::with_capacity(N);
                for a in self {
                    out.push(a.shape_add(rhs)?);
                }
                Ok(collect_array(out))
            }
        }

        impl<T, const N: usize> ShapeAdd<[T; N]> for $s
        where
            $s: ShapeAdd<T>,
        {
            type Output = [<$s as ShapeAdd<T>>::Output; N];

            fn shape_add(self, rhs: [T; N]) -> Result<Self::Output> {
                let mut out = Vec::with_capacity(N);
                for b in rhs {
                    out.push(self.shape_add(b)?);
                }
                Ok(collect_array(out))
            }
        }

        impl<T> ShapeAdd<$s> for Vec<T>
        where
            T: ShapeAdd<$s>,
        {
            type Output = Vec<T::Output>;

            fn shape_add(self, rhs: $s) -> Result<Self::Output> {
                self.into_iter().map(|a| a.shape_add(rhs)).collect()
            }
        }

        impl<T> ShapeAdd<Vec<T>> for $s
        where
            $s: ShapeAdd<T>,
        {
            type Output = Vec<<$s as ShapeAdd<T>>::Output>;

            fn shape_add(self, rhs: Vec<T>) -> Result<Self::Output> {
                rhs.into_iter().map(|b| self.shape_add(b)).collect()
            }
        }
    )*};
}

broadcast_add!(i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_widen() {
        assert_eq!(2i32.shape_add(3i32).unwrap(), 5i32);
        assert_eq!(2i32.shape_add(3i64).unwrap(), 5i64);
        assert_eq!(2i64.shape_add(0.5f64).unwrap(), 2.5f64);
        assert_eq!(1.5f32.shape_add(2i32).unwrap(), 3.5f32);
    }

    #[test]
    fn complex_adds_componentwise() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a.shape_add(b).unwrap(), Complex::new(4.0, 6.0));
    }

    #[test]
    fn arrays_add_elementwise() {
        let sum = [1, 2, 3].shape_add([4, 5, 6]).unwrap();
        assert_eq!(sum, [5, 7, 9]);

        // nested
        let sum = [[1, 2], [3, 4]].shape_add([[10, 20], [30, 40]]).unwrap();
        assert_eq!(sum, [[11, 22], [33, 44]]);
    }

    #[test]
    fn vecs_check_length() {
        let sum = vec![1, 2].shape_add(vec![3, 4]).unwrap();
        assert_eq!(sum, vec![4, 6]);

        let err = vec![1, 2].shape_add(vec![3]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { left: 2, right: 1 });
    }

    #[test]
    fn scalars_broadcast() {
        assert_eq!([1, 2, 3].shape_add(10).unwrap(), [11, 12, 13]);
        assert_eq!(10.shape_add([1, 2, 3]).unwrap(), [11, 12, 13]);
        assert_eq!(vec![1.0, 2.0].shape_add(0.5).unwrap(), vec![1.5, 2.5]);
    }
}
