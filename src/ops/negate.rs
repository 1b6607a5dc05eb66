//! Negation across value shapes. Subtraction is addition of a negation, so
//! this is the only shape knowledge subtraction needs.

use num_complex::Complex;

use super::ShapeNeg;

macro_rules! scalar_neg {
    ($($t:ty),*) => {$(
        impl ShapeNeg for $t {
            type Output = $t;

            #[inline]
            fn shape_neg(self) -> $t {
                -self
            }
        }
    )*};
}

scalar_neg!(i32, i64, f32, f64);

impl<T: ShapeNeg> ShapeNeg for Complex<T> {
    type Output = Complex<T::Output>;

    #[inline]
    fn shape_neg(self) -> Self::Output {
        Complex::new(self.re.shape_neg(), self.im.shape_neg())
    }
}

impl<T: ShapeNeg, const N: usize> ShapeNeg for [T; N] {
    type Output = [T::Output; N];

    fn shape_neg(self) -> Self::Output {
        self.map(ShapeNeg::shape_neg)
    }
}

impl<T: ShapeNeg> ShapeNeg for Vec<T> {
    type Output = Vec<T::Output>;

    fn shape_neg(self) -> Self::Output {
        self.into_iter().map(ShapeNeg::shape_neg).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negates_every_shape() {
        assert_eq!(3i32.shape_neg(), -3);
        assert_eq!(Complex::new(1.0, -2.0).shape_neg(), Complex::new(-1.0, 2.0));
        assert_eq!([1, -2, 3].shape_neg(), [-1, 2, -3]);
        assert_eq!(vec![1.5, -0.5].shape_neg(), vec![-1.5, 0.5]);
    }
}
