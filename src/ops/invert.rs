//! Multiplicative inverse across value shapes. Division is multiplication by
//! an inverse, which is also why integer division of quantities yields `f64`.

use num_complex::Complex;

use super::ShapeInv;

impl ShapeInv for f32 {
    type Output = f32;

    #[inline]
    fn shape_inv(self) -> f32 {
        self.recip()
    }
}

impl ShapeInv for f64 {
    type Output = f64;

    #[inline]
    fn shape_inv(self) -> f64 {
        self.recip()
    }
}

macro_rules! int_inv {
    ($($t:ty),*) => {$(
        impl ShapeInv for $t {
            type Output = f64;

            #[inline]
            fn shape_inv(self) -> f64 {
                (self as f64).recip()
            }
        }
    )*};
}

int_inv!(i32, i64);

/// Complex inverse is the complex reciprocal, `z̄ / |z|²`, not a
/// componentwise one.
impl ShapeInv for Complex<f32> {
    type Output = Complex<f32>;

    #[inline]
    fn shape_inv(self) -> Complex<f32> {
        self.inv()
    }
}

impl ShapeInv for Complex<f64> {
    type Output = Complex<f64>;

    #[inline]
    fn shape_inv(self) -> Complex<f64> {
        self.inv()
    }
}

macro_rules! int_complex_inv {
    ($($t:ty),*) => {$(
        impl ShapeInv for Complex<$t> {
            type Output = Complex<f64>;

            #[inline]
            fn shape_inv(self) -> Complex<f64> {
                Complex::new(self.re as f64, self.im as f64).inv()
            }
        }
    )*};
}

int_complex_inv!(i32, i64);

impl<T: ShapeInv, const N: usize> ShapeInv for [T; N] {
    type Output = [T::Output; N];

    fn shape_inv(self) -> Self::Output {
        self.map(ShapeInv::shape_inv)
    }
}

impl<T: ShapeInv> ShapeInv for Vec<T> {
    type Output = Vec<T::Output>;

    fn shape_inv(self) -> Self::Output {
        self.into_iter().map(ShapeInv::shape_inv).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_invert_in_place() {
        assert_eq!(4.0f64.shape_inv(), 0.25);
        assert_eq!(2.0f32.shape_inv(), 0.5);
    }

    #[test]
    fn integers_promote() {
        let r: f64 = 4i32.shape_inv();
        assert_eq!(r, 0.25);
        let r: f64 = 8i64.shape_inv();
        assert_eq!(r, 0.125);
    }

    #[test]
    fn complex_reciprocal() {
        // 1 / (0 + 2i) = -0.5i
        let z = Complex::new(0.0, 2.0).shape_inv();
        assert_eq!(z, Complex::new(0.0, -0.5));
    }

    #[test]
    fn containers_invert_elementwise() {
        assert_eq!([2.0, 4.0].shape_inv(), [0.5, 0.25]);
        assert_eq!(vec![2i32, 4].shape_inv(), vec![0.5, 0.25]);
    }
}
