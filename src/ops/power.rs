//! Integer powers across value shapes.

use num_complex::Complex;

use super::ShapePow;

impl ShapePow for f32 {
    type Output = f32;

    #[inline]
    fn shape_pow(self, n: i32) -> f32 {
        self.powi(n)
    }
}

impl ShapePow for f64 {
    type Output = f64;

    #[inline]
    fn shape_pow(self, n: i32) -> f64 {
        self.powi(n)
    }
}

/// Integers promote: a negative exponent leaves the integers anyway, and a
/// uniform output type keeps `pow` usable in generic code.
macro_rules! int_pow {
    ($($t:ty),*) => {$(
        impl ShapePow for $t {
            type Output = f64;

            #[inline]
            fn shape_pow(self, n: i32) -> f64 {
                (self as f64).powi(n)
            }
        }
    )*};
}

int_pow!(i32, i64);

impl ShapePow for Complex<f32> {
    type Output = Complex<f32>;

    #[inline]
    fn shape_pow(self, n: i32) -> Complex<f32> {
        self.powi(n)
    }
}

impl ShapePow for Complex<f64> {
    type Output = Complex<f64>;

    #[inline]
    fn shape_pow(self, n: i32) -> Complex<f64> {
        self.powi(n)
    }
}

macro_rules! int_complex_pow {
    ($($t:ty),*) => {$(
        impl ShapePow for Complex<$t> {
            type Output = Complex<f64>;

            #[inline]
            fn shape_pow(self, n: i32) -> Complex<f64> {
                Complex::new(self.re as f64, self.im as f64).powi(n)
            }
        }
    )*};
}

int_complex_pow!(i32, i64);

impl<T: ShapePow, const N: usize> ShapePow for [T; N] {
    type Output = [T::Output; N];

    fn shape_pow(self, n: i32) -> Self::Output {
        self.map(|v| v.shape_pow(n))
    }
}

impl<T: ShapePow> ShapePow for Vec<T> {
    type Output = Vec<T::Output>;

    fn shape_pow(self, n: i32) -> Self::Output {
        self.into_iter().map(|v| v.shape_pow(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_every_shape() {
        assert_eq!(3.0f64.shape_pow(2), 9.0);
        assert_eq!(2.0f64.shape_pow(-1), 0.5);
        assert_eq!(3i32.shape_pow(3), 27.0);
        assert_eq!([2.0, 3.0].shape_pow(2), [4.0, 9.0]);
    }

    #[test]
    fn complex_powers() {
        // (1 + i)² = 2i
        let z = Complex::new(1.0f64, 1.0).shape_pow(2);
        assert!((z.re).abs() < 1e-12);
        assert!((z.im - 2.0).abs() < 1e-12);
    }
}
