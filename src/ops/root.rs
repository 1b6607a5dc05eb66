//! n-th roots across value shapes.
//!
//! The unit layer guarantees the root degree divides the dimension exponents
//! before any of this runs; these impls only take roots of the raw values.

use num_complex::Complex;

use super::ShapeRoot;

impl ShapeRoot for f32 {
    type Output = f32;

    #[inline]
    fn shape_root(self, n: i32) -> f32 {
        self.powf(1.0 / n as f32)
    }
}

impl ShapeRoot for f64 {
    type Output = f64;

    #[inline]
    fn shape_root(self, n: i32) -> f64 {
        self.powf(1.0 / n as f64)
    }
}

macro_rules! int_root {
    ($($t:ty),*) => {$(
        impl ShapeRoot for $t {
            type Output = f64;

            #[inline]
            fn shape_root(self, n: i32) -> f64 {
                (self as f64).powf(1.0 / n as f64)
            }
        }
    )*};
}

int_root!(i32, i64);

impl ShapeRoot for Complex<f32> {
    type Output = Complex<f32>;

    #[inline]
    fn shape_root(self, n: i32) -> Complex<f32> {
        self.powf(1.0 / n as f32)
    }
}

impl ShapeRoot for Complex<f64> {
    type Output = Complex<f64>;

    #[inline]
    fn shape_root(self, n: i32) -> Complex<f64> {
        self.powf(1.0 / n as f64)
    }
}

macro_rules! int_complex_root {
    ($($t:ty),*) => {$(
        impl ShapeRoot for Complex<$t> {
            type Output = Complex<f64>;

            #[inline]
            fn shape_root(self, n: i32) -> Complex<f64> {
                Complex::new(self.re as f64, self.im as f64).powf(1.0 / n as f64)
            }
        }
    )*};
}

int_complex_root!(i32, i64);

impl<T: ShapeRoot, const N: usize> ShapeRoot for [T; N] {
    type Output = [T::Output; N];

    fn shape_root(self, n: i32) -> Self::Output {
        self.map(|v| v.shape_root(n))
    }
}

impl<T: ShapeRoot> ShapeRoot for Vec<T> {
    type Output = Vec<T::Output>;

    fn shape_root(self, n: i32) -> Self::Output {
        self.into_iter().map(|v| v.shape_root(n)).collect()
    }
}
