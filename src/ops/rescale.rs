//! Conversion-factor application across value shapes.

use num_complex::Complex;

use super::Rescale;
use crate::scale::Scale;

/// Integers rescale through exact rational arithmetic: widen to `i128`,
/// multiply by the numerator first, then divide (truncating). Converting
/// 2 m to cm multiplies by 100/1 and stays exact; converting 150 cm to m
/// truncates to 1.
macro_rules! int_rescale {
    ($($t:ty),*) => {$(
        impl Rescale for $t {
            #[inline]
            fn rescale(self, scale: Scale) -> $t {
                ((self as i128 * scale.numerator()) / scale.denominator()) as $t
            }
        }
    )*};
}

int_rescale!(i32, i64);

impl Rescale for f32 {
    #[inline]
    fn rescale(self, scale: Scale) -> f32 {
        self * scale.factor() as f32
    }
}

impl Rescale for f64 {
    #[inline]
    fn rescale(self, scale: Scale) -> f64 {
        self * scale.factor()
    }
}

impl<T: Rescale> Rescale for Complex<T> {
    #[inline]
    fn rescale(self, scale: Scale) -> Self {
        Complex::new(self.re.rescale(scale), self.im.rescale(scale))
    }
}

impl<T: Rescale, const N: usize> Rescale for [T; N] {
    fn rescale(self, scale: Scale) -> Self {
        self.map(|v| v.rescale(scale))
    }
}

impl<T: Rescale> Rescale for Vec<T> {
    fn rescale(self, scale: Scale) -> Self {
        self.into_iter().map(|v| v.rescale(scale)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_scale_is_a_no_op() {
        assert_eq!(7i32.rescale(Scale::ONE), 7);
        assert_eq!(7.5f64.rescale(Scale::ONE), 7.5);
    }

    #[test]
    fn integers_stay_exact_when_possible() {
        // 2 m → 200 cm
        assert_eq!(2i32.rescale(Scale::pow10(2)), 200);
        // 150 cm → 1 m (truncated)
        assert_eq!(150i64.rescale(Scale::pow10(-2)), 1);
    }

    #[test]
    fn containers_rescale_elementwise() {
        assert_eq!([1.0, 2.0].rescale(Scale::pow10(3)), [1000.0, 2000.0]);
        assert_eq!(vec![1, 2].rescale(Scale::pow10(2)), vec![100, 200]);
        let z = Complex::new(1.0, -2.0).rescale(Scale::pow10(-2));
        assert_eq!(z, Complex::new(0.01, -0.02));
    }
}
