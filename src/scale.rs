//! Exact rational scale factors (metric prefixes).
//!
//! A [`Scale`] is a reduced rational number stored as an `i128`
//! numerator/denominator pair. Multiply, invert and integer power are exact;
//! only [`Scale::root`] may fall back to a floating approximation, because a
//! prefix raised to a root rarely stays rational (see the method docs for the
//! precision contract).
//!
//! All operations are `const fn` so scales can be composed in associated
//! consts and checked while the program is compiled.

/// A reduced rational scale factor, `numerator / denominator`.
///
/// Values are always positive; the identity scale (no prefix) is
/// [`Scale::ONE`]. In practice scales are populated from the 20 SI prefixes
/// (yocto…yotta), but the representation is not restricted to powers of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    num: i128,
    den: i128,
}

const APPROX_DEN: i128 = 1_000_000_000_000;

impl Scale {
    /// The identity scale (factor 1, no prefix).
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Create a scale from a numerator/denominator pair, reducing to lowest
    /// terms. Both components must be positive.
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(num > 0 && den > 0, "scale components must be positive");
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// 10ⁿ as an exact rational, for any `n` in the i128 range (|n| ≤ 38).
    pub const fn pow10(n: i32) -> Self {
        let mut value: i128 = 1;
        let mut i = 0;
        let abs = if n < 0 { -n } else { n };
        while i < abs {
            value *= 10;
            i += 1;
        }
        if n < 0 {
            Self { num: 1, den: value }
        } else {
            Self { num: value, den: 1 }
        }
    }

    pub const fn numerator(&self) -> i128 {
        self.num
    }

    pub const fn denominator(&self) -> i128 {
        self.den
    }

    /// The scale as a floating factor, used for value conversion of
    /// float-shaped quantities and for display.
    pub const fn factor(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Componentwise equality, usable in const context.
    pub const fn equals(&self, other: &Scale) -> bool {
        self.num == other.num && self.den == other.den
    }

    // ==========================================================================
    // Algebra (exact)
    // ==========================================================================

    /// Exact rational product.
    pub const fn mul(self, other: Scale) -> Scale {
        Scale::new(self.num * other.num, self.den * other.den)
    }

    /// Exact reciprocal.
    pub const fn recip(self) -> Scale {
        Scale {
            num: self.den,
            den: self.num,
        }
    }

    /// Exact quotient, `self / other`.
    pub const fn div(self, other: Scale) -> Scale {
        self.mul(other.recip())
    }

    /// Exact integer power (negative exponents invert).
    pub const fn pow(self, n: i32) -> Scale {
        let base = if n < 0 { self.recip() } else { self };
        let abs = if n < 0 { -n } else { n };
        let mut acc = Scale::ONE;
        let mut i = 0;
        while i < abs {
            acc = acc.mul(base);
            i += 1;
        }
        acc
    }

    /// n-th root of the scale, `n > 0`.
    ///
    /// Exact when both numerator and denominator are perfect n-th powers
    /// (which covers every power-of-ten prefix whose exponent is divisible by
    /// `n`, e.g. `sqrt(10⁶) = 10³`). Otherwise the root is approximated in
    /// `f64` and re-encoded as a rational with denominator 10¹², so the
    /// result carries at most ~12 significant decimal digits. Round-tripping
    /// an inexact root through [`Scale::pow`] will not recover the original
    /// scale exactly.
    pub const fn root(self, n: u32) -> Scale {
        assert!(n > 0, "root degree must be positive");
        if let (Some(rn), Some(rd)) = (iroot(self.num, n), iroot(self.den, n)) {
            return Scale { num: rn, den: rd };
        }
        let approx = nth_root_f64(self.factor(), n);
        let num = (approx * APPROX_DEN as f64) as i128;
        assert!(num > 0, "scale root underflowed the rational encoding");
        Scale::new(num, APPROX_DEN)
    }

    /// Truncated base-10 logarithm of the factor, computed exactly on the
    /// rational (truncation toward zero, matching an `f64` `log10` cast).
    /// Drives the prefix-letter lookup in the formatting layer.
    pub(crate) const fn digits(&self) -> i32 {
        if self.num >= self.den {
            // floor(log10(f)) for f >= 1, which equals the truncation
            let mut p = self.den;
            let mut e = 0;
            while p <= self.num / 10 {
                p *= 10;
                e += 1;
            }
            e
        } else {
            // f < 1: floor is negative; truncation rounds up unless f is an
            // exact power of ten
            let mut p = self.num;
            let mut k = 0;
            while p < self.den {
                p *= 10;
                k += 1;
            }
            if p == self.den {
                -k
            } else {
                -k + 1
            }
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a;
    let mut b = b;
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exact integer n-th root: `Some(r)` iff `r.pow(n) == v`.
const fn iroot(v: i128, n: u32) -> Option<i128> {
    if v <= 0 {
        return None;
    }
    if v == 1 || n == 1 {
        return Some(v);
    }
    let mut lo: i128 = 1;
    let mut hi: i128 = v;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match ipow_checked(mid, n) {
            Some(p) if p == v => return Some(mid),
            Some(p) if p < v => lo = mid + 1,
            _ => hi = mid - 1,
        }
    }
    None
}

const fn ipow_checked(base: i128, n: u32) -> Option<i128> {
    let mut acc: i128 = 1;
    let mut i = 0;
    while i < n {
        acc = match acc.checked_mul(base) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    Some(acc)
}

/// Newton iteration for the positive n-th root of a positive f64.
const fn nth_root_f64(x: f64, n: u32) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let nf = n as f64;
    let mut g = if x >= 1.0 { x } else { 1.0 };
    let mut i = 0;
    while i < 256 {
        // g ← ((n-1)·g + x / gⁿ⁻¹) / n
        let mut p = 1.0;
        let mut k = 1;
        while k < n {
            p *= g;
            k += 1;
        }
        g = ((nf - 1.0) * g + x / p) / nf;
        i += 1;
    }
    g
}
