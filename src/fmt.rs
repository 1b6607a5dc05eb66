//! Human-readable rendering of quantities.
//!
//! A quantity prints as `value unit`, where the unit part is the prefix
//! letter in parentheses (when the scale has one) followed by the dimension
//! in base symbols: `1 (c)m`, `9.81 m s^-2`, `[1 2 3] (k)m`.
//!
//! The prefix letter is looked up from the truncated base-10 logarithm of
//! the scale, rounding up to the next prefix when the scale falls between
//! two (a scale of 10⁴ prints as `(M)`). A scale outside the prefix table
//! (beyond 10±²⁴) fails const evaluation, so such a quantity can hold values
//! and do arithmetic but cannot be `Display`ed.

use std::fmt;

use num_complex::Complex;

use crate::dimension::Dimension;
use crate::measurement::Measurement;
use crate::quantity::Quantity;
use crate::scale::Scale;
use crate::si::{
    Atto, Centi, Deca, Deci, Exa, Femto, Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, Peta,
    Pico, Tera, Yocto, Yotta, Zepto, Zetta,
};
use crate::unit::{Prefix, Unit};

/// Base-unit symbols in exponent order.
const BASE_SYMBOLS: [&str; 7] = ["m", "s", "kg", "K", "A", "mol", "cd"];

const fn prefix_entry<P: Prefix>() -> (i32, char) {
    (P::RATIO.digits(), P::SYMBOL)
}

/// SI prefixes by decimal exponent, ascending. Populated from the [`Prefix`]
/// marker types so the symbols here cannot drift from `si::prefixes`.
const PREFIXES: [(i32, char); 20] = [
    prefix_entry::<Yocto>(),
    prefix_entry::<Zepto>(),
    prefix_entry::<Atto>(),
    prefix_entry::<Femto>(),
    prefix_entry::<Pico>(),
    prefix_entry::<Nano>(),
    prefix_entry::<Micro>(),
    prefix_entry::<Milli>(),
    prefix_entry::<Centi>(),
    prefix_entry::<Deci>(),
    prefix_entry::<Deca>(),
    prefix_entry::<Hecto>(),
    prefix_entry::<Kilo>(),
    prefix_entry::<Mega>(),
    prefix_entry::<Giga>(),
    prefix_entry::<Tera>(),
    prefix_entry::<Peta>(),
    prefix_entry::<Exa>(),
    prefix_entry::<Zetta>(),
    prefix_entry::<Yotta>(),
];

/// The prefix letter for a scale, or `None` for the identity.
///
/// Fails const evaluation when the scale's magnitude is outside the prefix
/// table; call it in const position so that becomes a compile error.
pub(crate) const fn prefix_char(scale: Scale) -> Option<char> {
    let digits = scale.digits();
    if digits == 0 {
        return None;
    }
    assert!(
        -24 <= digits && digits <= 24,
        "scale is outside the SI prefix range"
    );
    let mut i = 0;
    while i < PREFIXES.len() {
        // first prefix at or above the scale
        if PREFIXES[i].0 >= digits {
            return Some(PREFIXES[i].1);
        }
        i += 1;
    }
    None
}

/// The dimension in base symbols, e.g. `m s^-2`. Empty for dimensionless.
pub fn dimension_string(dim: &Dimension) -> String {
    let mut parts: Vec<String> = Vec::new();
    let exps = dim.exponents();
    for (sym, exp) in BASE_SYMBOLS.iter().zip(exps) {
        match exp {
            0 => {}
            1 => parts.push((*sym).to_string()),
            e => parts.push(format!("{sym}^{e}")),
        }
    }
    parts.join(" ")
}

/// The display form of a unit: prefix letter in parentheses, then the
/// dimension symbols. `(c)m` for the centimetre, `m s^-1` for metres per
/// second, empty for the plain dimensionless unit.
pub fn unit_string<U: Unit>() -> String {
    let prefix = const { prefix_char(U::SCALE) };
    let dim = dimension_string(&U::DIMENSION);
    match prefix {
        Some(c) => format!("({c}){dim}"),
        None => dim,
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dimension_string(self))
    }
}

/// Rendering of raw values inside quantities.
///
/// Scalars defer to their `Display`; containers print space-separated in
/// square brackets; complex numbers print as an ordered pair. Nesting
/// recurses, so `[Complex<f64>; 2]` prints as `[(1, 2) (3, 4)]`.
pub trait DisplayValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! scalar_display {
    ($($t:ty),*) => {$(
        impl DisplayValue for $t {
            fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{self}")
            }
        }
    )*};
}

scalar_display!(i32, i64, f32, f64);

impl<T: DisplayValue> DisplayValue for Complex<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.re.fmt_value(f)?;
        f.write_str(", ")?;
        self.im.fmt_value(f)?;
        f.write_str(")")
    }
}

fn fmt_sequence<'a, T: DisplayValue + 'a>(
    items: impl Iterator<Item = &'a T>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        item.fmt_value(f)?;
    }
    f.write_str("]")
}

impl<T: DisplayValue, const N: usize> DisplayValue for [T; N] {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(self.iter(), f)
    }
}

impl<T: DisplayValue> DisplayValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(self.iter(), f)
    }
}

impl<V: DisplayValue, U: Unit> fmt::Display for Quantity<V, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt_value(f)?;
        let unit = unit_string::<U>();
        if !unit.is_empty() {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}

impl<V: DisplayValue, U: Unit> fmt::Display for Measurement<V, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, uncertainty) = self.parts();
        value.fmt_value(f)?;
        f.write_str(" ± ")?;
        uncertainty.fmt_value(f)?;
        let unit = unit_string::<U>();
        if !unit.is_empty() {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}
