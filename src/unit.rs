//! Units as zero-sized marker types.
//!
//! A unit is a ([`Dimension`], [`Scale`]) pair carried entirely at the type
//! level: implementors of [`Unit`] are empty structs whose associated consts
//! describe them. Composite units are built with the combinators below
//! ([`Prod`], [`Inv`], [`Pow`], [`Root`], [`Pfx`]), whose consts are computed
//! from their parameters' consts: the dimension of `metre / second` is
//! derived rather than looked up, and is known before the program runs.

use std::marker::PhantomData;

use crate::dimension::Dimension;
use crate::scale::Scale;

/// A unit of measure, known entirely at compile time.
///
/// Every unit has a dimension (what physical quantity it measures) and a
/// scale (its rational prefix relative to the SI base unit of that
/// dimension). Units carry no data; `Quantity` stores only the raw value.
pub trait Unit: Copy + Clone + Default + std::fmt::Debug {
    /// The dimension of this unit.
    const DIMENSION: Dimension;

    /// Rational scale relative to the SI base unit,
    /// e.g. `1/100` for the centimetre.
    const SCALE: Scale;

    /// The scale as a floating factor.
    const FACTOR: f64 = Self::SCALE.factor();
}

/// An SI metric prefix (yocto…yotta), applied to a unit with [`Pfx`].
pub trait Prefix: Copy + Clone + Default + std::fmt::Debug {
    /// The prefix's rational ratio, e.g. `1/100` for centi.
    const RATIO: Scale;

    /// One-letter symbol used in formatting.
    const SYMBOL: char;
}

// =============================================================================
// Combinators
// =============================================================================

/// Product of two units: dimensions and scales compose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prod<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const DIMENSION: Dimension = A::DIMENSION.mul(&B::DIMENSION);
    const SCALE: Scale = A::SCALE.mul(B::SCALE);
}

/// Reciprocal of a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inv<U>(PhantomData<U>);

impl<U: Unit> Unit for Inv<U> {
    const DIMENSION: Dimension = U::DIMENSION.recip();
    const SCALE: Scale = U::SCALE.recip();
}

/// Quotient of two units, `A / B`.
pub type Per<A, B> = Prod<A, Inv<B>>;

/// A unit raised to an integer power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pow<U, const N: i32>(PhantomData<U>);

impl<U: Unit, const N: i32> Unit for Pow<U, N> {
    const DIMENSION: Dimension = U::DIMENSION.pow(N as i8);
    const SCALE: Scale = U::SCALE.pow(N);
}

/// The n-th root of a unit.
///
/// Instantiating a root whose dimension exponents are not all divisible by
/// `N` is a compile error: fractional dimensional exponents do not exist in
/// this model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Root<U, const N: i32>(PhantomData<U>);

impl<U: Unit, const N: i32> Unit for Root<U, N> {
    const DIMENSION: Dimension = {
        assert!(N > 0, "root degree must be positive");
        match U::DIMENSION.root(N as i8) {
            Some(d) => d,
            None => panic!("dimension exponents are not divisible by the root degree"),
        }
    };
    const SCALE: Scale = U::SCALE.root(N as u32);
}

/// A prefixed unit, e.g. `Pfx<Centi, Metre>` for the centimetre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pfx<P, U>(PhantomData<(P, U)>);

impl<P: Prefix, U: Unit> Unit for Pfx<P, U> {
    const DIMENSION: Dimension = U::DIMENSION;
    const SCALE: Scale = P::RATIO.mul(U::SCALE);
}

// =============================================================================
// Conversion
// =============================================================================

/// The factor converting a value expressed in `From` into `To`:
/// `value_to = value_from * conversion_factor::<From, To>()`.
///
/// Defined only between units of equal dimension; evaluating this for
/// mismatched dimensions fails const evaluation. Call it inside a `const`
/// block to guarantee the check happens while compiling.
pub const fn conversion_factor<From: Unit, To: Unit>() -> f64 {
    conversion_scale::<From, To>().factor()
}

/// Exact rational form of [`conversion_factor`].
pub const fn conversion_scale<From: Unit, To: Unit>() -> Scale {
    assert!(
        From::DIMENSION.equals(&To::DIMENSION),
        "units of different dimensions are never convertible"
    );
    From::SCALE.div(To::SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Centimetre, Kilometre, Metre, Second};

    #[test]
    fn composite_dimensions_are_derived() {
        assert!(<Per<Metre, Second>>::DIMENSION.equals(&Dimension::VELOCITY));
        assert!(<Prod<Metre, Metre>>::DIMENSION.equals(&Dimension::AREA));
        assert!(<Pow<Metre, 3>>::DIMENSION.equals(&Dimension::VOLUME));
        assert!(<Inv<Second>>::DIMENSION.equals(&Dimension::FREQUENCY));
        assert!(<Root<Pow<Metre, 2>, 2>>::DIMENSION.equals(&Dimension::LENGTH));
    }

    #[test]
    fn composite_scales_compose_exactly() {
        // cm · km = 10⁻² · 10³ = 10
        assert!(<Prod<Centimetre, Kilometre>>::SCALE.equals(&Scale::pow10(1)));
        assert!(<Inv<Centimetre>>::SCALE.equals(&Scale::pow10(2)));
        assert!(<Pow<Kilometre, 2>>::SCALE.equals(&Scale::pow10(6)));
    }

    #[test]
    fn conversion_factor_between_prefixes() {
        let m_to_cm = const { conversion_factor::<Metre, Centimetre>() };
        assert_eq!(m_to_cm, 100.0);
        let cm_to_m = const { conversion_factor::<Centimetre, Metre>() };
        assert_eq!(cm_to_m, 0.01);
        let cm_to_cm = const { conversion_scale::<Centimetre, Centimetre>() };
        assert!(cm_to_cm.is_one());
    }
}
