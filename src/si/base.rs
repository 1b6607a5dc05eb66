//! The seven SI base units, plus the dimensionless unit and the two
//! dimensionless named units (radian, steradian).

use crate::dimension::Dimension;
use crate::scale::Scale;
use crate::unit::Unit;

macro_rules! base_unit {
    ($(#[$doc:meta])* $name:ident => $dim:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Unit for $name {
            const DIMENSION: Dimension = $dim;
            const SCALE: Scale = Scale::ONE;
        }
    };
}

base_unit! {
    /// The unit of pure numbers. Default unit of `Quantity`.
    Dimensionless => Dimension::DIMENSIONLESS
}

base_unit! {
    /// Metre, base unit of length.
    Metre => Dimension::LENGTH
}

base_unit! {
    /// Second, base unit of time.
    Second => Dimension::TIME
}

base_unit! {
    /// Kilogram, base unit of mass. The base unit carries the prefix, so
    /// the gram is `Pfx<Milli, Kilogram>`.
    Kilogram => Dimension::MASS
}

base_unit! {
    /// Kelvin, base unit of thermodynamic temperature.
    Kelvin => Dimension::TEMPERATURE
}

base_unit! {
    /// Ampere, base unit of electric current.
    Ampere => Dimension::CURRENT
}

base_unit! {
    /// Mole, base unit of amount of substance.
    Mole => Dimension::AMOUNT
}

base_unit! {
    /// Candela, base unit of luminous intensity.
    Candela => Dimension::LUMINOSITY
}

base_unit! {
    /// Radian, the dimensionless unit of plane angle.
    Radian => Dimension::DIMENSIONLESS
}

base_unit! {
    /// Steradian, the dimensionless unit of solid angle.
    Steradian => Dimension::DIMENSIONLESS
}
