//! The SI unit system: base units, metric prefixes, and common derived and
//! prefixed units, all as zero-sized marker types.

mod base;
mod derived;
mod prefixes;

pub use base::{
    Ampere, Candela, Dimensionless, Kelvin, Kilogram, Metre, Mole, Radian, Second, Steradian,
};
pub use derived::{
    Centimetre, Centisecond, Coulomb, CubicMetre, Gram, Hertz, Joule, Kilometre, Litre,
    MetrePerSecond, MetrePerSecondSquared, Milligram, Millimetre, Millisecond, Newton, Ohm,
    Pascal, SquareMetre, Volt, Watt,
};
pub use prefixes::{
    Atto, Centi, Deca, Deci, Exa, Femto, Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, Peta,
    Pico, Tera, Yocto, Yotta, Zepto, Zetta,
};
