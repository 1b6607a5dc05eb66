//! Common derived and prefixed units, as type aliases over the combinators.

use super::base::{Ampere, Kilogram, Metre, Second};
use super::prefixes::{Centi, Kilo, Micro, Milli};
use crate::unit::{Inv, Per, Pfx, Pow, Prod};

// Prefixed lengths and times

pub type Centimetre = Pfx<Centi, Metre>;
pub type Millimetre = Pfx<Milli, Metre>;
pub type Kilometre = Pfx<Kilo, Metre>;
pub type Centisecond = Pfx<Centi, Second>;
pub type Millisecond = Pfx<Milli, Second>;

// Masses. The kilogram is the base unit, so the gram is a milli-kilogram.

pub type Gram = Pfx<Milli, Kilogram>;
pub type Milligram = Pfx<Micro, Kilogram>;

// Geometry and kinematics

pub type SquareMetre = Pow<Metre, 2>;
pub type CubicMetre = Pow<Metre, 3>;
/// One litre is a cubic decimetre, i.e. a thousandth of a cubic metre.
pub type Litre = Pfx<Milli, CubicMetre>;
pub type MetrePerSecond = Per<Metre, Second>;
pub type MetrePerSecondSquared = Per<Metre, Pow<Second, 2>>;

// Named derived units

pub type Hertz = Inv<Second>;
pub type Newton = Per<Prod<Kilogram, Metre>, Pow<Second, 2>>;
pub type Joule = Prod<Newton, Metre>;
pub type Watt = Per<Joule, Second>;
pub type Pascal = Per<Newton, SquareMetre>;
pub type Coulomb = Prod<Ampere, Second>;
pub type Volt = Per<Watt, Ampere>;
pub type Ohm = Per<Volt, Ampere>;
