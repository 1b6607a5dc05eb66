//! The twenty SI metric prefixes, yocto through yotta.
//!
//! Symbols are plain ASCII: micro is `u` and deca is `D` (to stay distinct
//! from deci's `d`).

use crate::scale::Scale;
use crate::unit::Prefix;

macro_rules! prefix {
    ($(#[$doc:meta])* $name:ident => $exp:literal, $sym:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Prefix for $name {
            const RATIO: Scale = Scale::pow10($exp);
            const SYMBOL: char = $sym;
        }
    };
}

prefix! { /// 10⁻²⁴
    Yocto => -24, 'y' }
prefix! { /// 10⁻²¹
    Zepto => -21, 'z' }
prefix! { /// 10⁻¹⁸
    Atto => -18, 'a' }
prefix! { /// 10⁻¹⁵
    Femto => -15, 'f' }
prefix! { /// 10⁻¹²
    Pico => -12, 'p' }
prefix! { /// 10⁻⁹
    Nano => -9, 'n' }
prefix! { /// 10⁻⁶
    Micro => -6, 'u' }
prefix! { /// 10⁻³
    Milli => -3, 'm' }
prefix! { /// 10⁻²
    Centi => -2, 'c' }
prefix! { /// 10⁻¹
    Deci => -1, 'd' }
prefix! { /// 10¹
    Deca => 1, 'D' }
prefix! { /// 10²
    Hecto => 2, 'h' }
prefix! { /// 10³
    Kilo => 3, 'k' }
prefix! { /// 10⁶
    Mega => 6, 'M' }
prefix! { /// 10⁹
    Giga => 9, 'G' }
prefix! { /// 10¹²
    Tera => 12, 'T' }
prefix! { /// 10¹⁵
    Peta => 15, 'P' }
prefix! { /// 10¹⁸
    Exa => 18, 'E' }
prefix! { /// 10²¹
    Zetta => 21, 'Z' }
prefix! { /// 10²⁴
    Yotta => 24, 'Y' }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_are_the_expected_powers_of_ten() {
        assert!(Kilo::RATIO.equals(&Scale::new(1000, 1)));
        assert!(Centi::RATIO.equals(&Scale::new(1, 100)));
        assert!(Yocto::RATIO.equals(&Scale::pow10(-24)));
        assert!(Yotta::RATIO.equals(&Scale::pow10(24)));
    }
}
