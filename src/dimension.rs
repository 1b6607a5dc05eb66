//! Type-level dimensional analysis.
//!
//! Every physical quantity has dimensions in the 7 SI base quantities.
//! A [`Dimension`] is a vector of seven signed exponents; all of its algebra
//! is `const fn`, so it can be evaluated in associated-const position and a
//! dimension error becomes a compile error rather than a runtime branch.

/// Exponents of the 7 SI base quantities.
///
/// Field order follows the SI base-symbol table (`m s kg K A mol cd`):
/// - L: Length (metre)
/// - T: Time (second)
/// - M: Mass (kilogram)
/// - Θ: Thermodynamic temperature (kelvin)
/// - I: Electric current (ampere)
/// - N: Amount of substance (mole)
/// - J: Luminous intensity (candela)
///
/// Derived dimensions are products of powers:
/// - Velocity = L T⁻¹
/// - Force = M L T⁻²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Length exponent [L]
    pub length: i8,
    /// Time exponent [T]
    pub time: i8,
    /// Mass exponent [M]
    pub mass: i8,
    /// Temperature exponent [Θ]
    pub temperature: i8,
    /// Electric current exponent [I]
    pub current: i8,
    /// Amount of substance exponent [N]
    pub amount: i8,
    /// Luminous intensity exponent [J]
    pub luminosity: i8,
}

impl Dimension {
    // ==========================================================================
    // Base dimensions
    // ==========================================================================

    /// Dimensionless (pure number)
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Length [L] - metre
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);

    /// Time [T] - second
    pub const TIME: Self = Self::new(0, 1, 0, 0, 0, 0, 0);

    /// Mass [M] - kilogram
    pub const MASS: Self = Self::new(0, 0, 1, 0, 0, 0, 0);

    /// Temperature [Θ] - kelvin
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 1, 0, 0, 0);

    /// Electric current [I] - ampere
    pub const CURRENT: Self = Self::new(0, 0, 0, 0, 1, 0, 0);

    /// Amount of substance [N] - mole
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 1, 0);

    /// Luminous intensity [J] - candela
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    // ==========================================================================
    // Common derived dimensions
    // ==========================================================================

    /// Area [L²]
    pub const AREA: Self = Self::new(2, 0, 0, 0, 0, 0, 0);

    /// Volume [L³]
    pub const VOLUME: Self = Self::new(3, 0, 0, 0, 0, 0, 0);

    /// Velocity [L T⁻¹]
    pub const VELOCITY: Self = Self::new(1, -1, 0, 0, 0, 0, 0);

    /// Acceleration [L T⁻²]
    pub const ACCELERATION: Self = Self::new(1, -2, 0, 0, 0, 0, 0);

    /// Force [M L T⁻²] - newton
    pub const FORCE: Self = Self::new(1, -2, 1, 0, 0, 0, 0);

    /// Energy [M L² T⁻²] - joule
    pub const ENERGY: Self = Self::new(2, -2, 1, 0, 0, 0, 0);

    /// Power [M L² T⁻³] - watt
    pub const POWER: Self = Self::new(2, -3, 1, 0, 0, 0, 0);

    /// Pressure [M L⁻¹ T⁻²] - pascal
    pub const PRESSURE: Self = Self::new(-1, -2, 1, 0, 0, 0, 0);

    /// Frequency [T⁻¹] - hertz
    pub const FREQUENCY: Self = Self::new(0, -1, 0, 0, 0, 0, 0);

    /// Electric charge [I T] - coulomb
    pub const CHARGE: Self = Self::new(0, 1, 0, 0, 1, 0, 0);

    /// Voltage [M L² T⁻³ I⁻¹] - volt
    pub const VOLTAGE: Self = Self::new(2, -3, 1, 0, -1, 0, 0);

    // ==========================================================================
    // Constructor
    // ==========================================================================

    /// Create a new dimension with the given exponents.
    pub const fn new(
        length: i8,
        time: i8,
        mass: i8,
        temperature: i8,
        current: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            length,
            time,
            mass,
            temperature,
            current,
            amount,
            luminosity,
        }
    }

    // ==========================================================================
    // Algebra
    // ==========================================================================

    /// Multiply dimensions (add exponents): [A] × [B] = [A × B].
    /// Identity: [`Dimension::DIMENSIONLESS`].
    pub const fn mul(&self, other: &Dimension) -> Dimension {
        Dimension {
            length: self.length + other.length,
            time: self.time + other.time,
            mass: self.mass + other.mass,
            temperature: self.temperature + other.temperature,
            current: self.current + other.current,
            amount: self.amount + other.amount,
            luminosity: self.luminosity + other.luminosity,
        }
    }

    /// Divide dimensions (subtract exponents): [A] / [B].
    pub const fn div(&self, other: &Dimension) -> Dimension {
        self.mul(&other.recip())
    }

    /// Reciprocal (negate all exponents): [A]⁻¹.
    pub const fn recip(&self) -> Dimension {
        Dimension {
            length: -self.length,
            time: -self.time,
            mass: -self.mass,
            temperature: -self.temperature,
            current: -self.current,
            amount: -self.amount,
            luminosity: -self.luminosity,
        }
    }

    /// Raise to an integer power (multiply all exponents): [A]ⁿ.
    pub const fn pow(&self, n: i8) -> Dimension {
        Dimension {
            length: self.length * n,
            time: self.time * n,
            mass: self.mass * n,
            temperature: self.temperature * n,
            current: self.current * n,
            amount: self.amount * n,
            luminosity: self.luminosity * n,
        }
    }

    /// n-th root (divide all exponents by `n`).
    ///
    /// Returns `None` when any exponent is not evenly divisible by `n`:
    /// fractional dimensional exponents are not representable.
    pub const fn root(&self, n: i8) -> Option<Dimension> {
        if !self.root_exact(n) {
            return None;
        }
        Some(Dimension {
            length: self.length / n,
            time: self.time / n,
            mass: self.mass / n,
            temperature: self.temperature / n,
            current: self.current / n,
            amount: self.amount / n,
            luminosity: self.luminosity / n,
        })
    }

    /// Whether every exponent is evenly divisible by `n`.
    pub const fn root_exact(&self, n: i8) -> bool {
        n != 0
            && self.length % n == 0
            && self.time % n == 0
            && self.mass % n == 0
            && self.temperature % n == 0
            && self.current % n == 0
            && self.amount % n == 0
            && self.luminosity % n == 0
    }

    // ==========================================================================
    // Predicates
    // ==========================================================================

    /// Check if dimensionless.
    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Self::DIMENSIONLESS)
    }

    /// Componentwise equality, usable in const context.
    pub const fn equals(&self, other: &Dimension) -> bool {
        self.length == other.length
            && self.time == other.time
            && self.mass == other.mass
            && self.temperature == other.temperature
            && self.current == other.current
            && self.amount == other.amount
            && self.luminosity == other.luminosity
    }

    /// Exponents in base-symbol-table order.
    pub const fn exponents(&self) -> [i8; 7] {
        [
            self.length,
            self.time,
            self.mass,
            self.temperature,
            self.current,
            self.amount,
            self.luminosity,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_adds_exponents() {
        // Force = Mass × Acceleration = M × L T⁻²
        let force = Dimension::MASS.mul(&Dimension::ACCELERATION);
        assert!(force.equals(&Dimension::FORCE));

        // Velocity = Length / Time
        let velocity = Dimension::LENGTH.div(&Dimension::TIME);
        assert!(velocity.equals(&Dimension::VELOCITY));
    }

    #[test]
    fn recip_is_inverse() {
        // A × A⁻¹ = 1
        let a = Dimension::ENERGY;
        assert!(a.mul(&a.recip()).is_dimensionless());

        // (A × B) × B⁻¹ = A
        let b = Dimension::TIME;
        assert!(a.mul(&b).mul(&b.recip()).equals(&a));

        // 1/T = frequency
        assert!(Dimension::TIME.recip().equals(&Dimension::FREQUENCY));
    }

    #[test]
    fn pow_and_root_round_trip() {
        let dims = [
            Dimension::LENGTH,
            Dimension::VELOCITY,
            Dimension::FORCE,
            Dimension::DIMENSIONLESS,
        ];
        for d in dims {
            for n in [1i8, 2, 3, -2] {
                let p = d.pow(n);
                let r = p.root(n).expect("power then root must be exact");
                assert!(r.equals(&d), "root(pow({d:?}, {n}), {n}) failed");
            }
        }
    }

    #[test]
    fn root_rejects_non_divisible() {
        // sqrt(L²) = L
        assert!(Dimension::AREA.root(2).unwrap().equals(&Dimension::LENGTH));
        // sqrt(L³) has no integer exponents
        assert!(Dimension::VOLUME.root(2).is_none());
        assert!(!Dimension::VOLUME.root_exact(2));
        // degree zero is never exact
        assert!(Dimension::AREA.root(0).is_none());
    }

    #[test]
    fn pow_multiplies_exponents() {
        assert!(Dimension::LENGTH.pow(3).equals(&Dimension::VOLUME));
        assert!(Dimension::LENGTH.pow(-1).equals(&Dimension::LENGTH.recip()));
    }
}
