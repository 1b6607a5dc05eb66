//! Values with an explicit uncertainty.
//!
//! A [`Measurement`] is a value and its absolute uncertainty, both in the
//! same unit. Arithmetic is componentwise: the values combine exactly as
//! [`Quantity`] values do, and the uncertainties combine with the same
//! operation. This is a bookkeeping model, not statistical error
//! propagation; uncorrelated errors that should add in quadrature are the
//! caller's responsibility.

use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::ops::{Rescale, ShapeAdd, ShapeInv, ShapeMul, ShapeNeg};
use crate::quantity::Quantity;
use crate::si::Dimensionless;
use crate::unit::{Per, Prod, Unit};

/// A value and its absolute uncertainty, tagged with a unit.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "V: serde::Serialize", deserialize = "V: serde::Deserialize<'de>"))
)]
pub struct Measurement<V, U: Unit = Dimensionless> {
    value: V,
    uncertainty: V,
    #[cfg_attr(feature = "serde", serde(skip))]
    _unit: PhantomData<U>,
}

impl<V, U: Unit> Measurement<V, U> {
    /// A measured value with the given absolute uncertainty.
    #[inline]
    pub const fn new(value: V, uncertainty: V) -> Self {
        Self {
            value,
            uncertainty,
            _unit: PhantomData,
        }
    }

    /// A value known exactly (zero uncertainty).
    #[inline]
    pub fn exact(value: V) -> Self
    where
        V: Default,
    {
        Self::new(value, V::default())
    }

    /// Pair two quantities of the same unit into a measurement.
    #[inline]
    pub fn from_quantities(value: Quantity<V, U>, uncertainty: Quantity<V, U>) -> Self {
        Self::new(value.into_value(), uncertainty.into_value())
    }

    /// The central value, as a quantity.
    #[inline]
    pub fn value(&self) -> Quantity<V, U>
    where
        V: Clone,
    {
        Quantity::new(self.value.clone())
    }

    /// The absolute uncertainty, as a quantity.
    #[inline]
    pub fn uncertainty(&self) -> Quantity<V, U>
    where
        V: Clone,
    {
        Quantity::new(self.uncertainty.clone())
    }

    pub(crate) fn parts(&self) -> (&V, &V) {
        (&self.value, &self.uncertainty)
    }
}

impl<V1, V2, U1, U2> Add<Measurement<V2, U2>> for Measurement<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V2: Rescale,
    V1: ShapeAdd<V2>,
{
    type Output = Measurement<V1::Output, U1>;

    fn add(self, rhs: Measurement<V2, U2>) -> Self::Output {
        const {
            assert!(
                U1::DIMENSION.equals(&U2::DIMENSION),
                "cannot add measurements of different dimensions"
            );
        }
        let scale = const { U2::SCALE.div(U1::SCALE) };
        let value = self
            .value
            .shape_add(rhs.value.rescale(scale))
            .unwrap_or_else(|e| panic!("{e}"));
        let uncertainty = self
            .uncertainty
            .shape_add(rhs.uncertainty.rescale(scale))
            .unwrap_or_else(|e| panic!("{e}"));
        Measurement::new(value, uncertainty)
    }
}

impl<V1, V2, U1, U2> Sub<Measurement<V2, U2>> for Measurement<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V2: ShapeNeg,
    V2::Output: Rescale,
    V1: ShapeAdd<V2::Output>,
{
    type Output = Measurement<<V1 as ShapeAdd<V2::Output>>::Output, U1>;

    fn sub(self, rhs: Measurement<V2, U2>) -> Self::Output {
        const {
            assert!(
                U1::DIMENSION.equals(&U2::DIMENSION),
                "cannot subtract measurements of different dimensions"
            );
        }
        let scale = const { U2::SCALE.div(U1::SCALE) };
        let value = self
            .value
            .shape_add(rhs.value.shape_neg().rescale(scale))
            .unwrap_or_else(|e| panic!("{e}"));
        let uncertainty = self
            .uncertainty
            .shape_add(rhs.uncertainty.shape_neg().rescale(scale))
            .unwrap_or_else(|e| panic!("{e}"));
        Measurement::new(value, uncertainty)
    }
}

impl<V1, V2, U1, U2> Mul<Measurement<V2, U2>> for Measurement<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V1: ShapeMul<V2>,
{
    type Output = Measurement<V1::Output, Prod<U1, U2>>;

    fn mul(self, rhs: Measurement<V2, U2>) -> Self::Output {
        let value = self
            .value
            .shape_mul(rhs.value)
            .unwrap_or_else(|e| panic!("{e}"));
        let uncertainty = self
            .uncertainty
            .shape_mul(rhs.uncertainty)
            .unwrap_or_else(|e| panic!("{e}"));
        Measurement::new(value, uncertainty)
    }
}

impl<V1, V2, U1, U2> Div<Measurement<V2, U2>> for Measurement<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V2: ShapeInv,
    V1: ShapeMul<V2::Output>,
{
    type Output = Measurement<<V1 as ShapeMul<V2::Output>>::Output, Per<U1, U2>>;

    fn div(self, rhs: Measurement<V2, U2>) -> Self::Output {
        let value = self
            .value
            .shape_mul(rhs.value.shape_inv())
            .unwrap_or_else(|e| panic!("{e}"));
        let uncertainty = self
            .uncertainty
            .shape_mul(rhs.uncertainty.shape_inv())
            .unwrap_or_else(|e| panic!("{e}"));
        Measurement::new(value, uncertainty)
    }
}

impl<V: ShapeNeg, U: Unit> Neg for Measurement<V, U> {
    type Output = Measurement<V::Output, U>;

    fn neg(self) -> Self::Output {
        Measurement::new(self.value.shape_neg(), self.uncertainty.shape_neg())
    }
}

impl<V: PartialEq, U: Unit> PartialEq for Measurement<V, U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.uncertainty == other.uncertainty
    }
}

impl<V: Eq, U: Unit> Eq for Measurement<V, U> {}

impl<V: Default, U: Unit> Default for Measurement<V, U> {
    fn default() -> Self {
        Self::new(V::default(), V::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::si::{Centimetre, Metre, Second};

    #[test]
    fn addition_converts_both_components() {
        let a = Measurement::<f64, Centimetre>::new(100.0, 1.0);
        let b = Measurement::<f64, Metre>::new(2.0, 0.01);
        let sum = a + b;
        assert_eq!(*sum.value().value(), 300.0);
        assert_eq!(*sum.uncertainty().value(), 2.0);
    }

    #[test]
    fn multiplication_composes_units() {
        let d = Measurement::<f64, Metre>::new(6.0, 0.2);
        let t = Measurement::<f64, Second>::new(2.0, 0.1);
        let v = d / t;
        assert!(v.value().dimension().equals(&Dimension::VELOCITY));
        assert_eq!(*v.value().value(), 3.0);
        assert_eq!(*v.uncertainty().value(), 2.0);
    }

    #[test]
    fn exact_has_zero_uncertainty() {
        let m = Measurement::<i32, Metre>::exact(5);
        assert_eq!(*m.uncertainty().value(), 0);
        assert_eq!(m, Measurement::new(5, 0));
    }
}
