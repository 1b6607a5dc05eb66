//! Unit-tagged values.
//!
//! [`Quantity`] pairs a raw value with a unit marker type. The unit costs
//! nothing at run time (`Quantity<f64, Metre>` is layout-identical to `f64`)
//! and arithmetic carries it through the type system: multiplying metres by
//! metres yields square metres, adding metres to seconds does not compile.
//!
//! Mixing units of the same dimension is allowed and converts the right-hand
//! side into the left-hand unit first, so `1 cm + 1 m` is `101 cm`. The
//! conversion factor is evaluated in const position and is exact rational
//! arithmetic for integer values.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex;

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::ops::{Rescale, ShapeAdd, ShapeInv, ShapeMul, ShapeNeg, ShapePow, ShapeRoot};
use crate::scale::Scale;
use crate::si::Dimensionless;
use crate::unit::{conversion_scale, Inv, Per, Pow, Prod, Root, Unit};

/// A value tagged with a unit of measure.
///
/// `V` is the value shape (scalar, complex, array, `Vec`, or nestings of
/// those); `U` is a zero-sized [`Unit`] marker and defaults to
/// [`Dimensionless`]. The default does not drive inference, so constructing
/// from a bare literal needs the value type spelled out:
/// `Quantity::<i32>::new(42)`.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(serialize = "V: serde::Serialize", deserialize = "V: serde::Deserialize<'de>")
    )
)]
pub struct Quantity<V, U: Unit = Dimensionless> {
    value: V,
    _unit: PhantomData<U>,
}

impl<V, U: Unit> Quantity<V, U> {
    /// Tag a raw value with the unit `U`.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Borrow the raw value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Discard the unit and take the raw value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// The quantity's dimension.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    /// The unit's scale relative to the SI base unit, as a float.
    #[inline]
    pub const fn factor(&self) -> f64 {
        U::FACTOR
    }

    /// Convert into another unit of the same dimension.
    ///
    /// Converting across dimensions does not compile. Integer values convert
    /// through exact rational arithmetic and truncate when the target unit is
    /// coarser.
    #[inline]
    pub fn convert<To: Unit>(self) -> Quantity<V, To>
    where
        V: Rescale,
    {
        let scale = const { conversion_scale::<U, To>() };
        Quantity::new(self.value.rescale(scale))
    }

    /// Fallible addition. The unit rules are identical to `+` (same
    /// dimension enforced while compiling, right side converted into `U`);
    /// only value-shape failures surface as an `Err`.
    pub fn try_add<V2, U2>(self, rhs: Quantity<V2, U2>) -> Result<Quantity<V::Output, U>>
    where
        U2: Unit,
        V2: Rescale,
        V: ShapeAdd<V2>,
    {
        const {
            assert!(
                U::DIMENSION.equals(&U2::DIMENSION),
                "cannot add quantities of different dimensions"
            );
        }
        let rhs = rhs.value.rescale(const { U2::SCALE.div(U::SCALE) });
        Ok(Quantity::new(self.value.shape_add(rhs)?))
    }

    /// Fallible subtraction, see [`Quantity::try_add`].
    pub fn try_sub<V2, U2>(
        self,
        rhs: Quantity<V2, U2>,
    ) -> Result<Quantity<<V as ShapeAdd<V2::Output>>::Output, U>>
    where
        U2: Unit,
        V2: ShapeNeg,
        V2::Output: Rescale,
        V: ShapeAdd<V2::Output>,
    {
        const {
            assert!(
                U::DIMENSION.equals(&U2::DIMENSION),
                "cannot subtract quantities of different dimensions"
            );
        }
        let rhs = rhs.value.shape_neg().rescale(const { U2::SCALE.div(U::SCALE) });
        Ok(Quantity::new(self.value.shape_add(rhs)?))
    }

    /// Raise to an integer power. Dimension exponents and the scale are
    /// multiplied accordingly.
    #[inline]
    pub fn pow<const N: i32>(self) -> Quantity<V::Output, Pow<U, N>>
    where
        V: ShapePow,
    {
        Quantity::new(self.value.shape_pow(N))
    }

    /// Take the n-th root. A degree that does not evenly divide every
    /// dimension exponent does not compile: `sqrt` of an area is a length,
    /// `sqrt` of a volume is nothing.
    #[inline]
    pub fn root<const N: i32>(self) -> Quantity<V::Output, Root<U, N>>
    where
        V: ShapeRoot,
    {
        const {
            assert!(N > 0, "root degree must be positive");
            assert!(
                U::DIMENSION.root_exact(N as i8),
                "dimension exponents are not divisible by the root degree"
            );
        }
        Quantity::new(self.value.shape_root(N))
    }

    /// Multiplicative inverse: `(4 m)⁻¹ = 0.25 m⁻¹`.
    #[inline]
    pub fn inv(self) -> Quantity<V::Output, Inv<U>>
    where
        V: ShapeInv,
    {
        Quantity::new(self.value.shape_inv())
    }

    /// Square, `self.pow::<2>()`.
    #[inline]
    pub fn sq(self) -> Quantity<V::Output, Pow<U, 2>>
    where
        V: ShapePow,
    {
        self.pow::<2>()
    }

    /// Cube, `self.pow::<3>()`.
    #[inline]
    pub fn cb(self) -> Quantity<V::Output, Pow<U, 3>>
    where
        V: ShapePow,
    {
        self.pow::<3>()
    }

    /// Square root, `self.root::<2>()`.
    #[inline]
    pub fn sqrt(self) -> Quantity<V::Output, Root<U, 2>>
    where
        V: ShapeRoot,
    {
        self.root::<2>()
    }

    /// Cube root, `self.root::<3>()`.
    #[inline]
    pub fn cbrt(self) -> Quantity<V::Output, Root<U, 3>>
    where
        V: ShapeRoot,
    {
        self.root::<3>()
    }
}

// =============================================================================
// Indexed access
// =============================================================================

impl<T: Clone, U: Unit, const N: usize> Quantity<[T; N], U> {
    /// The element at `index`, tagged with the same unit. Chain calls to
    /// descend into nested containers: `matrix.at(0)?.at(1)?`.
    pub fn at(&self, index: usize) -> Result<Quantity<T, U>> {
        match self.value.get(index) {
            Some(v) => Ok(Quantity::new(v.clone())),
            None => Err(Error::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<T: Clone, U: Unit> Quantity<Vec<T>, U> {
    /// The element at `index`, tagged with the same unit.
    pub fn at(&self, index: usize) -> Result<Quantity<T, U>> {
        match self.value.get(index) {
            Some(v) => Ok(Quantity::new(v.clone())),
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.value.len(),
            }),
        }
    }
}

// =============================================================================
// Arithmetic between quantities
// =============================================================================

impl<V1, V2, U1, U2> Add<Quantity<V2, U2>> for Quantity<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V2: Rescale,
    V1: ShapeAdd<V2>,
{
    type Output = Quantity<V1::Output, U1>;

    /// Panics on a value-shape mismatch; use [`Quantity::try_add`] to handle
    /// that case. Dimension mismatch does not compile.
    #[inline]
    fn add(self, rhs: Quantity<V2, U2>) -> Self::Output {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<V1, V2, U1, U2> Sub<Quantity<V2, U2>> for Quantity<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V2: ShapeNeg,
    V2::Output: Rescale,
    V1: ShapeAdd<V2::Output>,
{
    type Output = Quantity<<V1 as ShapeAdd<V2::Output>>::Output, U1>;

    #[inline]
    fn sub(self, rhs: Quantity<V2, U2>) -> Self::Output {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<V1, V2, U1, U2> Mul<Quantity<V2, U2>> for Quantity<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V1: ShapeMul<V2>,
{
    type Output = Quantity<V1::Output, Prod<U1, U2>>;

    #[inline]
    fn mul(self, rhs: Quantity<V2, U2>) -> Self::Output {
        match self.value.shape_mul(rhs.value) {
            Ok(v) => Quantity::new(v),
            Err(e) => panic!("{e}"),
        }
    }
}

impl<V1, V2, U1, U2> Div<Quantity<V2, U2>> for Quantity<V1, U1>
where
    U1: Unit,
    U2: Unit,
    V2: ShapeInv,
    V1: ShapeMul<V2::Output>,
{
    type Output = Quantity<<V1 as ShapeMul<V2::Output>>::Output, Per<U1, U2>>;

    #[inline]
    fn div(self, rhs: Quantity<V2, U2>) -> Self::Output {
        match self.value.shape_mul(rhs.value.shape_inv()) {
            Ok(v) => Quantity::new(v),
            Err(e) => panic!("{e}"),
        }
    }
}

impl<V: ShapeNeg, U: Unit> Neg for Quantity<V, U> {
    type Output = Quantity<V::Output, U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::new(self.value.shape_neg())
    }
}

impl<V, V2, U, U2> AddAssign<Quantity<V2, U2>> for Quantity<V, U>
where
    U: Unit,
    U2: Unit,
    V: Clone + ShapeAdd<V2, Output = V>,
    V2: Rescale,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V2, U2>) {
        *self = self.clone() + rhs;
    }
}

impl<V, V2, U, U2> SubAssign<Quantity<V2, U2>> for Quantity<V, U>
where
    U: Unit,
    U2: Unit,
    V: Clone + ShapeAdd<V2::Output, Output = V>,
    V2: ShapeNeg,
    V2::Output: Rescale,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V2, U2>) {
        *self = self.clone() - rhs;
    }
}

// =============================================================================
// Arithmetic with raw scalars
// =============================================================================

/// Raw scalars act as dimensionless quantities with the identity scale:
/// `+`/`-` require a dimensionless (but possibly scaled) quantity, `*`/`/`
/// work with any unit and leave it unchanged.
///
/// These impls are enumerated per scalar type, so an unsuffixed literal next
/// to a quantity leaves inference with several candidates and fails to
/// resolve. Write `q * 2i32` or `q + 0.5f64` rather than `q * 2`.
macro_rules! raw_scalar_ops {
    ($($s:ty),*) => {$(
        impl<V, U: Unit> Add<$s> for Quantity<V, U>
        where
            V: ShapeAdd<$s>,
        {
            type Output = Quantity<V::Output, U>;

            #[inline]
            fn add(self, rhs: $s) -> Self::Output {
                const {
                    assert!(
                        U::DIMENSION.is_dimensionless(),
                        "cannot add a raw number to a dimensioned quantity"
                    );
                }
                let rhs = rhs.rescale(const { Scale::ONE.div(U::SCALE) });
                match self.value.shape_add(rhs) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, U: Unit> Add<Quantity<V, U>> for $s
        where
            V: Rescale,
            $s: ShapeAdd<V>,
        {
            type Output = Quantity<<$s as ShapeAdd<V>>::Output, Dimensionless>;

            #[inline]
            fn add(self, rhs: Quantity<V, U>) -> Self::Output {
                Quantity::<$s, Dimensionless>::new(self)
                    .try_add(rhs)
                    .unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<V, U: Unit> Sub<$s> for Quantity<V, U>
        where
            V: ShapeAdd<$s>,
        {
            type Output = Quantity<V::Output, U>;

            #[inline]
            fn sub(self, rhs: $s) -> Self::Output {
                self + (-rhs)
            }
        }

        impl<V, U: Unit> Sub<Quantity<V, U>> for $s
        where
            V: ShapeNeg,
            V::Output: Rescale,
            $s: ShapeAdd<V::Output>,
        {
            type Output = Quantity<<$s as ShapeAdd<V::Output>>::Output, Dimensionless>;

            #[inline]
            fn sub(self, rhs: Quantity<V, U>) -> Self::Output {
                Quantity::<$s, Dimensionless>::new(self)
                    .try_sub(rhs)
                    .unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<V, U: Unit> Mul<$s> for Quantity<V, U>
        where
            V: ShapeMul<$s>,
        {
            type Output = Quantity<V::Output, U>;

            #[inline]
            fn mul(self, rhs: $s) -> Self::Output {
                match self.value.shape_mul(rhs) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, U: Unit> Mul<Quantity<V, U>> for $s
        where
            $s: ShapeMul<V>,
        {
            type Output = Quantity<<$s as ShapeMul<V>>::Output, U>;

            #[inline]
            fn mul(self, rhs: Quantity<V, U>) -> Self::Output {
                match self.shape_mul(rhs.value) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, U: Unit> Div<$s> for Quantity<V, U>
        where
            V: ShapeMul<<$s as ShapeInv>::Output>,
        {
            type Output = Quantity<V::Output, U>;

            #[inline]
            fn div(self, rhs: $s) -> Self::Output {
                match self.value.shape_mul(rhs.shape_inv()) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, U: Unit> Div<Quantity<V, U>> for $s
        where
            V: ShapeInv,
            $s: ShapeMul<V::Output>,
        {
            type Output = Quantity<<$s as ShapeMul<V::Output>>::Output, Inv<U>>;

            #[inline]
            fn div(self, rhs: Quantity<V, U>) -> Self::Output {
                match self.shape_mul(rhs.value.shape_inv()) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, U: Unit> MulAssign<$s> for Quantity<V, U>
        where
            V: Clone + ShapeMul<$s, Output = V>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $s) {
                *self = self.clone() * rhs;
            }
        }

        impl<V, U: Unit> DivAssign<$s> for Quantity<V, U>
        where
            V: Clone + ShapeMul<<$s as ShapeInv>::Output, Output = V>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $s) {
                *self = self.clone() / rhs;
            }
        }
    )*};
}

raw_scalar_ops!(i32, i64, f32, f64);

// =============================================================================
// Arithmetic with raw containers
// =============================================================================

/// Raw containers on the right-hand side follow the raw-scalar rules:
/// `+`/`-` need a dimensionless quantity, `*`/`/` keep the unit. The element
/// type stays generic here because `Quantity` is the `Self` type.
macro_rules! raw_container_rhs_ops {
    ($container:ident) => {
        impl<V, T, U: Unit> Add<$container<T>> for Quantity<V, U>
        where
            $container<T>: Rescale,
            V: ShapeAdd<$container<T>>,
        {
            type Output = Quantity<V::Output, U>;

            fn add(self, rhs: $container<T>) -> Self::Output {
                const {
                    assert!(
                        U::DIMENSION.is_dimensionless(),
                        "cannot add a raw value to a dimensioned quantity"
                    );
                }
                let rhs = rhs.rescale(const { Scale::ONE.div(U::SCALE) });
                match self.value.shape_add(rhs) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, T, U: Unit> Sub<$container<T>> for Quantity<V, U>
        where
            $container<T>: ShapeNeg,
            <$container<T> as ShapeNeg>::Output: Rescale,
            V: ShapeAdd<<$container<T> as ShapeNeg>::Output>,
        {
            type Output = Quantity<<V as ShapeAdd<<$container<T> as ShapeNeg>::Output>>::Output, U>;

            fn sub(self, rhs: $container<T>) -> Self::Output {
                const {
                    assert!(
                        U::DIMENSION.is_dimensionless(),
                        "cannot subtract a raw value from a dimensioned quantity"
                    );
                }
                let rhs = rhs.shape_neg().rescale(const { Scale::ONE.div(U::SCALE) });
                match self.value.shape_add(rhs) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, T, U: Unit> Mul<$container<T>> for Quantity<V, U>
        where
            V: ShapeMul<$container<T>>,
        {
            type Output = Quantity<V::Output, U>;

            #[inline]
            fn mul(self, rhs: $container<T>) -> Self::Output {
                match self.value.shape_mul(rhs) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, T, U: Unit> Div<$container<T>> for Quantity<V, U>
        where
            $container<T>: ShapeInv,
            V: ShapeMul<<$container<T> as ShapeInv>::Output>,
        {
            type Output = Quantity<<V as ShapeMul<<$container<T> as ShapeInv>::Output>>::Output, U>;

            #[inline]
            fn div(self, rhs: $container<T>) -> Self::Output {
                match self.value.shape_mul(rhs.shape_inv()) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

raw_container_rhs_ops!(Complex);
raw_container_rhs_ops!(Vec);

impl<V, T, U: Unit, const N: usize> Add<[T; N]> for Quantity<V, U>
where
    [T; N]: Rescale,
    V: ShapeAdd<[T; N]>,
{
    type Output = Quantity<V::Output, U>;

    fn add(self, rhs: [T; N]) -> Self::Output {
        const {
            assert!(
                U::DIMENSION.is_dimensionless(),
                "cannot add a raw value to a dimensioned quantity"
            );
        }
        let rhs = rhs.rescale(const { Scale::ONE.div(U::SCALE) });
        match self.value.shape_add(rhs) {
            Ok(v) => Quantity::new(v),
            Err(e) => panic!("{e}"),
        }
    }
}

impl<V, T, U: Unit, const N: usize> Sub<[T; N]> for Quantity<V, U>
where
    [T; N]: ShapeNeg,
    <[T; N] as ShapeNeg>::Output: Rescale,
    V: ShapeAdd<<[T; N] as ShapeNeg>::Output>,
{
    type Output = Quantity<<V as ShapeAdd<<[T; N] as ShapeNeg>::Output>>::Output, U>;

    fn sub(self, rhs: [T; N]) -> Self::Output {
        const {
            assert!(
                U::DIMENSION.is_dimensionless(),
                "cannot subtract a raw value from a dimensioned quantity"
            );
        }
        let rhs = rhs.shape_neg().rescale(const { Scale::ONE.div(U::SCALE) });
        match self.value.shape_add(rhs) {
            Ok(v) => Quantity::new(v),
            Err(e) => panic!("{e}"),
        }
    }
}

impl<V, T, U: Unit, const N: usize> Mul<[T; N]> for Quantity<V, U>
where
    V: ShapeMul<[T; N]>,
{
    type Output = Quantity<V::Output, U>;

    #[inline]
    fn mul(self, rhs: [T; N]) -> Self::Output {
        match self.value.shape_mul(rhs) {
            Ok(v) => Quantity::new(v),
            Err(e) => panic!("{e}"),
        }
    }
}

impl<V, T, U: Unit, const N: usize> Div<[T; N]> for Quantity<V, U>
where
    [T; N]: ShapeInv,
    V: ShapeMul<<[T; N] as ShapeInv>::Output>,
{
    type Output = Quantity<<V as ShapeMul<<[T; N] as ShapeInv>::Output>>::Output, U>;

    #[inline]
    fn div(self, rhs: [T; N]) -> Self::Output {
        match self.value.shape_mul(rhs.shape_inv()) {
            Ok(v) => Quantity::new(v),
            Err(e) => panic!("{e}"),
        }
    }
}

/// Raw containers on the left-hand side. Coherence requires the element type
/// to be concrete here (`Quantity` only appears as a trait parameter), so
/// these are enumerated per scalar like the raw-scalar impls.
macro_rules! raw_container_lhs_ops {
    ($($lhs:ty),* $(,)?) => {$(
        impl<V, U: Unit> Add<Quantity<V, U>> for $lhs
        where
            V: Rescale,
            $lhs: ShapeAdd<V>,
        {
            type Output = Quantity<<$lhs as ShapeAdd<V>>::Output, Dimensionless>;

            fn add(self, rhs: Quantity<V, U>) -> Self::Output {
                Quantity::<$lhs, Dimensionless>::new(self)
                    .try_add(rhs)
                    .unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<V, U: Unit> Sub<Quantity<V, U>> for $lhs
        where
            V: ShapeNeg,
            V::Output: Rescale,
            $lhs: ShapeAdd<V::Output>,
        {
            type Output = Quantity<<$lhs as ShapeAdd<V::Output>>::Output, Dimensionless>;

            fn sub(self, rhs: Quantity<V, U>) -> Self::Output {
                Quantity::<$lhs, Dimensionless>::new(self)
                    .try_sub(rhs)
                    .unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<V, U: Unit> Mul<Quantity<V, U>> for $lhs
        where
            $lhs: ShapeMul<V>,
        {
            type Output = Quantity<<$lhs as ShapeMul<V>>::Output, U>;

            #[inline]
            fn mul(self, rhs: Quantity<V, U>) -> Self::Output {
                match self.shape_mul(rhs.value) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, U: Unit> Div<Quantity<V, U>> for $lhs
        where
            V: ShapeInv,
            $lhs: ShapeMul<V::Output>,
        {
            type Output = Quantity<<$lhs as ShapeMul<V::Output>>::Output, Inv<U>>;

            #[inline]
            fn div(self, rhs: Quantity<V, U>) -> Self::Output {
                match self.shape_mul(rhs.value.shape_inv()) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }
    )*};
}

raw_container_lhs_ops!(
    Complex<i32>,
    Complex<i64>,
    Complex<f32>,
    Complex<f64>,
    Vec<i32>,
    Vec<i64>,
    Vec<f32>,
    Vec<f64>,
);

/// Fixed arrays on the left-hand side, per scalar element type.
macro_rules! raw_array_lhs_ops {
    ($($s:ty),*) => {$(
        impl<V, U: Unit, const N: usize> Add<Quantity<V, U>> for [$s; N]
        where
            V: Rescale,
            [$s; N]: ShapeAdd<V>,
        {
            type Output = Quantity<<[$s; N] as ShapeAdd<V>>::Output, Dimensionless>;

            fn add(self, rhs: Quantity<V, U>) -> Self::Output {
                Quantity::<[$s; N], Dimensionless>::new(self)
                    .try_add(rhs)
                    .unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<V, U: Unit, const N: usize> Sub<Quantity<V, U>> for [$s; N]
        where
            V: ShapeNeg,
            V::Output: Rescale,
            [$s; N]: ShapeAdd<V::Output>,
        {
            type Output = Quantity<<[$s; N] as ShapeAdd<V::Output>>::Output, Dimensionless>;

            fn sub(self, rhs: Quantity<V, U>) -> Self::Output {
                Quantity::<[$s; N], Dimensionless>::new(self)
                    .try_sub(rhs)
                    .unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<V, U: Unit, const N: usize> Mul<Quantity<V, U>> for [$s; N]
        where
            [$s; N]: ShapeMul<V>,
        {
            type Output = Quantity<<[$s; N] as ShapeMul<V>>::Output, U>;

            #[inline]
            fn mul(self, rhs: Quantity<V, U>) -> Self::Output {
                match self.shape_mul(rhs.value) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<V, U: Unit, const N: usize> Div<Quantity<V, U>> for [$s; N]
        where
            V: ShapeInv,
            [$s; N]: ShapeMul<V::Output>,
        {
            type Output = Quantity<<[$s; N] as ShapeMul<V::Output>>::Output, Inv<U>>;

            #[inline]
            fn div(self, rhs: Quantity<V, U>) -> Self::Output {
                match self.shape_mul(rhs.value.shape_inv()) {
                    Ok(v) => Quantity::new(v),
                    Err(e) => panic!("{e}"),
                }
            }
        }
    )*};
}

raw_array_lhs_ops!(i32, i64, f32, f64);

// =============================================================================
// Comparisons, defaults, debugging
// =============================================================================

impl<V: PartialEq, U: Unit> PartialEq for Quantity<V, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq, U: Unit> Eq for Quantity<V, U> {}

impl<V: PartialOrd, U: Unit> PartialOrd for Quantity<V, U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<V: Ord, U: Unit> Ord for Quantity<V, U> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<V: Default, U: Unit> Default for Quantity<V, U> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: fmt::Debug, U: Unit> fmt::Debug for Quantity<V, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &U::DIMENSION)
            .field("factor", &U::FACTOR)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Centimetre, Metre, Second};

    #[test]
    fn same_unit_addition_keeps_the_value_type() {
        let a = Quantity::<i32, Centimetre>::new(1);
        let b = Quantity::<i32, Centimetre>::new(2);
        assert_eq!((a + b).into_value(), 3);
    }

    #[test]
    fn mixed_units_convert_into_the_left_unit() {
        let cm = Quantity::<i32, Centimetre>::new(1);
        let m = Quantity::<i32, Metre>::new(1);
        // 1 cm + 1 m = 101 cm
        assert_eq!((cm + m).into_value(), 101);
        // 1 m + 100 cm = 2 m
        let cm100 = Quantity::<i32, Centimetre>::new(100);
        assert_eq!((m + cm100).into_value(), 2);
    }

    #[test]
    fn multiplication_composes_units() {
        let d = Quantity::<f64, Metre>::new(3.0);
        let t = Quantity::<f64, Second>::new(2.0);
        let v = d / t;
        assert!(v.dimension().equals(&Dimension::VELOCITY));
        assert_eq!(*v.value(), 1.5);

        let area = d * d;
        assert!(area.dimension().equals(&Dimension::AREA));
        assert_eq!(*area.value(), 9.0);
    }

    #[test]
    fn integer_division_promotes() {
        let a = Quantity::<i32, Metre>::new(8);
        let b = Quantity::<i32, Metre>::new(2);
        let ratio = a / b;
        assert!(ratio.dimension().is_dimensionless());
        assert_eq!(*ratio.value(), 4.0);
    }

    #[test]
    fn convert_is_exact_for_integers() {
        let m = Quantity::<i64, Metre>::new(3);
        assert_eq!(*m.convert::<Centimetre>().value(), 300);
        let cm = Quantity::<i64, Centimetre>::new(150);
        assert_eq!(*cm.convert::<Metre>().value(), 1);
    }

    #[test]
    fn powers_and_roots_track_the_unit() {
        let d = Quantity::<f64, Metre>::new(3.0);
        let area = d.sq();
        assert!(area.dimension().equals(&Dimension::AREA));
        assert_eq!(*area.value(), 9.0);

        let side = area.sqrt();
        assert!(side.dimension().equals(&Dimension::LENGTH));
        assert_eq!(*side.value(), 3.0);

        let rate = Quantity::<f64, Second>::new(4.0).inv();
        assert!(rate.dimension().equals(&Dimension::FREQUENCY));
        assert_eq!(*rate.value(), 0.25);
    }

    #[test]
    fn indexed_access_keeps_the_unit() {
        let v = Quantity::<[i32; 3], Centimetre>::new([1, 2, 3]);
        assert_eq!(*v.at(2).unwrap().value(), 3);
        assert_eq!(
            v.at(3).unwrap_err(),
            Error::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn assign_ops() {
        let mut d = Quantity::<f64, Metre>::new(1.0);
        d += Quantity::<f64, Metre>::new(0.5);
        d -= Quantity::<f64, Centimetre>::new(50.0);
        assert_eq!(*d.value(), 1.0);
        d *= 4.0;
        d /= 2.0;
        assert_eq!(*d.value(), 2.0);
    }

    #[test]
    fn comparisons_and_default() {
        let a = Quantity::<i32, Metre>::new(1);
        let b = Quantity::<i32, Metre>::new(2);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(Quantity::<i32, Metre>::default().into_value(), 0);
    }
}
