//! Shape-polymorphic value operations.
//!
//! `Quantity` is generic over its value type: plain scalars, complex numbers,
//! fixed-size arrays and growable sequences all work, including nested
//! combinations like `[Complex<f64>; 3]` or `Vec<[i32; 2]>`. The traits in
//! this module are the dispatch surface: each operation has one trait, and
//! each value shape registers itself by implementing it. Adding support for a
//! new shape means implementing these traits, nothing in `Quantity` changes.
//!
//! Binary operations are fallible because two `Vec`s can disagree on length,
//! which is only discoverable at run time. Every other shape either cannot
//! mismatch (scalars, complex) or mismatches as a type error (fixed arrays of
//! different lengths are different types). Unary operations never fail.
//!
//! Scalar pairs widen the way mixed arithmetic does in C:
//! `i32 · f64 = f64`, `i64 · f32 = f32`, and so on. The widened-type table is
//! spelled out in [`add`] and [`mul`].

use crate::error::Result;
use crate::scale::Scale;

mod add;
mod invert;
mod mul;
mod negate;
mod power;
mod rescale;
mod root;

/// Elementwise addition of two value shapes.
pub trait ShapeAdd<Rhs = Self> {
    type Output;

    fn shape_add(self, rhs: Rhs) -> Result<Self::Output>;
}

/// Elementwise multiplication of two value shapes.
///
/// "Elementwise" follows the shape's own notion of product: complex numbers
/// multiply as complex numbers, not componentwise.
pub trait ShapeMul<Rhs = Self> {
    type Output;

    fn shape_mul(self, rhs: Rhs) -> Result<Self::Output>;
}

/// Elementwise negation.
pub trait ShapeNeg {
    type Output;

    fn shape_neg(self) -> Self::Output;
}

/// Elementwise multiplicative inverse.
///
/// Integer shapes promote to `f64`; there is no useful integer reciprocal.
pub trait ShapeInv {
    type Output;

    fn shape_inv(self) -> Self::Output;
}

/// Elementwise integer power.
///
/// The exponent is a runtime argument here; the unit-level exponent is a
/// const generic on `Quantity::pow`, which passes the same `N` down.
pub trait ShapePow {
    type Output;

    fn shape_pow(self, n: i32) -> Self::Output;
}

/// Elementwise n-th root.
pub trait ShapeRoot {
    type Output;

    fn shape_root(self, n: i32) -> Self::Output;
}

/// Multiply a value shape by a rational conversion factor.
///
/// Integer shapes use exact rational arithmetic (widen to `i128`, multiply by
/// the numerator, divide by the denominator, truncating); float shapes
/// multiply by [`Scale::factor`]. The shape is preserved, so converting a
/// quantity never changes its value type.
pub trait Rescale {
    fn rescale(self, scale: Scale) -> Self;
}

/// Rebuild a fixed array from a `Vec` produced by a fallible elementwise
/// pass. Infallible by construction: callers always push exactly `N`
/// elements.
fn collect_array<T, const N: usize>(v: Vec<T>) -> [T; N] {
    match <[T; N]>::try_from(v) {
        Ok(arr) => arr,
        Err(_) => unreachable!("elementwise pass over [_; N] yields N elements"),
    }
}
