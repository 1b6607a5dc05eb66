//! Static dimensional analysis.
//!
//! `metron` tags raw values with zero-sized unit types and pushes dimension
//! checking into the compiler: quantities of the same dimension mix freely
//! (converting units as they go), quantities of different dimensions refuse
//! to compile when added, subtracted, converted or compared.
//!
//! ```
//! use metron::prelude::*;
//!
//! let distance = Quantity::<f64, Metre>::new(100.0);
//! let time = Quantity::<f64, Second>::new(9.58);
//!
//! let speed = distance / time;
//! assert_eq!(speed.dimension().to_string(), "m s^-1");
//!
//! // Same dimension, different scale: the right side converts into the
//! // left side's unit.
//! let a = Quantity::<i32, Centimetre>::new(1);
//! let b = Quantity::<i32, Metre>::new(1);
//! assert_eq!((a + b).into_value(), 101);
//! assert_eq!((a + b).to_string(), "101 (c)m");
//! ```
//!
//! Adding a length to a time is rejected while compiling:
//!
//! ```compile_fail
//! use metron::prelude::*;
//!
//! let d = Quantity::<f64, Metre>::new(1.0);
//! let t = Quantity::<f64, Second>::new(1.0);
//! let _ = d + t;
//! ```
//!
//! So is a root that would need fractional dimension exponents:
//!
//! ```compile_fail
//! use metron::prelude::*;
//!
//! let v = Quantity::<f64, CubicMetre>::new(8.0);
//! let _ = v.sqrt();
//! ```
//!
//! # Value shapes
//!
//! The value side of a quantity is shape-polymorphic: scalars (`i32`, `i64`,
//! `f32`, `f64`), [`num_complex::Complex`], fixed arrays, `Vec`, and
//! nestings of those. Elementwise operations run across containers, mixed
//! scalar types widen, and two fixed arrays of different lengths are simply
//! different types. Only `Vec` lengths are checked at run time; that is the
//! one failure the [`Error`] type exists for.
//!
//! ```
//! use metron::prelude::*;
//!
//! let left = Quantity::<Vec<i32>, Metre>::new(vec![1, 2]);
//! let right = Quantity::<Vec<i32>, Metre>::new(vec![1, 2, 3]);
//! assert!(left.try_add(right).is_err());
//! ```

pub mod dimension;
pub mod error;
pub mod fmt;
pub mod measurement;
pub mod ops;
pub mod quantity;
pub mod scale;
pub mod si;
pub mod unit;

pub use dimension::Dimension;
pub use error::{Error, ErrorKind, Result};
pub use measurement::Measurement;
pub use quantity::Quantity;
pub use scale::Scale;
pub use unit::{conversion_factor, conversion_scale, Inv, Per, Pfx, Pow, Prefix, Prod, Root, Unit};

/// Everything needed to declare and combine quantities.
pub mod prelude {
    pub use crate::measurement::Measurement;
    pub use crate::quantity::Quantity;
    pub use crate::si::*;
    pub use crate::unit::{conversion_factor, Inv, Per, Pfx, Pow, Prefix, Prod, Root, Unit};
    pub use crate::{Dimension, Error, ErrorKind, Scale};
}
