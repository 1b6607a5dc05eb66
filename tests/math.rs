//! Arithmetic across units and value shapes.

use approx::assert_relative_eq;
use num_complex::Complex;

use metron::prelude::*;

type Cm<V> = Quantity<V, Centimetre>;
type M<V> = Quantity<V, Metre>;
type S<V> = Quantity<V, Second>;

#[test]
fn addition_chains() {
    let total = Cm::new(1.0) + Cm::new(2.0) + Cm::new(3.0);
    assert_eq!(total.into_value(), 6.0);
}

#[test]
fn integer_subtraction_stays_integral() {
    let d = Cm::new(10) - Cm::new(4);
    assert_eq!(d.into_value(), 6);
}

#[test]
fn multiplication_yields_an_area() {
    let a = M::new(3.0) * M::new(4.0);
    assert!(a.dimension().equals(&Dimension::AREA));
    assert_eq!(a.into_value(), 12.0);
}

#[test]
fn integer_division_promotes_to_f64() {
    let r = M::new(8) / M::new(2);
    assert!(r.dimension().is_dimensionless());
    assert_eq!(r.into_value(), 4.0);
}

#[test]
fn mixed_units_convert_into_the_left_unit() {
    // 1 cm + 1 m = 101 cm
    assert_eq!((Cm::new(1) + M::new(1)).into_value(), 101);
    // 1 m + 100 cm = 2 m
    assert_eq!((M::new(1) + Cm::new(100)).into_value(), 2);
    // integer mixing is exact rational arithmetic, not float rounding
    assert_eq!((Cm::new(1i64) + Quantity::<i64, Kilometre>::new(2)).into_value(), 200_001);
}

#[test]
fn arrays_combine_elementwise() {
    let sum = Cm::new([1, 2, 3]) + Cm::new([4, 5, 6]);
    assert_eq!(sum.into_value(), [5, 7, 9]);

    // a matrix is an array of arrays
    let diff = M::new([[5.0, 6.0], [7.0, 8.0]]) - M::new([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(diff.into_value(), [[4.0, 4.0], [4.0, 4.0]]);
}

#[test]
fn complex_values_add_componentwise() {
    let z = M::new(Complex::new(1.0, 2.0)) + M::new(Complex::new(3.0, 4.0));
    assert_eq!(z.into_value(), Complex::new(4.0, 6.0));
}

#[test]
fn complex_values_multiply_as_complex_numbers() {
    let z = M::new(Complex::new(1.0, 2.0)) * M::new(Complex::new(3.0, 4.0));
    assert!(z.dimension().equals(&Dimension::AREA));
    assert_eq!(z.into_value(), Complex::new(-5.0, 10.0));
}

#[test]
fn vec_length_mismatch_is_a_runtime_error() {
    let a = M::new(vec![1, 2]);
    let b = M::new(vec![1, 2, 3]);
    let err = a.try_add(b).unwrap_err();
    assert_eq!(err, Error::ShapeMismatch { left: 2, right: 3 });
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
}

#[test]
#[should_panic(expected = "cannot combine sequences of different lengths")]
fn vec_length_mismatch_panics_through_the_operator() {
    let _ = M::new(vec![1, 2]) + M::new(vec![1, 2, 3]);
}

#[test]
fn scalars_broadcast_over_containers() {
    let scaled = M::new([1i32, 2, 3]) * 2i32;
    assert_eq!(scaled.into_value(), [2, 4, 6]);

    let shifted = Quantity::<Vec<f64>>::new(vec![1.0, 2.0]) + 0.5f64;
    assert_eq!(shifted.into_value(), vec![1.5, 2.5]);
}

#[test]
fn conversion_round_trips_within_float_precision() {
    let d = M::new(123.456);
    let back = d.convert::<Centimetre>().convert::<Metre>();
    assert_relative_eq!(back.into_value(), 123.456, max_relative = 1e-12);
}

#[test]
fn powers_and_roots() {
    let v = S::new(2.0).pow::<3>();
    assert!(v.dimension().equals(&Dimension::TIME.pow(3)));
    assert_eq!(v.into_value(), 8.0);

    let side = Quantity::<f64, SquareMetre>::new(16.0).sqrt();
    assert!(side.dimension().equals(&Dimension::LENGTH));
    assert_eq!(side.into_value(), 4.0);

    let edge = Quantity::<f64, CubicMetre>::new(27.0).cbrt();
    assert!(edge.dimension().equals(&Dimension::LENGTH));
    assert_relative_eq!(edge.into_value(), 3.0, max_relative = 1e-12);
}

#[test]
fn inverse_flips_the_dimension() {
    let f = S::new(4.0).inv();
    assert!(f.dimension().equals(&Dimension::FREQUENCY));
    assert_eq!(f.into_value(), 0.25);

    let f2 = 1.0f64 / S::new(4.0);
    assert_eq!(f2.into_value(), 0.25);
    assert!(f2.dimension().equals(&Dimension::FREQUENCY));
}

#[test]
fn mixed_scalar_types_widen() {
    let sum = M::new(1i32) + M::new(2i64);
    let v: i64 = sum.into_value();
    assert_eq!(v, 3);

    let prod = M::new(2i32) * M::new(0.5f64);
    let v: f64 = prod.into_value();
    assert_eq!(v, 1.0);
}

#[test]
fn raw_numbers_mix_with_dimensionless_quantities() {
    let ratio = M::new(8.0) / M::new(2.0);
    let shifted = ratio + 1.0f64;
    assert_eq!(shifted.into_value(), 5.0);
    assert_eq!((2.0f64 * M::new(3.0)).into_value(), 6.0);
}

#[test]
fn raw_containers_mix_on_either_side() {
    // a scalar-valued quantity times a raw array is an array-valued quantity
    let spread = M::new(2) * [1, 2, 3];
    assert_eq!(spread.into_value(), [2, 4, 6]);
    assert!(spread.dimension().equals(&Dimension::LENGTH));

    let mirrored = [1i32, 2, 3] * M::new(2i32);
    assert_eq!(mirrored.into_value(), [2, 4, 6]);

    let z = S::new(Complex::new(1.0, 2.0)) * Complex::new(3.0, 4.0);
    assert_eq!(z.into_value(), Complex::new(-5.0, 10.0));
    assert!(z.dimension().equals(&Dimension::TIME));

    // dimensionless quantities add raw containers
    let ratio = Quantity::<[f64; 2]>::new([1.0, 2.0]);
    assert_eq!((ratio + [0.5, 0.5]).into_value(), [1.5, 2.5]);
    assert_eq!(([0.5f64, 0.5] - ratio).into_value(), [-0.5, -1.5]);

    // a raw value divided by a quantity inverts the unit
    let rate = vec![8.0f64, 4.0] / S::new(2.0);
    assert!(rate.dimension().equals(&Dimension::FREQUENCY));
    assert_eq!(rate.into_value(), vec![4.0, 2.0]);
}
