//! Measurements: values carrying an uncertainty.

use metron::prelude::*;

#[test]
fn construction() {
    let m = Measurement::<f64, Metre>::new(5.0, 0.1);
    assert_eq!(*m.value().value(), 5.0);
    assert_eq!(*m.uncertainty().value(), 0.1);

    let e = Measurement::<i32, Second>::exact(3);
    assert_eq!(*e.uncertainty().value(), 0);

    let q = Quantity::<f64, Metre>::new(2.0);
    let u = Quantity::<f64, Metre>::new(0.05);
    let m = Measurement::from_quantities(q, u);
    assert_eq!(m, Measurement::new(2.0, 0.05));
}

#[test]
fn addition_converts_value_and_uncertainty_alike() {
    let a = Measurement::<f64, Centimetre>::new(100.0, 1.0);
    let b = Measurement::<f64, Metre>::new(2.0, 0.01);
    let sum = a + b;
    // both components land in the left unit
    assert_eq!(*sum.value().value(), 300.0);
    assert_eq!(*sum.uncertainty().value(), 2.0);
}

#[test]
fn subtraction_is_componentwise() {
    let a = Measurement::<f64, Metre>::new(5.0, 0.3);
    let b = Measurement::<f64, Metre>::new(2.0, 0.1);
    let d = a - b;
    assert_eq!(*d.value().value(), 3.0);
    // componentwise bookkeeping, not quadrature
    assert!((*d.uncertainty().value() - 0.2).abs() < 1e-12);
}

#[test]
fn multiplication_composes_the_unit() {
    let d = Measurement::<f64, Metre>::new(6.0, 0.2);
    let t = Measurement::<f64, Second>::new(2.0, 0.1);
    let v = d / t;
    assert!(v.value().dimension().equals(&Dimension::VELOCITY));
    assert_eq!(*v.value().value(), 3.0);
    assert_eq!(*v.uncertainty().value(), 2.0);

    let area = Measurement::<f64, Metre>::new(3.0, 0.1) * Measurement::<f64, Metre>::new(4.0, 0.1);
    assert!(area.value().dimension().equals(&Dimension::AREA));
    assert_eq!(*area.value().value(), 12.0);
}

#[test]
fn negation_flips_both_components() {
    let m = -Measurement::<i32, Metre>::new(5, 1);
    assert_eq!(m, Measurement::new(-5, -1));
}

#[test]
fn display_renders_value_uncertainty_and_unit() {
    let m = Measurement::<f64, Centimetre>::new(12.5, 0.5);
    assert_eq!(m.to_string(), "12.5 ± 0.5 (c)m");
    let m = Measurement::<i32>::new(10, 1);
    assert_eq!(m.to_string(), "10 ± 1");
}
