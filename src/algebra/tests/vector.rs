use crate::algebra::*;

#[test]
fn test_select() {
    let x = [1., 2., 3., 4., 5.];
    let idx = [true, false, true, true, false];
    let y = x.select(&idx);
    assert_eq!(y, vec![1., 3., 4.]);

    let y = x.select(&[false; 5]);
    assert!(y.is_empty());
}

#[test]
fn test_set() {
    let mut x = [3., 0., 2., 1.];
    x.set(1.);
    assert_eq!(x, [1., 1., 1., 1.]);
}

#[test]
fn test_dot() {
    let x = vec![1., -2., 3., -4.];
    let y = vec![-1., -2., -4., 8.];
    assert_eq!(x.dot(&y), -1. + 4. - 12. - 32.);
}

#[test]
fn test_norm_inf() {
    let x = [-3., 4., -12.];
    assert_eq!(x.norm_inf(), 12.);

    let x = [-3., f64::NAN, 1.];
    assert!(x.norm_inf().is_nan());

    assert_eq!(Vec::<f64>::new().norm_inf(), 0.);
}

#[test]
fn test_is_zero() {
    assert!([0., 0., 0.].is_zero());
    assert!([0., -0., 0.].is_zero());
    assert!(![0., 1e-300, 0.].is_zero());
    assert!(Vec::<f64>::new().is_zero());
}

#[test]
fn test_axpby() {
    let mut y = vec![1., 2., 3.];
    let x = vec![1., 1., 1.];

    y.axpby(2., &x, 1.);
    assert_eq!(y, vec![3., 4., 5.]);

    y.axpby(-1., &x, 0.);
    assert_eq!(y, vec![-1., -1., -1.]);

    y.axpby(1., &x, 3.);
    assert_eq!(y, vec![-2., -2., -2.]);
}
