// Set of tests that should mirror the examples in README

#[macro_use] extern crate wee_linalg as linalg;

use linalg::{Matrix, Vector};

#[test]
fn test_creation() {
    let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
    assert_eq!(a.dims(), (3, 4));

    let b = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0, 4.0],
        vec![5.0, 6.0, 7.0, 8.0],
        vec![9.0, 10.0, 11.0, 12.0],
    ]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_factories() {
    assert_eq!(Matrix::zeros(1, 3).unwrap(), mat![0, 0, 0]);
    assert_eq!(Matrix::ones(3, 1).unwrap(), mat![1; 1; 1]);
    assert_eq!(Matrix::identity(2).unwrap(), mat![1, 0; 0, 1]);
    assert!(Matrix::zeros(0, 0).is_err());

    let r = Matrix::rand(4, 4).unwrap();
    assert_eq!(r.dims(), (4, 4));
}

#[test]
fn test_arithmetic() {
    let a = mat![1, 2; 3, 4];
    let b = mat![5, 6; 7, 8];

    assert_eq!(&a + &b, mat![6, 8; 10, 12]);
    assert_eq!((&a).add(&b).unwrap(), mat![6, 8; 10, 12]);
    assert_eq!(&a * &b, mat![19, 22; 43, 50]);
    assert_eq!(2.0 * &a, mat![2, 4; 6, 8]);
}

#[test]
fn test_row_reduction() {
    let sys = mat![1, 2, -1, -4; 2, 3, -1, -11; -2, 0, -3, 22];
    let rref = sys.gauss();
    assert_fpvec_eq!(rref, mat![1, 0, 0, -8; 0, 1, 0, 1; 0, 0, 1, -2]);
}

#[test]
fn test_display_round_trip() {
    let a = mat![1, 2; 3, 4];
    assert_eq!(format!("{}", a), "[[1, 2], \n[3, 4]]");
    assert_eq!(Matrix::from_rows(a.to_vec()).unwrap(), a);
}

#[test]
fn test_vector_surface() {
    let mut v = Vector::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    v.set(0, 10.0).unwrap();
    assert_eq!(v.scale(2.0), Vector::new(vec![20.0, 4.0, 6.0]));
    assert_eq!(v.dot(&Vector::ones(3)).unwrap(), 15.0);
}

#[test]
fn test_diag_and_trace() {
    let a = mat![1, 2, 3; 4, 5, 6; 7, 8, 9];
    assert_eq!(a.diag(), Vector::new(vec![1.0, 5.0, 9.0]));
    assert_eq!(a.trace(), 15.0);
}

#[test]
fn test_augment_transpose() {
    let a = mat![1, 2; 3, 4];
    assert_eq!(a.augment(&mat![5, 6; 7, 8]).unwrap(), mat![1, 2, 5, 6; 3, 4, 7, 8]);
    assert_eq!(a.augment(&Matrix::new()).unwrap(), a);
    assert_eq!(a.transpose().transpose(), a);
}
