// Example:
// let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
// assert_eq!(a.dims(), (3, 4));
#[macro_export]
macro_rules! mat {
    [$( $( $x:expr ),* );*] => {{
        let rows: Vec<Vec<f64>> = vec![
            $( vec![ $( $x as f64 ),* ] ),*
        ];
        $crate::Matrix::from_rows(rows).expect("ragged rows in mat! literal")
    }}
}

#[macro_export]
macro_rules! assert_fp_eq {
    ($left:expr, $right:expr) => { assert_fp_eq!($left, $right, 1e-6) };
    ($left:expr, $right:expr, $eps:expr) => {{
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() <= $eps,
            "floats not equal within {}: {} vs {}", $eps, l, r);
    }}
}

#[macro_export]
macro_rules! assert_fpvec_eq {
    ($left:expr, $right:expr) => { assert_fpvec_eq!($left, $right, 1e-6) };
    ($left:expr, $right:expr, $eps:expr) => {{
        let (l, r) = (&$left, &$right);
        assert_eq!(l.dims(), r.dims(), "matrix dimensions differ");
        let (nrows, ncols) = l.dims();
        for i in 0..nrows {
            for j in 0..ncols {
                let (lv, rv) = (l.get(i, j).unwrap(), r.get(i, j).unwrap());
                assert!((lv - rv).abs() <= $eps,
                    "matrices differ at ({}, {}) within {}: {} vs {}", i, j, $eps, lv, rv);
            }
        }
    }}
}
