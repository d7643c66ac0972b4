use std::ops::{Add, Mul, Neg, Sub};

use errors::*;
use core::Matrix;
use vector::Vector;

impl Matrix {
    /// Elementwise sum; fails with `DimensionMismatch` unless shapes match.
    /// Neither operand is mutated.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.dims() != other.dims() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                "add requires equal dimensions ({}x{} vs {}x{})",
                self.nrows(), self.ncols(), other.nrows(), other.ncols()))));
        }
        let mut data = Vec::with_capacity(self.nrows());
        for (l, r) in self.data.iter().zip(&other.data) {
            data.push(l.add(r)?);
        }
        Ok(Matrix { data: data, cols: self.ncols() })
    }

    /// Elementwise difference; same shape requirement as [`Matrix::add`].
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        if self.dims() != other.dims() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                "subtract requires equal dimensions ({}x{} vs {}x{})",
                self.nrows(), self.ncols(), other.nrows(), other.ncols()))));
        }
        let mut data = Vec::with_capacity(self.nrows());
        for (l, r) in self.data.iter().zip(&other.data) {
            data.push(l.subtract(r)?);
        }
        Ok(Matrix { data: data, cols: self.ncols() })
    }

    /// New matrix with every element multiplied by `k`.
    pub fn scale(&self, k: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|row| row.scale(k)).collect(),
            cols: self.ncols(),
        }
    }

    /// Standard matrix product; fails with `DimensionMismatch` unless
    /// `self.ncols() == other.nrows()`. Not commutative.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols() != other.nrows() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                "multiply requires inner dimensions to agree ({}x{} times {}x{})",
                self.nrows(), self.ncols(), other.nrows(), other.ncols()))));
        }
        let mut data = Vec::with_capacity(self.nrows());
        for i in 0..self.nrows() {
            let mut row = Vec::with_capacity(other.ncols());
            for j in 0..other.ncols() {
                let mut acc = 0.0;
                for k in 0..self.ncols() {
                    acc += self.data[i].elements[k] * other.data[k].elements[j];
                }
                row.push(acc);
            }
            data.push(Vector::new(row));
        }
        Ok(Matrix { data: data, cols: other.ncols() })
    }
}

macro_rules! bin_inner {
    ($rhs:ty, $out:ty, $name:ident, $method:ident) => {
        type Output = $out;

        fn $name(self, rhs: $rhs) -> $out {
            <$out>::$method(&self, &rhs).expect("operand dimension mismatch")
        }
    }
}
macro_rules! add_inner {
    ($rhs:ty, $out:ty) => { bin_inner!($rhs, $out, add, add); }
}
macro_rules! implement_add {
    ($lhs:ty, $rhs:ty, $out:ty) => {
        impl Add<$rhs> for $lhs {
            add_inner!($rhs, $out);
        }
    };
    ($lhs:ty, $rhs:ty, $out:ty, $( $lifetime:tt ),* ) => {
        impl<$($lifetime),*> Add<$rhs> for $lhs {
            add_inner!($rhs, $out);
        }
    };
}
implement_add!(Matrix, Matrix, Matrix);
implement_add!(Matrix, &'a Matrix, Matrix, 'a);
implement_add!(&'a Matrix, Matrix, Matrix, 'a);
implement_add!(&'a Matrix, &'b Matrix, Matrix, 'a, 'b);
implement_add!(Vector, Vector, Vector);
implement_add!(Vector, &'a Vector, Vector, 'a);
implement_add!(&'a Vector, Vector, Vector, 'a);
implement_add!(&'a Vector, &'b Vector, Vector, 'a, 'b);

macro_rules! sub_inner {
    ($rhs:ty, $out:ty) => { bin_inner!($rhs, $out, sub, subtract); }
}
macro_rules! implement_sub {
    ($lhs:ty, $rhs:ty, $out:ty) => {
        impl Sub<$rhs> for $lhs {
            sub_inner!($rhs, $out);
        }
    };
    ($lhs:ty, $rhs:ty, $out:ty, $( $lifetime:tt ),* ) => {
        impl<$($lifetime),*> Sub<$rhs> for $lhs {
            sub_inner!($rhs, $out);
        }
    };
}
implement_sub!(Matrix, Matrix, Matrix);
implement_sub!(Matrix, &'a Matrix, Matrix, 'a);
implement_sub!(&'a Matrix, Matrix, Matrix, 'a);
implement_sub!(&'a Matrix, &'b Matrix, Matrix, 'a, 'b);
implement_sub!(Vector, Vector, Vector);
implement_sub!(Vector, &'a Vector, Vector, 'a);
implement_sub!(&'a Vector, Vector, Vector, 'a);
implement_sub!(&'a Vector, &'b Vector, Vector, 'a, 'b);

macro_rules! mul_inner {
    ($rhs:ty) => { bin_inner!($rhs, Matrix, mul, multiply); }
}
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty) => {
        impl Mul<$rhs> for $lhs {
            mul_inner!($rhs);
        }
    };
    ($lhs:ty, $rhs:ty, $( $lifetime:tt ),* ) => {
        impl<$($lifetime),*> Mul<$rhs> for $lhs {
            mul_inner!($rhs);
        }
    };
}
implement_mul!(Matrix, Matrix);
implement_mul!(Matrix, &'a Matrix, 'a);
implement_mul!(&'a Matrix, Matrix, 'a);
implement_mul!(&'a Matrix, &'b Matrix, 'a, 'b);

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}
impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}
impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs.scale(self)
    }
}
impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}
impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = mat![1, 2; 3, 4];
        let b = mat![5, 6; 7, 8];
        assert_eq!((&a).add(&b).unwrap(), mat![6, 8; 10, 12]);
        // operands untouched
        assert_eq!(a, mat![1, 2; 3, 4]);
        assert_eq!(b, mat![5, 6; 7, 8]);
    }

    #[test]
    fn test_add_mismatch() {
        let a = mat![1, 2; 3, 4];
        let err = (&a).add(&mat![1, 2]).unwrap_err();
        match *err.kind() {
            ErrorKind::DimensionMismatch(_) => {}
            ref k => panic!("unexpected error: {}", k),
        }
    }

    #[test]
    fn test_subtract() {
        let a = mat![1, 2; 3, 4];
        let b = mat![5, 6; 7, 8];
        assert_eq!(a.subtract(&b).unwrap(), mat![-4, -4; -4, -4]);
        assert!(a.subtract(&mat![1, 2]).is_err());
    }

    #[test]
    fn test_add_subtract_round_trip() {
        let a = mat![1, 2.5; -3, 4];
        let b = mat![5, -6; 7.25, 8];
        assert_eq!((&a).add(&b).unwrap().subtract(&b).unwrap(), a);
    }

    #[test]
    fn test_scale() {
        let a = mat![1, 2; 3, 4];
        assert_eq!(a.scale(2.0), mat![2, 4; 6, 8]);
        assert_eq!(a.scale(0.0), Matrix::zeros(2, 2).unwrap());
        assert_fpvec_eq!(a.scale(3.0).scale(1.0 / 3.0), a);
    }

    #[test]
    fn test_multiply() {
        let a = mat![1, 2];
        let b = mat![1; 2];
        assert_eq!(a.multiply(&b).unwrap(), mat![5]);
        assert_eq!(b.multiply(&a).unwrap(), mat![1, 2; 2, 4]);
    }

    #[test]
    fn test_multiply_mismatch() {
        let a = mat![1, 2; 3, 4];
        let err = a.multiply(&mat![1, 2]).unwrap_err();
        match *err.kind() {
            ErrorKind::DimensionMismatch(_) => {}
            ref k => panic!("unexpected error: {}", k),
        }
    }

    #[test]
    fn test_multiply_identity() {
        let a = mat![1, 2, 3; 4, 5, 6; 7, 8, 9];
        let eye = Matrix::identity(3).unwrap();
        assert_eq!(eye.multiply(&a).unwrap(), a);
        assert_eq!(a.multiply(&eye).unwrap(), a);
    }

    #[test]
    fn test_multiply_associative_not_commutative() {
        let a = mat![1, 2; 3, 4];
        let b = mat![0, 1; 1, 0];
        let c = mat![2, 0; 0, 2];

        let ab_c = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let a_bc = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        assert_eq!(ab_c, a_bc);

        assert_ne!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    }

    #[test]
    fn test_operators() {
        let a = mat![1, 2; 3, 4];
        let b = mat![5, 6; 7, 8];

        assert_eq!(&a + &b, mat![6, 8; 10, 12]);
        assert_eq!(a.clone() + b.clone(), mat![6, 8; 10, 12]);
        assert_eq!(&a - &b, mat![-4, -4; -4, -4]);
        assert_eq!(&a * &b, mat![19, 22; 43, 50]);
        assert_eq!(&a * 2.0, mat![2, 4; 6, 8]);
        assert_eq!(2.0 * &a, mat![2, 4; 6, 8]);
        assert_eq!(-&a, mat![-1, -2; -3, -4]);
    }

    #[test]
    fn test_vector_operators() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::new(vec![10.0, 20.0]);
        assert_eq!(&a + &b, Vector::new(vec![11.0, 22.0]));
        assert_eq!(&b - &a, Vector::new(vec![9.0, 18.0]));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_operator_mismatch_panics() {
        let _ = mat![1, 2; 3, 4] + mat![1, 2];
    }
}
