use std::cmp;
use std::fmt;

use rand::Rng;

use errors::*;
use vector::Vector;

/// A dense matrix of `f64` values, stored row-major as a sequence of owned
/// row [`Vector`]s. Every row has the same length.
///
/// Construction validates shape up front: ragged nested input is rejected
/// with `DimensionMismatch` and the sized factories (`zeros`, `ones`,
/// `identity`, `rand`) reject zero dimensions with `InvalidSize`. After
/// that, the uniform-row-length invariant holds for the life of the matrix;
/// `set` and `swap` are the only in-place operations, and neither can change
/// the shape.
///
/// Cloning deep-copies the rows; no storage is ever shared between two
/// matrices. Equality is exact, element by element.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) data: Vec<Vector>,
    // tracked separately so r x 0 and 0 x c shapes stay representable
    pub(crate) cols: usize,
}

impl Matrix {
    /// The empty 0 x 0 matrix.
    pub fn new() -> Matrix {
        Matrix { data: Vec::new(), cols: 0 }
    }

    /// Builds a matrix from nested rows. Dimensions are inferred from the
    /// outer length and the length of the first row; any row of a different
    /// length fails with `DimensionMismatch`. An empty outer sequence gives
    /// the 0 x 0 matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != ncols {
                return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                    "ragged rows: expected {} columns, found {}", ncols, row.len()))));
            }
            data.push(Vector::new(row));
        }
        Ok(Matrix { data: data, cols: ncols })
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Result<Matrix> {
        Matrix::filled(nrows, ncols, 0.0)
    }
    pub fn ones(nrows: usize, ncols: usize) -> Result<Matrix> {
        Matrix::filled(nrows, ncols, 1.0)
    }
    /// The n x n matrix with 1 on the main diagonal, 0 elsewhere.
    pub fn identity(n: usize) -> Result<Matrix> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i].elements[i] = 1.0;
        }
        Ok(m)
    }
    /// Matrix of values drawn uniformly from `[0, 1)`.
    pub fn rand(nrows: usize, ncols: usize) -> Result<Matrix> {
        Matrix::check_size(nrows, ncols)?;
        let mut rng = rand::thread_rng();
        let data = (0..nrows)
            .map(|_| Vector::new((0..ncols).map(|_| rng.gen()).collect()))
            .collect();
        Ok(Matrix { data: data, cols: ncols })
    }

    fn filled(nrows: usize, ncols: usize, value: f64) -> Result<Matrix> {
        Matrix::check_size(nrows, ncols)?;
        let data = (0..nrows).map(|_| Vector::new(vec![value; ncols])).collect();
        Ok(Matrix { data: data, cols: ncols })
    }
    fn check_size(nrows: usize, ncols: usize) -> Result<()> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::from_kind(ErrorKind::InvalidSize(format!(
                "{}x{} matrix requested; both dimensions must be positive",
                nrows, ncols))));
        }
        Ok(())
    }

    pub fn nrows(&self) -> usize {
        self.data.len()
    }
    pub fn ncols(&self) -> usize {
        self.cols
    }
    pub fn dims(&self) -> (usize, usize) {
        (self.data.len(), self.cols)
    }
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
    pub fn is_empty(&self) -> bool {
        self.nrows() == 0 && self.ncols() == 0
    }

    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        if r >= self.nrows() {
            return Err(Error::from_kind(
                ErrorKind::IndexOutOfRange("row index out of bounds")));
        }
        if c >= self.cols {
            return Err(Error::from_kind(
                ErrorKind::IndexOutOfRange("column index out of bounds")));
        }
        Ok(self.data[r].elements[c])
    }
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> Result<&mut Matrix> {
        if r >= self.nrows() {
            return Err(Error::from_kind(
                ErrorKind::IndexOutOfRange("row index out of bounds")));
        }
        if c >= self.cols {
            return Err(Error::from_kind(
                ErrorKind::IndexOutOfRange("column index out of bounds")));
        }
        self.data[r].elements[c] = value;
        Ok(self)
    }

    /// Borrows row `r`.
    pub fn row(&self, r: usize) -> Result<&Vector> {
        self.data.get(r)
            .ok_or_else(|| Error::from_kind(
                ErrorKind::IndexOutOfRange("row index out of bounds")))
    }

    /// Exchanges rows `i` and `j` in place. `i == j` is a no-op.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<&mut Matrix> {
        if i >= self.nrows() || j >= self.nrows() {
            return Err(Error::from_kind(
                ErrorKind::IndexOutOfRange("row index out of bounds")));
        }
        self.data.swap(i, j);
        Ok(self)
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.cols);
        for j in 0..self.cols {
            let mut row = Vec::with_capacity(self.nrows());
            for i in 0..self.nrows() {
                row.push(self.data[i].elements[j]);
            }
            data.push(Vector::new(row));
        }
        Matrix { data: data, cols: self.nrows() }
    }
    #[inline]
    pub fn t(&self) -> Matrix {
        self.transpose()
    }

    /// Horizontal concatenation: row `i` of the result is row `i` of `self`
    /// followed by row `i` of `other`. The empty 0 x 0 matrix is the
    /// identity for augmentation; any other row-count mismatch fails with
    /// `DimensionMismatch`.
    pub fn augment(&self, other: &Matrix) -> Result<Matrix> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        if other.nrows() != self.nrows() {
            return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                "augment requires equal row counts ({} vs {})",
                self.nrows(), other.nrows()))));
        }
        let mut data = Vec::with_capacity(self.nrows());
        for (l, r) in self.data.iter().zip(&other.data) {
            let mut row = l.elements.clone();
            row.extend_from_slice(&r.elements);
            data.push(Vector::new(row));
        }
        Ok(Matrix { data: data, cols: self.cols + other.cols })
    }

    /// The main diagonal `self[i][i]`, up to the shorter dimension.
    pub fn diag(&self) -> Vector {
        let n = cmp::min(self.nrows(), self.cols);
        Vector::new((0..n).map(|i| self.data[i].elements[i]).collect())
    }
    /// Sum of the main diagonal; defined for any shape.
    pub fn trace(&self) -> f64 {
        let n = cmp::min(self.nrows(), self.cols);
        (0..n).fold(0.0, |acc, i| acc + self.data[i].elements[i])
    }

    /// Nested-sequence export; the exact inverse of [`Matrix::from_rows`].
    pub fn to_vec(&self) -> Vec<Vec<f64>> {
        self.data.iter().map(|row| row.to_vec()).collect()
    }
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::new()
    }
}

// Canonical textual form: rows rendered as vectors, joined by ", \n" inside
// one outer bracket pair, e.g. "[[1, 2], \n[3, 4]]".
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", \n")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}
