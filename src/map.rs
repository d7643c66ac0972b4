use errors::*;
use core::Matrix;
use vector::Vector;

impl Matrix {
    /// New matrix where row `i` is `f(&self.row(i), i)`. The callback must
    /// return rows of the original width; anything else fails with
    /// `DimensionMismatch` and no partial result escapes.
    pub fn map<F>(&self, mut f: F) -> Result<Matrix>
            where F: FnMut(&Vector, usize) -> Vector {
        let mut data = Vec::with_capacity(self.nrows());
        for (i, row) in self.data.iter().enumerate() {
            let mapped = f(row, i);
            if mapped.len() != self.ncols() {
                return Err(Error::from_kind(ErrorKind::DimensionMismatch(format!(
                    "map callback returned a row of length {}, expected {}",
                    mapped.len(), self.ncols()))));
            }
            data.push(mapped);
        }
        Ok(Matrix { data: data, cols: self.ncols() })
    }

    /// Calls `f(&row, i)` for every row in ascending order; side effects
    /// only, the matrix itself is never mutated.
    pub fn each<F>(&self, mut f: F) where F: FnMut(&Vector, usize) {
        for (i, row) in self.data.iter().enumerate() {
            f(row, i);
        }
    }
}
