use core::Matrix;

/// Zero threshold for row reduction. Magnitudes at or below this value are
/// treated as zero, both when selecting pivots and when clearing eliminated
/// entries, so that floating-point residue accumulated across row operations
/// is not mistaken for a pivot.
pub const EPSILON: f64 = 1e-10;

impl Matrix {
    /// Reduced row-echelon form by Gauss-Jordan elimination with partial
    /// pivoting.
    ///
    /// Walks the pivot columns left to right. For each column the candidate
    /// row with the largest absolute value is swapped into the pivot
    /// position (partial pivoting); a column whose best candidate is within
    /// [`EPSILON`] of zero gets no pivot and the cursor moves on. The pivot
    /// row is scaled to a leading 1 and the pivot column is cleared in every
    /// other row, above and below. Elementary row operations only.
    ///
    /// Never fails: rectangular and rank-deficient inputs are fine, and rows
    /// beyond the last pivot come out all zero. The input is not mutated.
    pub fn gauss(&self) -> Matrix {
        let mut out = self.clone();
        let (nrows, ncols) = out.dims();

        let mut pivot = 0;
        for col in 0..ncols {
            if pivot >= nrows {
                break;
            }

            let mut best = pivot;
            for r in (pivot + 1)..nrows {
                if out.data[r].elements[col].abs() > out.data[best].elements[col].abs() {
                    best = r;
                }
            }
            if out.data[best].elements[col].abs() <= EPSILON {
                // no pivot in this column; snap residue to zero and move on
                for r in pivot..nrows {
                    out.data[r].elements[col] = 0.0;
                }
                continue;
            }

            out.data.swap(pivot, best);

            let inv = 1.0 / out.data[pivot].elements[col];
            for e in out.data[pivot].elements.iter_mut() {
                *e *= inv;
            }
            out.data[pivot].elements[col] = 1.0;

            let pivot_row = out.data[pivot].clone();
            for r in 0..nrows {
                if r == pivot {
                    continue;
                }
                let factor = out.data[r].elements[col];
                if factor != 0.0 {
                    for (e, p) in out.data[r].elements.iter_mut().zip(pivot_row.iter()) {
                        *e -= factor * *p;
                    }
                }
                out.data[r].elements[col] = 0.0;
            }

            pivot += 1;
        }
        out
    }
}
