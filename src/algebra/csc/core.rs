#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix, SparseFormatError};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format.
///
/// This is the storage of the `A`, `b` and `c` fields of a transformed
/// problem.  Row indices within each column are strictly increasing and
/// explicit zeros are not stored by any conversion in this crate.
///
/// __Example usage__ : the 3 x 2 matrix
/// ```text
/// A = [1.  0.]
///     [0.  0.]
///     [2.  3.]
/// ```
/// is
/// ```no_run
/// use coneprep::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                   // m
///    2,                   // n
///    vec![0, 2, 3],       // colptr
///    vec![0, 2, 2],       // rowval
///    vec![1., 2., 3.],    // nzval
///  );
/// assert!(A.check_format().is_ok());
/// ```

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// start of each column in `rowval` / `nzval`, length `n+1`.
    /// The final entry is the number of stored entries.
    pub colptr: Vec<usize>,
    /// row index of each stored entry
    pub rowval: Vec<usize>,
    /// value of each stored entry
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Panics if the array lengths disagree with each other or with `n`.
    /// Row ordering and bounds are not checked here; use
    /// [`check_format`](CscMatrix::check_format) for that.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// m x n matrix with space for `nnz` entries, to be filled by the caller
    pub fn spalloc(size: (usize, usize), nnz: usize) -> Self {
        let (m, n) = size;
        let mut colptr = vec![0; n + 1];
        colptr[n] = nnz;
        CscMatrix::new(m, n, colptr, vec![0; nnz], vec![T::zero(); nnz])
    }

    /// m x n matrix with no stored entries
    pub fn zeros(size: (usize, usize)) -> Self {
        Self::spalloc(size, 0)
    }

    /// number of stored entries
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Check that the matrix data is consistent, e.g. after
    /// deserialization.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len()
            || self.colptr.len() != self.n + 1
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr[0] != 0 || self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        // rows strictly increasing within each column and in bounds
        for col in 0..self.n {
            let rows = &self.rowval[self.colptr[col]..self.colptr[col + 1]];
            if rows.windows(2).any(|r| r[0] >= r[1]) || rows.iter().any(|&r| r >= self.m) {
                return Err(SparseFormatError::BadRowval);
            }
        }

        Ok(())
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_matrix(m: usize, colptr: Vec<usize>, rowval: Vec<usize>) -> CscMatrix<f64> {
        let nzval = vec![1.; rowval.len()];
        CscMatrix {
            m,
            n: colptr.len().saturating_sub(1),
            colptr,
            rowval,
            nzval,
        }
    }

    #[test]
    fn test_csc_alloc() {
        let A = CscMatrix::<f64>::spalloc((3, 2), 4);
        assert_eq!(A.size(), (3, 2));
        assert_eq!(A.nnz(), 4);

        let Z = CscMatrix::<f64>::zeros((0, 3));
        assert_eq!(Z.nnz(), 0);
        assert_eq!(Z.colptr, vec![0; 4]);
        assert!(Z.check_format().is_ok());
    }

    #[test]
    fn test_csc_check_format() {
        let A = CscMatrix::new(3, 2, vec![0, 2, 3], vec![0, 2, 2], vec![1., 2., 3.]);
        assert!(A.check_format().is_ok());

        // stored entry count disagrees with colptr
        let mut B = A.clone();
        B.nzval.pop();
        assert_eq!(
            B.check_format(),
            Err(SparseFormatError::IncompatibleDimension)
        );

        // colptr of the wrong length for n
        let mut B = A.clone();
        B.n = 3;
        assert_eq!(
            B.check_format(),
            Err(SparseFormatError::IncompatibleDimension)
        );

        // decreasing colptr, with the final entry still consistent
        let B = bad_matrix(2, vec![0, 2, 1], vec![0]);
        assert_eq!(B.check_format(), Err(SparseFormatError::BadColptr));

        // unordered rows within a column
        let B = bad_matrix(2, vec![0, 2], vec![1, 0]);
        assert_eq!(B.check_format(), Err(SparseFormatError::BadRowval));

        // row index out of bounds
        let B = bad_matrix(2, vec![0, 1], vec![2]);
        assert_eq!(B.check_format(), Err(SparseFormatError::BadRowval));
    }
}
