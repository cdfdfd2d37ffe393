#![allow(non_snake_case)]

use crate::algebra::*;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Matrix or vector input data in either dense or sparse form.
///
/// Vectors may be supplied either as a single column or a single row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub enum MatrixData<T = f64> {
    Dense(Matrix<T>),
    Sparse(CscMatrix<T>),
}

impl<T> MatrixData<T>
where
    T: FloatT,
{
    /// Dense copy of the data
    pub fn to_dense(&self) -> Matrix<T> {
        match self {
            MatrixData::Dense(M) => M.clone(),
            MatrixData::Sparse(S) => Matrix::from(S),
        }
    }

    /// true if the data has at most one row or at most one column
    pub fn is_vector(&self) -> bool {
        let (m, n) = self.size();
        m <= 1 || n <= 1
    }
}

impl<T> ShapedMatrix for MatrixData<T> {
    fn nrows(&self) -> usize {
        match self {
            MatrixData::Dense(M) => M.nrows(),
            MatrixData::Sparse(S) => S.nrows(),
        }
    }
    fn ncols(&self) -> usize {
        match self {
            MatrixData::Dense(M) => M.ncols(),
            MatrixData::Sparse(S) => S.ncols(),
        }
    }
}

impl<T> From<Matrix<T>> for MatrixData<T> {
    fn from(M: Matrix<T>) -> Self {
        MatrixData::Dense(M)
    }
}

impl<T> From<CscMatrix<T>> for MatrixData<T> {
    fn from(S: CscMatrix<T>) -> Self {
        MatrixData::Sparse(S)
    }
}

// vectors are taken as dense columns
impl<T> From<Vec<T>> for MatrixData<T> {
    fn from(v: Vec<T>) -> Self {
        let m = v.len();
        MatrixData::Dense(Matrix { m, n: 1, data: v })
    }
}

impl<T> From<&[T]> for MatrixData<T>
where
    T: Clone,
{
    fn from(v: &[T]) -> Self {
        v.to_vec().into()
    }
}

/// Partition of the rows of `G` and `h` into cone constraints.
///
/// Rows are ordered as `l` nonnegative rows, then one block of rows for
/// each second order cone, then one block of `s_i²` rows for each PSD
/// cone holding the flattened `s_i x s_i` matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConeDims {
    /// number of linear inequality rows
    pub l: usize,
    /// second order cone block sizes
    pub q: Vec<usize>,
    /// PSD block side lengths
    pub s: Vec<usize>,
    /// number of exponential cone triples.  These can't be
    /// expressed in SeDuMi format and must be zero.
    pub ep: usize,
}

impl ConeDims {
    pub fn new(l: usize, q: &[usize], s: &[usize]) -> Self {
        Self {
            l,
            q: q.to_vec(),
            s: s.to_vec(),
            ep: 0,
        }
    }

    /// number of rows of `G` and `h` described, or `None` if
    /// the count overflows `usize`
    pub fn nrows(&self) -> Option<usize> {
        let q = self.q.iter().try_fold(0usize, |acc, &q| acc.checked_add(q))?;
        let s = self
            .s
            .iter()
            .try_fold(0usize, |acc, &s| acc.checked_add(s.checked_mul(s)?))?;
        self.l.checked_add(q)?.checked_add(s)
    }
}

/// Raw model data for the conic program
///
/// ```text
/// minimize    c'x
/// subject to  Ax = b
///             h - Gx ∈ K
/// ```
/// where `K` is described by `dims`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct ProblemData<T = f64> {
    pub A: MatrixData<T>,
    pub b: MatrixData<T>,
    pub c: MatrixData<T>,
    pub G: MatrixData<T>,
    pub h: MatrixData<T>,
    pub dims: ConeDims,
}

impl<T> ProblemData<T>
where
    T: FloatT,
{
    pub fn new(
        A: impl Into<MatrixData<T>>,
        b: impl Into<MatrixData<T>>,
        c: impl Into<MatrixData<T>>,
        G: impl Into<MatrixData<T>>,
        h: impl Into<MatrixData<T>>,
        dims: ConeDims,
    ) -> Self {
        Self {
            A: A.into(),
            b: b.into(),
            c: c.into(),
            G: G.into(),
            h: h.into(),
            dims,
        }
    }
}

#[test]
fn test_matrix_data() {
    let M = Matrix::from(&[[1., 0.], [0., 2.]]);
    let S = CscMatrix::from(&M);

    let Md: MatrixData<f64> = M.clone().into();
    let Sd: MatrixData<f64> = S.into();
    assert_eq!(Md.to_dense(), M);
    assert_eq!(Sd.to_dense(), M);
    assert_eq!(Sd.size(), (2, 2));
    assert!(!Sd.is_vector());

    let v: MatrixData<f64> = vec![1., 2., 3.].into();
    assert_eq!(v.size(), (3, 1));
    assert!(v.is_vector());
}

#[test]
fn test_cone_dims_rows() {
    let dims = ConeDims::new(2, &[3, 4], &[2, 3]);
    assert_eq!(dims.nrows(), Some(2 + 7 + 4 + 9));
    assert_eq!(ConeDims::default().nrows(), Some(0));

    // block sizes too large to index
    assert_eq!(ConeDims::new(0, &[], &[1 << 33]).nrows(), None);
    assert_eq!(ConeDims::new(1, &[usize::MAX], &[]).nrows(), None);
}
