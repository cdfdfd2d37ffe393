#![allow(non_snake_case)]

use crate::algebra::{CscMatrix, FloatT, Matrix};

// dense to sparse conversion, keeping only the nonzero entries
impl<T> From<&Matrix<T>> for CscMatrix<T>
where
    T: FloatT,
{
    fn from(M: &Matrix<T>) -> Self {
        let nnz = M.data().iter().filter(|&&v| v != T::zero()).count();
        let mut S = CscMatrix::spalloc((M.m, M.n), nnz);

        let mut ptr = 0;
        for col in 0..M.n {
            S.colptr[col] = ptr;
            for (row, &v) in M.col_slice(col).iter().enumerate() {
                if v != T::zero() {
                    S.rowval[ptr] = row;
                    S.nzval[ptr] = v;
                    ptr += 1;
                }
            }
        }
        S.colptr[M.n] = ptr;
        S
    }
}

impl<T> From<&CscMatrix<T>> for Matrix<T>
where
    T: FloatT,
{
    fn from(S: &CscMatrix<T>) -> Self {
        let mut M = Matrix::zeros((S.m, S.n));
        for col in 0..S.n {
            for ptr in S.colptr[col]..S.colptr[col + 1] {
                M[(S.rowval[ptr], col)] = S.nzval[ptr];
            }
        }
        M
    }
}

#[test]
fn test_dense_sparse_conversion() {
    let M = Matrix::from(&[
        [1., 0., 0.], //
        [0., 0., 2.], //
        [3., 0., 4.], //
    ]);

    let S = CscMatrix::from(&M);
    let Stest = CscMatrix::new(
        3,
        3,
        vec![0, 2, 2, 4],
        vec![0, 2, 1, 2],
        vec![1., 3., 2., 4.],
    );
    assert_eq!(S, Stest);
    assert!(S.check_format().is_ok());
    assert_eq!(Matrix::from(&S), M);

    // empty row dimension
    let M = Matrix::<f64>::zeros((0, 4));
    let S = CscMatrix::from(&M);
    assert_eq!(S, CscMatrix::zeros((0, 4)));
}
