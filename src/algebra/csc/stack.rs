#![allow(non_snake_case)]

use crate::algebra::{CscMatrix, FloatT, ShapedMatrix};
use std::iter::zip;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Stack row bands of common width `n` on top of one another.
    ///
    /// Entries are moved directly into the output, so no dense
    /// intermediate is formed.  An empty list of bands gives a `0 x n`
    /// matrix.
    ///
    /// # Panics
    /// Panics if any band does not have `n` columns.
    pub fn vstack(bands: &[CscMatrix<T>], n: usize) -> Self {
        assert!(bands.iter().all(|band| band.ncols() == n));

        let m = bands.iter().map(|band| band.nrows()).sum();
        let nnz = bands.iter().map(|band| band.nnz()).sum();
        let mut S = CscMatrix::spalloc((m, n), nnz);

        // count entries per column, then turn the counts into
        // the start of each column
        S.colptr.fill(0);
        for band in bands {
            for col in 0..n {
                S.colptr[col] += band.colptr[col + 1] - band.colptr[col];
            }
        }
        let mut start = 0;
        for p in S.colptr.iter_mut() {
            let count = *p;
            *p = start;
            start += count;
        }

        // colptr[col] tracks the next free slot in each column.  Bands
        // are visited top to bottom so rows stay ordered in each column.
        let mut firstrow = 0;
        for band in bands {
            for col in 0..n {
                let rng = band.colptr[col]..band.colptr[col + 1];
                for (&row, &v) in zip(&band.rowval[rng.clone()], &band.nzval[rng]) {
                    let dest = S.colptr[col];
                    S.rowval[dest] = firstrow + row;
                    S.nzval[dest] = v;
                    S.colptr[col] += 1;
                }
            }
            firstrow += band.nrows();
        }

        // each colptr now holds the start of the following column
        S.colptr.rotate_right(1);
        S.colptr[0] = 0;

        S
    }
}

#[test]
fn test_csc_vstack() {
    let top = CscMatrix::new(1, 3, vec![0, 1, 1, 2], vec![0, 0], vec![1., 2.]);
    let bottom = CscMatrix::new(2, 3, vec![0, 1, 2, 2], vec![1, 0], vec![3., 4.]);

    // [1 0 2]
    // [0 4 0]
    // [3 0 0]
    let S = CscMatrix::vstack(&[top, bottom], 3);
    let Stest = CscMatrix::new(
        3,
        3,
        vec![0, 2, 3, 4],
        vec![0, 2, 1, 0],
        vec![1., 3., 4., 2.],
    );
    assert_eq!(S, Stest);
    assert!(S.check_format().is_ok());

    let S = CscMatrix::<f64>::vstack(&[], 2);
    assert_eq!(S, CscMatrix::zeros((0, 2)));
}
