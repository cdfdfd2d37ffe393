#![allow(non_snake_case)]

use crate::algebra::*;

/// Convert a dense matrix to sparse form one band of `block_height`
/// rows at a time.  The result is identical to a direct conversion, but
/// never holds more than one band's worth of dense intermediate data.
///
/// # Panics
/// Panics if `block_height` is zero.
pub fn sparsify_tall<T>(M: &Matrix<T>, block_height: usize) -> CscMatrix<T>
where
    T: FloatT,
{
    assert!(block_height >= 1);

    let mut bands = Vec::new();
    let mut start = 0;
    while start < M.nrows() {
        let stop = usize::min(start + block_height, M.nrows());
        bands.push(CscMatrix::from(&M.row_band(start..stop)));
        start = stop;
    }

    CscMatrix::vstack(&bands, M.ncols())
}
