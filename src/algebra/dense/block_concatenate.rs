#![allow(non_snake_case)]

use crate::algebra::{FloatT, Matrix, MatrixConcatenationError, ShapedMatrix};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// General block concatenation.  `mats` is a list of block rows,
    /// each of which is a list of blocks of equal height.
    ///
    /// ```text
    /// C = [ A B ]
    ///     [ C D ]
    /// ```
    /// Errors if the blocks are not dimensionally consistent.  Blocks
    /// may have zero rows or columns.
    pub fn hvcat(mats: &[&[&Self]]) -> Result<Self, MatrixConcatenationError> {
        check_block_dims(mats)?;

        // dimensions are consistent, so count total rows
        // and columns along the border
        let nrows = mats.iter().map(|blockrow| blockrow[0].nrows()).sum();
        let ncols = mats[0].iter().map(|topblock| topblock.ncols()).sum();

        let mut data = Vec::with_capacity(nrows * ncols);

        // column major, so walk down each output column in turn
        for blockcol in 0..mats[0].len() {
            for col in 0..mats[0][blockcol].ncols() {
                for blockrow in mats {
                    data.extend_from_slice(blockrow[blockcol].col_slice(col));
                }
            }
        }
        Ok(Self::new((nrows, ncols), data))
    }
}

fn check_block_dims<T>(mats: &[&[&Matrix<T>]]) -> Result<(), MatrixConcatenationError> {
    let ncols_block = match mats.first() {
        Some(blockrow) if !blockrow.is_empty() => blockrow.len(),
        _ => return Err(MatrixConcatenationError::IncompatibleDimension),
    };

    for blockrow in mats {
        // every block row has the same number of blocks,
        // all of the same height
        if blockrow.len() != ncols_block
            || blockrow.iter().any(|M| M.nrows() != blockrow[0].nrows())
        {
            return Err(MatrixConcatenationError::IncompatibleDimension);
        }
        // and every block column has a common width
        if blockrow
            .iter()
            .zip(mats[0].iter())
            .any(|(M, top)| M.ncols() != top.ncols())
        {
            return Err(MatrixConcatenationError::IncompatibleDimension);
        }
    }
    Ok(())
}

#[test]
fn test_dense_hvcat() {
    let A = Matrix::from(&[[1., 2.]]);
    let B = Matrix::from(&[[3.]]);
    let C = Matrix::from(&[[4., 5.], [6., 7.]]);
    let D = Matrix::from(&[[8.], [9.]]);

    let M = Matrix::hvcat(&[&[&A, &B], &[&C, &D]]).unwrap();
    let Mtest = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 8.], //
        [6., 7., 9.], //
    ]);
    assert_eq!(M, Mtest);

    // bad block row heights
    assert!(Matrix::hvcat(&[&[&A, &C]]).is_err());

    // bad block column widths
    assert!(Matrix::hvcat(&[&[&A, &B], &[&D, &C]]).is_err());

    // ragged block rows
    assert!(Matrix::hvcat(&[&[&A, &B], &[&C]]).is_err());

    // no blocks
    assert!(Matrix::<f64>::hvcat(&[]).is_err());
}

#[test]
fn test_dense_hvcat_empty_blocks() {
    // an equality block with no rows, as for a model without Ax = b
    let A = Matrix::<f64>::zeros((0, 2));
    let Z = Matrix::zeros((0, 1));
    let G = Matrix::from(&[[1., 2.]]);
    let I = Matrix::identity(1);

    let M = Matrix::hvcat(&[&[&A, &Z], &[&G, &I]]).unwrap();
    assert_eq!(M, Matrix::from(&[[1., 2., 1.]]));
}
