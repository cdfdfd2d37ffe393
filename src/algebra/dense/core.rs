#![allow(non_snake_case)]

use crate::algebra::{FloatT, Matrix, ShapedMatrix, VectorMath};
use std::iter::zip;
use std::ops::{Index, IndexMut, Range};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// `Matrix` constructor from column major data.
    ///
    /// # Panics
    /// Panics if the data length is not compatible with the given size.
    pub fn new(size: (usize, usize), data: Vec<T>) -> Self {
        let (m, n) = size;
        assert_eq!(m * n, data.len());
        Self { m, n, data }
    }

    /// m x n matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    #[inline]
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        assert!(col < self.n);
        &mut self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// Iterator over the entries of a single row
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = T> + '_ {
        assert!(row < self.m);
        self.data.iter().skip(row).step_by(self.m.max(1)).copied()
    }

    /// true if every entry of the given column is exactly zero
    pub fn col_is_zero(&self, col: usize) -> bool {
        self.col_slice(col).is_zero()
    }

    /// true if every entry of the given row is exactly zero
    pub fn row_is_zero(&self, row: usize) -> bool {
        self.row_iter(row).all(|v| v == T::zero())
    }

    /// Make a new matrix from a subset of the rows and columns
    ///
    /// # Panics
    /// Panics if the index vectors are not of compatible dimension
    pub fn select(&self, rowidx: &[bool], colidx: &[bool]) -> Self {
        assert_eq!(rowidx.len(), self.m);
        assert_eq!(colidx.len(), self.n);

        let mred = rowidx.iter().filter(|&&b| b).count();
        let nred = colidx.iter().filter(|&&b| b).count();
        let mut data = Vec::with_capacity(mred * nred);

        for (col, _) in zip(0..self.n, colidx).filter(|(_, &keep)| keep) {
            data.extend(self.col_slice(col).select(rowidx));
        }
        Self::new((mred, nred), data)
    }

    /// Make a new matrix from a contiguous band of rows
    ///
    /// # Panics
    /// Panics if the range exceeds the row dimension
    pub fn row_band(&self, rows: Range<usize>) -> Self {
        assert!(rows.start <= rows.end && rows.end <= self.m);
        let mred = rows.len();
        let mut data = Vec::with_capacity(mred * self.n);
        for col in 0..self.n {
            data.extend_from_slice(&self.col_slice(col)[rows.clone()]);
        }
        Self::new((mred, self.n), data)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

// construct from a row major array literal, mostly for tests
// and examples.  The literal is given row by row.
impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut M = Matrix::zeros((R, C));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                M[(i, j)] = v;
            }
        }
        M
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // [ 1.0  4.0  7.0 ]
        // [ 2.0  5.0  8.0 ]
        // [ 3.0  6.0  9.0 ]
        Matrix::from(&[[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(2, 0)], 3.0);
        assert_eq!(matrix[(0, 1)], 4.0);
        assert_eq!(matrix[(1, 2)], 8.0);

        assert_eq!(matrix.index_linear((0, 0)), 0);
        assert_eq!(matrix.index_linear((2, 0)), 2);
        assert_eq!(matrix.index_linear((0, 1)), 3);
        assert_eq!(matrix.index_linear((2, 2)), 8);
    }

    #[test]
    fn test_matrix_row_iter() {
        let matrix = create_indexing_matrix();
        let row: Vec<f64> = matrix.row_iter(1).collect();
        assert_eq!(row, vec![2.0, 5.0, 8.0]);
    }

    #[test]
    fn test_matrix_select() {
        let matrix = create_indexing_matrix();
        let S = matrix.select(&[true, false, true], &[false, true, true]);
        assert_eq!(S, Matrix::from(&[[4.0, 7.0], [6.0, 9.0]]));

        let S = matrix.select(&[false, false, false], &[true, true, true]);
        assert_eq!(S.size(), (0, 3));
    }

    #[test]
    fn test_matrix_row_band() {
        let matrix = create_indexing_matrix();
        let B = matrix.row_band(1..3);
        assert_eq!(B, Matrix::from(&[[2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]));
        assert_eq!(matrix.row_band(3..3).size(), (0, 3));
    }

    #[test]
    fn test_matrix_zero_checks() {
        let matrix = Matrix::from(&[[0.0, 1.0], [0.0, 0.0]]);
        assert!(matrix.col_is_zero(0));
        assert!(!matrix.col_is_zero(1));
        assert!(!matrix.row_is_zero(0));
        assert!(matrix.row_is_zero(1));
    }
}
