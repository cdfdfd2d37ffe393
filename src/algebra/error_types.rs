use thiserror::Error;

/// Error type returned by matrix concatenation operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixConcatenationError {
    #[error("Incompatible dimensions")]
    /// Indicates inputs have incompatible dimension
    IncompatibleDimension,
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}
