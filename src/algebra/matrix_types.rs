#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// Dense data supplied by the user and all intermediate model data is held
// in column major format.  Sparse data (both input and output) is held
// in standard compressed sparse column format.

/// Dense matrix in column major format
///
/// __Example usage__ : To construct the 2 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  4.  6.]
/// ```
///
/// ```no_run
/// use coneprep::algebra::Matrix;
///
/// let A : Matrix<f64> = Matrix::from(&[
///     [1., 3., 5.],
///     [2., 4., 6.],
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}
