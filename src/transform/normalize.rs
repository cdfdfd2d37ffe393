#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;

/// Model data coerced to dense form with consistent orientation:
/// rows are constraints and columns are variables.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedData<T = f64> {
    /// equality constraint matrix (ne x nx)
    pub A: Matrix<T>,
    /// equality right hand side (ne)
    pub b: Vec<T>,
    /// objective, held as a row (nx)
    pub c: Vec<T>,
    /// cone constraint matrix (mg x nx)
    pub G: Matrix<T>,
    /// cone constraint right hand side (mg)
    pub h: Vec<T>,
    pub dims: ConeDims,
}

impl<T> NormalizedData<T>
where
    T: FloatT,
{
    /// number of original variables
    pub fn nx(&self) -> usize {
        self.c.len()
    }
    /// number of equality constraints
    pub fn ne(&self) -> usize {
        self.A.nrows()
    }
    /// number of cone constraint rows
    pub fn mg(&self) -> usize {
        self.G.nrows()
    }
}

/// Coerce raw model data to dense form and check that all
/// dimensions are mutually consistent.
pub fn normalize<T>(data: &ProblemData<T>) -> Result<NormalizedData<T>, TransformError>
where
    T: FloatT,
{
    let dims = &data.dims;

    if dims.ep > 0 {
        return Err(TransformError::UnsupportedCone(format!(
            "{} exponential cone(s) can't be expressed in SeDuMi format",
            dims.ep
        )));
    }
    if dims.q.iter().any(|&q| q == 0) {
        return Err(shape_error("second order cone sizes must be at least 1"));
    }
    if dims.s.iter().any(|&s| s == 0) {
        return Err(shape_error("PSD cone sizes must be at least 1"));
    }
    let ncone_rows = dims
        .nrows()
        .ok_or_else(|| shape_error("cone dimensions are too large to index"))?;

    let c = vector_data(&data.c, "c")?;
    let nx = c.len();
    if nx == 0 {
        return Err(shape_error("c must have at least one entry"));
    }

    let A = constraint_data(&data.A, nx, "A")?;
    let b = vector_data(&data.b, "b")?;
    if b.len() != A.nrows() {
        return Err(shape_error(&format!(
            "b has {} entries but A has {} rows",
            b.len(),
            A.nrows()
        )));
    }

    let G = constraint_data(&data.G, nx, "G")?;
    let h = vector_data(&data.h, "h")?;
    if h.len() != G.nrows() {
        return Err(shape_error(&format!(
            "h has {} entries but G has {} rows",
            h.len(),
            G.nrows()
        )));
    }
    if G.nrows() != ncone_rows {
        return Err(shape_error(&format!(
            "G has {} rows but the cone dimensions describe {}",
            G.nrows(),
            ncone_rows
        )));
    }

    Ok(NormalizedData {
        A,
        b,
        c,
        G,
        h,
        dims: dims.clone(),
    })
}

fn shape_error(msg: &str) -> TransformError {
    TransformError::InputShape(msg.to_string())
}

// row and column vectors have the same column major data
fn vector_data<T: FloatT>(M: &MatrixData<T>, name: &str) -> Result<Vec<T>, TransformError> {
    if !M.is_vector() {
        let (m, n) = M.size();
        return Err(shape_error(&format!(
            "{name} must be a vector, but has size {m} x {n}"
        )));
    }
    Ok(M.to_dense().data)
}

// a matrix with no rows is accepted whatever its column count
fn constraint_data<T: FloatT>(
    M: &MatrixData<T>,
    nx: usize,
    name: &str,
) -> Result<Matrix<T>, TransformError> {
    let (m, n) = M.size();
    if m == 0 {
        return Ok(Matrix::zeros((0, nx)));
    }
    if n != nx {
        return Err(shape_error(&format!(
            "{name} has {n} columns but c has {nx} entries"
        )));
    }
    Ok(M.to_dense())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_data() -> ProblemData<f64> {
        // one equality and two inequalities in two variables
        let A = Matrix::from(&[[1., 1.]]);
        let G = Matrix::from(&[[1., 0.], [0., 1.]]);
        ProblemData::new(
            A,
            vec![1.],
            vec![1., 2.],
            CscMatrix::from(&G),
            vec![0., 0.],
            ConeDims::new(2, &[], &[]),
        )
    }

    #[test]
    fn test_normalize_ok() {
        let data = normalize(&test_data()).unwrap();
        assert_eq!(data.nx(), 2);
        assert_eq!(data.ne(), 1);
        assert_eq!(data.mg(), 2);
        assert_eq!(data.G, Matrix::identity(2));

        // c supplied as a row is the same as c supplied as a column
        let mut raw = test_data();
        raw.c = Matrix::from(&[[1., 2.]]).into();
        assert_eq!(normalize(&raw).unwrap().c, vec![1., 2.]);

        // empty A with the wrong column count is reshaped
        let mut raw = test_data();
        raw.A = Matrix::<f64>::zeros((0, 0)).into();
        raw.b = Vec::<f64>::new().into();
        let data = normalize(&raw).unwrap();
        assert_eq!(data.A.size(), (0, 2));
    }

    #[test]
    fn test_normalize_shape_errors() {
        let mut raw = test_data();
        raw.b = vec![1., 2.].into();
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::InputShape(_))
        ));

        let mut raw = test_data();
        raw.A = Matrix::from(&[[1., 1., 1.]]).into();
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::InputShape(_))
        ));

        let mut raw = test_data();
        raw.c = Matrix::<f64>::zeros((2, 2)).into();
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::InputShape(_))
        ));

        let mut raw = test_data();
        raw.dims = ConeDims::new(1, &[], &[]);
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::InputShape(_))
        ));

        let mut raw = test_data();
        raw.dims = ConeDims::new(2, &[0], &[]);
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::InputShape(_))
        ));
    }

    #[test]
    fn test_normalize_oversized_cones() {
        // the PSD row count n² overflows
        let mut raw = test_data();
        raw.dims = ConeDims::new(0, &[], &[1 << 33]);
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::InputShape(_))
        ));

        let mut raw = test_data();
        raw.dims = ConeDims::new(2, &[usize::MAX], &[]);
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::InputShape(_))
        ));
    }

    #[test]
    fn test_normalize_unsupported_cone() {
        let mut raw = test_data();
        raw.dims.ep = 1;
        assert!(matches!(
            normalize(&raw),
            Err(TransformError::UnsupportedCone(_))
        ));
    }
}
