#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::cones::ConeSet;

/// A cone program in SeDuMi standard form
///
/// ```text
/// minimize    c'x
/// subject to  Ax = b
///             x ∈ K
/// ```
/// where the columns of `A` are partitioned into cones by `cones`.
/// All data is held densely while the program is being transformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeProgram<T: FloatT = f64> {
    /// constraint matrix (m x n)
    pub A: Matrix<T>,
    /// right hand side (m)
    pub b: Vec<T>,
    /// objective, held as a row (n)
    pub c: Vec<T>,
    /// cone partition of the n columns
    pub cones: ConeSet<T>,
}

impl<T> ConeProgram<T>
where
    T: FloatT,
{
    /// Make a new program, checking that the data dimensions agree.
    pub fn new(
        A: Matrix<T>,
        b: Vec<T>,
        c: Vec<T>,
        cones: ConeSet<T>,
    ) -> Result<Self, TransformError> {
        if b.len() != A.nrows() {
            return Err(TransformError::InputShape(format!(
                "b has {} entries but A has {} rows",
                b.len(),
                A.nrows()
            )));
        }
        if c.len() != A.ncols() || cones.numel() != A.ncols() {
            return Err(TransformError::InputShape(format!(
                "A has {} columns, c has {} entries and the cones cover {}",
                A.ncols(),
                c.len(),
                cones.numel()
            )));
        }
        Ok(Self { A, b, c, cones })
    }

    /// number of constraints
    pub fn m(&self) -> usize {
        self.A.nrows()
    }

    /// number of variables
    pub fn n(&self) -> usize {
        self.A.ncols()
    }

    /// objective value c'x at the point `x`
    pub fn objective(&self, x: &[T]) -> T {
        self.c.dot(x)
    }

    /// largest violation of the equality constraints at the point `x`
    pub fn constraint_violation(&self, x: &[T]) -> T {
        assert_eq!(x.len(), self.n());
        let mut r = self.b.clone();
        for (col, &xj) in x.iter().enumerate() {
            r.axpby(-xj, self.A.col_slice(col), T::one());
        }
        r.norm_inf()
    }
}

#[test]
fn test_cone_program() {
    let A = Matrix::from(&[[1., 1., 0.], [0., 1., 1.]]);
    let cones = ConeSet::from_dims(1, 2, &[], &[]).unwrap();
    let P = ConeProgram::new(A.clone(), vec![2., 3.], vec![1., 2., 3.], cones).unwrap();

    assert_eq!((P.m(), P.n()), (2, 3));
    assert_eq!(P.objective(&[1., 1., 2.]), 9.);
    assert_eq!(P.constraint_violation(&[1., 1., 2.]), 0.);
    assert_eq!(P.constraint_violation(&[1., 1., 1.]), 1.);

    let cones = ConeSet::from_dims(1, 1, &[], &[]).unwrap();
    assert!(ConeProgram::new(A, vec![2., 3.], vec![1., 2., 3.], cones).is_err());
}
