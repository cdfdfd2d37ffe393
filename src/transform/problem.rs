#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::cones::{ConeSet, SedumiDims};

/// A cone program in SeDuMi format, ready to be handed to a solver
///
/// ```text
/// minimize    c x + offset
/// subject to  A x = b
///             x ∈ K
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SedumiProblem<T: FloatT = f64> {
    /// constraint matrix (m x n)
    pub A: CscMatrix<T>,
    /// right hand side as a sparse column (m x 1)
    pub b: CscMatrix<T>,
    /// objective as a sparse row (1 x n)
    pub c: CscMatrix<T>,
    /// cone partition of the variables
    pub cones: ConeSet<T>,
    /// constant to add to the optimal value
    pub offset: T,
}

impl<T> SedumiProblem<T>
where
    T: FloatT,
{
    /// Convert a dense program to sparse output form, converting
    /// each matrix in bands of `block_height` rows.
    pub fn from_program(program: &ConeProgram<T>, offset: T, block_height: usize) -> Self {
        let (m, n) = program.A.size();
        let b = Matrix::new((m, 1), program.b.clone());
        let c = Matrix::new((1, n), program.c.clone());

        Self {
            A: sparsify_tall(&program.A, block_height),
            b: sparsify_tall(&b, block_height),
            c: sparsify_tall(&c, block_height),
            cones: program.cones.clone(),
            offset,
        }
    }

    /// number of constraints
    pub fn m(&self) -> usize {
        self.A.nrows()
    }

    /// number of variables
    pub fn n(&self) -> usize {
        self.A.ncols()
    }

    /// The cone descriptor `K` with all leaves as floats
    pub fn dims(&self) -> SedumiDims<T> {
        self.cones.dims_as_float()
    }
}

#[test]
fn test_sedumi_problem_from_program() {
    let A = Matrix::from(&[[1., 0., 2.], [0., 0., 3.]]);
    let cones = ConeSet::from_dims(1, 2, &[], &[]).unwrap();
    let P = ConeProgram::new(A.clone(), vec![0., 4.], vec![1., 0., 0.], cones).unwrap();

    let S = SedumiProblem::from_program(&P, 2., 1);
    assert_eq!((S.m(), S.n()), (2, 3));
    assert_eq!(S.A, CscMatrix::from(&A));
    assert_eq!(S.b.size(), (2, 1));
    assert_eq!(S.b.nnz(), 1);
    assert_eq!(S.c.size(), (1, 3));
    assert_eq!(S.c.nnz(), 1);
    assert_eq!(S.offset, 2.);

    let dims = S.dims();
    assert_eq!((dims.f, dims.l), (1., 2.));
}
