#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::cones::ConeSet;

/// Expand normalized model data into a SeDuMi standard form program.
///
/// The variables become `[x][slacks]`, with one slack for each row of `G`,
/// and the program data is
///
/// ```text
/// A* = [ A  0 ]    b* = [ b ]    c* = [ c  0 ]
///      [ G  I ]         [ h ]
/// ```
///
/// so that each cone constraint `h - Gx ∈ K` becomes a cone constraint
/// on a fresh slack variable forced equal to `h - Gx`.  The original
/// variables are free, and the slacks inherit the cones of `dims`.
pub fn expand<T>(data: NormalizedData<T>) -> Result<ConeProgram<T>, TransformError>
where
    T: FloatT,
{
    let nx = data.nx();
    let ne = data.ne();
    let mg = data.mg();

    let Z = Matrix::zeros((ne, mg));
    let I = Matrix::identity(mg);

    // blocks were dimension checked on normalization
    let A = Matrix::hvcat(&[&[&data.A, &Z], &[&data.G, &I]])
        .map_err(|_| TransformError::InputShape("inconsistent block dimensions".to_string()))?;

    let mut b = data.b;
    b.extend_from_slice(&data.h);

    let mut c = data.c;
    c.resize(nx + mg, T::zero());

    let dims = &data.dims;
    let cones = ConeSet::from_dims(nx, dims.l, &dims.q, &dims.s)?;

    ConeProgram::new(A, b, c, cones)
}
