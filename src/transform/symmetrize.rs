#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::cones::{ConeSet, SupportedConeT};
use std::iter::zip;

/// Average the two triangular copies of every off diagonal PSD entry,
/// so that each vectorized PSD block represents a symmetric matrix.
pub fn symmetrize<T>(program: ConeProgram<T>) -> ConeProgram<T>
where
    T: FloatT,
{
    let ConeProgram {
        mut A,
        b,
        mut c,
        cones,
    } = program;
    symmetrize_in_place(&mut A, &mut c, &cones);
    ConeProgram { A, b, c, cones }
}

pub(crate) fn symmetrize_in_place<T>(A: &mut Matrix<T>, c: &mut [T], cones: &ConeSet<T>)
where
    T: FloatT,
{
    let half: T = (0.5).as_T();

    for (cone, rng) in zip(cones.types(), cones.rng_cones()) {
        let s = match cone {
            SupportedConeT::PSDConeT(s) => *s,
            _ => continue,
        };
        let off = rng.start;

        for i in 0..s {
            for j in (i + 1)..s {
                let ij = off + i * s + j;
                let ji = off + j * s + i;

                for row in 0..A.nrows() {
                    let v = (A[(row, ij)] + A[(row, ji)]) * half;
                    A[(row, ij)] = v;
                    A[(row, ji)] = v;
                }
                let v = (c[ij] + c[ji]) * half;
                c[ij] = v;
                c[ji] = v;
            }
        }
    }
}

#[test]
fn test_symmetrize() {
    // one free variable and a 2x2 PSD block
    let A = Matrix::from(&[
        [1., 0., 2., 0., 0.], //
        [0., 1., 0., 4., 1.], //
    ]);
    let c = vec![1., 0., 3., 1., 0.];
    let cones = ConeSet::from_dims(1, 0, &[], &[2]).unwrap();
    let P = ConeProgram::new(A, vec![1., 2.], c, cones).unwrap();

    let P = symmetrize(P);

    let Atest = Matrix::from(&[
        [1., 0., 1., 1., 0.], //
        [0., 1., 2., 2., 1.], //
    ]);
    assert_eq!(P.A, Atest);
    assert_eq!(P.c, vec![1., 0., 2., 2., 0.]);
    assert_eq!(P.b, vec![1., 2.]);

    // symmetrizing twice changes nothing
    let Q = symmetrize(P.clone());
    assert_eq!(P, Q);
}
