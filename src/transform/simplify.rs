#![allow(non_snake_case)]

use super::symmetrize::symmetrize_in_place;
use super::*;
use crate::algebra::*;
use crate::cones::PivotRule;

/// Shape of a constraint row that allows a variable to be eliminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPattern {
    /// `a x_i = d`
    Singleton(usize),
    /// `a x_i + a' x_j = d`, with `i < j`
    Pair(usize, usize),
}

impl RowPattern {
    pub fn pivot(&self) -> usize {
        match *self {
            RowPattern::Singleton(i) => i,
            RowPattern::Pair(i, _) => i,
        }
    }

    pub fn partner(&self) -> Option<usize> {
        match *self {
            RowPattern::Singleton(_) => None,
            RowPattern::Pair(_, j) => Some(j),
        }
    }
}

/// Record of a single elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EliminatedVariable {
    /// the row used for the elimination
    pub row: usize,
    /// the column eliminated
    pub col: usize,
    /// the column into which the eliminated column was folded, if any
    pub partner: Option<usize>,
}

/// Rows and columns of the expanded program that survive simplification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionIndex {
    /// vector of length = expanded RHS.  Entries are false
    /// for rows that were removed
    pub keep_rows: Vec<bool>,

    /// vector of length = expanded variables.  Entries are false
    /// for columns that were removed
    pub keep_cols: Vec<bool>,
}

impl ReductionIndex {
    /// original indices of the kept rows
    pub fn keep_row_index(&self) -> Vec<usize> {
        findall(&self.keep_rows)
    }

    /// original indices of the kept columns
    pub fn keep_col_index(&self) -> Vec<usize> {
        findall(&self.keep_cols)
    }

    pub fn count_removed_rows(&self) -> usize {
        self.keep_rows.iter().filter(|&&k| !k).count()
    }

    pub fn count_removed_cols(&self) -> usize {
        self.keep_cols.iter().filter(|&&k| !k).count()
    }

    /// Restrict a point in the expanded variable space to the kept columns
    pub fn project<T: FloatT>(&self, x: &[T]) -> Vec<T> {
        x.select(&self.keep_cols)
    }
}

fn findall(v: &[bool]) -> Vec<usize> {
    v.iter()
        .enumerate()
        .filter(|(_, &keep)| keep)
        .map(|(i, _)| i)
        .collect()
}

/// Result of simplifying a cone program
#[derive(Debug, Clone, PartialEq)]
pub struct Simplification<T: FloatT = f64> {
    /// the reduced program
    pub program: ConeProgram<T>,
    /// constant to add to the optimal value of the reduced
    /// program to recover that of the original
    pub offset: T,
    /// rows and columns kept from the original
    pub reduce_map: ReductionIndex,
    /// eliminations performed, in order
    pub eliminated: Vec<EliminatedVariable>,
}

/// Test whether the constraint `row·x = rhs` has the form `a x_i = d` or
/// `a x_i + a' x_j = d`, where `x_i` lies in the first `n_elig` columns and
/// is the first variable of the row.
///
/// Rows with a nonzero right hand side are rejected unless
/// `allow_nonzero_b` is set, and rows whose pivot is smaller than
/// `pivot_tolerance` in magnitude are rejected.
pub fn check_eliminatibility<T>(
    row: &[T],
    rhs: T,
    n_elig: usize,
    allow_nonzero_b: bool,
    pivot_tolerance: T,
) -> Option<RowPattern>
where
    T: FloatT,
{
    if !allow_nonzero_b && rhs != T::zero() {
        return None;
    }

    let mut nonzeros = row
        .iter()
        .enumerate()
        .filter(|(_, &v)| v != T::zero())
        .map(|(k, _)| k);

    let i = nonzeros.next()?;
    if i >= n_elig || row[i].abs() < pivot_tolerance {
        return None;
    }

    match (nonzeros.next(), nonzeros.next()) {
        (None, _) => Some(RowPattern::Singleton(i)),
        (Some(j), None) => Some(RowPattern::Pair(i, j)),
        // three or more nonzeros
        _ => None,
    }
}

/// Eliminate free and nonnegative variables that are fixed by a single
/// constraint row, then drop the rows and columns made redundant.
///
/// Rows are scanned once, in order.  Free variables are eliminated from
/// rows of either pattern.  Nonnegative variables are eliminated only
/// from rows of the form `a x_i = d` with `d/a ≥ 0`.  Each elimination
/// folds the eliminated column into the right hand side, the objective
/// offset and, for two variable rows, the partner column.
///
/// PSD blocks are symmetrized before redundant rows and columns are
/// identified.  Rows of the form `0 = d` with `d ≠ 0` are kept so that
/// infeasibility is reported downstream.
pub fn simplify<T>(
    program: ConeProgram<T>,
    settings: &TransformSettings<T>,
) -> Result<Simplification<T>, TransformError>
where
    T: FloatT,
{
    let ConeProgram {
        mut A,
        mut b,
        mut c,
        cones,
    } = program;
    let (m, n) = A.size();

    let pivot_rules = cones.column_pivot_rules();
    let n_elig = cones.n_eligible();

    let mut offset = T::zero();
    let mut eliminated = Vec::new();
    let mut row = vec![T::zero(); n];

    // ---------------------------------
    // elimination pass
    // ---------------------------------
    for k in 0..m {
        for (r, v) in row.iter_mut().zip(A.row_iter(k)) {
            *r = v;
        }

        let pattern = match check_eliminatibility(
            &row,
            b[k],
            n_elig,
            settings.allow_nonzero_b,
            settings.pivot_tolerance,
        ) {
            Some(pattern) => pattern,
            None => continue,
        };

        let i = pattern.pivot();
        let partner = pattern.partner();
        let a = row[i];
        let factor = b[k] / a;

        let is_eliminable = match pivot_rules[i] {
            PivotRule::Always => true,
            PivotRule::NonnegativeSingleton => partner.is_none() && factor >= T::zero(),
            PivotRule::Never => false,
        };
        if !is_eliminable {
            continue;
        }

        // x_i = (d - a' x_j) / a
        let coli = A.col_slice(i).to_vec();
        let ci = c[i];
        b.axpby(-factor, &coli, T::one());
        offset += factor * ci;

        if let Some(j) = partner {
            let ratio = row[j] / a;
            A.col_slice_mut(j).axpby(-ratio, &coli, T::one());
            c[j] -= ratio * ci;
        }

        // x_i can't be selected again
        A.col_slice_mut(i).set(T::zero());
        c[i] = T::zero();

        eliminated.push(EliminatedVariable {
            row: k,
            col: i,
            partner,
        });
    }

    symmetrize_in_place(&mut A, &mut c, &cones);

    // ---------------------------------
    // mark the rows and columns to keep
    // ---------------------------------
    let droppable = cones.droppable_columns(&c);
    let keep_cols: Vec<bool> = (0..n)
        .map(|col| !(droppable[col] && A.col_is_zero(col)))
        .collect();
    let keep_rows: Vec<bool> = (0..m)
        .map(|row| b[row] != T::zero() || !A.row_is_zero(row))
        .collect();

    let nvars = keep_cols.iter().filter(|&&k| k).count();
    let ncons = keep_rows.iter().filter(|&&k| k).count();
    if nvars == 0 || ncons == 0 {
        return Err(TransformError::DegenerateElimination {
            variables: nvars,
            constraints: ncons,
        });
    }

    // ---------------------------------
    // rebuild by selection
    // ---------------------------------
    let program = ConeProgram::new(
        A.select(&keep_rows, &keep_cols),
        b.select(&keep_rows),
        c.select(&keep_cols),
        cones.shrunk(&keep_cols)?,
    )?;

    Ok(Simplification {
        program,
        offset,
        reduce_map: ReductionIndex {
            keep_rows,
            keep_cols,
        },
        eliminated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cones::ConeSet;

    #[test]
    fn test_check_eliminatibility() {
        let tol = 1e-12;

        // a x_i = 0
        let row = [0., 2., 0., 0.];
        assert_eq!(
            check_eliminatibility(&row, 0., 2, false, tol),
            Some(RowPattern::Singleton(1))
        );

        // a x_i + a' x_j = 0, partner in any column
        let row = [0., 2., 0., 3.];
        assert_eq!(
            check_eliminatibility(&row, 0., 2, false, tol),
            Some(RowPattern::Pair(1, 3))
        );

        // three nonzeros
        let row = [1., 2., 0., 3.];
        assert_eq!(check_eliminatibility(&row, 0., 4, false, tol), None);

        // first nonzero outside the eligible prefix
        let row = [0., 0., 1., 3.];
        assert_eq!(check_eliminatibility(&row, 0., 2, false, tol), None);

        // empty row
        let row = [0., 0., 0., 0.];
        assert_eq!(check_eliminatibility(&row, 0., 4, false, tol), None);

        // nonzero rhs only when allowed
        let row = [1., 0., 0., 0.];
        assert_eq!(check_eliminatibility(&row, 1., 4, false, tol), None);
        assert_eq!(
            check_eliminatibility(&row, 1., 4, true, tol),
            Some(RowPattern::Singleton(0))
        );

        // tiny pivot
        let row = [1e-14, 0., 0., 1.];
        assert_eq!(check_eliminatibility(&row, 0., 4, false, tol), None);
        assert_eq!(
            check_eliminatibility(&row, 0., 4, false, 0.),
            Some(RowPattern::Pair(0, 3))
        );
    }

    #[test]
    fn test_simplify_pair_folding() {
        // x0 - 2 x1 = 0 eliminates the free x0 into x1,
        // leaving x1 + x2 = 1 with x1, x2 ≥ 0
        let A = Matrix::from(&[
            [1., -2., 0.], //
            [1., -1., 1.], //
        ]);
        let cones = ConeSet::from_dims(1, 2, &[], &[]).unwrap();
        let P = ConeProgram::new(A, vec![0., 1.], vec![3., 1., 1.], cones).unwrap();

        let settings = TransformSettings::default();
        let S = simplify(P, &settings).unwrap();

        assert_eq!(S.offset, 0.);
        assert_eq!(
            S.eliminated,
            vec![EliminatedVariable {
                row: 0,
                col: 0,
                partner: Some(1)
            }]
        );
        assert_eq!(S.reduce_map.keep_rows, vec![false, true]);
        assert_eq!(S.reduce_map.keep_cols, vec![false, true, true]);
        assert_eq!(S.program.A, Matrix::from(&[[1., 1.]]));
        assert_eq!(S.program.b, vec![1.]);
        assert_eq!(S.program.c, vec![7., 1.]);
        assert_eq!(S.program.cones.f(), 0);
        assert_eq!(S.program.cones.l(), 2);
    }

    #[test]
    fn test_simplify_negative_nonneg_ratio_kept() {
        // 2 x1 = -4 with x1 ≥ 0 is infeasible and must be left alone
        let A = Matrix::from(&[
            [0., 2.], //
            [1., 1.], //
        ]);
        let cones = ConeSet::from_dims(1, 1, &[], &[]).unwrap();
        let P = ConeProgram::new(A.clone(), vec![-4., 1.], vec![1., 1.], cones).unwrap();

        let settings = TransformSettingsBuilder::default()
            .allow_nonzero_b(true)
            .build()
            .unwrap();

        // the second row eliminates x0 in terms of x1
        let S = simplify(P, &settings).unwrap();
        assert_eq!(S.eliminated.len(), 1);
        assert_eq!(S.eliminated[0].col, 0);
        assert_eq!(S.program.A, Matrix::from(&[[2.]]));
        assert_eq!(S.program.b, vec![-4.]);
        assert_eq!(S.program.c, vec![0.]);
        assert_eq!(S.offset, 1.);
    }

    #[test]
    fn test_reduction_index() {
        let R = ReductionIndex {
            keep_rows: vec![true, false, true],
            keep_cols: vec![false, true, true, false],
        };
        assert_eq!(R.keep_row_index(), vec![0, 2]);
        assert_eq!(R.keep_col_index(), vec![1, 2]);
        assert_eq!(R.count_removed_rows(), 1);
        assert_eq!(R.count_removed_cols(), 2);
        assert_eq!(R.project(&[1., 2., 3., 4.]), vec![2., 3.]);
    }
}
