use super::*;
use crate::algebra::*;
use crate::cones::{ColumnKind, ConeSet};
use crate::io::PrintTarget;
use std::iter::zip;

/// Statistics gathered while transforming a problem

#[derive(Default, Debug)]
pub struct TransformInfo<T> {
    // input model
    pub nvars_input: usize,
    pub ncons_input: usize,

    // after expansion
    pub nvars_expanded: usize,
    pub ncons_expanded: usize,

    // simplification
    pub eliminated_free: usize,
    pub eliminated_nonneg: usize,
    pub removed_free: usize,
    pub removed_nonneg: usize,
    pub removed_soc: usize,
    pub removed_rows: usize,

    // output
    pub nvars: usize,
    pub ncons: usize,
    pub nnz: usize,
    pub offset: T,

    pub(crate) stream: PrintTarget,
}

impl<T> TransformInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all statistics.  The print target is kept.
    pub fn reset(&mut self) {
        let stream = std::mem::take(&mut self.stream);
        *self = Self {
            stream,
            ..Self::default()
        };
    }

    pub(crate) fn record_input(&mut self, data: &NormalizedData<T>) {
        self.nvars_input = data.nx();
        self.ncons_input = data.ne() + data.mg();
    }

    pub(crate) fn record_expanded(&mut self, program: &ConeProgram<T>) {
        self.nvars_expanded = program.n();
        self.ncons_expanded = program.m();
    }

    pub(crate) fn record_simplification(
        &mut self,
        simplification: &Simplification<T>,
        cones: &ConeSet<T>,
    ) {
        let kinds = cones.column_kinds();

        for var in simplification.eliminated.iter() {
            match kinds[var.col] {
                ColumnKind::Free => self.eliminated_free += 1,
                ColumnKind::Nonnegative => self.eliminated_nonneg += 1,
                _ => {}
            }
        }

        let keep_cols = &simplification.reduce_map.keep_cols;
        for (kind, _) in zip(&kinds, keep_cols).filter(|(_, &keep)| !keep) {
            match kind {
                ColumnKind::Free => self.removed_free += 1,
                ColumnKind::Nonnegative => self.removed_nonneg += 1,
                ColumnKind::SocTail => self.removed_soc += 1,
                _ => {}
            }
        }
        self.removed_rows = simplification.reduce_map.count_removed_rows();
        self.offset = simplification.offset;
    }

    pub(crate) fn record_output(&mut self, problem: &SedumiProblem<T>) {
        self.nvars = problem.n();
        self.ncons = problem.m();
        self.nnz = problem.A.nnz();
        self.offset = problem.offset;
    }
}
