use super::*;
use crate::algebra::AsFloatT;
use std::iter::zip;
use std::ops::Range;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error type returned when a list of cone blocks is malformed.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConeSpecError {
    #[error("Cone blocks must be ordered as [free][nonnegative][second order...][PSD...]")]
    /// Cone blocks are out of order, or a free / nonnegative block is repeated
    BadOrdering,
    #[error("Cone blocks must have dimension at least 1")]
    /// A cone block has zero dimension
    BadDimension,
    #[error("Cone blocks cover more columns than can be indexed")]
    /// The total number of columns overflows `usize`
    TooLarge,
}

/// Cone dimensions of the standardized program with all leaves as floats,
/// the form expected by solvers consuming the SeDuMi format.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct SedumiDims<T> {
    /// number of free variables
    pub f: T,
    /// number of nonnegative variables
    pub l: T,
    /// second order cone block sizes
    pub q: Vec<T>,
    /// PSD block side lengths
    pub s: Vec<T>,
}

// -------------------------------------
// ordered set of cones partitioning the columns
// -------------------------------------

pub struct ConeSet<T: FloatT = f64> {
    cones: Vec<SupportedCone<T>>,
    types: Vec<SupportedConeT>,

    //overall number of columns covered by the cones
    pub(crate) numel: usize,

    //ranges for the column indices of the constituent cones
    pub(crate) rng_cones: Vec<Range<usize>>,
}

impl<T> ConeSet<T>
where
    T: FloatT,
{
    /// Build a cone set from an ordered list of cone blocks.
    pub fn new(types: &[SupportedConeT]) -> Result<Self, ConeSpecError> {
        if types.iter().any(|t| t.dim() == 0) {
            return Err(ConeSpecError::BadDimension);
        }

        // free and nonnegative blocks appear at most once,
        // and all blocks must appear in tag order
        for pair in types.windows(2) {
            let (t0, t1) = (pair[0].as_tag(), pair[1].as_tag());
            let is_repeated = t0 == t1
                && matches!(
                    t0,
                    SupportedConeTag::FreeCone | SupportedConeTag::NonnegativeCone
                );
            if t0 > t1 || is_repeated {
                return Err(ConeSpecError::BadOrdering);
            }
        }

        let total = types
            .iter()
            .try_fold(0usize, |acc, t| acc.checked_add(t.checked_nvars()?));
        if total.is_none() {
            return Err(ConeSpecError::TooLarge);
        }

        // make an internal copy to protect from user modification
        let types = types.to_vec();
        let cones: Vec<SupportedCone<T>> = types.iter().map(make_cone).collect();

        let numel = cones.iter().map(|c| c.numel()).sum();
        let rng_cones = _make_rng_cones(&cones);

        Ok(Self {
            cones,
            types,
            numel,
            rng_cones,
        })
    }

    /// Build a cone set from SeDuMi style dimensions.  Free and
    /// nonnegative blocks of zero size are omitted.
    pub fn from_dims(f: usize, l: usize, q: &[usize], s: &[usize]) -> Result<Self, ConeSpecError> {
        let mut types = Vec::with_capacity(2 + q.len() + s.len());
        if f > 0 {
            types.push(SupportedConeT::FreeConeT(f));
        }
        if l > 0 {
            types.push(SupportedConeT::NonnegativeConeT(l));
        }
        types.extend(q.iter().map(|&d| SupportedConeT::SecondOrderConeT(d)));
        types.extend(s.iter().map(|&d| SupportedConeT::PSDConeT(d)));
        Self::new(&types)
    }

    pub fn len(&self) -> usize {
        self.cones.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cones.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, SupportedCone<T>> {
        self.cones.iter()
    }

    /// the ordered list of cone blocks
    pub fn types(&self) -> &[SupportedConeT] {
        &self.types
    }

    /// column ranges of the constituent cones
    pub fn rng_cones(&self) -> &[Range<usize>] {
        &self.rng_cones
    }

    /// total number of columns
    pub fn numel(&self) -> usize {
        self.numel
    }

    /// number of free variables
    pub fn f(&self) -> usize {
        self._count_vars(SupportedConeTag::FreeCone)
    }

    /// number of nonnegative variables
    pub fn l(&self) -> usize {
        self._count_vars(SupportedConeTag::NonnegativeCone)
    }

    /// second order cone block sizes, in order
    pub fn q(&self) -> Vec<usize> {
        self._block_dims(SupportedConeTag::SecondOrderCone)
    }

    /// PSD block side lengths, in order
    pub fn s(&self) -> Vec<usize> {
        self._block_dims(SupportedConeTag::PSDCone)
    }

    /// Length of the column prefix holding variables that
    /// may serve as elimination pivots
    pub fn n_eligible(&self) -> usize {
        self.f() + self.l()
    }

    /// Classification of every column of the program
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        let mut kinds = Vec::with_capacity(self.numel);
        for cone in self.iter() {
            kinds.extend((0..cone.numel()).map(|k| cone.column_kind(k)));
        }
        kinds
    }

    /// Pivot eligibility rule of every column of the program
    pub fn column_pivot_rules(&self) -> Vec<PivotRule> {
        let mut rules = Vec::with_capacity(self.numel);
        for cone in self.iter() {
            rules.extend(std::iter::repeat(cone.pivot_rule()).take(cone.numel()));
        }
        rules
    }

    /// Mark the columns that may be dropped once they are unused.
    ///
    /// # Panics
    /// Panics if `cost` does not have one entry per column.
    pub fn droppable_columns(&self, cost: &[T]) -> Vec<bool> {
        assert_eq!(cost.len(), self.numel);
        let mut out = Vec::with_capacity(self.numel);
        for (cone, rng) in zip(&self.cones, &self.rng_cones) {
            let costi = &cost[rng.clone()];
            out.extend(costi.iter().enumerate().map(|(k, &c)| cone.is_droppable(k, c)));
        }
        out
    }

    /// The cone set that remains after removing the columns
    /// not marked in `keep_cols`.  Free and nonnegative blocks
    /// that become empty are omitted.
    ///
    /// # Panics
    /// Panics if `keep_cols` does not have one entry per column, or if
    /// a column that can never be dropped is unmarked.
    pub fn shrunk(&self, keep_cols: &[bool]) -> Result<Self, ConeSpecError> {
        assert_eq!(keep_cols.len(), self.numel);
        let mut types = Vec::with_capacity(self.len());
        for (cone, rng) in zip(&self.cones, &self.rng_cones) {
            let nkept = keep_cols[rng.clone()].iter().filter(|&&k| k).count();
            let newcone = cone.shrunk(cone.numel() - nkept);
            if newcone.nvars() > 0 {
                types.push(newcone);
            }
        }
        Self::new(&types)
    }

    /// Dimensions of the cone set with all leaves as floats
    pub fn dims_as_float(&self) -> SedumiDims<T> {
        SedumiDims {
            f: self.f().as_T(),
            l: self.l().as_T(),
            q: self.q().iter().map(|d| d.as_T()).collect(),
            s: self.s().iter().map(|d| d.as_T()).collect(),
        }
    }

    fn _count_vars(&self, tag: SupportedConeTag) -> usize {
        self.types
            .iter()
            .filter(|t| t.as_tag() == tag)
            .map(|t| t.nvars())
            .sum()
    }

    fn _block_dims(&self, tag: SupportedConeTag) -> Vec<usize> {
        self.types
            .iter()
            .filter(|t| t.as_tag() == tag)
            .map(|t| t.dim())
            .collect()
    }
}

impl<T> Clone for ConeSet<T>
where
    T: FloatT,
{
    fn clone(&self) -> Self {
        // types were validated on construction
        let cones = self.types.iter().map(make_cone).collect();
        Self {
            cones,
            types: self.types.clone(),
            numel: self.numel,
            rng_cones: self.rng_cones.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ConeSet<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConeSet")
            .field("f", &self.f())
            .field("l", &self.l())
            .field("q", &self.q())
            .field("s", &self.s())
            .finish()
    }
}

impl<T> PartialEq for ConeSet<T>
where
    T: FloatT,
{
    fn eq(&self, other: &Self) -> bool {
        self.types == other.types
    }
}

fn _make_rng_cones<T>(cones: &[SupportedCone<T>]) -> Vec<Range<usize>>
where
    T: FloatT,
{
    let mut rngs = Vec::with_capacity(cones.len());

    if !cones.is_empty() {
        let mut start = 0;
        for cone in cones {
            let stop = start + cone.numel();
            rngs.push(start..stop);
            start = stop;
        }
    }
    rngs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coneset_from_dims() {
        let cones = ConeSet::<f64>::from_dims(2, 4, &[3], &[2]).unwrap();

        assert_eq!(cones.len(), 4);
        assert_eq!(cones.numel(), 2 + 4 + 3 + 4);
        assert_eq!(cones.f(), 2);
        assert_eq!(cones.l(), 4);
        assert_eq!(cones.q(), vec![3]);
        assert_eq!(cones.s(), vec![2]);
        assert_eq!(cones.n_eligible(), 6);
        assert_eq!(cones.rng_cones(), &[0..2, 2..6, 6..9, 9..13]);

        // zero sized free / nonnegative blocks are omitted
        let cones = ConeSet::<f64>::from_dims(0, 3, &[], &[]).unwrap();
        assert_eq!(cones.types(), &[SupportedConeT::NonnegativeConeT(3)]);
    }

    #[test]
    fn test_coneset_bad_specs() {
        use SupportedConeT::*;

        let bad = [NonnegativeConeT(2), FreeConeT(1)];
        assert_eq!(
            ConeSet::<f64>::new(&bad).unwrap_err(),
            ConeSpecError::BadOrdering
        );

        let bad = [FreeConeT(2), FreeConeT(1)];
        assert_eq!(
            ConeSet::<f64>::new(&bad).unwrap_err(),
            ConeSpecError::BadOrdering
        );

        let bad = [PSDConeT(2), SecondOrderConeT(3)];
        assert_eq!(
            ConeSet::<f64>::new(&bad).unwrap_err(),
            ConeSpecError::BadOrdering
        );

        let bad = [SecondOrderConeT(0)];
        assert_eq!(
            ConeSet::<f64>::new(&bad).unwrap_err(),
            ConeSpecError::BadDimension
        );

        let bad = [PSDConeT(1 << 33)];
        assert_eq!(
            ConeSet::<f64>::new(&bad).unwrap_err(),
            ConeSpecError::TooLarge
        );

        let bad = [FreeConeT(usize::MAX), NonnegativeConeT(1)];
        assert_eq!(
            ConeSet::<f64>::new(&bad).unwrap_err(),
            ConeSpecError::TooLarge
        );

        // repeated soc and psd blocks are fine
        let good = [SecondOrderConeT(3), SecondOrderConeT(2), PSDConeT(1), PSDConeT(2)];
        assert!(ConeSet::<f64>::new(&good).is_ok());
    }

    #[test]
    fn test_coneset_column_kinds() {
        use ColumnKind::*;
        let cones = ConeSet::<f64>::from_dims(1, 1, &[3], &[1]).unwrap();
        assert_eq!(
            cones.column_kinds(),
            vec![Free, Nonnegative, SocHead, SocTail, SocTail, Psd]
        );

        use PivotRule::*;
        assert_eq!(
            cones.column_pivot_rules(),
            vec![Always, NonnegativeSingleton, Never, Never, Never, Never]
        );
    }

    #[test]
    fn test_coneset_droppable_and_shrunk() {
        let cones = ConeSet::<f64>::from_dims(2, 2, &[3], &[1]).unwrap();
        let cost = [0., 1., 2., -1., 0., 0., 1., 0.];
        assert_eq!(
            cones.droppable_columns(&cost),
            vec![true, false, true, false, false, true, false, false]
        );

        let keep = [false, false, true, true, true, false, true, true];
        let shrunk = cones.shrunk(&keep).unwrap();
        assert_eq!(shrunk.f(), 0);
        assert_eq!(shrunk.l(), 2);
        assert_eq!(shrunk.q(), vec![2]);
        assert_eq!(shrunk.s(), vec![1]);
        assert_eq!(shrunk.numel(), 5);
    }

    #[test]
    fn test_coneset_dims_as_float() {
        let cones = ConeSet::<f64>::from_dims(0, 1, &[4], &[2, 3]).unwrap();
        let dims = cones.dims_as_float();
        assert_eq!(
            dims,
            SedumiDims {
                f: 0.,
                l: 1.,
                q: vec![4.],
                s: vec![2., 3.]
            }
        );
    }
}
