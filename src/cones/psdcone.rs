use super::*;
use core::marker::PhantomData;

// -------------------------------------
// Positive Semidefinite Cone (full vectorized form)
// -------------------------------------

/// PSD cone over `n x n` matrices, held as a full column
/// major vectorization with `n²` entries.
pub struct PSDCone<T: FloatT = f64> {
    n: usize,
    numel: usize,
    phantom: PhantomData<T>,
}

impl<T> PSDCone<T>
where
    T: FloatT,
{
    /// # Panics
    /// Panics if `n` is zero or `n²` overflows `usize`.
    pub fn new(n: usize) -> Self {
        assert!(n >= 1);
        let numel = match n.checked_mul(n) {
            Some(numel) => numel,
            None => panic!("PSD cone side {n} is too large"),
        };
        Self {
            n,
            numel,
            phantom: PhantomData,
        }
    }
}

impl<T> Cone<T> for PSDCone<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.n
    }

    fn numel(&self) -> usize {
        self.numel
    }

    fn column_kind(&self, _k: usize) -> ColumnKind {
        ColumnKind::Psd
    }

    fn pivot_rule(&self) -> PivotRule {
        PivotRule::Never
    }

    fn is_droppable(&self, _k: usize, _cost: T) -> bool {
        false
    }

    fn shrunk(&self, ndropped: usize) -> SupportedConeT {
        assert_eq!(ndropped, 0);
        SupportedConeT::PSDConeT(self.n)
    }
}
