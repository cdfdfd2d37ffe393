use super::*;
use core::marker::PhantomData;

// -------------------------------------
// Free (unconstrained) Cone
// -------------------------------------

pub struct FreeCone<T: FloatT = f64> {
    dim: usize,
    phantom: PhantomData<T>,
}

impl<T> FreeCone<T>
where
    T: FloatT,
{
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            phantom: PhantomData,
        }
    }
}

impl<T> Cone<T> for FreeCone<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn numel(&self) -> usize {
        self.dim
    }

    fn column_kind(&self, _k: usize) -> ColumnKind {
        ColumnKind::Free
    }

    fn pivot_rule(&self) -> PivotRule {
        PivotRule::Always
    }

    fn is_droppable(&self, _k: usize, cost: T) -> bool {
        // an unused free variable with nonzero cost makes
        // the problem unbounded, so it must be kept
        cost == T::zero()
    }

    fn shrunk(&self, ndropped: usize) -> SupportedConeT {
        assert!(ndropped <= self.dim);
        SupportedConeT::FreeConeT(self.dim - ndropped)
    }
}
