use super::*;
use core::marker::PhantomData;

// -------------------------------------
// Nonnegative Cone
// -------------------------------------

pub struct NonnegativeCone<T: FloatT = f64> {
    dim: usize,
    phantom: PhantomData<T>,
}

impl<T> NonnegativeCone<T>
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

impl<T> Cone<T> for NonnegativeCone<T>
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
        ColumnKind::Nonnegative
    }

    fn pivot_rule(&self) -> PivotRule {
        PivotRule::NonnegativeSingleton
    }

    fn is_droppable(&self, _k: usize, cost: T) -> bool {
        // x = 0 is optimal for an unused variable with cost ≥ 0
        cost >= T::zero()
    }

    fn shrunk(&self, ndropped: usize) -> SupportedConeT {
        assert!(ndropped <= self.dim);
        SupportedConeT::NonnegativeConeT(self.dim - ndropped)
    }
}
