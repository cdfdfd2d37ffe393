use super::*;
use core::marker::PhantomData;

// -------------------------------------
// Second order Cone
// -------------------------------------

pub struct SecondOrderCone<T: FloatT = f64> {
    dim: usize,
    phantom: PhantomData<T>,
}

impl<T> SecondOrderCone<T>
where
    T: FloatT,
{
    pub fn new(dim: usize) -> Self {
        assert!(dim >= 1);
        Self {
            dim,
            phantom: PhantomData,
        }
    }
}

impl<T> Cone<T> for SecondOrderCone<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn numel(&self) -> usize {
        self.dim
    }

    fn column_kind(&self, k: usize) -> ColumnKind {
        if k == 0 {
            ColumnKind::SocHead
        } else {
            ColumnKind::SocTail
        }
    }

    fn pivot_rule(&self) -> PivotRule {
        PivotRule::Never
    }

    fn is_droppable(&self, k: usize, cost: T) -> bool {
        // the head coordinate t is never dropped.  A tail coordinate
        // that is unused can be fixed at zero, which is always
        // compatible with ||y|| ≤ t
        k > 0 && cost == T::zero()
    }

    fn shrunk(&self, ndropped: usize) -> SupportedConeT {
        assert!(ndropped < self.dim);
        SupportedConeT::SecondOrderConeT(self.dim - ndropped)
    }
}
