/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Make a new vector from the elements flagged in `index`
    fn select(&self, index: &[bool]) -> Vec<Self::T>;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Infinity norm.  NaN if any element is NaN.
    fn norm_inf(&self) -> Self::T;

    /// true if every element is exactly zero
    fn is_zero(&self) -> bool;

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}
