use super::{FloatT, VectorMath};
use itertools::izip;
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn select(&self, index: &[bool]) -> Vec<T> {
        assert_eq!(self.len(), index.len());
        zip(self, index)
            .filter(|(_x, &b)| b)
            .map(|(&x, _b)| x)
            .collect()
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for &v in self {
            if v.is_nan() {
                return T::nan();
            }
            out = T::max(out, v.abs());
        }
        out
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|&x| x == T::zero())
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        // b = 1 is the elimination update y += a*x
        if b == T::one() {
            for (y, &x) in zip(&mut *self, x) {
                *y += a * x;
            }
        } else {
            for (y, &x) in izip!(&mut *self, x) {
                *y = a * x + b * *y;
            }
        }
        self
    }
}
