//! Linear algebra types and operations used by the transformer.
//!
//! Problem data is held densely in the column major [`Matrix`] type while
//! it is being transformed, and is written out in the compressed sparse
//! column [`CscMatrix`] type.  Slices of [`FloatT`] values implement
//! [`VectorMath`].

mod csc;
mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;

pub use csc::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

#[cfg(test)]
mod tests;
