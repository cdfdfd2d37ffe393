#![allow(non_snake_case)]

//! Transformation of conic models into SeDuMi format.
//!
//! The pipeline runs in the order
//!
//! [`normalize`] → [`expand`] → [`simplify`] (or [`symmetrize`] alone) → [`sparsify_tall`]
//!
//! and is driven by a [`SedumiTransformer`], configured with
//! [`TransformSettings`], that produces a [`SedumiProblem`].  Each stage is
//! also available as a free function operating on a [`ConeProgram`].

mod data;
mod error;
mod expand;
mod info;
mod info_print;
mod normalize;
mod problem;
mod program;
mod settings;
mod simplify;
mod sparsify;
mod symmetrize;
mod transformer;

#[cfg(feature = "serde")]
mod json;

//export flattened
pub use data::*;
pub use error::*;
pub use expand::*;
pub use info::*;
pub use normalize::*;
pub use problem::*;
pub use program::*;
pub use settings::*;
pub use simplify::*;
pub use sparsify::*;
pub use symmetrize::*;
pub use transformer::*;
