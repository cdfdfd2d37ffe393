//! __coneprep__ converts conic optimization models into the SeDuMi standard
//! format, optionally simplifying them first.   A model is supplied as
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & c^T x\\\\\[2ex\]
//!  \text{subject to} & Ax = b \\\\\[1ex\]
//!         & h - Gx \in \mathcal{K}
//!  \end{array}
//! $$
//!
//! where $\mathcal{K}$ is a product of nonnegative orthants, second order
//! cones and positive semidefinite cones.   The transformed problem is
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & c'^T x' + \text{offset}\\\\\[2ex\]
//!  \text{subject to} & A'x' = b' \\\\\[1ex\]
//!         & x' \in \mathcal{K}'
//!  \end{array}
//! $$
//!
//! with the variables of $x'$ partitioned into free, nonnegative, second
//! order and PSD blocks in that order, as described by the cone
//! descriptor `K = {f, l, q, s}`.
//!
//! ## Features
//!
//! * __Simplification__: equality rows with one or two nonzeros on free or
//! nonnegative variables are used to eliminate those variables, and
//! variables or rows left without any effect on the problem are removed.
//!
//! * __Symmetric PSD blocks__: constraint and objective coefficients of
//! every PSD block are made symmetric.
//!
//! * __Banded sparse output__: the dense working matrices are converted to
//! compressed sparse column format in bands of rows.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod cones;
pub mod io;
pub mod transform;
