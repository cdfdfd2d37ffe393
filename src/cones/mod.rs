#![allow(non_snake_case)]

//! Cone descriptors for the standardized cone program.
//!
//! The variable space of a cone program is partitioned into contiguous
//! blocks ordered `[free][nonnegative][second order...][PSD...]`.  Each
//! block is described by a [`SupportedConeT`] tag supplied by the user,
//! and a [`ConeSet`] holds the concrete cones along with their column ranges.

use crate::algebra::FloatT;
use enum_dispatch::*;

//primitive cone types
mod freecone;
mod nonnegativecone;
mod psdcone;
mod socone;

//the supported cone wrapper type for primitives
//and the ordered cone set
mod coneset;
mod supportedcone;

//flatten all cone implementations to appear in this module
pub use coneset::*;
pub use freecone::*;
pub use nonnegativecone::*;
pub use psdcone::*;
pub use socone::*;
pub use supportedcone::*;

/// Classification of a single column of the cone program
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ColumnKind {
    /// unconstrained in sign
    Free,
    /// constrained to be nonnegative
    Nonnegative,
    /// leading `t` coordinate of a second order cone block
    SocHead,
    /// trailing coordinate of a second order cone block
    SocTail,
    /// vectorized entry of a PSD block
    Psd,
}

/// When a column of a given cone may serve as an elimination pivot
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PivotRule {
    /// eligible in both single and two variable rows
    Always,
    /// eligible only in single variable rows with a nonnegative solution
    NonnegativeSingleton,
    /// never eligible
    Never,
}

#[enum_dispatch]
pub trait Cone<T>
where
    T: FloatT,
{
    // functions relating to basic sizing
    fn dim(&self) -> usize;
    fn numel(&self) -> usize;

    // classification of the k-th column within this cone
    fn column_kind(&self, k: usize) -> ColumnKind;

    // elimination eligibility of the columns in this cone
    fn pivot_rule(&self) -> PivotRule;

    // true if the k-th column may be removed once it no
    // longer appears in any constraint, given its cost
    fn is_droppable(&self, k: usize, cost: T) -> bool;

    // the cone that results from dropping `ndropped` columns
    fn shrunk(&self, ndropped: usize) -> SupportedConeT;
}
