use super::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------
// We define some machinery here for enumerating the
// different cone types that can live in the cone set
// ---------------------------------------------------

/// API type describing the type of a conic block.
///
/// Blocks of a cone program must appear in the order free,
/// nonnegative, second order, PSD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SupportedConeT {
    /// The free cone `ℝⁿ`
    ///
    /// The parameter indicates the cones dimension.
    FreeConeT(usize),
    /// The nonnegative orthant.
    ///
    /// The parameter indicates the cones dimension.
    NonnegativeConeT(usize),
    /// The second order cone / Lorenz cone / ice-cream cone.
    ///
    /// The parameter indicates the cones dimension.
    SecondOrderConeT(usize),
    /// The positive semidefinite cone in full vectorized form.
    ///
    /// The parameter indicates the matrix dimension, i.e. size = 1
    /// corresponds to a 1x1 matrix.  The cone occupies `n²` columns.
    PSDConeT(usize),
}

impl SupportedConeT {
    // this reports the number of columns in the cone,
    // which for the PSD cone is the square of its side
    pub(crate) fn nvars(&self) -> usize {
        match self {
            SupportedConeT::FreeConeT(dim) => *dim,
            SupportedConeT::NonnegativeConeT(dim) => *dim,
            SupportedConeT::SecondOrderConeT(dim) => *dim,
            SupportedConeT::PSDConeT(dim) => dim * dim,
        }
    }

    // as nvars, but None if the column count overflows
    pub(crate) fn checked_nvars(&self) -> Option<usize> {
        match self {
            SupportedConeT::PSDConeT(dim) => dim.checked_mul(*dim),
            _ => Some(self.dim()),
        }
    }

    // the dimensional parameter of the block
    pub(crate) fn dim(&self) -> usize {
        match self {
            SupportedConeT::FreeConeT(dim)
            | SupportedConeT::NonnegativeConeT(dim)
            | SupportedConeT::SecondOrderConeT(dim)
            | SupportedConeT::PSDConeT(dim) => *dim,
        }
    }
}

impl std::fmt::Display for SupportedConeT {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", &self.as_tag().as_str())
    }
}

// we will use the SupportedCone enum to wrap all of the
// primitive cone types that live in the cone set

#[allow(clippy::enum_variant_names)]
#[enum_dispatch(Cone<T>)]
pub enum SupportedCone<T>
where
    T: FloatT,
{
    FreeCone(FreeCone<T>),
    NonnegativeCone(NonnegativeCone<T>),
    SecondOrderCone(SecondOrderCone<T>),
    PSDCone(PSDCone<T>),
}

pub fn make_cone<T: FloatT>(cone: &SupportedConeT) -> SupportedCone<T> {
    match *cone {
        SupportedConeT::FreeConeT(dim) => FreeCone::<T>::new(dim).into(),
        SupportedConeT::NonnegativeConeT(dim) => NonnegativeCone::<T>::new(dim).into(),
        SupportedConeT::SecondOrderConeT(dim) => SecondOrderCone::<T>::new(dim).into(),
        SupportedConeT::PSDConeT(dim) => PSDCone::<T>::new(dim).into(),
    }
}

// -------------------------------------
// Cone type tags, listed in the order in which blocks
// must appear in the cone set
// -------------------------------------

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug, Copy, Hash)]
pub(crate) enum SupportedConeTag {
    FreeCone = 0,
    NonnegativeCone,
    SecondOrderCone,
    PSDCone,
}

pub(crate) trait SupportedConeAsTag {
    fn as_tag(&self) -> SupportedConeTag;
}

impl SupportedConeAsTag for SupportedConeT {
    fn as_tag(&self) -> SupportedConeTag {
        match self {
            SupportedConeT::FreeConeT(_) => SupportedConeTag::FreeCone,
            SupportedConeT::NonnegativeConeT(_) => SupportedConeTag::NonnegativeCone,
            SupportedConeT::SecondOrderConeT(_) => SupportedConeTag::SecondOrderCone,
            SupportedConeT::PSDConeT(_) => SupportedConeTag::PSDCone,
        }
    }
}

impl<T: FloatT> SupportedConeAsTag for SupportedCone<T> {
    fn as_tag(&self) -> SupportedConeTag {
        match self {
            SupportedCone::FreeCone(_) => SupportedConeTag::FreeCone,
            SupportedCone::NonnegativeCone(_) => SupportedConeTag::NonnegativeCone,
            SupportedCone::SecondOrderCone(_) => SupportedConeTag::SecondOrderCone,
            SupportedCone::PSDCone(_) => SupportedConeTag::PSDCone,
        }
    }
}

impl SupportedConeTag {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            SupportedConeTag::FreeCone => "FreeCone",
            SupportedConeTag::NonnegativeCone => "NonnegativeCone",
            SupportedConeTag::SecondOrderCone => "SecondOrderCone",
            SupportedConeTag::PSDCone => "PSDCone",
        }
    }
}
