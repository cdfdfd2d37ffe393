use super::SettingsError;
use crate::cones::ConeSpecError;
use thiserror::Error;

/// Error type returned by the transformation pipeline.  Any error
/// is fatal for the transformation attempt that raised it.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TransformError {
    /// Matrix or vector dimensions of the input are mutually inconsistent
    #[error("Inconsistent input dimensions: {0}")]
    InputShape(String),
    /// The input contains a cone type that can't be expressed in SeDuMi format
    #[error("Unsupported cone: {0}")]
    UnsupportedCone(String),
    /// Simplification would leave an empty program
    #[error(
        "Simplification leaves a degenerate program \
         ({variables} variables, {constraints} constraints)"
    )]
    DegenerateElimination {
        variables: usize,
        constraints: usize,
    },
    /// Malformed cone specification
    #[error("Bad cone specification: {0}")]
    Cones(#[from] ConeSpecError),
    /// Invalid settings
    #[error("Bad settings: {0}")]
    Settings(#[from] SettingsError),
}
