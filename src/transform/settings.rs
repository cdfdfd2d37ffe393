use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings controlling the transformation into SeDuMi format

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformSettings<T: FloatT> {
    ///eliminate redundant variables after expansion
    #[builder(default = "true")]
    pub simplify_enable: bool,

    ///allow elimination using rows with a nonzero right hand side.
    ///The simplified objective may then differ by a constant offset
    #[builder(default = "false")]
    pub allow_nonzero_b: bool,

    ///pivots smaller than this in magnitude make a row ineligible for elimination
    #[builder(default = "(1e-12).as_T()")]
    pub pivot_tolerance: T,

    ///height of the row bands used when converting dense matrices to sparse format
    #[builder(default = "1000")]
    pub sparsify_block_height: usize,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for TransformSettings<T>
where
    T: FloatT,
{
    fn default() -> TransformSettings<T> {
        // defaults always pass validation
        TransformSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> TransformSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.  Used to check settings
    /// that have been constructed or modified directly.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_pivot_tolerance(self.pivot_tolerance)?;
        validate_sparsify_block_height(self.sparsify_block_height)?;
        Ok(())
    }
}

impl From<SettingsError> for TransformSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        TransformSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> TransformSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that any numerical values given are legal
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(pivot_tolerance) = self.pivot_tolerance {
            validate_pivot_tolerance(pivot_tolerance)?;
        }
        if let Some(sparsify_block_height) = self.sparsify_block_height {
            validate_sparsify_block_height(sparsify_block_height)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_pivot_tolerance<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("pivot_tolerance"))
    }
}

fn validate_sparsify_block_height(height: usize) -> Result<(), SettingsError> {
    if height >= 1 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("sparsify_block_height"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = TransformSettingsBuilder::<f64>::default().build().unwrap();
    assert!(settings.simplify_enable);
    assert!(!settings.allow_nonzero_b);
    assert_eq!(settings.pivot_tolerance, 1e-12);
    assert_eq!(settings.sparsify_block_height, 1000);
    assert!(!settings.verbose);

    // fail on bad numerical values
    assert!(TransformSettingsBuilder::<f64>::default()
        .pivot_tolerance(-1.0)
        .build()
        .is_err());
    assert!(TransformSettingsBuilder::<f64>::default()
        .pivot_tolerance(f64::NAN)
        .build()
        .is_err());
    assert!(TransformSettingsBuilder::<f64>::default()
        .sparsify_block_height(0)
        .build()
        .is_err());

    // zero tolerance is allowed
    assert!(TransformSettingsBuilder::<f64>::default()
        .pivot_tolerance(0.0)
        .build()
        .is_ok());

    // directly construct a bad TransformSettings and manually check
    let settings = TransformSettings::<f64> {
        sparsify_block_height: 0,
        ..TransformSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("sparsify_block_height"))
    );
}
