//! Prediction pipeline: validate → derive → predict.
//!
//! The model itself is an injected, externally-owned dependency behind the
//! `StrengthModel` trait. This module owns the ordering contract: feature
//! derivation never runs on input that failed validation, and model
//! failures pass through with their original cause attached.

pub mod baseline;

use thiserror::Error;
use tracing::debug;

use crate::features::{self, DeriveError};
use crate::types::{DerivedFeatureSet, RawMixInput};
use crate::validation::{self, RangeViolation, ValidationResult};

pub use baseline::BolomeyModel;

// ============================================================================
// Model Boundary
// ============================================================================

/// Failure inside the prediction model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The feature vector is missing a field the model was fit on.
    #[error("feature vector is missing '{name}' expected by the model")]
    MissingFeature { name: &'static str },

    /// Any other model-side failure (backend unavailable, artifact
    /// mismatch). The cause is preserved verbatim.
    #[error("model backend failure")]
    Backend(#[source] anyhow::Error),
}

/// A loaded, read-only strength regression model.
///
/// Implementations bind to the feature set by field name, never by
/// position. The core does not manage model loading, versioning, or
/// storage; the caller owns the model's lifecycle.
pub trait StrengthModel {
    /// Predict compressive strength (MPa) for one feature set.
    fn predict(&self, features: &DerivedFeatureSet) -> Result<f64, ModelError>;
}

// ============================================================================
// Pipeline Error
// ============================================================================

/// One prediction request's failure modes.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Expected, non-fatal: one or more raw fields outside declared
    /// bounds. Carries every violation, in range-table order.
    #[error("{} mix field(s) outside physical range", .0.len())]
    OutOfRange(Vec<RangeViolation>),

    /// Degenerate arithmetic reached the deriver despite validation;
    /// an integration error, never silently masked.
    #[error("feature derivation failed")]
    Derive(#[from] DeriveError),

    /// The external model failed; reported with its original cause,
    /// never retried or suppressed.
    #[error("prediction model failed")]
    Model(#[from] ModelError),
}

// ============================================================================
// Pipeline (entry point)
// ============================================================================

/// Run one full prediction request: validate the raw record, derive the
/// feature set, and ask the injected model for a strength estimate.
///
/// Derivation is never attempted when validation fails. Pure apart from
/// the model call; safe to invoke concurrently.
pub fn predict_strength(
    model: &dyn StrengthModel,
    raw: &RawMixInput,
) -> Result<f64, PredictError> {
    match validation::validate(raw) {
        ValidationResult::Valid => {}
        ValidationResult::Invalid(violations) => {
            return Err(PredictError::OutOfRange(violations));
        }
    }

    let features = features::derive(raw)?;
    let strength_mpa = model.predict(&features)?;
    debug!(strength_mpa, "prediction complete");
    Ok(strength_mpa)
}
