//! Built-in reference strength model.
//!
//! A transparent Bolomey-style formula used when no trained artifact is
//! wired in: the CLI and tests need a working `StrengthModel`, and a
//! closed-form estimate keeps the pipeline exercisable without any model
//! loading machinery. Not a substitute for the fitted regressor in
//! production deployments.

use super::{ModelError, StrengthModel};
use crate::types::DerivedFeatureSet;

/// Bolomey strength coefficient (MPa) for ordinary portland cement.
const BOLOMEY_K: f64 = 25.0;

/// Bolomey intercept on the cement/water ratio.
const BOLOMEY_A: f64 = 0.5;

/// Slag cementitious efficiency factor relative to cement.
const SLAG_EFFICIENCY: f64 = 0.9;

/// Fly ash cementitious efficiency factor relative to cement.
const FLY_ASH_EFFICIENCY: f64 = 0.6;

/// Closed-form strength estimate from the Bolomey relation with an
/// ACI 209 maturity curve for age adjustment.
///
/// `f_c = K * (B_eff / W - a) * t / (4 + 0.85 t)` where `B_eff` weights
/// slag and fly ash by their cementitious efficiency.
#[derive(Debug, Clone, Copy, Default)]
pub struct BolomeyModel;

impl BolomeyModel {
    pub fn new() -> Self {
        Self
    }

    fn require(features: &DerivedFeatureSet, name: &'static str) -> Result<f64, ModelError> {
        features
            .get(name)
            .ok_or(ModelError::MissingFeature { name })
    }
}

impl StrengthModel for BolomeyModel {
    fn predict(&self, features: &DerivedFeatureSet) -> Result<f64, ModelError> {
        // Bind by name, mirroring how a fitted regressor keys its columns.
        let cement = Self::require(features, "cement")?;
        let slag = Self::require(features, "blast_furnace_slag")?;
        let fly_ash = Self::require(features, "fly_ash")?;
        let water = Self::require(features, "water")?;
        let age_days = Self::require(features, "age_days")?;

        let effective_binder = cement + SLAG_EFFICIENCY * slag + FLY_ASH_EFFICIENCY * fly_ash;
        let maturity = age_days / (4.0 + 0.85 * age_days);
        let strength = BOLOMEY_K * (effective_binder / water - BOLOMEY_A) * maturity;

        Ok(strength.max(0.0))
    }
}
