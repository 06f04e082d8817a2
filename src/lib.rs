//! Mixcast: Concrete Compressive Strength Prediction Core
//!
//! Deterministic feature-derivation-and-validation pipeline for concrete
//! mix designs. One record in, one MPa estimate out.
//!
//! ## Architecture
//!
//! - **Validation**: physical range checks on all 8 raw quantities,
//!   accumulating every violation
//! - **Features**: Binder computation and the 5 engineered ratios
//!   (13-field model schema)
//! - **Predictor**: the `StrengthModel` boundary and the
//!   validate → derive → predict pipeline
//!
//! The trained model artifact is owned by the caller and injected through
//! the `StrengthModel` trait; this crate never loads, caches, or versions
//! model files.

pub mod features;
pub mod predictor;
pub mod types;
pub mod validation;

// Re-export the core data types
pub use types::{DerivedFeatureSet, RawMixInput, FEATURE_SCHEMA};

// Re-export validation outcomes
pub use validation::{validate, FieldRange, RangeViolation, ValidationResult, RANGE_TABLE};

// Re-export derivation
pub use features::{derive, DeriveError};

// Re-export the prediction boundary
pub use predictor::{predict_strength, BolomeyModel, ModelError, PredictError, StrengthModel};
