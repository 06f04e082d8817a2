//! Core data types: raw mix-design inputs and the derived feature schema.

pub mod features;
pub mod mix;

pub use features::{DerivedFeatureSet, FEATURE_SCHEMA};
pub use mix::RawMixInput;
