//! Feature derivation: raw mix quantities → model feature schema.
//!
//! The strength model was trained on the 8 raw quantities plus 5
//! engineered ratios (water/cement, water/binder, etc.). This module
//! computes those ratios with IEEE-754 double division and refuses to
//! produce NaN or infinite features: degenerate denominators are a
//! `DeriveError`, not a silently propagated sentinel.

use thiserror::Error;
use tracing::debug;

use crate::types::{DerivedFeatureSet, RawMixInput};

/// Degenerate arithmetic input reaching the deriver.
///
/// Validated input can never trigger these (cement's lower bound is
/// 50 kg/m³), so hitting one means a caller bypassed validation — an
/// integration error, surfaced loudly rather than masked as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DeriveError {
    #[error("cement content {cement} kg/m³ must be > 0 to derive water/cement and fly-ash/cement ratios")]
    NonPositiveCement { cement: f64 },

    #[error("total binder {binder} kg/m³ must be > 0 to derive binder ratios")]
    NonPositiveBinder { binder: f64 },
}

/// Derive the full 13-field feature set from one raw mix record.
///
/// Binder is computed once and reused for every binder-denominated ratio
/// so repeated calls on identical input yield bit-identical results.
/// Pure function; no shared state.
pub fn derive(raw: &RawMixInput) -> Result<DerivedFeatureSet, DeriveError> {
    if raw.cement <= 0.0 {
        return Err(DeriveError::NonPositiveCement { cement: raw.cement });
    }

    let binder = raw.binder();
    if binder <= 0.0 {
        return Err(DeriveError::NonPositiveBinder { binder });
    }

    let features = DerivedFeatureSet {
        cement: raw.cement,
        blast_furnace_slag: raw.blast_furnace_slag,
        fly_ash: raw.fly_ash,
        water: raw.water,
        superplasticizer: raw.superplasticizer,
        coarse_aggregate: raw.coarse_aggregate,
        fine_aggregate: raw.fine_aggregate,
        age_days: raw.age_days,
        water_to_cement: raw.water / raw.cement,
        water_to_binder: raw.water / binder,
        superplasticizer_to_binder: raw.superplasticizer / binder,
        fly_ash_to_cement: raw.fly_ash / raw.cement,
        slag_to_binder: raw.blast_furnace_slag / binder,
    };

    debug!(
        binder,
        water_to_cement = features.water_to_cement,
        water_to_binder = features.water_to_binder,
        "derived feature set"
    );

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_mix() -> RawMixInput {
        RawMixInput {
            cement: 300.0,
            blast_furnace_slag: 100.0,
            fly_ash: 50.0,
            water: 200.0,
            superplasticizer: 5.0,
            coarse_aggregate: 900.0,
            fine_aggregate: 700.0,
            age_days: 28.0,
        }
    }

    fn assert_close_4dp(actual: f64, expected: f64, name: &str) {
        assert!(
            (actual - expected).abs() < 5e-5,
            "{name}: expected {expected:.4}, got {actual:.6}"
        );
    }

    #[test]
    fn reference_mix_ratios_match_to_4_decimals() {
        let features = derive(&reference_mix()).unwrap();
        assert_close_4dp(features.water_to_cement, 0.6667, "water_to_cement");
        assert_close_4dp(features.water_to_binder, 0.4444, "water_to_binder");
        assert_close_4dp(
            features.superplasticizer_to_binder,
            0.0111,
            "superplasticizer_to_binder",
        );
        assert_close_4dp(features.fly_ash_to_cement, 0.1667, "fly_ash_to_cement");
        assert_close_4dp(features.slag_to_binder, 0.2222, "slag_to_binder");
    }

    #[test]
    fn raw_fields_pass_through_unchanged() {
        let raw = reference_mix();
        let features = derive(&raw).unwrap();
        assert_eq!(features.raw(), raw);
    }

    #[test]
    fn cement_only_mix_has_unit_water_ratios() {
        let raw = RawMixInput {
            cement: 150.0,
            blast_furnace_slag: 0.0,
            fly_ash: 0.0,
            water: 150.0,
            superplasticizer: 0.0,
            coarse_aggregate: 1000.0,
            fine_aggregate: 800.0,
            age_days: 28.0,
        };
        let features = derive(&raw).unwrap();
        assert_eq!(features.water_to_cement, 1.0);
        assert_eq!(features.water_to_binder, 1.0);
        assert_eq!(features.superplasticizer_to_binder, 0.0);
        assert_eq!(features.fly_ash_to_cement, 0.0);
        assert_eq!(features.slag_to_binder, 0.0);
    }

    #[test]
    fn derivation_is_bit_identical_across_calls() {
        let raw = reference_mix();
        let first = derive(&raw).unwrap();
        let second = derive(&raw).unwrap();
        for ((name, a), (_, b)) in first.feature_map().iter().zip(second.feature_map()) {
            assert_eq!(a.to_bits(), b.to_bits(), "{name} not bit-identical");
        }
    }

    #[test]
    fn zero_cement_is_a_domain_error_not_nan() {
        let raw = RawMixInput {
            cement: 0.0,
            ..reference_mix()
        };
        let err = derive(&raw).unwrap_err();
        assert_eq!(err, DeriveError::NonPositiveCement { cement: 0.0 });
    }

    #[test]
    fn negative_cement_is_rejected() {
        let raw = RawMixInput {
            cement: -10.0,
            ..reference_mix()
        };
        assert!(matches!(
            derive(&raw),
            Err(DeriveError::NonPositiveCement { .. })
        ));
    }

    #[test]
    fn zero_binder_is_unreachable_when_cement_positive() {
        // Binder >= cement for non-negative slag/ash, so a positive cement
        // with negative slag is the only route to a zero binder.
        let raw = RawMixInput {
            cement: 50.0,
            blast_furnace_slag: -50.0,
            fly_ash: 0.0,
            ..reference_mix()
        };
        assert!(matches!(
            derive(&raw),
            Err(DeriveError::NonPositiveBinder { .. })
        ));
    }
}
