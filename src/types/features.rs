//! Derived feature schema for the strength regression model.

use serde::{Deserialize, Serialize};

use super::RawMixInput;

/// The 13-field schema the strength model was fit against, in training
/// column order: 8 raw quantities followed by 5 engineered ratios.
///
/// Downstream models must bind by these names, never by position — a
/// silently reordered vector would produce wrong predictions with no error.
pub const FEATURE_SCHEMA: [&str; 13] = [
    "cement",
    "blast_furnace_slag",
    "fly_ash",
    "water",
    "superplasticizer",
    "coarse_aggregate",
    "fine_aggregate",
    "age_days",
    "water_to_cement",
    "water_to_binder",
    "superplasticizer_to_binder",
    "fly_ash_to_cement",
    "slag_to_binder",
];

/// Raw mix quantities enriched with the 5 dimensionless ratios.
///
/// Built fresh per prediction request by `features::derive`, immutable once
/// constructed, consumed exactly once by the prediction call. Serde field
/// names match `FEATURE_SCHEMA` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatureSet {
    pub cement: f64,
    pub blast_furnace_slag: f64,
    pub fly_ash: f64,
    pub water: f64,
    pub superplasticizer: f64,
    pub coarse_aggregate: f64,
    pub fine_aggregate: f64,
    pub age_days: f64,
    /// Water / cement
    pub water_to_cement: f64,
    /// Water / (cement + fly ash + slag)
    pub water_to_binder: f64,
    /// Superplasticizer / binder
    pub superplasticizer_to_binder: f64,
    /// Fly ash / cement
    pub fly_ash_to_cement: f64,
    /// Slag / binder
    pub slag_to_binder: f64,
}

impl DerivedFeatureSet {
    /// Name-keyed view of every feature, in `FEATURE_SCHEMA` order.
    ///
    /// This is the prediction-boundary contract: consumers that key by
    /// name get stable bindings regardless of struct layout.
    pub fn feature_map(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("cement", self.cement),
            ("blast_furnace_slag", self.blast_furnace_slag),
            ("fly_ash", self.fly_ash),
            ("water", self.water),
            ("superplasticizer", self.superplasticizer),
            ("coarse_aggregate", self.coarse_aggregate),
            ("fine_aggregate", self.fine_aggregate),
            ("age_days", self.age_days),
            ("water_to_cement", self.water_to_cement),
            ("water_to_binder", self.water_to_binder),
            ("superplasticizer_to_binder", self.superplasticizer_to_binder),
            ("fly_ash_to_cement", self.fly_ash_to_cement),
            ("slag_to_binder", self.slag_to_binder),
        ]
    }

    /// Look up a single feature by schema name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.feature_map()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// The raw-input portion of this feature set.
    pub fn raw(&self) -> RawMixInput {
        RawMixInput {
            cement: self.cement,
            blast_furnace_slag: self.blast_furnace_slag,
            fly_ash: self.fly_ash,
            water: self.water,
            superplasticizer: self.superplasticizer,
            coarse_aggregate: self.coarse_aggregate,
            fine_aggregate: self.fine_aggregate,
            age_days: self.age_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DerivedFeatureSet {
        DerivedFeatureSet {
            cement: 300.0,
            blast_furnace_slag: 100.0,
            fly_ash: 50.0,
            water: 200.0,
            superplasticizer: 5.0,
            coarse_aggregate: 900.0,
            fine_aggregate: 700.0,
            age_days: 28.0,
            water_to_cement: 200.0 / 300.0,
            water_to_binder: 200.0 / 450.0,
            superplasticizer_to_binder: 5.0 / 450.0,
            fly_ash_to_cement: 50.0 / 300.0,
            slag_to_binder: 100.0 / 450.0,
        }
    }

    #[test]
    fn feature_map_follows_schema_order() {
        let features = sample();
        let map = feature_names(&features);
        assert_eq!(map, FEATURE_SCHEMA.to_vec());
    }

    fn feature_names(features: &DerivedFeatureSet) -> Vec<&'static str> {
        features.feature_map().iter().map(|(n, _)| *n).collect()
    }

    #[test]
    fn get_binds_by_name() {
        let features = sample();
        assert_eq!(features.get("water"), Some(200.0));
        assert_eq!(features.get("slag_to_binder"), Some(100.0 / 450.0));
        assert_eq!(features.get("no_such_feature"), None);
    }

    #[test]
    fn serde_keys_match_schema_names() {
        let features = sample();
        let json = serde_json::to_value(features).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), FEATURE_SCHEMA.len());
        for name in FEATURE_SCHEMA {
            assert!(obj.contains_key(name), "missing serde key '{name}'");
        }
    }
}
