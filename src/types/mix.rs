//! Raw mix-design input record

use serde::{Deserialize, Serialize};

/// One concrete mix-design record: material quantities per cubic meter
/// plus curing age.
///
/// All 8 fields must be present and numeric before validation or feature
/// derivation runs; parsing raw text into these numerics is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMixInput {
    /// Cement content (kg/m³)
    pub cement: f64,
    /// Ground granulated blast furnace slag (kg/m³)
    pub blast_furnace_slag: f64,
    /// Fly ash (kg/m³)
    pub fly_ash: f64,
    /// Mixing water (kg/m³)
    pub water: f64,
    /// Superplasticizer admixture (kg/m³)
    pub superplasticizer: f64,
    /// Coarse aggregate (kg/m³)
    pub coarse_aggregate: f64,
    /// Fine aggregate (kg/m³)
    pub fine_aggregate: f64,
    /// Specimen age at testing (days)
    pub age_days: f64,
}

impl RawMixInput {
    /// Total cementitious binder: cement + fly ash + slag.
    ///
    /// Used as the denominator for several derived ratios. Computed in one
    /// place so every ratio sees the bit-identical same sum.
    pub fn binder(&self) -> f64 {
        self.cement + self.fly_ash + self.blast_furnace_slag
    }
}
