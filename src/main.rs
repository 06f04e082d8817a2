//! Mixcast CLI - concrete strength prediction from the command line
//!
//! # Usage
//!
//! ```bash
//! # Predict with the built-in reference model
//! mixcast --cement 300 --slag 100 --fly-ash 50 --water 200 \
//!         --superplasticizer 5 --coarse 900 --fine 700 --age 28
//!
//! # Show the derived feature vector as JSON instead of predicting
//! mixcast --cement 300 --water 180 --features-json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use mixcast::{predict_strength, validate, BolomeyModel, PredictError, RawMixInput};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "mixcast")]
#[command(about = "Concrete compressive strength prediction from mix-design parameters")]
#[command(version)]
struct CliArgs {
    /// Cement content (kg/m³, valid 50-600)
    #[arg(long, default_value = "150")]
    cement: f64,

    /// Blast furnace slag (kg/m³, valid 0-300)
    #[arg(long, default_value = "0")]
    slag: f64,

    /// Fly ash (kg/m³, valid 0-200)
    #[arg(long = "fly-ash", default_value = "0")]
    fly_ash: f64,

    /// Mixing water (kg/m³, valid 100-250)
    #[arg(long, default_value = "150")]
    water: f64,

    /// Superplasticizer (kg/m³, valid 0-50)
    #[arg(long, default_value = "0")]
    superplasticizer: f64,

    /// Coarse aggregate (kg/m³, valid 800-1200)
    #[arg(long = "coarse", default_value = "1000")]
    coarse_aggregate: f64,

    /// Fine aggregate (kg/m³, valid 500-1000)
    #[arg(long = "fine", default_value = "800")]
    fine_aggregate: f64,

    /// Age at testing (days, valid 1-365)
    #[arg(long = "age", default_value = "28")]
    age_days: f64,

    /// Print the derived 13-field feature vector as JSON and exit
    /// (no prediction)
    #[arg(long)]
    features_json: bool,
}

impl CliArgs {
    fn to_mix(&self) -> RawMixInput {
        RawMixInput {
            cement: self.cement,
            blast_furnace_slag: self.slag,
            fly_ash: self.fly_ash,
            water: self.water,
            superplasticizer: self.superplasticizer,
            coarse_aggregate: self.coarse_aggregate,
            fine_aggregate: self.fine_aggregate,
            age_days: self.age_days,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();
    let mix = args.to_mix();
    debug!(?mix, "parsed mix design");

    if args.features_json {
        // Validate first so a bad record never produces a feature vector
        let result = validate(&mix);
        if !result.is_valid() {
            report_violations(result.violations());
            std::process::exit(1);
        }
        let features = mixcast::derive(&mix)?;
        println!("{}", serde_json::to_string_pretty(&features)?);
        return Ok(());
    }

    let model = BolomeyModel::new();
    match predict_strength(&model, &mix) {
        Ok(strength) => {
            println!("Predicted compressive strength: {strength:.2} MPa");
            Ok(())
        }
        Err(PredictError::OutOfRange(violations)) => {
            report_violations(&violations);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn report_violations(violations: &[mixcast::RangeViolation]) {
    for v in violations {
        eprintln!("ERROR: {v}");
    }
}
