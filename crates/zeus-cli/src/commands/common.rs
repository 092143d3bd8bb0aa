//! Shared helpers for CLI commands.

use std::f64::consts::TAU;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zeus_ir::{Gate, Measurement, Observable, QubitId};
use zeus_service::SimulationOutput;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled summary line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Load oracle gates from a JSON file holding an array of gates.
pub fn load_oracle(path: &Path) -> Result<Vec<Gate>> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read oracle file: {}", path.display()))?;

    serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse oracle file: {}", path.display()))
}

/// Build the measurement from `--observable` / `--on-qubit`.
pub fn parse_measurement(observable: Option<&str>, qubit: u32) -> Result<Measurement> {
    match observable {
        None => Ok(Measurement::StateVector),
        Some(name) => {
            let observable: Observable = name.parse()?;
            Ok(Measurement::expectation(observable, QubitId(qubit)))
        }
    }
}

/// Seeded generator, or one seeded from OS entropy when no seed is given.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `count` angles drawn uniformly from [0, 2π).
pub fn random_angles(rng: &mut impl Rng, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(0.0..TAU)).collect()
}

/// Print one simulation output.
pub fn print_output(output: &SimulationOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{} {}", style("✓").green().bold(), output.summary);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(output)
                .context("Failed to serialize simulation output")?;
            println!("{json}");
        }
    }
    Ok(())
}
