//! Zeus Command-Line Interface
//!
//! The caller side of the Quantum Zeus simulation service: loads
//! configuration, installs logging, owns all randomness and prints results.
//!
//! ```text
//!                  ╭──────────────╮
//!   prompt ──────▶ │ keyword plan │ ──▶ parametrized_layer (+ grover_search)
//!                  ╰──────────────╯
//!                         │
//!                         ▼
//!              CircuitService::simulate_request
//!                         │
//!                         ▼
//!        "Quantum processing results:" summary block
//! ```
//!
//! Exit status: 0 on success, 1 for request or configuration errors,
//! 2 when the simulator reports a broken invariant.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use zeus_service::{CircuitService, ErrorKind, ServiceError};

mod commands;
mod config;
mod logging;

use commands::common::OutputFormat;
use commands::{operations, prompt, simulate, version};
use config::Config;

/// Zeus - toy quantum-circuit simulation service
#[derive(Parser)]
#[command(name = "zeus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ~/.zeus/config.yaml)
    #[arg(short, long, global = true, env = "ZEUS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one named operation
    Simulate {
        /// Operation name (grover_search, bell_sample, parametrized_layer)
        operation: String,

        /// Number of qubits (default from configuration)
        #[arg(short, long)]
        qubits: Option<u32>,

        /// Comma-separated rotation angles in radians
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        params: Option<Vec<f64>>,

        /// Draw the required angles uniformly from [0, 2π)
        #[arg(long, conflicts_with = "params")]
        random_params: bool,

        /// Seed for --random-params
        #[arg(long, requires = "random_params")]
        seed: Option<u64>,

        /// JSON file with the oracle gate list (grover_search)
        #[arg(long)]
        oracle: Option<PathBuf>,

        /// Measure the expectation of this Pauli observable (x, y, z)
        #[arg(long)]
        observable: Option<String>,

        /// Qubit the observable acts on
        #[arg(long, default_value = "0")]
        on_qubit: u32,

        /// Print the circuit listing before the result
        #[arg(long)]
        show_circuit: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run the quantum side channel for a chat prompt
    Prompt {
        /// The user's message
        text: String,

        /// Number of qubits (default from configuration)
        #[arg(short, long)]
        qubits: Option<u32>,

        /// Seed for the random layer angles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List available operations
    Operations,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging, cli.verbose);

    // Execute command
    let result = CircuitService::new(config.service)
        .map_err(anyhow::Error::from)
        .and_then(|service| match cli.command {
            Commands::Simulate {
                operation,
                qubits,
                params,
                random_params,
                seed,
                oracle,
                observable,
                on_qubit,
                show_circuit,
                format,
            } => simulate::execute(
                &service,
                &operation,
                qubits,
                params,
                random_params,
                seed,
                oracle.as_deref(),
                observable.as_deref(),
                on_qubit,
                show_circuit,
                format,
            ),

            Commands::Prompt { text, qubits, seed } => {
                prompt::execute(&service, &text, qubits, seed)
            }

            Commands::Operations => {
                operations::execute();
                Ok(())
            }

            Commands::Version => {
                version::execute();
                Ok(())
            }
        });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

/// 2 for invariant violations, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ServiceError>().map(ServiceError::kind) {
        Some(ErrorKind::Invariant) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use zeus_sim::SimError;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_codes() {
        let request = anyhow::Error::from(ServiceError::UnknownOperation("qft".into()));
        assert_eq!(exit_code(&request), 1);

        let invariant = anyhow::Error::from(ServiceError::SimulationInvariantViolation(
            SimError::ExpectationOutOfRange { value: 1.5 },
        ));
        assert_eq!(exit_code(&invariant), 2);
        assert_eq!(exit_code(&invariant.context("while simulating")), 2);

        assert_eq!(exit_code(&anyhow::anyhow!("File not found: x")), 1);
    }

    #[test]
    fn test_parse_params_list() {
        let cli = Cli::try_parse_from([
            "zeus",
            "simulate",
            "parametrized_layer",
            "--qubits",
            "2",
            "--params",
            "0.1,-0.2,0.3,0.4",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate { params, qubits, .. } => {
                assert_eq!(params, Some(vec![0.1, -0.2, 0.3, 0.4]));
                assert_eq!(qubits, Some(2));
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_params_conflict_with_random() {
        assert!(
            Cli::try_parse_from([
                "zeus",
                "simulate",
                "parametrized_layer",
                "--params",
                "0.1",
                "--random-params",
            ])
            .is_err()
        );
    }
}
