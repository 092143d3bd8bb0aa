//! End-to-end tests for the `zeus` binary.
//!
//! Every invocation runs with `HOME` and the working directory pointed at a
//! fresh temporary directory so no user config or `.env` file leaks in.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_zeus");

const ZEUS_VARS: [&str; 7] = [
    "ZEUS_CONFIG",
    "ZEUS_DEFAULT_QUBITS",
    "ZEUS_MAX_QUBITS",
    "ZEUS_DECIMALS",
    "ZEUS_NORM_TOLERANCE",
    "ZEUS_LOG_LEVEL",
    "ZEUS_LOG_FORMAT",
];

fn zeus(home: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(BIN);
    cmd.args(args).current_dir(home).env("HOME", home);
    for var in ZEUS_VARS {
        cmd.env_remove(var);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run zeus")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const BELL_SUMMARY: &str =
    "Bell sample (2 qubits) state vector: [0.707+0.000i, 0.000+0.000i, 0.000+0.000i, 0.707+0.000i]";

// ============================================================================
// simulate
// ============================================================================

#[test]
fn test_simulate_bell_text() {
    let home = TempDir::new().unwrap();
    let output = zeus(home.path(), &["simulate", "bell_sample", "--qubits", "2"], &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(BELL_SUMMARY));
}

#[test]
fn test_simulate_expectation() {
    let home = TempDir::new().unwrap();
    let output = zeus(
        home.path(),
        &["simulate", "bell_sample", "-q", "2", "--observable", "z", "--on-qubit", "0"],
        &[],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Bell sample (2 qubits) <Z_0> = 0.000"));
}

#[test]
fn test_simulate_json() {
    let home = TempDir::new().unwrap();
    let output = zeus(
        home.path(),
        &["simulate", "grover_search", "-q", "3", "--format", "json"],
        &[],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["kind"], "state");
    assert_eq!(json["value"].as_array().map(Vec::len), Some(8));
    assert_eq!(json["circuit"]["num_qubits"], 3);
}

#[test]
fn test_simulate_random_params_seeded() {
    let home = TempDir::new().unwrap();
    let args = [
        "simulate",
        "parametrized_layer",
        "--random-params",
        "--seed",
        "11",
    ];
    let first = zeus(home.path(), &args, &[]);
    let second = zeus(home.path(), &args, &[]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert_eq!(stdout(&first), stdout(&second));
    assert!(stdout(&first).contains("Parametrized layer (4 qubits) state vector"));
}

#[test]
fn test_simulate_custom_oracle() {
    let home = TempDir::new().unwrap();
    let oracle = home.path().join("oracle.json");
    std::fs::write(&oracle, r#"[{"gate": "mcx", "controls": [0, 1], "target": 2}]"#).unwrap();

    let output = zeus(
        home.path(),
        &[
            "simulate",
            "grover_search",
            "-q",
            "3",
            "--oracle",
            oracle.to_str().unwrap(),
            "--show-circuit",
        ],
        &[],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("mcx q0, q1, q2"));
    assert!(out.contains("Grover search (3 qubits) state vector"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_operation_exits_1() {
    let home = TempDir::new().unwrap();
    let output = zeus(home.path(), &["simulate", "teleport"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown operation 'teleport'"));
}

#[test]
fn test_invalid_parameter_count_exits_1() {
    let home = TempDir::new().unwrap();
    let output = zeus(
        home.path(),
        &["simulate", "parametrized_layer", "-q", "2", "--params", "0.1,0.2"],
        &[],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("needs 4 parameters, got 2"));
}

#[test]
fn test_qubit_count_out_of_range_exits_1() {
    let home = TempDir::new().unwrap();
    let output = zeus(home.path(), &["simulate", "bell_sample", "-q", "1"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("outside the supported range"));
}

#[test]
fn test_oracle_out_of_range_exits_1() {
    let home = TempDir::new().unwrap();
    let oracle = home.path().join("oracle.json");
    std::fs::write(&oracle, r#"[{"gate": "cx", "control": 0, "target": 9}]"#).unwrap();

    let output = zeus(
        home.path(),
        &["simulate", "grover_search", "--oracle", oracle.to_str().unwrap()],
        &[],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("references q9"));
}

// ============================================================================
// prompt
// ============================================================================

#[test]
fn test_prompt_without_search() {
    let home = TempDir::new().unwrap();
    let output = zeus(home.path(), &["prompt", "hello there", "--seed", "3"], &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Quantum processing results:"));
    assert!(out.contains("Parametrized layer (4 qubits) state vector"));
    assert!(out.contains("No search algorithm needed for this prompt."));
}

#[test]
fn test_prompt_with_search() {
    let home = TempDir::new().unwrap();
    let output = zeus(
        home.path(),
        &["prompt", "Please optimize my schedule", "--seed", "3"],
        &[],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Grover search (4 qubits) state vector"));
    assert!(!out.contains("No search algorithm needed"));
}

// ============================================================================
// Configuration precedence
// ============================================================================

#[test]
fn test_config_file_sets_decimals() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("zeus.yaml");
    std::fs::write(&config, "service:\n  decimals: 1\n").unwrap();

    let output = zeus(
        home.path(),
        &["--config", config.to_str().unwrap(), "simulate", "bell_sample", "-q", "2"],
        &[],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("[0.7+0.0i, 0.0+0.0i, 0.0+0.0i, 0.7+0.0i]"));
}

#[test]
fn test_env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("zeus.yaml");
    std::fs::write(&config, "service:\n  decimals: 1\n").unwrap();

    let output = zeus(
        home.path(),
        &["--config", config.to_str().unwrap(), "simulate", "bell_sample", "-q", "2"],
        &[("ZEUS_DECIMALS", "2")],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("[0.71+0.00i, 0.00+0.00i, 0.00+0.00i, 0.71+0.00i]"));
}

#[test]
fn test_home_config_is_picked_up() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir(home.path().join(".zeus")).unwrap();
    std::fs::write(
        home.path().join(".zeus").join("config.yaml"),
        "service:\n  default_qubits: 2\n",
    )
    .unwrap();

    let output = zeus(home.path(), &["simulate", "bell_sample"], &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(BELL_SUMMARY));
}

#[test]
fn test_invalid_config_exits_1() {
    let home = TempDir::new().unwrap();
    let output = zeus(
        home.path(),
        &["simulate", "bell_sample"],
        &[("ZEUS_MAX_QUBITS", "1")],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("max_qubits"));
}

#[test]
fn test_missing_config_file_exits_1() {
    let home = TempDir::new().unwrap();
    let output = zeus(
        home.path(),
        &["--config", "does-not-exist.yaml", "version"],
        &[],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to read config file"));
}

// ============================================================================
// Informational commands
// ============================================================================

#[test]
fn test_operations_lists_all() {
    let home = TempDir::new().unwrap();
    let output = zeus(home.path(), &["operations"], &[]);
    assert!(output.status.success());
    let out = stdout(&output);
    for name in ["grover_search", "bell_sample", "parametrized_layer"] {
        assert!(out.contains(name), "missing {name}");
    }
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    let output = zeus(home.path(), &["version"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
