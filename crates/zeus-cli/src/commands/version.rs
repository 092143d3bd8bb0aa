//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - toy quantum-circuit simulation service",
        style("Zeus").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  zeus-ir       Qubits, gates, measurements and circuits");
    println!("  zeus-sim      Exact statevector simulator");
    println!("  zeus-service  Named operations, circuit builder, summaries");
    println!("  zeus-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
