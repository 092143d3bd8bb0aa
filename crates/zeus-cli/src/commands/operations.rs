//! Operations command implementation.

use console::style;

use zeus_service::OperationName;

/// Parameter requirement as shown in the listing.
fn params_hint(op: OperationName) -> &'static str {
    match op.expected_params(1) {
        Some(_) => "2·N angles (radians)",
        None => "none",
    }
}

/// Execute the operations command.
pub fn execute() {
    println!("{} Available operations:\n", style("Zeus").cyan().bold());

    for op in OperationName::ALL {
        println!("  {} {}", style("●").green(), style(op.as_str()).bold());
        println!("    {}", op.description());
        println!("    Parameters: {}", params_hint(op));
        if op.accepts_oracle() {
            println!("    Oracle: optional JSON gate list (--oracle FILE)");
        }
        println!();
    }
}
