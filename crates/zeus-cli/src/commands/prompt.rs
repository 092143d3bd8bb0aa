//! Prompt command implementation.
//!
//! Mirrors the chat flow the service was built for: every user prompt gets
//! a parametrized layer with fresh random angles, and prompts that talk
//! about searching or optimising also get a Grover search.

use anyhow::Result;
use console::style;
use tracing::info;

use zeus_service::{CircuitService, OperationName, OperationRequest};

use super::common::{make_rng, random_angles};

/// Words that make a prompt ask for a search.
const SEARCH_KEYWORDS: [&str; 5] = ["search", "optimization", "optimisation", "optimize", "optimise"];

/// Line reported in place of a Grover result.
pub const NO_SEARCH_LINE: &str = "No search algorithm needed for this prompt.";

/// Whether `prompt` mentions one of the search keywords (case-insensitive).
pub fn wants_search(prompt: &str) -> bool {
    let prompt = prompt.to_lowercase();
    SEARCH_KEYWORDS.iter().any(|kw| prompt.contains(kw))
}

/// Operations to run for `prompt`, in order.
pub fn plan(prompt: &str) -> Vec<OperationName> {
    let mut ops = vec![OperationName::ParametrizedLayer];
    if wants_search(prompt) {
        ops.push(OperationName::GroverSearch);
    }
    ops
}

/// Run the plan for `prompt` and return the lines of the results block.
pub fn run(
    service: &CircuitService,
    prompt: &str,
    qubits: Option<u32>,
    seed: Option<u64>,
) -> Result<Vec<String>> {
    let num_qubits = qubits.unwrap_or(service.config().default_qubits);
    let mut rng = make_rng(seed);
    let ops = plan(prompt);
    info!(?ops, "planned quantum operations");

    let mut lines = Vec::with_capacity(2);
    for op in &ops {
        let mut request = OperationRequest::new(*op).with_qubits(num_qubits);
        if let Some(count) = op.expected_params(num_qubits) {
            request.params = Some(random_angles(&mut rng, count));
        }
        lines.push(service.simulate_request(&request)?.summary);
    }
    if !ops.contains(&OperationName::GroverSearch) {
        lines.push(NO_SEARCH_LINE.to_string());
    }
    Ok(lines)
}

/// Execute the prompt command.
pub fn execute(
    service: &CircuitService,
    prompt: &str,
    qubits: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let lines = run(service, prompt, qubits, seed)?;

    println!("{}", style("Quantum processing results:").cyan().bold());
    for line in lines {
        println!("  {line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_without_keywords() {
        assert_eq!(plan("tell me a joke"), vec![OperationName::ParametrizedLayer]);
        assert_eq!(plan(""), vec![OperationName::ParametrizedLayer]);
    }

    #[test]
    fn test_plan_with_keywords() {
        for prompt in [
            "Search my notes",
            "portfolio OPTIMIZATION please",
            "optimise the route",
            "can you optimize this",
            "research the topic",
        ] {
            assert_eq!(
                plan(prompt),
                vec![OperationName::ParametrizedLayer, OperationName::GroverSearch],
                "{prompt}"
            );
        }
    }

    #[test]
    fn test_run_reports_no_search_line() {
        let service = CircuitService::default();
        let lines = run(&service, "hello", None, Some(1)).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Parametrized layer (4 qubits) state vector: ["));
        assert_eq!(lines[1], NO_SEARCH_LINE);
    }

    #[test]
    fn test_run_with_search() {
        let service = CircuitService::default();
        let lines = run(&service, "search for primes", Some(3), Some(1)).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Grover search (3 qubits) state vector: ["));
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let service = CircuitService::default();
        assert_eq!(
            run(&service, "optimize", None, Some(42)).unwrap(),
            run(&service, "optimize", None, Some(42)).unwrap()
        );
    }
}
