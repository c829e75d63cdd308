//! Run a circuit from the command line
//!
//! ```text
//! RUST_LOG=qcirc_sim=debug cargo run -p qcirc-sim --example run_circuit -- '{"circuitData": [["H"], ["X"]]}'
//! ```

use qcirc_sim::api::{self, SimulationRequest, SimulationResponse};
use qcirc_sim::{ErrorKind, Simulator, SimulatorConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| r#"{"circuitData": [["H", "Z", "H"], ["H"], []], "blochQubit": 1}"#.to_string());

    let simulator = match Simulator::new(SimulatorConfig::demo().with_statistics(true)) {
        Ok(simulator) => simulator,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let request: SimulationRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("unreadable request: {}", err);
            exit_with(SimulationResponse::failure(ErrorKind::MalformedCircuit));
        }
    };

    match api::run_request(&simulator, &request) {
        Ok((result, bloch)) => {
            print_json(&SimulationResponse::success(result.results().to_vec(), bloch));
            if let Ok(circuit) = request.to_circuit() {
                println!("\n{}", circuit);
            }
            if let Some(stats) = result.statistics() {
                println!("{}", stats);
            }
        }
        Err(err) => {
            eprintln!("simulation failed: {}", err);
            exit_with(SimulationResponse::failure(err.kind()));
        }
    }
}

fn print_json(response: &SimulationResponse) {
    match serde_json::to_string(response) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("cannot serialize response: {}", err),
    }
}

fn exit_with(response: SimulationResponse) -> ! {
    print_json(&response);
    std::process::exit(1);
}
