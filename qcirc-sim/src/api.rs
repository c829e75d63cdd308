//! JSON request/response boundary
//!
//! Mirrors the payloads of the browser circuit editor:
//!
//! ```json
//! { "circuitData": [["H", "Z"], ["x"], []], "blochQubit": 0 }
//! ```
//!
//! answered with either
//!
//! ```json
//! { "success": true, "results": [{"state": "100", "probability": 1.0}], "bloch": {"theta": 3.14159, "phi": 0.0} }
//! ```
//!
//! or `{ "success": false, "error": "invalid_gate" }`. Failures carry only the
//! classification, never internal detail.

use qcirc_core::{BlochAngles, Circuit, GateSymbol, QuantumError, QubitLine};
use qcirc_state::MeasurementResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ErrorKind, Result, SimulatorError};
use crate::result::SimulationResult;
use crate::simulator::Simulator;

/// Incoming simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// One entry per qubit; `null` slots are identity, `null` lines are invalid
    ///
    /// Slots stay untyped so a non-string cell is reported as an unsupported
    /// gate at its position rather than as an unreadable request.
    pub circuit_data: Vec<Option<Vec<Value>>>,

    /// Qubit to project onto the Bloch sphere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloch_qubit: Option<usize>,
}

impl SimulationRequest {
    /// Request for a plain symbol grid
    pub fn from_symbols<S: AsRef<str>>(lines: &[Vec<S>]) -> Self {
        Self {
            circuit_data: lines
                .iter()
                .map(|line| Some(line.iter().map(|s| Value::from(s.as_ref())).collect()))
                .collect(),
            bloch_qubit: None,
        }
    }

    pub fn with_bloch_qubit(mut self, qubit: usize) -> Self {
        self.bloch_qubit = Some(qubit);
        self
    }

    /// Number of qubit lines in the request
    pub fn num_qubits(&self) -> usize {
        self.circuit_data.len()
    }

    /// Build the typed circuit
    ///
    /// # Errors
    /// `MalformedCircuit` for a missing line or zero lines, `InvalidGate` for
    /// the first unsupported symbol or non-string slot.
    pub fn to_circuit(&self) -> Result<Circuit> {
        let lines = self
            .circuit_data
            .iter()
            .enumerate()
            .map(|(qubit, line)| {
                let slots = line
                    .as_ref()
                    .ok_or_else(|| QuantumError::malformed(format!("qubit line {} is missing", qubit)))?;
                parse_slots(qubit, slots)
            })
            .collect::<std::result::Result<Vec<_>, QuantumError>>()?;

        Ok(Circuit::from_lines(lines)?)
    }
}

fn parse_slots(qubit: usize, slots: &[Value]) -> std::result::Result<QubitLine, QuantumError> {
    slots
        .iter()
        .enumerate()
        .map(|(position, slot)| match slot {
            Value::Null => Ok(GateSymbol::Identity),
            Value::String(symbol) => GateSymbol::parse_symbol(symbol)
                .ok_or_else(|| QuantumError::invalid_gate(symbol.as_str(), qubit, position)),
            other => Err(QuantumError::invalid_gate(other.to_string(), qubit, position)),
        })
        .collect()
}

/// Outgoing simulation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<MeasurementResult>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloch: Option<BlochAngles>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl SimulationResponse {
    pub fn success(results: Vec<MeasurementResult>, bloch: BlochAngles) -> Self {
        Self {
            success: true,
            results: Some(results),
            bloch: Some(bloch),
            error: None,
        }
    }

    pub fn failure(kind: ErrorKind) -> Self {
        Self {
            success: false,
            results: None,
            bloch: None,
            error: Some(kind),
        }
    }
}

impl From<Result<(Vec<MeasurementResult>, BlochAngles)>> for SimulationResponse {
    fn from(outcome: Result<(Vec<MeasurementResult>, BlochAngles)>) -> Self {
        match outcome {
            Ok((results, bloch)) => Self::success(results, bloch),
            Err(err) => Self::failure(err.kind()),
        }
    }
}

/// Run a request, keeping the full result alongside the Bloch angles
///
/// Capacity, circuit structure, gate symbols and the Bloch qubit are all
/// checked before the state vector is allocated.
pub fn run_request(
    simulator: &Simulator,
    request: &SimulationRequest,
) -> Result<(SimulationResult, BlochAngles)> {
    simulator.check_capacity(request.num_qubits())?;
    let circuit = request.to_circuit()?;

    let bloch_qubit = request.bloch_qubit.unwrap_or(simulator.config().bloch_qubit);
    if bloch_qubit >= circuit.num_qubits() {
        return Err(SimulatorError::InvalidQubit {
            qubit: bloch_qubit,
            num_qubits: circuit.num_qubits(),
        });
    }

    let result = simulator.run(&circuit)?;
    let bloch = result.bloch_angles(bloch_qubit)?;
    Ok((result, bloch))
}

/// Run a request and return its outcomes and Bloch angles
pub fn simulate(
    simulator: &Simulator,
    request: &SimulationRequest,
) -> Result<(Vec<MeasurementResult>, BlochAngles)> {
    let (result, bloch) = run_request(simulator, request)?;
    let (_, probabilities) = result.into_parts();
    Ok((probabilities.into_results(), bloch))
}

/// Answer a typed request
pub fn handle_request(simulator: &Simulator, request: &SimulationRequest) -> SimulationResponse {
    let outcome = simulate(simulator, request);
    if let Err(err) = &outcome {
        debug!(error = %err, kind = %err.kind(), "simulation request failed");
    }
    outcome.into()
}

/// Answer a raw JSON request with a JSON response
///
/// Input that does not parse as a request is reported as `malformed_circuit`.
///
/// # Example
/// ```
/// use qcirc_sim::{api, Simulator};
///
/// let simulator = Simulator::default();
/// let response = api::handle_json(&simulator, r#"{"circuitData": [["X"], []]}"#);
/// assert!(response.contains(r#""state":"10""#));
/// ```
pub fn handle_json(simulator: &Simulator, request: &str) -> String {
    let response = match serde_json::from_str::<SimulationRequest>(request) {
        Ok(request) => handle_request(simulator, &request),
        Err(err) => {
            debug!(error = %err, "rejecting unparseable request");
            SimulationResponse::failure(ErrorKind::MalformedCircuit)
        }
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"success":false,"error":"internal_error"}"#.to_string())
}
