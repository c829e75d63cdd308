//! State-vector circuit simulator
//!
//! Runs circuits of single-qubit gates (I, H, X, Z) on a dense state vector
//! and reports the outcome distribution together with the Bloch angles of one
//! designated qubit.
//!
//! # Features
//!
//! - **Enforced capacity**: registers above the configured ceiling are refused
//!   before anything is allocated
//! - **Precise errors**: unsupported symbols are reported with qubit and
//!   position
//! - **JSON boundary**: [`api::handle_json`] answers editor requests directly
//! - **Statistics**: optional timing and gate counts per run
//!
//! # Example
//!
//! ```
//! use qcirc_sim::{Simulator, SimulatorConfig};
//!
//! let simulator = Simulator::new(SimulatorConfig::demo()).unwrap();
//! let result = simulator.run_symbols(&[vec!["H"], vec![]]).unwrap();
//!
//! for outcome in result.results() {
//!     println!("{}: {:.3}", outcome.state, outcome.probability);
//! }
//! let angles = result.bloch_angles(0).unwrap();
//! assert!((angles.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod result;
pub mod simulator;
pub mod statistics;

pub use api::{handle_json, SimulationRequest, SimulationResponse};
pub use config::SimulatorConfig;
pub use error::{ErrorKind, Result, SimulatorError};
pub use result::SimulationResult;
pub use simulator::Simulator;
pub use statistics::ExecutionStatistics;
