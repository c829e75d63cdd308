//! End-to-end behaviour of the simulator on small circuits

use approx::assert_relative_eq;
use proptest::prelude::*;
use qcirc_core::{BlochVector, Circuit, GateSymbol, QubitLine};
use qcirc_sim::{Simulator, SimulatorConfig, SimulatorError};
use std::f64::consts::{FRAC_PI_2, PI};

const TOLERANCE: f64 = 1e-9;

fn outcomes(result: &qcirc_sim::SimulationResult) -> Vec<(String, f64)> {
    result
        .results()
        .iter()
        .map(|r| (r.state.clone(), r.probability))
        .collect()
}

#[test]
fn test_empty_circuit_is_identity() {
    let sim = Simulator::default();
    for n in 1..=5 {
        let lines: Vec<Vec<&str>> = vec![Vec::new(); n];
        let result = sim.run_symbols(&lines).unwrap();

        assert_eq!(result.results().len(), 1);
        assert_eq!(result.results()[0].state, "0".repeat(n));
        assert_relative_eq!(result.results()[0].probability, 1.0, epsilon = TOLERANCE);
    }
}

#[test]
fn test_double_hadamard_is_identity() {
    let result = Simulator::default()
        .run_symbols(&[vec!["H", "H"], vec![]])
        .unwrap();

    assert_eq!(result.results().len(), 1);
    assert_eq!(result.results()[0].state, "00");
    assert_relative_eq!(result.results()[0].probability, 1.0, epsilon = TOLERANCE);
}

#[test]
fn test_bit_flip_on_first_qubit() {
    let result = Simulator::default().run_symbols(&[vec!["X"], vec![]]).unwrap();

    assert_eq!(result.results().len(), 1);
    assert_eq!(result.results()[0].state, "10");
    assert_relative_eq!(result.results()[0].probability, 1.0, epsilon = TOLERANCE);
}

#[test]
fn test_bit_flip_on_last_qubit() {
    let result = Simulator::default()
        .run_symbols(&[vec![], vec![], vec!["x"]])
        .unwrap();
    assert_eq!(result.results()[0].state, "001");
}

#[test]
fn test_superposition() {
    let result = Simulator::default().run_symbols(&[vec!["H"], vec![]]).unwrap();
    let outcomes = outcomes(&result);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].0, "00");
    assert_eq!(outcomes[1].0, "10");
    assert_relative_eq!(outcomes[0].1, 0.5, epsilon = TOLERANCE);
    assert_relative_eq!(outcomes[1].1, 0.5, epsilon = TOLERANCE);
}

#[test]
fn test_phase_kickback_matches_bit_flip() {
    let sim = Simulator::default();
    let hzh = sim.run_symbols(&[vec!["H", "Z", "H"], vec![]]).unwrap();
    let x = sim.run_symbols(&[vec!["X"], vec![]]).unwrap();

    let a = outcomes(&hzh);
    let b = outcomes(&x);
    assert_eq!(a.len(), b.len());
    for ((sa, pa), (sb, pb)) in a.iter().zip(&b) {
        assert_eq!(sa, sb);
        assert_relative_eq!(*pa, *pb, epsilon = TOLERANCE);
    }
}

#[test]
fn test_bloch_angles() {
    let sim = Simulator::default();

    let superposition = sim.run_symbols(&[vec!["H"], vec![]]).unwrap();
    let angles = superposition.bloch_angles(0).unwrap();
    assert_relative_eq!(angles.theta, FRAC_PI_2, epsilon = TOLERANCE);
    assert_eq!(angles.phi, 0.0);

    let flipped = sim.run_symbols(&[vec!["X"], vec![]]).unwrap();
    assert_relative_eq!(flipped.bloch_angles(0).unwrap().theta, PI, epsilon = TOLERANCE);
    assert_relative_eq!(flipped.bloch_angles(1).unwrap().theta, 0.0, epsilon = TOLERANCE);
}

#[test]
fn test_bloch_matches_exact_single_qubit_projection() {
    // For |ψ⟩ = H|1⟩ = |−⟩, the Bloch vector is (−1, 0, 0): theta = π/2
    let result = Simulator::default().run_symbols(&[vec!["X", "H"]]).unwrap();
    let amps = result.state().amplitudes();
    let exact = BlochVector::from_state(&[amps[0], amps[1]]).to_angles();

    let projected = result.bloch_angles(0).unwrap();
    assert_relative_eq!(projected.theta, exact.theta, epsilon = TOLERANCE);
}

#[test]
fn test_phi_stays_zero_where_true_phase_is_pi() {
    // H then Z gives |−⟩; the exact azimuth is π but the projection reports 0
    let result = Simulator::default().run_symbols(&[vec!["H", "Z"]]).unwrap();
    let amps = result.state().amplitudes();
    let exact = BlochVector::from_state(&[amps[0], amps[1]]).to_angles();
    assert_relative_eq!(exact.phi, PI, epsilon = TOLERANCE);

    let projected = result.bloch_angles(0).unwrap();
    assert_relative_eq!(projected.theta, exact.theta, epsilon = TOLERANCE);
    assert_eq!(projected.phi, 0.0);
}

#[test]
fn test_capacity_refusal() {
    let sim = Simulator::new(SimulatorConfig::demo()).unwrap();
    let lines: Vec<Vec<&str>> = vec![vec!["H"]; 6];

    let err = sim.run_symbols(&lines).unwrap_err();
    assert_eq!(
        err,
        SimulatorError::CapacityExceeded {
            num_qubits: 6,
            max_qubits: 5
        }
    );

    // A typed circuit is refused the same way
    let circuit = Circuit::new(6).unwrap();
    assert!(matches!(
        sim.run(&circuit),
        Err(SimulatorError::CapacityExceeded { .. })
    ));
}

#[test]
fn test_capacity_refused_before_allocation() {
    // 40 qubits would need 16 TiB; refusal must come from the ceiling check
    let sim = Simulator::default();
    let circuit = Circuit::new(40).unwrap();
    assert_eq!(
        sim.run(&circuit).unwrap_err(),
        SimulatorError::CapacityExceeded {
            num_qubits: 40,
            max_qubits: 24
        }
    );
}

#[test]
fn test_invalid_gate_reports_location() {
    let err = Simulator::default()
        .run_symbols(&[vec!["H"], vec!["X", "I", "T"]])
        .unwrap_err();
    assert_eq!(
        err,
        SimulatorError::InvalidGate {
            symbol: "T".to_string(),
            qubit: 1,
            position: 2
        }
    );
}

#[test]
fn test_unequal_line_lengths_are_consumed_fully() {
    let result = Simulator::default()
        .run_symbols(&[vec!["X", "I", "I", "I", "X", "X"], vec!["H", "H"], vec!["X"]])
        .unwrap();
    assert_eq!(result.results().len(), 1);
    assert_eq!(result.results()[0].state, "101");
}

fn gate_strategy() -> impl Strategy<Value = GateSymbol> {
    prop::sample::select(GateSymbol::ALL.to_vec())
}

fn circuit_strategy() -> impl Strategy<Value = Vec<Vec<GateSymbol>>> {
    prop::collection::vec(prop::collection::vec(gate_strategy(), 0..8), 1..6)
}

proptest! {
    #[test]
    fn prop_valid_circuits_stay_normalized(lines in circuit_strategy()) {
        let circuit = Circuit::from_lines(
            lines.into_iter().map(QubitLine::from_gates).collect()
        ).unwrap();
        let result = Simulator::default().run(&circuit).unwrap();

        prop_assert!((result.state().norm() - 1.0).abs() < TOLERANCE);
        prop_assert!((result.probabilities().total() - 1.0).abs() < TOLERANCE);
        for r in result.results() {
            prop_assert!(r.probability > 0.0 && r.probability <= 1.0 + TOLERANCE);
            prop_assert_eq!(r.state.len(), circuit.num_qubits());
        }
    }

    #[test]
    fn prop_line_processing_order_is_irrelevant(lines in circuit_strategy()) {
        let circuit = Circuit::from_lines(
            lines.iter().cloned().map(QubitLine::from_gates).collect()
        ).unwrap();
        let result = Simulator::default().run(&circuit).unwrap();

        // Apply the same lines last-qubit-first by hand
        let n = lines.len();
        let mut state = qcirc_state::StateVector::new(n).unwrap();
        for (qubit, line) in lines.iter().enumerate().rev() {
            for gate in line {
                state
                    .apply_single_qubit_gate(qcirc_gates::gate_matrix(*gate), qubit)
                    .unwrap();
            }
        }

        for (a, b) in result.state().amplitudes().iter().zip(state.amplitudes()) {
            prop_assert!((*a - *b).norm() < 1e-12);
        }
    }

    #[test]
    fn prop_bloch_theta_in_range(lines in circuit_strategy(), pick in 0usize..6) {
        let circuit = Circuit::from_lines(
            lines.into_iter().map(QubitLine::from_gates).collect()
        ).unwrap();
        let qubit = pick % circuit.num_qubits();
        let angles = Simulator::default().run(&circuit).unwrap().bloch_angles(qubit).unwrap();

        prop_assert!(angles.theta >= 0.0 && angles.theta <= PI + TOLERANCE);
        prop_assert_eq!(angles.phi, 0.0);
    }
}

#[test]
fn test_amplitudes_are_real_for_supported_gates() {
    let result = Simulator::default()
        .run_symbols(&[vec!["H", "Z"], vec!["X", "H"], vec!["H", "X", "Z"]])
        .unwrap();
    for a in result.state().amplitudes() {
        assert_relative_eq!(a.im, 0.0, epsilon = 1e-15);
    }
}

#[test]
fn test_accepted_epsilon_keeps_every_uniform_outcome() {
    for max_qubits in [1, 5, 12] {
        let config = SimulatorConfig::default().with_max_qubits(max_qubits);
        let epsilon = config.epsilon_ceiling() * 0.99;
        let sim = Simulator::new(config.with_probability_epsilon(epsilon)).unwrap();

        let lines = vec![vec!["H"]; max_qubits];
        let result = sim.run_symbols(&lines).unwrap();

        assert_eq!(result.results().len(), 1 << max_qubits);
        assert_relative_eq!(result.probabilities().total(), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(result.bloch_angles(0).unwrap().theta, FRAC_PI_2, epsilon = TOLERANCE);
    }
}

#[test]
fn test_epsilon_that_hides_outcomes_is_rejected() {
    let coarse = SimulatorConfig::default().with_probability_epsilon(1e-6);
    assert!(matches!(
        Simulator::new(coarse),
        Err(SimulatorError::InvalidConfig(_))
    ));

    let coarse = SimulatorConfig::demo().with_probability_epsilon(0.75);
    assert!(Simulator::new(coarse).is_err());
}
