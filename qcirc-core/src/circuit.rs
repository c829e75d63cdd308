//! Quantum circuit representation
//!
//! A circuit is one [`QubitLine`] per qubit, each holding that qubit's gates
//! in time order. Every supported gate acts on a single qubit, so lines are
//! independent of each other and may have different lengths.

use crate::{GateSymbol, QuantumError, QubitId, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ordered gates applied to one qubit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitLine {
    gates: Vec<GateSymbol>,
}

impl QubitLine {
    /// Create an empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line from already-typed gates
    pub fn from_gates(gates: Vec<GateSymbol>) -> Self {
        Self { gates }
    }

    /// Parse a line of wire symbols belonging to `qubit`
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidGate`] naming the first unsupported
    /// symbol, the qubit and its position in the line.
    pub fn parse<S: AsRef<str>>(qubit: usize, symbols: &[S]) -> Result<Self> {
        let gates = symbols
            .iter()
            .enumerate()
            .map(|(position, symbol)| {
                let symbol = symbol.as_ref();
                GateSymbol::parse_symbol(symbol)
                    .ok_or_else(|| QuantumError::invalid_gate(symbol, qubit, position))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { gates })
    }

    /// Append a gate to the end of the line
    pub fn push(&mut self, gate: GateSymbol) {
        self.gates.push(gate);
    }

    /// Gates in time order
    #[inline]
    pub fn gates(&self) -> &[GateSymbol] {
        &self.gates
    }

    /// Number of gate slots, identities included
    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the line has no gate slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Gates that actually change the state
    pub fn effective_gates(&self) -> impl Iterator<Item = GateSymbol> + '_ {
        self.gates.iter().copied().filter(|g| !g.is_identity())
    }
}

impl FromIterator<GateSymbol> for QubitLine {
    fn from_iter<T: IntoIterator<Item = GateSymbol>>(iter: T) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

/// A quantum circuit made of per-qubit gate lines
///
/// # Example
/// ```
/// use qcirc_core::{Circuit, GateSymbol, QubitId};
///
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit.push(QubitId::new(0), GateSymbol::Hadamard).unwrap();
/// assert_eq!(circuit.num_qubits(), 2);
/// assert_eq!(circuit.gate_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QubitLine>", into = "Vec<QubitLine>")]
pub struct Circuit {
    lines: Vec<QubitLine>,
}

impl Circuit {
    /// Create a circuit with `num_qubits` empty lines
    ///
    /// # Errors
    /// Returns [`QuantumError::MalformedCircuit`] if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::from_lines(vec![QubitLine::new(); num_qubits])
    }

    /// Create a circuit from prepared lines
    ///
    /// # Errors
    /// Returns [`QuantumError::MalformedCircuit`] if `lines` is empty
    pub fn from_lines(lines: Vec<QubitLine>) -> Result<Self> {
        if lines.is_empty() {
            return Err(QuantumError::malformed("circuit has no qubit lines"));
        }
        Ok(Self { lines })
    }

    /// Parse a grid of wire symbols, one row per qubit
    ///
    /// # Errors
    /// - [`QuantumError::MalformedCircuit`] if there are no rows
    /// - [`QuantumError::InvalidGate`] for the first unsupported symbol
    pub fn from_symbols<S: AsRef<str>>(lines: &[Vec<S>]) -> Result<Self> {
        let lines = lines
            .iter()
            .enumerate()
            .map(|(qubit, line)| QubitLine::parse(qubit, line))
            .collect::<Result<Vec<_>>>()?;

        Self::from_lines(lines)
    }

    /// Number of qubits (lines)
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.lines.len()
    }

    /// All lines, indexed by qubit
    #[inline]
    pub fn lines(&self) -> &[QubitLine] {
        &self.lines
    }

    /// The line of a given qubit
    pub fn line(&self, qubit: usize) -> Option<&QubitLine> {
        self.lines.get(qubit)
    }

    /// Iterate lines together with their qubit ids
    pub fn iter(&self) -> impl Iterator<Item = (QubitId, &QubitLine)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (QubitId::new(i), line))
    }

    /// Append a gate to a qubit's line
    ///
    /// # Errors
    /// Returns error if the qubit index is out of bounds
    pub fn push(&mut self, qubit: QubitId, gate: GateSymbol) -> Result<()> {
        let num_qubits = self.num_qubits();
        let line = self
            .lines
            .get_mut(qubit.index())
            .ok_or_else(|| QuantumError::invalid_qubit(qubit.index(), num_qubits))?;
        line.push(gate);
        Ok(())
    }

    /// Total gate slots across all lines, identities included
    pub fn gate_count(&self) -> usize {
        self.lines.iter().map(QubitLine::len).sum()
    }

    /// Gates that will actually be applied (identities excluded)
    pub fn effective_gate_count(&self) -> usize {
        self.lines.iter().map(|l| l.effective_gates().count()).sum()
    }

    /// Length of the longest line
    pub fn depth(&self) -> usize {
        self.lines.iter().map(QubitLine::len).max().unwrap_or(0)
    }

    /// Whether no line holds any gate
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(QubitLine::is_empty)
    }

    /// Render back to wire symbols
    pub fn to_symbols(&self) -> Vec<Vec<String>> {
        self.lines
            .iter()
            .map(|line| line.gates().iter().map(|g| g.to_string()).collect())
            .collect()
    }
}

impl TryFrom<Vec<QubitLine>> for Circuit {
    type Error = QuantumError;

    fn try_from(lines: Vec<QubitLine>) -> Result<Self> {
        Self::from_lines(lines)
    }
}

impl From<Circuit> for Vec<QubitLine> {
    fn from(circuit: Circuit) -> Self {
        circuit.lines
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (qubit, line) in self.iter() {
            write!(f, "{}:", qubit)?;
            for gate in line.gates() {
                write!(f, " {}", gate)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
