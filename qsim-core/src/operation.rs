//! Circuit operations
//!
//! An [`Operation`] is one step of a circuit program. Programs are plain
//! ordered sequences of operations; the engine never reorders or mutates them.

use crate::{QuantumError, QubitId, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-qubit gates understood by the engine
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TwoQubitKind {
    /// Controlled-NOT
    #[serde(rename = "CNOT")]
    Cnot,
}

impl TwoQubitKind {
    /// The gate name used in programs
    pub const fn name(&self) -> &'static str {
        match self {
            TwoQubitKind::Cnot => "CNOT",
        }
    }
}

impl fmt::Display for TwoQubitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a circuit program
///
/// The gate name of a single-qubit operation is kept as supplied; it is
/// resolved against the gate library only when the engine reaches it.
///
/// # Example
/// ```
/// use qsim_core::Operation;
///
/// let op = Operation::single(0, "H");
/// assert_eq!(op.to_string(), "H(q0)");
///
/// let op = Operation::cnot(0, 1);
/// assert_eq!(op.to_string(), "CNOT(q0, q1)");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Single-qubit gate applied to `target`
    Single { target: QubitId, gate: String },

    /// Two-qubit gate with a control and a target qubit
    Controlled {
        kind: TwoQubitKind,
        control: QubitId,
        target: QubitId,
    },
}

impl Operation {
    /// Single-qubit gate on qubit `target`
    pub fn single(target: usize, gate: impl Into<String>) -> Self {
        Operation::Single {
            target: QubitId::new(target),
            gate: gate.into(),
        }
    }

    /// CNOT with the given control and target qubits
    pub fn cnot(control: usize, target: usize) -> Self {
        Operation::Controlled {
            kind: TwoQubitKind::Cnot,
            control: QubitId::new(control),
            target: QubitId::new(target),
        }
    }

    /// Gate name of this operation
    pub fn gate_name(&self) -> &str {
        match self {
            Operation::Single { gate, .. } => gate,
            Operation::Controlled { kind, .. } => kind.name(),
        }
    }

    /// Qubits touched by this operation, control first
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Single { target, .. } => vec![*target],
            Operation::Controlled {
                control, target, ..
            } => vec![*control, *target],
        }
    }

    /// Whether this is a two-qubit operation
    pub fn is_controlled(&self) -> bool {
        matches!(self, Operation::Controlled { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate_name())?;
        for (i, q) in self.qubits().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

/// Untyped operation as produced by an input layer
///
/// `{ name: "H", qubits: [0] }` is a single-qubit gate and
/// `{ name: "CNOT", qubits: [0, 1] }` a controlled-NOT; every other shape
/// is rejected when converted into an [`Operation`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedOperation {
    pub name: String,
    pub qubits: Vec<usize>,
}

impl SerializedOperation {
    /// Create a serialized operation
    pub fn new(name: impl Into<String>, qubits: &[usize]) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.to_vec(),
        }
    }
}

impl From<&Operation> for SerializedOperation {
    fn from(op: &Operation) -> Self {
        Self {
            name: op.gate_name().to_string(),
            qubits: op.qubits().into_iter().map(usize::from).collect(),
        }
    }
}

impl TryFrom<&SerializedOperation> for Operation {
    type Error = QuantumError;

    fn try_from(raw: &SerializedOperation) -> Result<Self> {
        match (raw.name.as_str(), raw.qubits.as_slice()) {
            ("CNOT", &[control, target]) => Ok(Operation::cnot(control, target)),
            (name, &[target]) if name != "CNOT" => Ok(Operation::single(target, name)),
            (name, qubits) => Err(QuantumError::unsupported(format!(
                "'{}' on {} qubit(s)",
                name,
                qubits.len()
            ))),
        }
    }
}

impl TryFrom<SerializedOperation> for Operation {
    type Error = QuantumError;

    fn try_from(raw: SerializedOperation) -> Result<Self> {
        Operation::try_from(&raw)
    }
}
