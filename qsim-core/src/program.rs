//! Program hand-off format
//!
//! A [`Program`] is what an input layer assembles and passes to the engine:
//! the initial-state labels plus the untyped operation list. It round-trips
//! through JSON so front-ends in other processes can produce it.

use crate::{Operation, QuantumError, Result, SerializedOperation};
use serde::{Deserialize, Serialize};

/// Program format version
pub const PROGRAM_FORMAT_VERSION: u32 = 1;

/// Serialized circuit program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    /// Format version for compatibility checking
    pub version: u32,
    /// Optional program name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One label per qubit, qubit 0 first
    pub initial_states: Vec<String>,
    /// Operations in program order
    pub operations: Vec<SerializedOperation>,
}

impl Program {
    /// Create a program from labels and untyped operations
    pub fn new(initial_states: Vec<String>, operations: Vec<SerializedOperation>) -> Self {
        Self {
            version: PROGRAM_FORMAT_VERSION,
            name: None,
            initial_states,
            operations,
        }
    }

    /// Create a program from labels and typed operations
    ///
    /// # Example
    /// ```
    /// use qsim_core::{Operation, Program};
    ///
    /// let program = Program::from_operations(
    ///     &["0", "1"],
    ///     &[Operation::single(0, "H"), Operation::cnot(0, 1)],
    /// );
    /// assert_eq!(program.num_qubits(), 2);
    /// assert_eq!(program.operations[1].name, "CNOT");
    /// ```
    pub fn from_operations(initial_states: &[&str], operations: &[Operation]) -> Self {
        Self::new(
            initial_states.iter().map(|s| s.to_string()).collect(),
            operations.iter().map(SerializedOperation::from).collect(),
        )
    }

    /// Attach a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of qubits declared by the program
    pub fn num_qubits(&self) -> usize {
        self.initial_states.len()
    }

    /// Check version compatibility
    pub fn check_version(&self) -> Result<()> {
        if self.version > PROGRAM_FORMAT_VERSION {
            return Err(QuantumError::Serialization(format!(
                "format version {} is newer than supported version {}",
                self.version, PROGRAM_FORMAT_VERSION
            )));
        }
        Ok(())
    }

    /// Convert every untyped operation, stopping at the first unsupported one
    pub fn typed_operations(&self) -> Result<Vec<Operation>> {
        self.operations.iter().map(Operation::try_from).collect()
    }

    /// Decode a program from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let program: Program = serde_json::from_str(json)?;
        program.check_version()?;
        Ok(program)
    }

    /// Encode the program as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
