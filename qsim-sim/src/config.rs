//! Simulator configuration

/// Widest register the joint probability vector may cover
pub const MAX_SUPPORTED_QUBITS: usize = 30;

/// Configuration for the simulator facade
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Collect timing and operation-count statistics
    ///
    /// Default: false
    pub collect_statistics: bool,

    /// Record a snapshot of the register after every operation
    ///
    /// The trace holds the same information a front-end would print as
    /// progress lines ("state of qubit 0 after applying the gate 'H'").
    ///
    /// Default: false
    pub record_trace: bool,

    /// Maximum number of qubits accepted by a run
    ///
    /// Probability extraction allocates 2^n entries, so this bounds memory.
    /// Must be between 1 and [`MAX_SUPPORTED_QUBITS`].
    ///
    /// Default: 24
    pub max_qubits: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            collect_statistics: false,
            record_trace: false,
            max_qubits: 24,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for debugging: statistics and trace enabled
    pub fn debug() -> Self {
        Self {
            collect_statistics: true,
            record_trace: true,
            ..Default::default()
        }
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Enable per-operation trace recording
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }

    /// Set the qubit limit
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_qubits == 0 {
            return Err("max_qubits must be > 0".to_string());
        }

        if self.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(format!(
                "max_qubits must be at most {}, got {}",
                MAX_SUPPORTED_QUBITS, self.max_qubits
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert!(!config.collect_statistics);
        assert!(!config.record_trace);
        assert_eq!(config.max_qubits, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_config() {
        let config = SimulatorConfig::debug();
        assert!(config.collect_statistics);
        assert!(config.record_trace);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulatorConfig::new()
            .with_statistics(true)
            .with_trace(true)
            .with_max_qubits(8);

        assert!(config.collect_statistics);
        assert!(config.record_trace);
        assert_eq!(config.max_qubits, 8);
    }

    #[test]
    fn test_validate() {
        assert!(SimulatorConfig::new().with_max_qubits(0).validate().is_err());
        assert!(SimulatorConfig::new().with_max_qubits(31).validate().is_err());
        assert!(SimulatorConfig::new()
            .with_max_qubits(MAX_SUPPORTED_QUBITS)
            .validate()
            .is_ok());
    }
}
