//! Application state for the dashboard server.

use std::net::SocketAddr;

use circuitlab_adapter_sim::SimulatorBackend;
use circuitlab_ir::{Circuit, DEFAULT_QUBITS, IrError, IrResult, MAX_QUBITS, MIN_QUBITS};
use tokio::sync::RwLock;

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Width of the circuit at startup.
    pub default_qubits: u32,
    /// Widest circuit the simulator accepts.
    pub max_qubits: u32,
    /// Smallest accepted shot count.
    pub min_shots: u32,
    /// Largest accepted shot count.
    pub max_shots: u32,
    /// Seed for the simulator's sampler; `None` uses fresh entropy per run.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            default_qubits: DEFAULT_QUBITS,
            max_qubits: MAX_QUBITS,
            min_shots: 100,
            max_shots: 10_000,
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Validate a requested circuit width against the configured limit.
    pub fn check_qubits(&self, qubits: i64) -> IrResult<u32> {
        let max = self.max_qubits.min(MAX_QUBITS);
        match u32::try_from(qubits) {
            Ok(n) if (MIN_QUBITS..=max).contains(&n) => Ok(n),
            _ => Err(IrError::InvalidQubitCount {
                got: qubits,
                min: MIN_QUBITS,
                max,
            }),
        }
    }
}

/// Shared application state.
///
/// The dashboard edits one circuit for every client.
pub struct AppState {
    /// The circuit being edited.
    pub circuit: RwLock<Circuit>,
    /// Simulator used by the simulate endpoint.
    pub simulator: SimulatorBackend,
    /// Dashboard configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        let config = DashboardConfig::default();
        Self {
            circuit: RwLock::new(Circuit::default()),
            simulator: simulator_for(&config),
            config,
        }
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: DashboardConfig) -> IrResult<Self> {
        let width = config.check_qubits(i64::from(config.default_qubits))?;
        let circuit = Circuit::new(width)?;
        Ok(Self {
            circuit: RwLock::new(circuit),
            simulator: simulator_for(&config),
            config,
        })
    }

    /// Snapshot of the current circuit.
    pub async fn snapshot(&self) -> Circuit {
        self.circuit.read().await.clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn simulator_for(config: &DashboardConfig) -> SimulatorBackend {
    let simulator = SimulatorBackend::new()
        .with_max_qubits(config.max_qubits)
        .with_max_shots(config.max_shots);
    match config.seed {
        Some(seed) => simulator.with_seed(seed),
        None => simulator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_qubits_uses_configured_limit() {
        let config = DashboardConfig {
            max_qubits: 3,
            ..DashboardConfig::default()
        };
        assert_eq!(config.check_qubits(3), Ok(3));
        assert_eq!(
            config.check_qubits(4),
            Err(IrError::InvalidQubitCount {
                got: 4,
                min: 1,
                max: 3
            })
        );
        assert!(config.check_qubits(0).is_err());
        assert!(config.check_qubits(-2).is_err());
    }

    #[test]
    fn test_check_qubits_never_exceeds_circuit_limit() {
        let config = DashboardConfig {
            max_qubits: 9,
            ..DashboardConfig::default()
        };
        assert_eq!(config.check_qubits(5), Ok(5));
        assert!(matches!(
            config.check_qubits(6),
            Err(IrError::InvalidQubitCount { max: 5, .. })
        ));
    }

    #[test]
    fn test_with_config_rejects_default_above_limit() {
        let config = DashboardConfig {
            default_qubits: 4,
            max_qubits: 2,
            ..DashboardConfig::default()
        };
        assert!(AppState::with_config(config).is_err());
    }
}
