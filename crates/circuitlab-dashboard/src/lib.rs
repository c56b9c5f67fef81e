//! CircuitLab Dashboard - Local web interface for building and simulating circuits.
//!
//! This crate serves a single page where a user clicks together gates on up to
//! five qubits, picks a shot count and gets back a circuit diagram and a result
//! histogram as PNG images. It enables:
//!
//! - Adding, undoing and clearing gates on one shared circuit
//! - Loading the Bell-state and two-qubit Grover examples
//! - Simulating with 100 to 10000 shots
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use circuitlab_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone())?);
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;

pub use dto::{CircuitResponse, CircuitStateView, HealthResponse, SimulateResponse};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, DashboardConfig};
