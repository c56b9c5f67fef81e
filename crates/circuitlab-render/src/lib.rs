//! CircuitLab Image Rendering
//!
//! Turns a [`circuitlab_ir::Circuit`] into a PNG circuit diagram and a
//! [`circuitlab_adapter_sim::Counts`] histogram into a PNG bar chart. The
//! dashboard embeds both in JSON as base64 strings via [`to_base64`].
//!
//! # Example
//!
//! ```rust
//! use circuitlab_ir::Example;
//! use circuitlab_render::{render_circuit, to_base64};
//!
//! let circuit = Example::BellState.build(2).unwrap();
//! let png = render_circuit(&circuit).unwrap();
//! assert!(to_base64(&png).starts_with("iVBORw0KGgo"));
//! ```

mod diagram;
mod error;
mod font;
mod histogram;
mod surface;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub use diagram::render_circuit;
pub use error::{RenderError, RenderResult};
pub use histogram::render_histogram;

/// Encode image bytes as standard base64 for JSON payloads.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base64() {
        assert_eq!(to_base64(b"png"), "cG5n");
        assert_eq!(to_base64(&[]), "");
    }
}
