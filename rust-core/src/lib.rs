//! Spectral Taper - window functions for spectral analysis
//!
//! Generates the tapering coefficients applied to a frame before an FFT,
//! plus a small realfft-backed analyzer that consumes them.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod spectrum;
pub mod windows;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use spectrum::{AnalyzerConfig, AnalyzerError, SpectrumAnalyzer};
pub use windows::{generate_window, WindowError, WindowGenerator, WindowKind};
