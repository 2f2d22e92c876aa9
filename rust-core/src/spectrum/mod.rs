//! Spectral analysis of tapered frames

pub mod analysis;
pub mod fft;
pub mod windowing;

pub use analysis::{AnalyzerConfig, AnalyzerError, SpectrumAnalyzer};
pub use fft::FftEngine;
pub use windowing::{apply_window, apply_window_inplace};
