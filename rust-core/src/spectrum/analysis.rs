//! High-level spectrum analyzer
//!
//! Combines FFT engine with windowing for frame-by-frame spectral analysis

use log::debug;
use thiserror::Error;

use super::fft::{to_db, FftEngine};
use super::windowing::{apply_coefficients_inplace, window_correction_factor};
use crate::windows::{WindowError, WindowGenerator, WindowKind};

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("FFT size must be at least 1 (got {0})")]
    InvalidFftSize(usize),

    #[error("Sample rate must be a positive number of Hz (got {0})")]
    InvalidSampleRate(f32),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples per frame, should be power of 2)
    pub fft_size: usize,

    /// Window kind for spectral analysis
    pub window_kind: WindowKind,

    /// Sample rate in Hz
    pub sample_rate: f32,

    /// Apply amplitude correction for windowing
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            window_kind: WindowKind::Hamming,
            sample_rate: 48000.0,
            apply_correction: true,
        }
    }
}

impl AnalyzerConfig {
    /// Check the configuration before building an analyzer from it
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.fft_size == 0 {
            return Err(AnalyzerError::InvalidFftSize(self.fft_size));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(AnalyzerError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }
}

/// Frame-by-frame spectrum analyzer
///
/// The window is generated once per configuration and reused for every frame.
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: FftEngine,
    window: Vec<f32>,
    correction_factor: f32,
    scratch: Vec<f32>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;

        let fft_engine = FftEngine::new(config.fft_size)?;
        let window = WindowGenerator::new(config.window_kind).generate(config.fft_size)?;
        let correction_factor = Self::correction_for(&config)?;

        debug!(
            "spectrum analyzer: {} window, fft size {}, {} Hz",
            config.window_kind, config.fft_size, config.sample_rate
        );

        Ok(Self {
            scratch: vec![0.0; config.fft_size],
            config,
            fft_engine,
            window,
            correction_factor,
        })
    }

    fn correction_for(config: &AnalyzerConfig) -> Result<f32, AnalyzerError> {
        if !config.apply_correction {
            return Ok(1.0);
        }
        let factor = window_correction_factor(config.window_kind, config.fft_size)?;
        Ok(factor as f32)
    }

    /// Analyze frame and return magnitude spectrum
    ///
    /// # Arguments
    /// * `frame` - Input frame, exactly `fft_size` samples
    ///
    /// # Returns
    /// Magnitude spectrum |X[k]| for positive frequencies
    pub fn analyze(&mut self, frame: &[f32]) -> Result<Vec<f32>, AnalyzerError> {
        if frame.len() != self.window.len() {
            return Err(WindowError::LengthMismatch {
                expected: self.window.len(),
                actual: frame.len(),
            }
            .into());
        }

        self.scratch.copy_from_slice(frame);
        apply_coefficients_inplace(&mut self.scratch, &self.window)?;

        let mut spectrum = self.fft_engine.compute_magnitude(&self.scratch)?;

        if self.config.apply_correction {
            for s in spectrum.iter_mut() {
                *s *= self.correction_factor;
            }
        }

        Ok(spectrum)
    }

    /// Analyze and return magnitude in dB
    ///
    /// # Arguments
    /// * `frame` - Input frame
    /// * `reference` - Reference level for dB (default: 1.0)
    pub fn analyze_db(&mut self, frame: &[f32], reference: f32) -> Result<Vec<f32>, AnalyzerError> {
        let spectrum = self.analyze(frame)?;
        Ok(spectrum.iter().map(|&mag| to_db(mag, reference)).collect())
    }

    /// Get frequency bins in Hz
    pub fn frequency_bins_hz(&self) -> Vec<f32> {
        self.fft_engine.frequency_axis(self.config.sample_rate)
    }

    /// Update configuration
    ///
    /// The analyzer is left unchanged if the new configuration is rejected.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<(), AnalyzerError> {
        config.validate()?;

        let size_changed = config.fft_size != self.config.fft_size;
        let kind_changed = config.window_kind != self.config.window_kind;

        let correction_factor = Self::correction_for(&config)?;
        let window = if kind_changed || size_changed {
            Some(WindowGenerator::new(config.window_kind).generate(config.fft_size)?)
        } else {
            None
        };
        let fft_engine = if size_changed {
            Some(FftEngine::new(config.fft_size)?)
        } else {
            None
        };

        if let Some(window) = window {
            self.window = window;
        }
        if let Some(fft_engine) = fft_engine {
            self.fft_engine = fft_engine;
            self.scratch = vec![0.0; config.fft_size];
        }

        debug!(
            "spectrum analyzer reconfigured: {} window, fft size {}",
            config.window_kind, config.fft_size
        );

        self.correction_factor = correction_factor;
        self.config = config;

        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Window coefficients applied to each frame
    pub fn window(&self) -> &[f32] {
        &self.window
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.fft_engine.num_bins()
    }
}
