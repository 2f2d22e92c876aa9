//! FFT engine using realfft for real-valued frames
//!
//! The transform consuming tapered frames; sized once, reused per frame

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use super::analysis::AnalyzerError;

/// FFT engine for real-valued frames
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f32>>,

    /// Reusable input buffer
    input_buffer: Vec<f32>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<Complex<f32>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Result<Self, AnalyzerError> {
        if fft_size == 0 {
            return Err(AnalyzerError::InvalidFftSize(fft_size));
        }

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Compute FFT and return magnitude spectrum
    ///
    /// # Arguments
    /// * `frame` - Input frame (zero-padded if shorter than fft_size, truncated if longer)
    ///
    /// # Returns
    /// Magnitude spectrum |X[k]| for k = 0..fft_size/2 (positive frequencies only)
    pub fn compute_magnitude(&mut self, frame: &[f32]) -> Result<Vec<f32>, AnalyzerError> {
        let copy_len = frame.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&frame[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| AnalyzerError::Fft(e.to_string()))?;

        Ok(self.output_buffer.iter().map(|c| c.norm()).collect())
    }

    /// Compute FFT and return magnitude spectrum in dB
    ///
    /// # Returns
    /// Magnitude spectrum in dB: 20*log10(|X[k]|/reference)
    pub fn compute_magnitude_db(
        &mut self,
        frame: &[f32],
        reference: f32,
    ) -> Result<Vec<f32>, AnalyzerError> {
        let magnitude = self.compute_magnitude(frame)?;
        Ok(magnitude
            .iter()
            .map(|&mag| to_db(mag, reference))
            .collect())
    }

    /// Compute power spectrum (magnitude squared)
    pub fn compute_power(&mut self, frame: &[f32]) -> Result<Vec<f32>, AnalyzerError> {
        let magnitude = self.compute_magnitude(frame)?;
        Ok(magnitude.iter().map(|&mag| mag * mag).collect())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Center frequency of a bin in Hz
    pub fn bin_to_hz(&self, bin: usize, sample_rate: f32) -> f32 {
        bin as f32 * sample_rate / self.fft_size as f32
    }

    /// Get frequency axis in Hz, from DC to Nyquist
    pub fn frequency_axis(&self, sample_rate: f32) -> Vec<f32> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_hz(bin, sample_rate))
            .collect()
    }
}

/// Convert a linear magnitude to dB relative to `reference`
pub(crate) fn to_db(magnitude: f32, reference: f32) -> f32 {
    // Avoid log(0)
    20.0 * (magnitude.max(1e-10) / reference).log10()
}
