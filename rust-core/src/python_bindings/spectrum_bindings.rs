//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use super::window_bindings::PyWindowKind;
use crate::spectrum::{AnalyzerConfig, AnalyzerError, SpectrumAnalyzer};

impl From<AnalyzerError> for PyErr {
    fn from(err: AnalyzerError) -> Self {
        match err {
            AnalyzerError::Fft(_) => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     fft_size: FFT size (samples per frame, should be power of 2)
    ///     window_kind: Window kind for analysis
    ///     sample_rate: Sample rate in Hz
    ///     apply_correction: Whether to apply amplitude correction for windowing
    #[new]
    #[pyo3(signature = (fft_size=2048, window_kind=PyWindowKind::Hamming, sample_rate=48000.0, apply_correction=true))]
    fn new(
        fft_size: usize,
        window_kind: PyWindowKind,
        sample_rate: f32,
        apply_correction: bool,
    ) -> PyResult<Self> {
        let config = AnalyzerConfig {
            fft_size,
            window_kind: window_kind.into(),
            sample_rate,
            apply_correction,
        };

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(config)?,
        })
    }

    /// Analyze frame and return magnitude spectrum
    ///
    /// Args:
    ///     frame: Input frame as numpy array of length fft_size
    ///
    /// Returns:
    ///     Magnitude spectrum as numpy array
    fn analyze<'py>(
        &mut self,
        py: Python<'py>,
        frame: PyReadonlyArray1<f32>,
    ) -> PyResult<&'py PyArray1<f32>> {
        let spectrum = self.analyzer.analyze(frame.as_slice()?)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Analyze frame and return magnitude in dB
    ///
    /// Args:
    ///     frame: Input frame as numpy array of length fft_size
    ///     reference: Reference level for dB calculation (default: 1.0)
    #[pyo3(signature = (frame, reference=1.0))]
    fn analyze_db<'py>(
        &mut self,
        py: Python<'py>,
        frame: PyReadonlyArray1<f32>,
        reference: f32,
    ) -> PyResult<&'py PyArray1<f32>> {
        let spectrum = self.analyzer.analyze_db(frame.as_slice()?, reference)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Get frequency bins in Hz
    fn frequency_bins_hz<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f32>> {
        Ok(PyArray1::from_vec(py, self.analyzer.frequency_bins_hz()))
    }

    /// Window coefficients applied to each frame
    fn window<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f32>> {
        Ok(PyArray1::from_slice(py, self.analyzer.window()))
    }

    /// Get number of frequency bins
    fn num_bins(&self) -> usize {
        self.analyzer.num_bins()
    }

    /// Update configuration; omitted arguments keep their current value
    #[pyo3(signature = (fft_size=None, window_kind=None, sample_rate=None, apply_correction=None))]
    fn update_config(
        &mut self,
        fft_size: Option<usize>,
        window_kind: Option<PyWindowKind>,
        sample_rate: Option<f32>,
        apply_correction: Option<bool>,
    ) -> PyResult<()> {
        let mut config = self.analyzer.config().clone();

        if let Some(size) = fft_size {
            config.fft_size = size;
        }
        if let Some(kind) = window_kind {
            config.window_kind = kind.into();
        }
        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }
        if let Some(corr) = apply_correction {
            config.apply_correction = corr;
        }

        self.analyzer.update_config(config)?;
        Ok(())
    }

    #[getter]
    fn window_kind(&self) -> PyWindowKind {
        self.analyzer.config().window_kind.into()
    }

    #[getter]
    fn sample_rate(&self) -> f32 {
        self.analyzer.config().sample_rate
    }

    #[getter]
    fn fft_size(&self) -> usize {
        self.analyzer.config().fft_size
    }
}
