//! Python bindings for window generation

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::windows::{self, WindowError, WindowGenerator, WindowKind};

impl From<WindowError> for PyErr {
    fn from(err: WindowError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Window kind enum exposed to Python
#[pyclass(name = "WindowKind")]
#[derive(Clone, Copy)]
pub enum PyWindowKind {
    Rectangular,
    Triangular,
    Hann,
    Hamming,
    Blackman,
    BlackmanHarris,
    Bartlett,
}

impl From<PyWindowKind> for WindowKind {
    fn from(py_kind: PyWindowKind) -> Self {
        match py_kind {
            PyWindowKind::Rectangular => WindowKind::Rectangular,
            PyWindowKind::Triangular => WindowKind::Triangular,
            PyWindowKind::Hann => WindowKind::Hann,
            PyWindowKind::Hamming => WindowKind::Hamming,
            PyWindowKind::Blackman => WindowKind::Blackman,
            PyWindowKind::BlackmanHarris => WindowKind::BlackmanHarris,
            PyWindowKind::Bartlett => WindowKind::Bartlett,
        }
    }
}

impl From<WindowKind> for PyWindowKind {
    fn from(kind: WindowKind) -> Self {
        match kind {
            WindowKind::Rectangular => PyWindowKind::Rectangular,
            WindowKind::Triangular => PyWindowKind::Triangular,
            WindowKind::Hann => PyWindowKind::Hann,
            WindowKind::Hamming => PyWindowKind::Hamming,
            WindowKind::Blackman => PyWindowKind::Blackman,
            WindowKind::BlackmanHarris => PyWindowKind::BlackmanHarris,
            WindowKind::Bartlett => PyWindowKind::Bartlett,
        }
    }
}

/// Python ints may be negative; reject those before they reach the generator
fn window_length(size: i64) -> PyResult<usize> {
    usize::try_from(size)
        .map_err(|_| PyValueError::new_err(format!("Window length must be at least 1 (got {})", size)))
}

/// Generate window coefficients
///
/// Args:
///     kind: Window kind
///     size: Number of coefficients, at least 1
///
/// Returns:
///     Coefficients as float32 numpy array
#[pyfunction]
pub fn generate_window(py: Python<'_>, kind: PyWindowKind, size: i64) -> PyResult<&PyArray1<f32>> {
    let window = windows::generate_window(kind.into(), window_length(size)?)?;
    Ok(PyArray1::from_vec(py, window))
}

/// Window generator exposed to Python
#[pyclass(name = "Window")]
pub struct PyWindow {
    generator: WindowGenerator,
}

#[pymethods]
impl PyWindow {
    #[new]
    fn new(kind: PyWindowKind) -> Self {
        Self {
            generator: WindowGenerator::new(kind.into()),
        }
    }

    /// Create from an integer menu tag; unknown tags give a rectangular window
    #[staticmethod]
    fn from_tag(tag: i32) -> Self {
        Self {
            generator: WindowGenerator::new(WindowKind::from_tag(tag)),
        }
    }

    /// Generate `size` coefficients
    fn generate<'py>(&self, py: Python<'py>, size: i64) -> PyResult<&'py PyArray1<f32>> {
        let window = self.generator.generate(window_length(size)?)?;
        Ok(PyArray1::from_vec(py, window))
    }

    #[getter]
    fn kind(&self) -> PyWindowKind {
        self.generator.kind().into()
    }

    fn __str__(&self) -> String {
        self.generator.to_string()
    }
}
