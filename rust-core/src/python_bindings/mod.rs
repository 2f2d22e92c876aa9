//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod spectrum_bindings;
mod window_bindings;

/// Python module definition
#[pymodule]
fn spectral_taper(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<window_bindings::PyWindowKind>()?;
    m.add_class::<window_bindings::PyWindow>()?;
    m.add_function(wrap_pyfunction!(window_bindings::generate_window, m)?)?;

    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;

    Ok(())
}
