//! Window coefficient generation
//!
//! Formulas follow the symmetric MathWorks definitions, parameterized by N-1.
//! Cosine-sum windows are evaluated in f64 and narrowed to f32 once per
//! coefficient.

use std::f64::consts::PI;
use std::fmt;

use log::trace;
use thiserror::Error;

use super::kind::WindowKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    #[error("Window length must be at least 1")]
    ZeroLength,

    #[error("Window of length {expected} cannot be applied to a frame of {actual} samples")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{0} window of length {1} has no energy, cannot compute a correction factor")]
    DegenerateWindow(WindowKind, usize),

    #[error("Unknown window kind: {0}")]
    UnknownKind(String),
}

/// Generate window coefficients
///
/// # Arguments
/// * `kind` - Window function kind
/// * `size` - Number of samples (N), at least 1
///
/// # Returns
/// Vector of coefficients w[n] for n = 0..N-1
///
/// # Errors
/// [`WindowError::ZeroLength`] if `size` is 0.
pub fn generate_window(kind: WindowKind, size: usize) -> Result<Vec<f32>, WindowError> {
    if size == 0 {
        return Err(WindowError::ZeroLength);
    }

    trace!("generating {} window of length {}", kind, size);

    // Everything but the rectangular window divides by N-1
    if size == 1 && kind != WindowKind::Rectangular {
        return Ok(vec![1.0]);
    }

    let window = match kind {
        WindowKind::Rectangular => vec![1.0; size],
        WindowKind::Triangular => triangular(size),
        WindowKind::Hann => hann(size),
        WindowKind::Hamming => hamming(size),
        WindowKind::Blackman => blackman(size),
        WindowKind::BlackmanHarris => blackman_harris(size),
        WindowKind::Bartlett => bartlett(size),
    };

    Ok(window)
}

fn hamming(size: usize) -> Vec<f32> {
    const ALPHA: f64 = 0.53836;
    const BETA: f64 = 1.0 - ALPHA;

    let m = (size - 1) as f64;
    (0..size)
        .map(|n| (ALPHA - BETA * (2.0 * PI * n as f64 / m).cos()) as f32)
        .collect()
}

fn hann(size: usize) -> Vec<f32> {
    let m = (size - 1) as f64;
    (0..size)
        .map(|n| (0.5 * (1.0 - (2.0 * PI * n as f64 / m).cos())) as f32)
        .collect()
}

fn blackman(size: usize) -> Vec<f32> {
    let m = (size - 1) as f64;
    (0..size)
        .map(|n| {
            let n = n as f64;
            (0.42 - 0.5 * (2.0 * PI * n / m).cos() + 0.08 * (4.0 * PI * n / m).cos()) as f32
        })
        .collect()
}

fn blackman_harris(size: usize) -> Vec<f32> {
    const A0: f64 = 0.35875;
    const A1: f64 = 0.48829;
    const A2: f64 = 0.14128;
    const A3: f64 = 0.01168;

    let m = (size - 1) as f64;
    (0..size)
        .map(|n| {
            let n = n as f64;
            (A0 - A1 * (2.0 * PI * n / m).cos() + A2 * (4.0 * PI * n / m).cos()
                - A3 * (6.0 * PI * n / m).cos()) as f32
        })
        .collect()
}

/// Zero at both ends, peak at (N-1)/2
fn bartlett(size: usize) -> Vec<f32> {
    let m = size - 1;
    (0..size)
        .map(|n| {
            let ramp = (2 * n) as f32 / m as f32;
            if n <= m / 2 {
                ramp
            } else {
                2.0 - ramp
            }
        })
        .collect()
}

/// Triangle peaking at the middle, with w[0] left at 0.0 for both parities
fn triangular(size: usize) -> Vec<f32> {
    let mut window = vec![0.0; size];

    if size % 2 == 0 {
        let half = size / 2;
        for (n, w) in window.iter_mut().enumerate().skip(1) {
            let ramp = (2 * n - 1) as f32 / size as f32;
            *w = if n <= half { ramp } else { 2.0 - ramp };
        }
    } else {
        let half = (size + 1) / 2;
        for (n, w) in window.iter_mut().enumerate().skip(1) {
            let ramp = (2 * n) as f32 / (size + 1) as f32;
            *w = if n <= half { ramp } else { 2.0 - ramp };
        }
    }

    window
}

/// Window generator bound to a single kind
///
/// Cheap to copy; holds no state besides the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowGenerator {
    kind: WindowKind,
}

impl WindowGenerator {
    pub fn new(kind: WindowKind) -> Self {
        Self { kind }
    }

    /// Get the window kind
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Generate `size` coefficients of this generator's window
    pub fn generate(&self, size: usize) -> Result<Vec<f32>, WindowError> {
        generate_window(self.kind, size)
    }
}

impl From<WindowKind> for WindowGenerator {
    fn from(kind: WindowKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for WindowGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
