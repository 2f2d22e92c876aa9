//! Windowing functions for spectral analysis
//!
//! Applies windows to time-domain frames before FFT to reduce spectral leakage

use crate::windows::{generate_window, WindowError, WindowKind};

/// Apply window to frame
///
/// # Arguments
/// * `frame` - Input frame
/// * `kind` - Kind of window to apply
///
/// # Returns
/// Windowed frame, or an error for an empty frame
pub fn apply_window(frame: &[f32], kind: WindowKind) -> Result<Vec<f32>, WindowError> {
    let window = generate_window(kind, frame.len())?;
    apply_coefficients(frame, &window)
}

/// Apply window in-place
pub fn apply_window_inplace(frame: &mut [f32], kind: WindowKind) -> Result<(), WindowError> {
    let window = generate_window(kind, frame.len())?;
    apply_coefficients_inplace(frame, &window)
}

/// Multiply frame by precomputed window coefficients
///
/// Use this in a processing loop to avoid regenerating the window per frame.
pub fn apply_coefficients(frame: &[f32], window: &[f32]) -> Result<Vec<f32>, WindowError> {
    check_lengths(frame, window)?;

    Ok(frame
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect())
}

/// Multiply frame by precomputed window coefficients in-place
pub fn apply_coefficients_inplace(frame: &mut [f32], window: &[f32]) -> Result<(), WindowError> {
    check_lengths(frame, window)?;

    for (s, w) in frame.iter_mut().zip(window.iter()) {
        *s *= w;
    }

    Ok(())
}

fn check_lengths(frame: &[f32], window: &[f32]) -> Result<(), WindowError> {
    if frame.len() != window.len() {
        return Err(WindowError::LengthMismatch {
            expected: window.len(),
            actual: frame.len(),
        });
    }
    Ok(())
}

/// Coherent gain of a window (mean coefficient)
///
/// A tone passed through the window comes out scaled by this factor.
pub fn coherent_gain(kind: WindowKind, length: usize) -> Result<f64, WindowError> {
    let window = generate_window(kind, length)?;
    let sum: f64 = window.iter().map(|&w| w as f64).sum();
    Ok(sum / length as f64)
}

/// Calculate window correction factor
///
/// When applying windows, the signal amplitude is reduced. This factor
/// can be used to correct the FFT magnitude.
///
/// # Arguments
/// * `kind` - Kind of window
/// * `length` - Window length
///
/// # Returns
/// Correction factor (multiply FFT magnitude by this)
pub fn window_correction_factor(kind: WindowKind, length: usize) -> Result<f64, WindowError> {
    let window = generate_window(kind, length)?;
    let sum: f64 = window.iter().map(|&w| w as f64).sum();
    if sum <= 0.0 {
        return Err(WindowError::DegenerateWindow(kind, length));
    }
    Ok(length as f64 / sum)
}

/// Calculate window power correction factor (for power spectral density)
pub fn window_power_correction_factor(kind: WindowKind, length: usize) -> Result<f64, WindowError> {
    let window = generate_window(kind, length)?;
    let sum_sq: f64 = window.iter().map(|&w| (w as f64) * (w as f64)).sum();
    if sum_sq <= 0.0 {
        return Err(WindowError::DegenerateWindow(kind, length));
    }
    Ok(length as f64 / sum_sq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_window() {
        let frame = vec![1.0; 101];
        let windowed = apply_window(&frame, WindowKind::Hamming).unwrap();

        assert_eq!(windowed.len(), 101);

        // Center should be close to 1.0
        assert!((windowed[50] - 1.0).abs() < 0.01);

        // Edges should be reduced (Hamming ~0.077)
        assert!(windowed[0] < 0.1);
        assert!(windowed[100] < 0.1);
    }

    #[test]
    fn test_apply_window_inplace_matches_copy() {
        let frame: Vec<f32> = (0..64).map(|n| (n as f32 * 0.3).sin()).collect();
        let copied = apply_window(&frame, WindowKind::Blackman).unwrap();

        let mut in_place = frame.clone();
        apply_window_inplace(&mut in_place, WindowKind::Blackman).unwrap();

        assert_eq!(copied, in_place);
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(
            apply_window(&[], WindowKind::Hann),
            Err(WindowError::ZeroLength)
        );
    }

    #[test]
    fn test_length_mismatch() {
        let window = generate_window(WindowKind::Hann, 8).unwrap();
        let mut frame = vec![1.0; 6];

        let expected = WindowError::LengthMismatch {
            expected: 8,
            actual: 6,
        };
        assert_eq!(apply_coefficients(&frame, &window).unwrap_err(), expected);
        assert_eq!(
            apply_coefficients_inplace(&mut frame, &window).unwrap_err(),
            expected
        );

        // Frame left untouched
        assert!(frame.iter().all(|&s| s == 1.0));
    }

    #[test]
    fn test_correction_factor() {
        let factor_rect = window_correction_factor(WindowKind::Rectangular, 100).unwrap();
        let factor_hann = window_correction_factor(WindowKind::Hann, 1000).unwrap();
        let factor_hamming = window_correction_factor(WindowKind::Hamming, 100).unwrap();

        // Rectangular window has no correction needed
        assert!((factor_rect - 1.0).abs() < 1e-9);

        // Hann coherent gain tends to 0.5
        assert!((factor_hann - 2.0).abs() < 0.01);

        // Hamming window reduces amplitude, so correction > 1
        assert!(factor_hamming > 1.5 && factor_hamming < 2.5);
    }

    #[test]
    fn test_coherent_gain() {
        let gain = coherent_gain(WindowKind::Bartlett, 1001).unwrap();
        assert!((gain - 0.5).abs() < 0.01);
        assert_eq!(coherent_gain(WindowKind::Rectangular, 7).unwrap(), 1.0);
    }

    #[test]
    fn test_power_correction_factor() {
        // Σw² of Hann tends to 3N/8
        let factor = window_power_correction_factor(WindowKind::Hann, 4096).unwrap();
        assert!((factor - 8.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_window() {
        // Bartlett of length 2 is [0, 0]
        assert_eq!(
            window_correction_factor(WindowKind::Bartlett, 2),
            Err(WindowError::DegenerateWindow(WindowKind::Bartlett, 2))
        );
        assert_eq!(
            window_power_correction_factor(WindowKind::Hann, 2),
            Err(WindowError::DegenerateWindow(WindowKind::Hann, 2))
        );
    }
}
