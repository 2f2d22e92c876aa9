//! Window functions for spectral analysis

pub mod generator;
pub mod kind;

pub use generator::{generate_window, WindowError, WindowGenerator};
pub use kind::WindowKind;
