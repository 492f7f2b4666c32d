//! Stick-spectrum extraction and Gaussian broadening for quantum-chemistry
//! output files.
//!
//! The [`data`] module is the whole computational core; the `stick-spectra`
//! binary is a thin egui front-end on top of it.

pub mod data;
