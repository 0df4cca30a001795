//! Color calibration module
//!
//! Builds and persists the per-installation mapping from canonical cube
//! colors to reference HSV values, learned from a known solved cube.

pub mod profile;

pub use profile::CalibrationProfile;
