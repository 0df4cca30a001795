//! Face scanning module
//!
//! Reduces a captured face image to nine classified colors and defines
//! the guided six-face scan sequence the CLI walks the user through.

pub mod face;
pub mod sequence;

pub use face::{sample_grid, FaceRecord, FaceScanner};
pub use sequence::{FaceGuide, SCAN_SEQUENCE};
