//! Error types for the scan_cube library

use thiserror::Error;

use crate::color::CanonicalColor;
use crate::cube::Face;

/// Result type alias for scan_cube operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors raised by the scanning, calibration, assembly and solving stages
#[derive(Error, Debug)]
pub enum ScanError {
    /// Frame or face image could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Frame too small to partition into a 3x3 sampling grid
    #[error("Frame too small to sample: {width}x{height}")]
    InvalidFrame { width: u32, height: u32 },

    /// Calibration input is missing samples for one or more colors
    #[error("Incomplete calibration, no samples for: {}", join_colors(.missing))]
    IncompleteCalibration { missing: Vec<CanonicalColor> },

    /// Calibration profile could not be read or written
    #[error("Calibration profile error: {message}")]
    ProfileIo {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Persisted calibration profile has the wrong shape
    #[error("Invalid calibration profile: {message}")]
    InvalidProfile { message: String },

    /// Two scanned faces report the same center color
    #[error("Duplicate center color '{duplicate}' across scanned faces")]
    Orientation { duplicate: CanonicalColor },

    /// Facelet string contains a symbol outside U/R/F/D/L/B
    #[error("Invalid facelet '{symbol}' at position {index}")]
    InvalidFacelet { index: usize, symbol: char },

    /// Facelet string is not exactly 54 symbols
    #[error("Facelet string has length {actual}, expected 54")]
    FaceletLength { actual: usize },

    /// Facelet color counts inconsistent with a real cube
    #[error("Facelet counts are off: {}", join_counts(.counts))]
    ColorCount { counts: Vec<(Face, usize)> },

    /// Center facelets are not mutually distinct
    #[error("Center facelet '{duplicate}' appears on more than one face")]
    CenterConflict { duplicate: Face },

    /// The external two-phase solver rejected the state or failed internally
    #[error("Solver failed: {message}")]
    Solver { message: String },
}

fn join_colors(colors: &[CanonicalColor]) -> String {
    colors
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_counts(counts: &[(Face, usize)]) -> String {
    counts
        .iter()
        .map(|(face, n)| format!("{face}={n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ScanError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a profile I/O error with context
    pub fn profile_io<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ProfileIo {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ScanError::ImageLoad { .. } => {
                "Could not load the face image. Check the file path and format.".to_string()
            }
            ScanError::InvalidFrame { .. } => {
                "The captured frame is too small. Move the cube closer to the camera.".to_string()
            }
            ScanError::IncompleteCalibration { missing } => {
                format!(
                    "Calibration is missing samples for {}. Re-scan the solved cube with every face visible.",
                    join_colors(missing)
                )
            }
            ScanError::ProfileIo { .. } | ScanError::InvalidProfile { .. } => {
                "The calibration profile could not be used. Run calibration again.".to_string()
            }
            ScanError::Orientation { duplicate } => {
                format!(
                    "Two faces were scanned with a {} center. A face was likely captured twice; re-scan in the guided order.",
                    duplicate.name()
                )
            }
            ScanError::ColorCount { counts } => {
                format!(
                    "Color counts do not match a real cube ({}). Re-scan under steadier lighting or re-calibrate.",
                    join_counts(counts)
                )
            }
            ScanError::CenterConflict { .. } => {
                "Center facelets conflict. Re-scan the cube in the guided order.".to_string()
            }
            ScanError::Solver { .. } => {
                "The solver rejected this cube state. At least one facelet was likely misread; re-scan the cube.".to_string()
            }
            ScanError::InvalidFacelet { .. } | ScanError::FaceletLength { .. } => {
                "The cube state string is malformed.".to_string()
            }
        }
    }
}
