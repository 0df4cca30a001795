//! Classification constants and reference values for cube scanning
//!
//! Weighting and sampling constants were tuned against a reference
//! installation (consumer webcam, indoor lighting) and are overridable
//! through [`crate::config::ScanConfig`].

/// Distance metric weights for HSV color classification.
///
/// Hue dominates because saturation and value drift far more with lighting
/// than hue does for a given sticker color. The ratios also keep the two
/// closest canonical hues, red and orange, separable: their hue gap (~9
/// wrapped units on a 180-unit circle) outweighs typical saturation/value
/// noise at these weights.
pub mod weights {
    /// Weight applied to circular hue distance
    pub const HUE: f32 = 2.0;

    /// Weight applied to absolute saturation difference
    pub const SATURATION: f32 = 0.8;

    /// Weight applied to absolute value difference
    pub const VALUE: f32 = 0.3;
}

/// Face image sampling parameters
pub mod sampling {
    /// Cells per face edge (3x3 grid)
    pub const GRID_SIZE: u32 = 3;

    /// Fraction of each cell's edge covered by the sampling window.
    ///
    /// Sampling only a centered sub-window keeps sticker borders, grid
    /// overlay pixels and edge glare out of the per-cell average.
    pub const CELL_WINDOW_FRACTION: f32 = 0.4;
}

/// Factory calibration: reference HSV per canonical color.
///
/// Measured from a solved cube on the reference installation. These are a
/// fallback only; per-installation calibration supersedes them.
pub mod reference {
    pub const WHITE: [f32; 3] = [13.0, 11.0, 212.0];
    pub const YELLOW: [f32; 3] = [24.0, 255.0, 229.0];
    pub const RED: [f32; 3] = [178.0, 224.0, 211.0];
    pub const ORANGE: [f32; 3] = [7.0, 246.0, 227.0];
    pub const GREEN: [f32; 3] = [71.0, 242.0, 154.0];
    pub const BLUE: [f32; 3] = [110.0, 241.0, 183.0];
}

/// Facelet string of a solved cube in solver face order (U R F D L B)
pub const SOLVED_FACELETS: &str =
    "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Default calibration profile file name
pub const DEFAULT_PROFILE_FILE: &str = "color_calibration.json";
