//! Color representation and classification module
//!
//! This module defines the HSV observation type, the six canonical cube
//! colors, and the calibrated nearest-color classifier.

pub mod classifier;
pub mod hsv;

pub use classifier::{ClassifierWeights, ColorClassifier};
pub use hsv::Hsv;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six canonical Rubik's cube sticker colors.
///
/// Declaration order doubles as the fixed classification tie-break
/// priority: when two references are exactly equidistant from a sample
/// (after the raw-hue tie-break), the earlier variant wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalColor {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl CanonicalColor {
    /// All canonical colors in tie-break priority order
    pub const ALL: [CanonicalColor; 6] = [
        CanonicalColor::White,
        CanonicalColor::Yellow,
        CanonicalColor::Red,
        CanonicalColor::Orange,
        CanonicalColor::Green,
        CanonicalColor::Blue,
    ];

    /// Lowercase color name, matching the persisted profile keys
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalColor::White => "white",
            CanonicalColor::Yellow => "yellow",
            CanonicalColor::Red => "red",
            CanonicalColor::Orange => "orange",
            CanonicalColor::Green => "green",
            CanonicalColor::Blue => "blue",
        }
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
