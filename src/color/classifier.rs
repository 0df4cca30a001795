//! Distance-weighted nearest-color classification
//!
//! Maps a single HSV observation to the closest calibrated reference
//! color. The metric weights hue far above saturation and value, with the
//! circular hue term keeping red (which straddles the wrap boundary)
//! adjacent to orange rather than maximally distant.

use tracing::trace;

use crate::calibration::CalibrationProfile;
use crate::color::{CanonicalColor, Hsv};
use crate::constants::weights;

/// Channel weights for the HSV distance metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierWeights {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Default for ClassifierWeights {
    fn default() -> Self {
        Self {
            hue: weights::HUE,
            saturation: weights::SATURATION,
            value: weights::VALUE,
        }
    }
}

/// Calibrated nearest-color classifier.
///
/// Pure and stateless: the same sample and profile always produce the
/// same color. Classification is total; low-confidence matches still
/// return the nearest color rather than an error.
#[derive(Debug, Clone, Default)]
pub struct ColorClassifier {
    weights: ClassifierWeights,
}

impl ColorClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ClassifierWeights) -> Self {
        Self { weights }
    }

    /// Classify a sample against the profile's six references.
    ///
    /// Ties on distance resolve toward the reference whose hue is
    /// numerically closer without wraparound adjustment; a remaining tie
    /// falls back to [`CanonicalColor::ALL`] order. Iterating the
    /// references in priority order and replacing only on a strict
    /// improvement makes both tie-breaks fall out of the scan.
    pub fn classify(&self, sample: Hsv, profile: &CalibrationProfile) -> CanonicalColor {
        let mut best = CanonicalColor::ALL[0];
        let mut best_distance = f32::INFINITY;
        let mut best_raw_hue = f32::INFINITY;

        for color in CanonicalColor::ALL {
            let reference = profile.reference(color);
            let distance = self.distance(sample, reference);
            let raw_hue = Hsv::raw_hue_distance(sample.h, reference.h);
            trace!(color = color.name(), distance, "classifier candidate");

            if distance < best_distance
                || (distance == best_distance && raw_hue < best_raw_hue)
            {
                best = color;
                best_distance = distance;
                best_raw_hue = raw_hue;
            }
        }

        best
    }

    /// Weighted HSV distance with circular hue comparison
    pub fn distance(&self, a: Hsv, b: Hsv) -> f32 {
        Hsv::hue_distance(a.h, b.h) * self.weights.hue
            + (a.s - b.s).abs() * self.weights.saturation
            + (a.v - b.v).abs() * self.weights.value
    }
}
