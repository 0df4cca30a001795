//! HSV color observations with circular hue arithmetic
//!
//! Hue lives on a 180-unit circle (the webcam convention for 8-bit HSV),
//! saturation and value on [0, 255]. All distance and averaging math must
//! respect the hue wrap: red sits at both ends of the scale.

use palette::{FromColor, Hsv as PaletteHsv, Srgb};
use serde::{Deserialize, Serialize};

/// Hue circle length; hues wrap modulo this value
pub const HUE_WRAP: f32 = 180.0;

/// A single HSV color observation from one facelet cell.
///
/// Persisted as a `[h, s, v]` triple in calibration profiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Hsv {
    /// Hue in [0, 180), circular
    pub h: f32,
    /// Saturation in [0, 255]
    pub s: f32,
    /// Value in [0, 255]
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert an 8-bit RGB pixel to HSV.
    ///
    /// Uses `palette` for the sRGB cylinder math, then rescales from
    /// degrees/unit ranges to the 180/255 convention.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let srgb = Srgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        );
        let hsv = PaletteHsv::from_color(srgb);
        Self {
            h: hsv.hue.into_positive_degrees() / 2.0,
            s: hsv.saturation * 255.0,
            v: hsv.value * 255.0,
        }
    }

    /// Circular distance between two hues: `min(|d|, 180 - |d|)`.
    ///
    /// Without the wrap term, hues 1 and 179 would read as maximally
    /// distant when they are 2 apart on the circle.
    pub fn hue_distance(h1: f32, h2: f32) -> f32 {
        let d = (h1 - h2).abs();
        d.min(HUE_WRAP - d)
    }

    /// Hue difference without wraparound adjustment
    pub fn raw_hue_distance(h1: f32, h2: f32) -> f32 {
        (h1 - h2).abs()
    }

    /// Circular mean of a set of hues.
    ///
    /// Each hue maps to a unit vector on the hue circle; the vectors are
    /// averaged and converted back. {178, 2} averages to ~0, not ~90.
    /// Returns 0.0 for an empty set (degenerate, callers guard against it).
    pub fn circular_hue_mean(hues: &[f32]) -> f32 {
        if hues.is_empty() {
            return 0.0;
        }
        let scale = std::f32::consts::TAU / HUE_WRAP;
        let (sin_sum, cos_sum) = hues.iter().fold((0.0f32, 0.0f32), |(s, c), h| {
            let angle = h * scale;
            (s + angle.sin(), c + angle.cos())
        });
        let mean = sin_sum.atan2(cos_sum) / scale;
        mean.rem_euclid(HUE_WRAP)
    }
}

impl From<[f32; 3]> for Hsv {
    fn from([h, s, v]: [f32; 3]) -> Self {
        Self { h, s, v }
    }
}

impl From<Hsv> for [f32; 3] {
    fn from(hsv: Hsv) -> Self {
        [hsv.h, hsv.s, hsv.v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_distance_wraps_at_boundary() {
        assert_eq!(Hsv::hue_distance(1.0, 179.0), 2.0);
        assert_eq!(Hsv::hue_distance(179.0, 1.0), 2.0);
        assert_eq!(Hsv::hue_distance(0.0, 90.0), 90.0);
        assert_eq!(Hsv::hue_distance(45.0, 45.0), 0.0);
    }

    #[test]
    fn hue_distance_never_exceeds_half_circle() {
        for h1 in 0..180 {
            for h2 in 0..180 {
                let d = Hsv::hue_distance(h1 as f32, h2 as f32);
                assert!(d <= 90.0, "d({h1},{h2}) = {d}");
            }
        }
    }

    #[test]
    fn circular_mean_lands_on_wrap_boundary() {
        let mean = Hsv::circular_hue_mean(&[178.0, 2.0]);
        // Near 0 (equivalently 180), nowhere near the arithmetic mean of 90
        assert!(
            mean < 1.0 || mean > 179.0,
            "expected mean near boundary, got {mean}"
        );
    }

    #[test]
    fn circular_mean_matches_arithmetic_mean_away_from_wrap() {
        let mean = Hsv::circular_hue_mean(&[60.0, 70.0, 80.0]);
        assert!((mean - 70.0).abs() < 0.01);
    }

    #[test]
    fn from_rgb_primary_colors() {
        let red = Hsv::from_rgb(255, 0, 0);
        assert!(red.h < 0.5);
        assert!((red.s - 255.0).abs() < 0.5);
        assert!((red.v - 255.0).abs() < 0.5);

        let green = Hsv::from_rgb(0, 255, 0);
        assert!((green.h - 60.0).abs() < 0.5);

        let blue = Hsv::from_rgb(0, 0, 255);
        assert!((blue.h - 120.0).abs() < 0.5);
    }

    #[test]
    fn from_rgb_white_is_desaturated() {
        let white = Hsv::from_rgb(255, 255, 255);
        assert!(white.s < 0.5);
        assert!((white.v - 255.0).abs() < 0.5);
    }

    #[test]
    fn serde_round_trips_as_triple() {
        let hsv = Hsv::new(24.0, 255.0, 229.0);
        let json = serde_json::to_string(&hsv).unwrap();
        assert_eq!(json, "[24.0,255.0,229.0]");
        let back: Hsv = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hsv);
    }
}
