//! Calibration profile construction and persistence
//!
//! A profile maps each of the six canonical colors to one reference HSV
//! value for the current lighting environment. It is built once per
//! installation from a solved cube, persisted as JSON, and treated as an
//! immutable value afterwards; a new calibration run overwrites the file
//! wholesale.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::color::{CanonicalColor, Hsv};
use crate::constants::reference;
use crate::error::{Result, ScanError};

/// Reference HSV value per canonical color, exactly six entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationProfile {
    references: BTreeMap<CanonicalColor, Hsv>,
}

impl CalibrationProfile {
    /// Build a profile from reference samples grouped by color.
    ///
    /// Every canonical color needs at least one sample. Multi-sample
    /// colors average per channel, with the hue averaged circularly so
    /// red samples straddling the wrap boundary do not collapse toward
    /// the middle of the hue scale.
    pub fn calibrate(samples: &BTreeMap<CanonicalColor, Vec<Hsv>>) -> Result<Self> {
        let missing: Vec<CanonicalColor> = CanonicalColor::ALL
            .into_iter()
            .filter(|color| samples.get(color).map_or(true, |s| s.is_empty()))
            .collect();
        if !missing.is_empty() {
            return Err(ScanError::IncompleteCalibration { missing });
        }

        let mut references = BTreeMap::new();
        for color in CanonicalColor::ALL {
            let observed = &samples[&color];
            let n = observed.len() as f32;
            let hues: Vec<f32> = observed.iter().map(|s| s.h).collect();
            let reference = Hsv {
                h: Hsv::circular_hue_mean(&hues),
                s: observed.iter().map(|s| s.s).sum::<f32>() / n,
                v: observed.iter().map(|s| s.v).sum::<f32>() / n,
            };
            debug!(
                color = color.name(),
                samples = observed.len(),
                h = reference.h,
                s = reference.s,
                v = reference.v,
                "learned reference color"
            );
            references.insert(color, reference);
        }

        Ok(Self { references })
    }

    /// Build a profile directly from one reference value per color
    pub fn from_references(entries: [(CanonicalColor, Hsv); 6]) -> Self {
        Self {
            references: entries.into_iter().collect(),
        }
    }

    /// Factory calibration measured on the reference installation
    pub fn factory_default() -> Self {
        Self::from_references([
            (CanonicalColor::White, reference::WHITE.into()),
            (CanonicalColor::Yellow, reference::YELLOW.into()),
            (CanonicalColor::Red, reference::RED.into()),
            (CanonicalColor::Orange, reference::ORANGE.into()),
            (CanonicalColor::Green, reference::GREEN.into()),
            (CanonicalColor::Blue, reference::BLUE.into()),
        ])
    }

    /// Reference HSV for a canonical color.
    ///
    /// Total: construction guarantees all six entries exist.
    pub fn reference(&self, color: CanonicalColor) -> Hsv {
        self.references[&color]
    }

    /// Iterate over (color, reference) entries in priority order
    pub fn entries(&self) -> impl Iterator<Item = (CanonicalColor, Hsv)> + '_ {
        self.references.iter().map(|(c, h)| (*c, *h))
    }

    /// Write the profile to disk as JSON, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.references)
            .map_err(|e| ScanError::profile_io("serialize profile", e))?;
        fs::write(path, json)
            .map_err(|e| ScanError::profile_io(format!("write {}", path.display()), e))?;
        debug!(path = %path.display(), "saved calibration profile");
        Ok(())
    }

    /// Load a previously saved profile
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ScanError::profile_io(format!("read {}", path.display()), e))?;
        let references: BTreeMap<CanonicalColor, Hsv> = serde_json::from_str(&json)
            .map_err(|e| ScanError::profile_io("parse profile", e))?;
        if references.len() != CanonicalColor::ALL.len() {
            return Err(ScanError::InvalidProfile {
                message: format!("expected 6 reference colors, found {}", references.len()),
            });
        }
        Ok(Self { references })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_sample_per_color() -> BTreeMap<CanonicalColor, Vec<Hsv>> {
        CanonicalColor::ALL
            .into_iter()
            .enumerate()
            .map(|(i, color)| (color, vec![Hsv::new(i as f32 * 20.0, 200.0, 200.0)]))
            .collect()
    }

    #[test]
    fn calibrate_with_all_colors_succeeds() {
        let profile = CalibrationProfile::calibrate(&one_sample_per_color()).unwrap();
        assert_eq!(profile.entries().count(), 6);
        assert_eq!(
            profile.reference(CanonicalColor::White),
            Hsv::new(0.0, 200.0, 200.0)
        );
    }

    #[test]
    fn calibrate_with_missing_color_fails() {
        let mut samples = one_sample_per_color();
        samples.remove(&CanonicalColor::Blue);
        let err = CalibrationProfile::calibrate(&samples).unwrap_err();
        match err {
            ScanError::IncompleteCalibration { missing } => {
                assert_eq!(missing, vec![CanonicalColor::Blue]);
            }
            other => panic!("expected IncompleteCalibration, got {other:?}"),
        }
    }

    #[test]
    fn calibrate_with_empty_sample_list_fails() {
        let mut samples = one_sample_per_color();
        samples.insert(CanonicalColor::Red, Vec::new());
        assert!(matches!(
            CalibrationProfile::calibrate(&samples),
            Err(ScanError::IncompleteCalibration { .. })
        ));
    }

    #[test]
    fn calibrate_averages_hue_circularly() {
        let mut samples = one_sample_per_color();
        samples.insert(
            CanonicalColor::Red,
            vec![Hsv::new(178.0, 250.0, 250.0), Hsv::new(2.0, 250.0, 250.0)],
        );
        let profile = CalibrationProfile::calibrate(&samples).unwrap();
        let red = profile.reference(CanonicalColor::Red);
        assert!(
            red.h < 1.0 || red.h > 179.0,
            "expected hue near wrap boundary, got {}",
            red.h
        );
        assert_eq!(red.s, 250.0);
        assert_eq!(red.v, 250.0);
    }

    #[test]
    fn calibrate_averages_saturation_and_value_arithmetically() {
        let mut samples = one_sample_per_color();
        samples.insert(
            CanonicalColor::Green,
            vec![Hsv::new(60.0, 100.0, 120.0), Hsv::new(64.0, 200.0, 180.0)],
        );
        let profile = CalibrationProfile::calibrate(&samples).unwrap();
        let green = profile.reference(CanonicalColor::Green);
        assert!((green.h - 62.0).abs() < 0.01);
        assert_eq!(green.s, 150.0);
        assert_eq!(green.v, 150.0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color_calibration.json");

        let profile = CalibrationProfile::factory_default();
        profile.save(&path).unwrap();
        let loaded = CalibrationProfile::load(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn save_overwrites_previous_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color_calibration.json");

        CalibrationProfile::factory_default().save(&path).unwrap();
        let recalibrated = CalibrationProfile::calibrate(&one_sample_per_color()).unwrap();
        recalibrated.save(&path).unwrap();

        assert_eq!(CalibrationProfile::load(&path).unwrap(), recalibrated);
    }

    #[test]
    fn load_rejects_truncated_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color_calibration.json");
        fs::write(&path, r#"{"white": [0.0, 0.0, 255.0]}"#).unwrap();

        assert!(matches!(
            CalibrationProfile::load(&path),
            Err(ScanError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn load_missing_file_is_a_profile_error() {
        assert!(matches!(
            CalibrationProfile::load(Path::new("does_not_exist.json")),
            Err(ScanError::ProfileIo { .. })
        ));
    }
}
