//! Configuration for the scanning and solving workflows
//!
//! All tunable parameters live here: classifier weights, cell sampling
//! geometry, the calibration profile location and the external solver
//! command. Configuration can be loaded from JSON or constructed
//! programmatically; the defaults mirror the reference installation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::ClassifierWeights;
use crate::constants::{sampling, weights, DEFAULT_PROFILE_FILE};

/// Complete configuration for a scan/solve session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Calibration profile file location
    pub profile_path: PathBuf,

    /// Face image sampling parameters
    pub sampling: SamplingConfig,

    /// Classifier distance weights
    pub weights: WeightsConfig,

    /// External solver invocation
    pub solver: SolverConfig,
}

/// Cell sampling geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fraction of each cell's edge covered by the sampling window
    pub cell_window_fraction: f32,
}

/// HSV distance weights, hue-dominant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsConfig {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl From<WeightsConfig> for ClassifierWeights {
    fn from(w: WeightsConfig) -> Self {
        ClassifierWeights {
            hue: w.hue,
            saturation: w.saturation,
            value: w.value,
        }
    }
}

/// External two-phase solver command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Executable to run; receives the facelet string as final argument
    pub program: String,

    /// Arguments placed before the facelet string
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from(DEFAULT_PROFILE_FILE),
            sampling: SamplingConfig {
                cell_window_fraction: sampling::CELL_WINDOW_FRACTION,
            },
            weights: WeightsConfig {
                hue: weights::HUE,
                saturation: weights::SATURATION,
                value: weights::VALUE,
            },
            solver: SolverConfig {
                program: "kociemba".to_string(),
                args: Vec::new(),
            },
        }
    }
}

impl ScanConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_match_constants() {
        let config = ScanConfig::default();
        assert_eq!(config.weights.hue, weights::HUE);
        assert_eq!(config.weights.saturation, weights::SATURATION);
        assert_eq!(config.weights.value, weights::VALUE);
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan_config.json");

        let config = ScanConfig::default();
        config.to_json_file(&path).unwrap();
        let loaded = ScanConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded.solver.program, config.solver.program);
        assert_eq!(
            loaded.sampling.cell_window_fraction,
            config.sampling.cell_window_fraction
        );
    }

    #[test]
    fn solver_args_default_to_empty() {
        let json = r#"{
            "profile_path": "color_calibration.json",
            "sampling": {"cell_window_fraction": 0.4},
            "weights": {"hue": 2.0, "saturation": 0.8, "value": 0.3},
            "solver": {"program": "kociemba"}
        }"#;
        let config: ScanConfig = serde_json::from_str(json).unwrap();
        assert!(config.solver.args.is_empty());
    }
}
