//! # Scan Cube
//!
//! A Rust crate for identifying the scrambled state of a 3x3x3 Rubik's
//! cube from camera images and producing a solving move sequence.
//!
//! The hard part is perception, not solving: noisy per-pixel samples
//! from an uncalibrated camera become a validated 54-facelet string by
//! - calibrating reference colors once per lighting environment from a
//!   known solved cube
//! - classifying cell samples with a hue-dominant, wraparound-aware
//!   distance metric
//! - deriving face identity from center facelets at assembly time
//! - enforcing facelet-count and center-distinctness invariants before
//!   the state ever reaches the external two-phase solver
//!
//! The stages are pure and connected by explicit results: scan faces,
//! assemble, validate, solve. Each stage's failure is a distinct
//! [`ScanError`] the caller inspects before proceeding.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scan_cube::{solve_scan, CalibrationProfile, CommandSolver};
//! use std::path::Path;
//!
//! let profile = CalibrationProfile::load(Path::new("color_calibration.json"))?;
//! let faces: [image::RgbImage; 6] = todo!("six face images in scan order");
//! let solver = CommandSolver::new("kociemba", vec![]);
//! let solution = solve_scan(&faces, &profile, &solver)?;
//! println!("{}", solution.moves);
//! # Ok::<(), scan_cube::ScanError>(())
//! ```

use image::RgbImage;
use tracing::debug;

pub mod calibration;
pub mod capture;
pub mod color;
pub mod config;
pub mod constants;
pub mod cube;
pub mod error;
pub mod scan;
pub mod solver;

pub use calibration::CalibrationProfile;
pub use capture::{FrameSource, ImageFileSource};
pub use color::{CanonicalColor, ClassifierWeights, ColorClassifier, Hsv};
pub use config::ScanConfig;
pub use cube::{Assembly, CenterMapping, CubeState, CubeStateAssembler, Face};
pub use error::{Result, ScanError};
pub use scan::{FaceGuide, FaceRecord, FaceScanner, SCAN_SEQUENCE};
pub use solver::{CommandSolver, Move, MoveSequence, SolverAdapter, TwoPhaseSolver};

use std::collections::BTreeMap;

/// A completed solve: the accepted state, the center-derived color
/// mapping it was built with, and the solver's move sequence.
#[derive(Debug, Clone)]
pub struct Solution {
    pub state: CubeState,
    pub mapping: CenterMapping,
    pub moves: MoveSequence,
}

/// Scan six face images (in guided scan order) into face records.
pub fn scan_faces(
    images: &[RgbImage; 6],
    profile: &CalibrationProfile,
) -> Result<[FaceRecord; 6]> {
    let scanner = FaceScanner::new(profile);
    let mut records = [FaceRecord::from_cells([CanonicalColor::White; 9]); 6];
    for (i, image) in images.iter().enumerate() {
        records[i] = scanner.scan(image)?;
    }
    Ok(records)
}

/// Run the full pipeline: scan, assemble, validate, solve.
pub fn solve_scan(
    images: &[RgbImage; 6],
    profile: &CalibrationProfile,
    solver: &dyn TwoPhaseSolver,
) -> Result<Solution> {
    let records = scan_faces(images, profile)?;
    let Assembly { state, mapping } = CubeStateAssembler::new().assemble(&records)?;
    cube::validate(&state)?;

    let adapter = SolverAdapter::new(solver);
    let moves = adapter.solve(&state)?;
    debug!(moves = %moves, "solve complete");
    Ok(Solution {
        state,
        mapping,
        moves,
    })
}

/// Build a calibration profile from six face images of a known solved
/// cube, taken in guided scan order.
///
/// Every cell of a face samples the face's known color, so each color
/// gets nine observations to average.
pub fn calibrate_from_faces(images: &[RgbImage; 6]) -> Result<CalibrationProfile> {
    let mut samples: BTreeMap<CanonicalColor, Vec<Hsv>> = BTreeMap::new();
    for (image, guide) in images.iter().zip(SCAN_SEQUENCE) {
        let grid = scan::sample_grid(image, constants::sampling::CELL_WINDOW_FRACTION)?;
        samples
            .entry(guide.solved_color)
            .or_default()
            .extend(grid);
    }
    CalibrationProfile::calibrate(&samples)
}
