//! Guided six-face scan sequence
//!
//! The order matches the solver's face order so a cube held as directed
//! lands each scan on the face the assembler expects. Face identity is
//! still derived from centers at assembly time; the expected colors here
//! only drive user guidance and calibration attribution.

use crate::color::CanonicalColor;
use crate::cube::Face;

/// One step of the guided scan sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGuide {
    /// Face this step scans when the cube is held as instructed
    pub face: Face,
    /// Sticker color on this face of a standard solved cube
    pub solved_color: CanonicalColor,
    /// How to bring the face in front of the camera
    pub instruction: &'static str,
}

/// The six scan steps, starting from white on top with green facing the
/// user.
pub const SCAN_SEQUENCE: [FaceGuide; 6] = [
    FaceGuide {
        face: Face::U,
        solved_color: CanonicalColor::White,
        instruction: "Hold the cube with white on top and green facing you; show the white face to the camera.",
    },
    FaceGuide {
        face: Face::R,
        solved_color: CanonicalColor::Red,
        instruction: "Keep white on top and rotate the cube left 90 degrees; show the red face.",
    },
    FaceGuide {
        face: Face::F,
        solved_color: CanonicalColor::Green,
        instruction: "Keep white on top and rotate left 90 degrees again; show the green face.",
    },
    FaceGuide {
        face: Face::D,
        solved_color: CanonicalColor::Yellow,
        instruction: "Flip the cube upside down, keeping green toward you; show the yellow face.",
    },
    FaceGuide {
        face: Face::L,
        solved_color: CanonicalColor::Orange,
        instruction: "Keep yellow on top and rotate the cube right 90 degrees; show the orange face.",
    },
    FaceGuide {
        face: Face::B,
        solved_color: CanonicalColor::Blue,
        instruction: "Keep yellow on top and rotate right 90 degrees again; show the blue face.",
    },
];
