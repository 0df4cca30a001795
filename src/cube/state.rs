//! The 54-facelet cube state

use std::fmt;

use crate::constants::SOLVED_FACELETS;
use crate::cube::Face;
use crate::error::{Result, ScanError};

/// Facelets on a 3x3x3 cube
pub const FACELET_COUNT: usize = 54;

/// Facelets per face
pub const FACE_BLOCK: usize = 9;

/// Index of the center cell within a face block
pub const CENTER_INDEX: usize = 4;

/// A complete cube state: 54 face symbols in solver order (U R F D L B),
/// each face read row-major, top-left to bottom-right.
///
/// The fixed-size array makes the length-54 invariant structural; parsing
/// is the only place a length check can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    facelets: [Face; FACELET_COUNT],
}

impl CubeState {
    pub fn new(facelets: [Face; FACELET_COUNT]) -> Self {
        Self { facelets }
    }

    /// Parse a 54-character facelet string in solver order
    pub fn from_facelets(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != FACELET_COUNT {
            return Err(ScanError::FaceletLength {
                actual: chars.len(),
            });
        }
        let mut facelets = [Face::U; FACELET_COUNT];
        for (index, symbol) in chars.into_iter().enumerate() {
            facelets[index] = Face::from_letter(symbol)
                .ok_or(ScanError::InvalidFacelet { index, symbol })?;
        }
        Ok(Self { facelets })
    }

    /// Canonical facelet string accepted by the external solver
    pub fn as_facelets(&self) -> String {
        self.facelets.iter().map(Face::letter).collect()
    }

    pub fn facelets(&self) -> &[Face; FACELET_COUNT] {
        &self.facelets
    }

    /// The six center facelets, one per face block in solver order
    pub fn centers(&self) -> [Face; 6] {
        let mut centers = [Face::U; 6];
        for (i, center) in centers.iter_mut().enumerate() {
            *center = self.facelets[i * FACE_BLOCK + CENTER_INDEX];
        }
        centers
    }

    /// Whether every facelet already matches its face block
    pub fn is_solved(&self) -> bool {
        self.as_facelets() == SOLVED_FACELETS
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_facelets())
    }
}
