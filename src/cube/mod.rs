//! Cube state representation, assembly and validation
//!
//! Accumulates scanned face records into the canonical 54-facelet state,
//! derives face identity from center colors, and enforces the cheap
//! group-theoretic preconditions before the state reaches the solver.

pub mod assemble;
pub mod state;
pub mod validate;

pub use assemble::{Assembly, CenterMapping, CubeStateAssembler};
pub use state::{CubeState, FACELET_COUNT};
pub use validate::validate;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six cube faces in solver notation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// Faces in the order the external solver expects facelet blocks:
    /// Up, Right, Front, Down, Left, Back. The guided scan sequence uses
    /// the same order.
    pub const SOLVER_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Single-letter solver notation
    pub fn letter(&self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Physical position of the face when held in scan orientation
    pub fn position_name(&self) -> &'static str {
        match self {
            Face::U => "Up",
            Face::R => "Right",
            Face::F => "Front",
            Face::D => "Down",
            Face::L => "Left",
            Face::B => "Back",
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Index of this face's block in the solver facelet order
    pub fn solver_index(&self) -> usize {
        match self {
            Face::U => 0,
            Face::R => 1,
            Face::F => 2,
            Face::D => 3,
            Face::L => 4,
            Face::B => 5,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for face in Face::SOLVER_ORDER {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn solver_index_matches_order() {
        assert_eq!(Face::U.solver_index(), 0);
        assert_eq!(Face::B.solver_index(), 5);
    }
}
