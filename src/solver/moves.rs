//! Face-turn move vocabulary
//!
//! A move is a face letter optionally suffixed with `'` (counter-
//! clockwise) or `2` (half turn), the notation the external solver
//! emits.

use std::fmt;
use std::str::FromStr;

use crate::cube::Face;
use crate::error::ScanError;

/// Turn direction/amount for one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

/// A single face turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// Human-readable description for guiding the user
    pub fn description(&self) -> String {
        let direction = match self.turn {
            Turn::Clockwise => "clockwise",
            Turn::CounterClockwise => "counterclockwise",
            Turn::Half => "180 degrees",
        };
        format!("{} face {}", self.face.position_name(), direction)
    }
}

impl FromStr for Move {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| ScanError::Solver {
                message: format!("unparseable move '{s}'"),
            })?;
        let turn = match chars.next() {
            None => Turn::Clockwise,
            Some('\'') => Turn::CounterClockwise,
            Some('2') => Turn::Half,
            Some(_) => {
                return Err(ScanError::Solver {
                    message: format!("unparseable move '{s}'"),
                })
            }
        };
        if chars.next().is_some() {
            return Err(ScanError::Solver {
                message: format!("unparseable move '{s}'"),
            });
        }
        Ok(Move { face, turn })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Turn::Clockwise => write!(f, "{}", self.face),
            Turn::CounterClockwise => write!(f, "{}'", self.face),
            Turn::Half => write!(f, "{}2", self.face),
        }
    }
}

/// Aggregate statistics over a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionStats {
    pub total_moves: usize,
    pub quarter_turns: usize,
    pub half_turns: usize,
}

/// An ordered sequence of face turns returned by the solver
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated move string such as "R U R' U2"
    pub fn parse(s: &str) -> Result<Self, ScanError> {
        let moves = s
            .split_whitespace()
            .map(Move::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn stats(&self) -> SolutionStats {
        let half_turns = self
            .moves
            .iter()
            .filter(|m| m.turn == Turn::Half)
            .count();
        SolutionStats {
            total_moves: self.moves.len(),
            quarter_turns: self.moves.len() - half_turns,
            half_turns,
        }
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_turn_suffix() {
        assert_eq!(
            "R".parse::<Move>().unwrap(),
            Move {
                face: Face::R,
                turn: Turn::Clockwise
            }
        );
        assert_eq!(
            "U'".parse::<Move>().unwrap(),
            Move {
                face: Face::U,
                turn: Turn::CounterClockwise
            }
        );
        assert_eq!(
            "F2".parse::<Move>().unwrap(),
            Move {
                face: Face::F,
                turn: Turn::Half
            }
        );
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!("X".parse::<Move>().is_err());
        assert!("R3".parse::<Move>().is_err());
        assert!("R2'".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn sequence_round_trips_through_display() {
        let seq = MoveSequence::parse("R U R' U2 F' D2").unwrap();
        assert_eq!(seq.to_string(), "R U R' U2 F' D2");
        assert_eq!(MoveSequence::parse(&seq.to_string()).unwrap(), seq);
    }

    #[test]
    fn empty_string_parses_to_empty_sequence() {
        assert!(MoveSequence::parse("").unwrap().is_empty());
        assert!(MoveSequence::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn stats_split_quarter_and_half_turns() {
        let seq = MoveSequence::parse("R U2 F' B2 L").unwrap();
        let stats = seq.stats();
        assert_eq!(stats.total_moves, 5);
        assert_eq!(stats.quarter_turns, 3);
        assert_eq!(stats.half_turns, 2);
    }

    #[test]
    fn descriptions_name_face_and_direction() {
        let m: Move = "R'".parse().unwrap();
        assert_eq!(m.description(), "Right face counterclockwise");
        let m: Move = "D2".parse().unwrap();
        assert_eq!(m.description(), "Down face 180 degrees");
    }
}
