//! Cube state assembly from scanned face records
//!
//! Face identity is never taken from scan order alone: each record's
//! center color decides which physical color plays which face role, since
//! centers cannot move under face turns. The derived mapping is kept as a
//! first-class value so callers can inspect or log it.

use std::collections::BTreeMap;

use tracing::debug;

use crate::color::CanonicalColor;
use crate::cube::state::{CubeState, FACELET_COUNT};
use crate::cube::Face;
use crate::error::{Result, ScanError};
use crate::scan::FaceRecord;

/// Bijection from scanned center colors to face letters.
///
/// Built at assembly time from the six records; a duplicate center means
/// a face was scanned twice or misidentified and fails construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterMapping {
    entries: BTreeMap<CanonicalColor, Face>,
}

impl CenterMapping {
    /// Derive the mapping from records taken in the guided scan order
    pub fn from_records(records: &[FaceRecord; 6]) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (record, face) in records.iter().zip(Face::SOLVER_ORDER) {
            let center = record.center();
            if entries.insert(center, face).is_some() {
                return Err(ScanError::Orientation { duplicate: center });
            }
        }
        debug!(?entries, "derived center color mapping");
        Ok(Self { entries })
    }

    /// Face letter for a color.
    ///
    /// Total: six records with distinct centers cover all six colors.
    pub fn face_for(&self, color: CanonicalColor) -> Face {
        self.entries[&color]
    }

    /// Iterate (color, face) pairs
    pub fn entries(&self) -> impl Iterator<Item = (CanonicalColor, Face)> + '_ {
        self.entries.iter().map(|(c, f)| (*c, *f))
    }
}

/// Result of assembling six face records
#[derive(Debug, Clone)]
pub struct Assembly {
    pub state: CubeState,
    pub mapping: CenterMapping,
}

/// Accumulates six face records into a validated-shape cube state.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeStateAssembler;

impl CubeStateAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble records scanned in the guided order (U R F D L B).
    ///
    /// Fails with an orientation error before any state is produced when
    /// two records share a center color. Letter substitution goes through
    /// the center-derived mapping, never a fixed color table, so cubes
    /// with non-standard sticker layouts still assemble correctly.
    pub fn assemble(&self, records: &[FaceRecord; 6]) -> Result<Assembly> {
        let mapping = CenterMapping::from_records(records)?;

        let mut facelets = [Face::U; FACELET_COUNT];
        for (block, record) in records.iter().enumerate() {
            for (cell, color) in record.cells().iter().enumerate() {
                facelets[block * 9 + cell] = mapping.face_for(*color);
            }
        }

        let state = CubeState::new(facelets);
        debug!(facelets = %state, "assembled cube state");
        Ok(Assembly { state, mapping })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_record(color: CanonicalColor) -> FaceRecord {
        FaceRecord::from_cells([color; 9])
    }

    fn solved_records() -> [FaceRecord; 6] {
        [
            uniform_record(CanonicalColor::White),
            uniform_record(CanonicalColor::Red),
            uniform_record(CanonicalColor::Green),
            uniform_record(CanonicalColor::Yellow),
            uniform_record(CanonicalColor::Orange),
            uniform_record(CanonicalColor::Blue),
        ]
    }

    #[test]
    fn solved_records_assemble_to_solved_state() {
        let assembly = CubeStateAssembler::new().assemble(&solved_records()).unwrap();
        assert!(assembly.state.is_solved());
        assert_eq!(
            assembly.mapping.face_for(CanonicalColor::White),
            Face::U
        );
        assert_eq!(assembly.mapping.face_for(CanonicalColor::Blue), Face::B);
    }

    #[test]
    fn duplicate_centers_fail_before_any_state_exists() {
        let mut records = solved_records();
        records[3] = uniform_record(CanonicalColor::White);
        match CubeStateAssembler::new().assemble(&records) {
            Err(ScanError::Orientation { duplicate }) => {
                assert_eq!(duplicate, CanonicalColor::White);
            }
            other => panic!("expected Orientation error, got {other:?}"),
        }
    }

    #[test]
    fn mapping_follows_centers_not_scan_position() {
        // Cube held in a non-standard orientation: green scanned first
        let mut records = solved_records();
        records.swap(0, 2);
        let assembly = CubeStateAssembler::new().assemble(&records).unwrap();
        assert_eq!(assembly.mapping.face_for(CanonicalColor::Green), Face::U);
        assert_eq!(assembly.mapping.face_for(CanonicalColor::White), Face::F);
        // Still a solved cube, just relabeled
        assert!(assembly.state.is_solved());
    }

    #[test]
    fn off_center_cells_follow_the_derived_mapping() {
        let mut records = solved_records();
        let mut cells = [CanonicalColor::White; 9];
        cells[0] = CanonicalColor::Blue;
        records[0] = FaceRecord::from_cells(cells);
        let mut back = [CanonicalColor::Blue; 9];
        back[8] = CanonicalColor::White;
        records[5] = FaceRecord::from_cells(back);

        let assembly = CubeStateAssembler::new().assemble(&records).unwrap();
        let facelets = assembly.state.as_facelets();
        assert_eq!(&facelets[0..1], "B");
        assert_eq!(&facelets[53..54], "U");
    }
}
