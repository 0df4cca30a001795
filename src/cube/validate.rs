//! Group-theoretic preconditions on an assembled cube state
//!
//! Only the necessary, cheaply checkable invariants live here: facelet
//! counts and center distinctness. Full permutation/parity legality stays
//! with the external solver, which rejects unreachable states itself;
//! this gate exists so an obviously bad scan fails with an actionable
//! message instead of an opaque solver rejection.

use tracing::debug;

use crate::cube::state::{CubeState, FACE_BLOCK};
use crate::cube::Face;
use crate::error::{Result, ScanError};

/// Facelets each symbol must contribute to a real cube
const EXPECTED_PER_FACE: usize = FACE_BLOCK;

/// Validate an assembled state before it is handed to the solver.
///
/// Checks in order: every symbol appears exactly nine times (the error
/// names every offender with its count), then the six centers are
/// mutually distinct. The distinctness check is a defensive double-check;
/// assembly already rejects duplicate centers.
pub fn validate(state: &CubeState) -> Result<()> {
    let mut counts = [0usize; 6];
    for facelet in state.facelets() {
        counts[facelet.solver_index()] += 1;
    }

    let offenders: Vec<(Face, usize)> = Face::SOLVER_ORDER
        .into_iter()
        .map(|face| (face, counts[face.solver_index()]))
        .filter(|(_, n)| *n != EXPECTED_PER_FACE)
        .collect();
    if !offenders.is_empty() {
        return Err(ScanError::ColorCount { counts: offenders });
    }

    let centers = state.centers();
    for (i, center) in centers.iter().enumerate() {
        if centers[..i].contains(center) {
            return Err(ScanError::CenterConflict { duplicate: *center });
        }
    }

    debug!(facelets = %state, "cube state passed validation");
    Ok(())
}
