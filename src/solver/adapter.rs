//! Adapter over the external two-phase solver
//!
//! Solving is deterministic for a given input, so a rejected state is
//! never retried here: the fix is always a re-scan, and that decision
//! belongs to the caller.

use std::process::Command;

use tracing::debug;

use crate::cube::CubeState;
use crate::error::{Result, ScanError};
use crate::solver::moves::MoveSequence;

/// The external two-phase solving routine.
///
/// Takes the canonical 54-character facelet string and returns a
/// whitespace-separated move string (empty for an already-solved cube)
/// or a failure message for malformed or unsolvable input.
pub trait TwoPhaseSolver {
    fn solve_facelets(&self, facelets: &str) -> std::result::Result<String, String>;
}

impl<T: TwoPhaseSolver + ?Sized> TwoPhaseSolver for &T {
    fn solve_facelets(&self, facelets: &str) -> std::result::Result<String, String> {
        (**self).solve_facelets(facelets)
    }
}

/// Translates collaborator output and failures into this crate's types.
#[derive(Debug, Clone)]
pub struct SolverAdapter<S> {
    inner: S,
}

impl<S: TwoPhaseSolver> SolverAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Solve a validated cube state.
    ///
    /// Delegates exactly once; any failure signal comes back as
    /// [`ScanError::Solver`] carrying the collaborator's message.
    pub fn solve(&self, state: &CubeState) -> Result<MoveSequence> {
        let facelets = state.as_facelets();
        debug!(%facelets, "delegating to two-phase solver");
        let moves = self
            .inner
            .solve_facelets(&facelets)
            .map_err(|message| ScanError::Solver { message })?;
        MoveSequence::parse(&moves)
    }
}

/// [`TwoPhaseSolver`] backed by an external executable.
///
/// The facelet string is appended as the final argument; the move
/// sequence is read from stdout. A non-zero exit reports stderr as the
/// failure message.
#[derive(Debug, Clone)]
pub struct CommandSolver {
    program: String,
    args: Vec<String>,
}

impl CommandSolver {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl TwoPhaseSolver for CommandSolver {
    fn solve_facelets(&self, facelets: &str) -> std::result::Result<String, String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(facelets)
            .output()
            .map_err(|e| format!("failed to run '{}': {e}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
