//! Needleman-Wunsch global pairwise sequence alignment.
//!
//! Builds the full score matrix for two byte sequences under a linear gap
//! model, then reconstructs one optimal global alignment by following the
//! stored direction pointers backwards from the bottom-right cell. Created
//! for educational use: sequences are expected to be small, and the O(n*m)
//! time and space of the textbook algorithm is intentional.
//!
//! When several directions tie for a cell's maximum, the recorded pointer is
//! chosen with fixed priority Up > Left > Diagonal, which pins down exactly
//! which of the equally optimal alignments is reconstructed.
//!
//! # Example
//!
//! ```
//! use nw_aligner::{GlobalAligner, ScoreParams};
//!
//! let aligner = GlobalAligner::new(ScoreParams::new(1, 0, -1));
//! let (matrix, alignment) = aligner.align(b"ACAGTCGAACG", b"ACCGTCCG")?;
//!
//! assert_eq!(alignment.score, 4);
//! assert_eq!(matrix.get(11, 8).value, 4);
//! assert_eq!(alignment.aligned_seq2, b"ACCGTC---CG");
//! # Ok::<(), nw_aligner::AlignerError>(())
//! ```

use log::debug;
use thiserror::Error;

pub mod config;
pub mod matrix;
pub mod render;
pub mod scoring;
pub mod traceback;

pub use matrix::{Cell, Direction, ScoreMatrix};
pub use scoring::ScoreParams;
pub use traceback::AlignmentResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignerError {
    /// An interior cell was reached during traceback without a recorded
    /// direction. The fill pass assigns every interior cell a pointer, so
    /// this is an internal-consistency violation, never a user-input error.
    #[error("no traceback pointer at cell ({i}, {j})")]
    InvalidPointer { i: usize, j: usize },
}

/// Needleman-Wunsch aligner for a fixed set of scoring parameters.
///
/// Holds no other state: every [`align`](Self::align) call allocates its own
/// matrix and result, so one aligner can be shared and reused freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalAligner {
    params: ScoreParams,
}

impl GlobalAligner {
    pub fn new(params: ScoreParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> ScoreParams {
        self.params
    }

    /// Computes the score matrix and one optimal global alignment.
    ///
    /// Empty sequences are valid; the matrix then consists of the boundary
    /// row/column only and the alignment is empty.
    pub fn align(
        &self,
        seq1: &[u8],
        seq2: &[u8],
    ) -> Result<(ScoreMatrix, AlignmentResult), AlignerError> {
        let mut matrix = ScoreMatrix::new(seq1.len(), seq2.len(), self.params.gap_penalty);

        for i in 1..=seq1.len() {
            for j in 1..=seq2.len() {
                let diag = matrix.get(i - 1, j - 1).value
                    + self.params.substitution(seq1[i - 1], seq2[j - 1]);
                let up = matrix.get(i - 1, j).value + self.params.gap_penalty;
                let left = matrix.get(i, j - 1).value + self.params.gap_penalty;

                let value = diag.max(up).max(left);
                // tie-break priority: Up beats Left beats Diagonal
                let pointer = if value == up {
                    Direction::Up
                } else if value == left {
                    Direction::Left
                } else {
                    Direction::Diagonal
                };

                let cell = matrix.get_mut(i, j);
                cell.value = value;
                cell.pointer = Some(pointer);
            }
        }

        let result = traceback::reconstruct_alignment(&mut matrix, seq1, seq2)?;
        debug!(
            "aligned {}x{} symbols, score {}, {} alignment columns",
            seq1.len(),
            seq2.len(),
            result.score,
            result.len()
        );

        Ok((matrix, result))
    }
}
