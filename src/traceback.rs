//! Traceback reconstruction of the optimal alignment.

use crate::matrix::{Direction, ScoreMatrix};
use crate::AlignerError;

/// Gap symbol emitted opposite an unpaired sequence symbol.
pub const GAP: u8 = b'-';
/// Marker emitted under a matching symbol pair.
pub const MATCH_MARKER: u8 = b'|';
/// Marker emitted under a mismatch or gap column.
pub const BLANK_MARKER: u8 = b' ';

/// Optimal global alignment reconstructed from the score matrix.
///
/// The three vectors always have equal length: `aligned_seq1` and
/// `aligned_seq2` hold sequence symbols or [`GAP`], `match_line` holds
/// [`MATCH_MARKER`] under matching columns and [`BLANK_MARKER`] elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub match_line: Vec<u8>,
}

impl AlignmentResult {
    /// Number of columns in the alignment.
    pub fn len(&self) -> usize {
        self.match_line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.match_line.is_empty()
    }
}

/// Follows the stored pointers backwards from the bottom-right cell, marking
/// visited cells and collecting one aligned symbol pair per step, then
/// reverses the collected columns into left-to-right order.
///
/// The walk stops as soon as either index reaches 0, not when both do:
/// forced gap moves along the boundary row or column are not emitted, so a
/// path that leaves the diagonal through the origin yields an alignment
/// shorter than the longer input.
pub(crate) fn reconstruct_alignment(
    matrix: &mut ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
) -> Result<AlignmentResult, AlignerError> {
    let mut i = seq1.len();
    let mut j = seq2.len();
    let score = matrix.get(i, j).value;

    let mut aligned_seq1 = Vec::new();
    let mut aligned_seq2 = Vec::new();
    let mut match_line = Vec::new();

    while i != 0 && j != 0 {
        let cell = matrix.get_mut(i, j);
        cell.on_optimal_path = true;

        match cell.pointer {
            Some(Direction::Diagonal) => {
                let (a, b) = (seq1[i - 1], seq2[j - 1]);
                aligned_seq1.push(a);
                aligned_seq2.push(b);
                match_line.push(if a == b { MATCH_MARKER } else { BLANK_MARKER });
                i -= 1;
                j -= 1;
            }
            Some(Direction::Up) => {
                aligned_seq1.push(seq1[i - 1]);
                aligned_seq2.push(GAP);
                match_line.push(BLANK_MARKER);
                i -= 1;
            }
            Some(Direction::Left) => {
                aligned_seq1.push(GAP);
                aligned_seq2.push(seq2[j - 1]);
                match_line.push(BLANK_MARKER);
                j -= 1;
            }
            // every interior cell is assigned a pointer during the fill pass
            None => return Err(AlignerError::InvalidPointer { i, j }),
        }
    }

    aligned_seq1.reverse();
    aligned_seq2.reverse();
    match_line.reverse();

    Ok(AlignmentResult {
        score,
        aligned_seq1,
        aligned_seq2,
        match_line,
    })
}
