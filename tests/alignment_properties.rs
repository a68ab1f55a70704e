//! Property tests for the alignment engine.

use nw_aligner::{GlobalAligner, ScoreParams};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = ScoreParams> {
    (-5i32..=5, -5i32..=5, -5i32..=5)
        .prop_map(|(m, x, g)| ScoreParams::new(m, x, g))
}

fn seq_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(proptest::sample::select(b"ACGT".to_vec()), 0..12)
}

proptest! {
    #[test]
    fn alignment_is_deterministic(
        params in params_strategy(),
        seq1 in seq_strategy(),
        seq2 in seq_strategy(),
    ) {
        let aligner = GlobalAligner::new(params);
        let first = aligner.align(&seq1, &seq2).unwrap();
        let second = aligner.align(&seq1, &seq2).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn boundary_invariants_hold(
        params in params_strategy(),
        seq1 in seq_strategy(),
        seq2 in seq_strategy(),
    ) {
        let aligner = GlobalAligner::new(params);
        let (matrix, _) = aligner.align(&seq1, &seq2).unwrap();

        prop_assert_eq!(matrix.rows(), seq1.len() + 1);
        prop_assert_eq!(matrix.cols(), seq2.len() + 1);
        prop_assert_eq!(matrix.get(0, 0).value, 0);
        prop_assert_eq!(matrix.get(0, 0).pointer, None);
        for i in 1..matrix.rows() {
            prop_assert_eq!(matrix.get(i, 0).value, i as i32 * params.gap_penalty);
            prop_assert_eq!(matrix.get(i, 0).pointer, None);
        }
        for j in 1..matrix.cols() {
            prop_assert_eq!(matrix.get(0, j).value, j as i32 * params.gap_penalty);
            prop_assert_eq!(matrix.get(0, j).pointer, None);
        }
    }

    #[test]
    fn score_equals_bottom_right_cell(
        params in params_strategy(),
        seq1 in seq_strategy(),
        seq2 in seq_strategy(),
    ) {
        let aligner = GlobalAligner::new(params);
        let (matrix, result) = aligner.align(&seq1, &seq2).unwrap();
        prop_assert_eq!(result.score, matrix.get(seq1.len(), seq2.len()).value);
    }

    #[test]
    fn score_is_symmetric_under_swap(
        params in params_strategy(),
        seq1 in seq_strategy(),
        seq2 in seq_strategy(),
    ) {
        let aligner = GlobalAligner::new(params);
        let (_, forward) = aligner.align(&seq1, &seq2).unwrap();
        let (_, backward) = aligner.align(&seq2, &seq1).unwrap();
        prop_assert_eq!(forward.score, backward.score);
    }

    #[test]
    fn interior_cells_maximize_their_candidates(
        params in params_strategy(),
        seq1 in seq_strategy(),
        seq2 in seq_strategy(),
    ) {
        let aligner = GlobalAligner::new(params);
        let (matrix, _) = aligner.align(&seq1, &seq2).unwrap();

        for i in 1..matrix.rows() {
            for j in 1..matrix.cols() {
                let diag = matrix.get(i - 1, j - 1).value
                    + params.substitution(seq1[i - 1], seq2[j - 1]);
                let up = matrix.get(i - 1, j).value + params.gap_penalty;
                let left = matrix.get(i, j - 1).value + params.gap_penalty;
                prop_assert_eq!(matrix.get(i, j).value, diag.max(up).max(left));
                prop_assert!(matrix.get(i, j).pointer.is_some());
            }
        }
    }

    #[test]
    fn alignment_lines_have_equal_length(
        params in params_strategy(),
        seq1 in seq_strategy(),
        seq2 in seq_strategy(),
    ) {
        let aligner = GlobalAligner::new(params);
        let (_, result) = aligner.align(&seq1, &seq2).unwrap();
        prop_assert_eq!(result.aligned_seq1.len(), result.match_line.len());
        prop_assert_eq!(result.aligned_seq2.len(), result.match_line.len());
    }
}
