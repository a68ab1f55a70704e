use nw_aligner::{GlobalAligner, ScoreParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seq1 = b"ACGTACGT";
    let seq2 = b"ACGTAGCT";

    // the same pair of sequences under two scoring schemes
    for params in [ScoreParams::new(1, 0, -1), ScoreParams::new(2, -1, -3)] {
        let aligner = GlobalAligner::new(params);
        let (_, result) = aligner.align(seq1, seq2)?;

        println!(
            "match {} / mismatch {} / gap {}:",
            params.match_score, params.mismatch_score, params.gap_penalty
        );
        println!("  Score: {}", result.score);
        println!("  Sequence 1: {}", String::from_utf8_lossy(&result.aligned_seq1));
        println!("  Sequence 2: {}", String::from_utf8_lossy(&result.aligned_seq2));
        println!();
    }

    Ok(())
}
