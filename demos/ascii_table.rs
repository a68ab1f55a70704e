use nw_aligner::render::render_ascii;
use nw_aligner::{GlobalAligner, ScoreParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let aligner = GlobalAligner::new(ScoreParams::new(1, 0, -1));

    let seq1 = b"ACAGTCGAACG";
    let seq2 = b"ACCGTCCG";

    let (matrix, result) = aligner.align(seq1, seq2)?;

    print!("{}", render_ascii(&matrix, &result, seq1, seq2));

    Ok(())
}
