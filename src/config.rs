//! Input handling for the command-line shell.
//!
//! The shell owns all defaulting and clamping: non-numeric scores fall back
//! to the defaults, empty sequences fall back to the demo sequences, and
//! oversized sequences are truncated before they reach the engine. The
//! engine itself accepts whatever it is given.

use log::warn;

use crate::scoring::{ScoreParams, DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH};

/// Longest sequence the shell will forward to the engine.
pub const MAX_SEQUENCE_LEN: usize = 25;

pub const DEFAULT_SEQ1: &[u8] = b"ACAGTCGAACG";
pub const DEFAULT_SEQ2: &[u8] = b"ACCGTCCG";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ascii,
    Html,
}

/// Fully resolved inputs for one alignment run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub params: ScoreParams,
    pub seq1: Vec<u8>,
    pub seq2: Vec<u8>,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            params: ScoreParams::default(),
            seq1: DEFAULT_SEQ1.to_vec(),
            seq2: DEFAULT_SEQ2.to_vec(),
            format: OutputFormat::Ascii,
        }
    }
}

impl RunConfig {
    /// Builds a config from command-line arguments (program name excluded).
    ///
    /// Recognized options: `--match N`, `--mismatch N`, `--gap N`, `--html`,
    /// plus up to two positional sequences. Unknown options and extra
    /// positionals are reported as errors; malformed option *values* are
    /// defaulted rather than rejected.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = RunConfig::default();
        let mut positionals: Vec<&str> = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--match" => {
                    let raw = iter.next().ok_or("--match requires a value")?;
                    config.params.match_score = parse_score("--match", raw, DEFAULT_MATCH);
                }
                "--mismatch" => {
                    let raw = iter.next().ok_or("--mismatch requires a value")?;
                    config.params.mismatch_score = parse_score("--mismatch", raw, DEFAULT_MISMATCH);
                }
                "--gap" => {
                    let raw = iter.next().ok_or("--gap requires a value")?;
                    config.params.gap_penalty = parse_score("--gap", raw, DEFAULT_GAP);
                }
                "--html" => config.format = OutputFormat::Html,
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(format!("unknown option '{other}'"));
                }
                other => positionals.push(other),
            }
        }

        if positionals.len() > 2 {
            return Err(format!(
                "expected at most two sequences, got {}",
                positionals.len()
            ));
        }
        if let Some(raw) = positionals.first() {
            config.seq1 = sanitize_sequence("SEQ1", raw, DEFAULT_SEQ1);
        }
        if let Some(raw) = positionals.get(1) {
            config.seq2 = sanitize_sequence("SEQ2", raw, DEFAULT_SEQ2);
        }

        Ok(config)
    }
}

fn parse_score(name: &str, raw: &str, default: i32) -> i32 {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("{name}: non-numeric value {raw:?}, using default {default}");
            default
        }
    }
}

fn sanitize_sequence(name: &str, raw: &str, default: &[u8]) -> Vec<u8> {
    if raw.is_empty() {
        warn!("{name}: empty, using default");
        return default.to_vec();
    }
    let mut seq = raw.as_bytes().to_vec();
    if seq.len() > MAX_SEQUENCE_LEN {
        warn!(
            "{name}: {} symbols exceeds the {MAX_SEQUENCE_LEN}-symbol limit, truncating",
            seq.len()
        );
        seq.truncate(MAX_SEQUENCE_LEN);
    }
    seq
}
