//! Presentation layers for the score matrix and the reconstructed alignment.
//!
//! Renderers consume the engine output strictly read-only and return
//! formatted text; they own the mapping from [`Direction`] to display glyphs
//! so the engine stays free of presentation concerns.
//!
//! Both views show the score table with `seq2` as the column header and
//! `seq1` as the row header, followed by the optimal alignment as three
//! lines: `seq2` on top, the match-marker line, and `seq1` on the bottom.

use std::fmt::Write;

use crate::matrix::{Cell, Direction, ScoreMatrix};
use crate::traceback::AlignmentResult;

fn ascii_glyph(pointer: Option<Direction>) -> char {
    match pointer {
        Some(Direction::Diagonal) => '\u{2196}', // ↖
        Some(Direction::Up) => '\u{2191}',       // ↑
        Some(Direction::Left) => '\u{2190}',     // ←
        None => ' ',
    }
}

fn html_glyph(pointer: Option<Direction>) -> &'static str {
    match pointer {
        Some(Direction::Diagonal) => "&#8598;",
        Some(Direction::Up) => "&#8593;",
        Some(Direction::Left) => "&#8592;",
        None => "&nbsp;",
    }
}

/// Renders the score table and alignment as plain text.
///
/// Each table cell shows the direction glyph, the cell value, and a `*` on
/// cells visited by the traceback.
pub fn render_ascii(
    matrix: &ScoreMatrix,
    result: &AlignmentResult,
    seq1: &[u8],
    seq2: &[u8],
) -> String {
    let mut out = String::new();
    out.push_str("Alignment Score Table\n\n");

    let header: Vec<String> = seq2.iter().map(|&b| format!("   {}", b as char)).collect();
    out.push_str("\t\t");
    out.push_str(&header.join("\t"));
    out.push('\n');

    for i in 0..matrix.rows() {
        if i > 0 {
            out.push(seq1[i - 1] as char);
        } else {
            out.push(' ');
        }
        out.push('\t');

        let cells: Vec<String> = (0..matrix.cols())
            .map(|j| ascii_cell(matrix.get(i, j)))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }

    let _ = write!(
        out,
        "\nOptimal Global Alignment (score = {})\n",
        result.score
    );
    for line in [&result.aligned_seq2, &result.match_line, &result.aligned_seq1] {
        let spaced: Vec<String> = line.iter().map(|&b| (b as char).to_string()).collect();
        out.push_str(&spaced.join(" "));
        out.push('\n');
    }

    out
}

fn ascii_cell(cell: &Cell) -> String {
    let mut s = String::new();
    s.push(ascii_glyph(cell.pointer));
    s.push(' ');
    if cell.value < 0 {
        let _ = write!(s, "{}", cell.value);
    } else {
        let _ = write!(s, " {}", cell.value);
    }
    s.push(if cell.on_optimal_path { '*' } else { ' ' });
    s
}

/// Renders the score table and alignment as an HTML fragment, or as a
/// complete page with inline styles when `full_page` is set.
///
/// Traceback cells carry `class="trace"`, header cells `class="seq"`.
pub fn render_html(
    matrix: &ScoreMatrix,
    result: &AlignmentResult,
    seq1: &[u8],
    seq2: &[u8],
    full_page: bool,
) -> String {
    let mut out = String::new();

    if full_page {
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\"><head>\n");
        out.push_str("<meta charset=\"utf-8\" />\n");
        out.push_str("<title>Needleman-Wunsch Alignment Score Table</title>\n");
        out.push_str("<style>\n");
        out.push_str(".trace { background-color: #c99; font-weight: bold }\n");
        out.push_str(".seq { background-color: #ccc; }\n");
        out.push_str(".data { border-collapse: collapse }\n");
        out.push_str(".data td { border: 1px solid #666; text-align: center; }\n");
        out.push_str(".align td { text-align: center; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
    }

    out.push_str("<h3>Alignment Score Table</h3>\n");
    out.push_str("<table class=\"data\">\n");

    out.push_str("<tr><td>&nbsp;</td><td>&nbsp;</td>");
    for &b in seq2 {
        let _ = write!(out, "<td class=\"seq\">{}</td>", b as char);
    }
    out.push_str("</tr>\n");

    for i in 0..matrix.rows() {
        out.push_str("<tr>");
        if i > 0 {
            let _ = write!(out, "<td class=\"seq\">{}</td>", seq1[i - 1] as char);
        } else {
            out.push_str("<td>&nbsp;</td>");
        }
        for j in 0..matrix.cols() {
            out.push_str(&html_cell(matrix.get(i, j)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");

    let _ = write!(
        out,
        "<h3>Optimal Global Alignment (score = {})</h3>\n",
        result.score
    );
    out.push_str("<table class=\"align\">\n");
    for line in [&result.aligned_seq2, &result.match_line, &result.aligned_seq1] {
        out.push_str("<tr>");
        for &b in line.iter() {
            let _ = write!(out, "<td>{}</td>", b as char);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");

    if full_page {
        out.push_str("</body></html>\n");
    }

    out
}

fn html_cell(cell: &Cell) -> String {
    let mut s = String::new();
    if cell.on_optimal_path {
        s.push_str("<td class=\"trace\">");
    } else {
        s.push_str("<td>");
    }
    s.push_str(html_glyph(cell.pointer));
    s.push_str("&nbsp;");
    if cell.value < 0 {
        let _ = write!(s, "{}", cell.value);
    } else {
        let _ = write!(s, "&nbsp;{}", cell.value);
    }
    s.push_str("</td>");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GlobalAligner, ScoreParams};

    fn sample() -> (ScoreMatrix, AlignmentResult) {
        GlobalAligner::new(ScoreParams::default())
            .align(b"ACAGTCGAACG", b"ACCGTCCG")
            .unwrap()
    }

    #[test]
    fn ascii_shows_score_and_traceback_marks() {
        let (matrix, result) = sample();
        let text = render_ascii(&matrix, &result, b"ACAGTCGAACG", b"ACCGTCCG");

        assert!(text.starts_with("Alignment Score Table"));
        assert!(text.contains("Optimal Global Alignment (score = 4)"));
        let marked = matrix_path_cells(&matrix);
        assert_eq!(text.matches('*').count(), marked);
        // alignment block: seq2 line on top, seq1 line on the bottom
        assert!(text.ends_with("A C A G T C G A A C G\n"));
        assert!(text.contains("A C C G T C - - - C G\n"));
    }

    #[test]
    fn html_marks_exactly_the_traceback_cells() {
        let (matrix, result) = sample();
        let html = render_html(&matrix, &result, b"ACAGTCGAACG", b"ACCGTCCG", false);

        let marked = matrix_path_cells(&matrix);
        assert_eq!(html.matches("class=\"trace\"").count(), marked);
        assert!(html.contains("<h3>Optimal Global Alignment (score = 4)</h3>"));
        assert!(!html.contains("<body>"));
    }

    #[test]
    fn full_page_wraps_the_fragment() {
        let (matrix, result) = sample();
        let page = render_html(&matrix, &result, b"ACAGTCGAACG", b"ACCGTCCG", true);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(".trace { background-color: #c99; font-weight: bold }"));
        assert!(page.trim_end().ends_with("</body></html>"));
    }

    fn matrix_path_cells(matrix: &ScoreMatrix) -> usize {
        (0..matrix.rows())
            .flat_map(|i| (0..matrix.cols()).map(move |j| (i, j)))
            .filter(|&(i, j)| matrix.get(i, j).on_optimal_path)
            .count()
    }
}
