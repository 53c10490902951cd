//! Plain-text rendering of analyses and simulation summaries.

use crate::key_search::Analysis;
use crate::scorer::SENTINEL_SCORE;
use crate::simulation::SimulationRow;

/// Widest bar drawn by [`render_score_chart`].
const CHART_WIDTH: usize = 50;

/// Formats the recovered key, plaintext and operation count.
///
/// # Examples
///
/// ```
/// use caesarbreak::{analyze_ciphertext, report};
///
/// let text = report::format_analysis(&analyze_ciphertext("KHOOR"));
/// assert!(text.starts_with("Shift: "));
/// assert!(text.contains("Operations: 832"));
/// ```
pub fn format_analysis(analysis: &Analysis) -> String {
    format!(
        "Shift: {}\nPlaintext: {}\nOperations: {}\n",
        analysis.best_shift, analysis.best_plaintext, analysis.total_operations
    )
}

/// Formats simulation rows as a markdown table.
pub fn format_summary(rows: &[SimulationRow]) -> String {
    let mut out = String::new();
    out.push_str("| Length L | Avg ops      | Theoretical  | Success (%) |\n");
    out.push_str("|----------|--------------|--------------|-------------|\n");
    for row in rows {
        out.push_str(&format!(
            "| {:8} | {:12.0} | {:12} | {:11.1} |\n",
            row.length, row.average_operations, row.theoretical_operations, row.success_rate
        ));
    }
    out
}

/// Draws one horizontal bar per shift, scaled to the largest finite score.
///
/// Shifts whose score is the sentinel are drawn as `-`. The row for
/// `marked_shift`, if any, is flagged with `<`.
pub fn render_score_chart(scores: &[f64], marked_shift: Option<u8>) -> String {
    let max = scores
        .iter()
        .copied()
        .filter(|&s| s < SENTINEL_SCORE)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (shift, &score) in scores.iter().enumerate() {
        let bar = if score >= SENTINEL_SCORE {
            "-".to_string()
        } else if max > 0.0 {
            "#".repeat(((score / max) * CHART_WIDTH as f64).round() as usize)
        } else {
            String::new()
        };
        let marker = if marked_shift == Some(shift as u8) {
            " <"
        } else {
            ""
        };
        out.push_str(&format!("{:2} {:>10.6} |{}{}\n", shift, score, bar, marker));
    }
    out
}
