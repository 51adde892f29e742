//! Tabular rendering of per-phase evaluation counts.
//!
//! The driver tracks expansion-phase and optimization-phase counters
//! separately so the trade-off the tangent expander makes (Hessian-vector
//! products up front, fewer objective/gradient evaluations later) is
//! visible at a glance. Rendering is plain fixed-width text, one row per
//! phase, suitable for `eprintln!` in verbose runs and for log capture.

use crate::model::counters::EvalCounters;

/// Render labeled counter rows as a fixed-width table.
///
/// Columns are sized to the widest cell so the output stays aligned for
/// arbitrary counts; numeric cells are right-aligned under their headers.
pub fn render_phase_table(rows: &[(&str, EvalCounters)]) -> String {
    let headers = ["phase", "f-evals", "g-evals", "hvp-evals"];
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|(label, c)| {
            [
                (*label).to_string(),
                c.objective.to_string(),
                c.gradient.to_string(),
                c.hessian_vec.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for (j, h) in headers.iter().enumerate() {
        widths[j] = h.len();
    }
    for row in &cells {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.len());
        }
    }

    let mut out = String::new();
    let format_row = |cols: [&str; 4]| -> String {
        format!(
            "{:<w0$} | {:>w1$} | {:>w2$} | {:>w3$}",
            cols[0],
            cols[1],
            cols[2],
            cols[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        )
    };
    out.push_str(&format_row(headers));
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 3 * 3;
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &cells {
        out.push_str(&format_row([&row[0], &row[1], &row[2], &row[3]]));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_across_rows_of_different_magnitudes() {
        let rows = [
            ("expand", EvalCounters { objective: 0, gradient: 12, hessian_vec: 60 }),
            ("optimize", EvalCounters { objective: 1543, gradient: 890, hessian_vec: 0 }),
        ];
        let table = render_phase_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("phase"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // Every line shares one width and the separator positions line up.
        let pipes: Vec<usize> = lines[0].match_indices('|').map(|(i, _)| i).collect();
        for line in &lines[2..] {
            assert_eq!(line.len(), lines[0].len());
            let row_pipes: Vec<usize> = line.match_indices('|').map(|(i, _)| i).collect();
            assert_eq!(row_pipes, pipes);
        }
        assert!(lines[3].contains("1543"));
    }
}
