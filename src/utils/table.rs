//! Plain-text table rendering for terminal previews.

use unicode_width::UnicodeWidthStr;

/// Render `columns` and `rows` as aligned text. Rows beyond `max_rows` are
/// replaced by a `… N more rows` line.
pub fn render(columns: &[String], rows: &[Vec<String>], max_rows: usize) -> String {
    let shown = &rows[..rows.len().min(max_rows)];

    let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
    for row in shown {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, columns, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    for row in shown {
        push_line(&mut out, row, &widths);
    }

    if rows.len() > shown.len() {
        out.push_str(&format!("… {} more rows\n", rows.len() - shown.len()));
    }

    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            // pad by display width, not byte length
            let pad = w.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();

    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
