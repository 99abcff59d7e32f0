//! Plain-text projection of the restaurant collection.

use crate::types::Restaurant;

pub const TITLE: &str = "Dine Hub";
const HEADERS: [&str; 5] = ["#", "Restaurant Name", "Address", "Telephone", "ID"];
const EMPTY: &str = "(no restaurants)";

/// Render `rows` as a numbered, column-aligned table under the title.
/// Row numbers start at 1 and follow collection order.
#[must_use]
pub fn render_table(rows: &[Restaurant]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            [
                (index + 1).to_string(),
                row.name.clone(),
                row.address.clone(),
                row.telephone.clone(),
                row.id.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!("{TITLE}\n");
    push_line(&mut out, &HEADERS, &widths);
    if cells.is_empty() {
        out.push_str(EMPTY);
        out.push('\n');
    }
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line: String = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}  ", cell.as_ref()))
        .collect();
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
