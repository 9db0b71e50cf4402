//! Terminal rendering of a table snapshot.

use std::fmt::Write;

use marquee_lib::model::Value;
use marquee_lib::table::{PageLink, RenderedRow, RenderedTable};
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";

/// Pads `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn header_label(label: &str, indicator: &str) -> String {
    if indicator.is_empty() {
        label.to_string()
    } else {
        format!("{} {}", label, indicator)
    }
}

/// Page links with the current page in brackets.
pub fn pager(pages: &[PageLink], current: usize) -> String {
    pages
        .iter()
        .map(|link| match link {
            PageLink::Page(n) if *n == current => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Aligned text rendering: title, header, rows, pager and range footer.
pub fn text(title: &str, table: &RenderedTable) -> String {
    let labels: Vec<String> = table
        .headers
        .iter()
        .map(|h| header_label(&h.label, h.indicator()))
        .collect();

    let mut widths: Vec<usize> = labels.iter().map(|l| l.width()).collect();
    for row in &table.rows {
        if let RenderedRow::Data { cells, .. } = row {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let mut out = String::new();
    let _ = write!(out, "{}", title);
    if !table.search.is_empty() {
        let _ = write!(out, " matching \"{}\"", table.search);
    }
    if table.loading {
        out.push_str(" (loading)");
    }
    out.push('\n');

    let header: Vec<String> = labels.iter().zip(&widths).map(|(l, w)| pad(l, *w)).collect();
    let _ = writeln!(out, "{}", header.join(GAP).trim_end());
    let rule: usize = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    let _ = writeln!(out, "{}", "-".repeat(rule));

    for row in &table.rows {
        match row {
            RenderedRow::Data { cells, .. } => {
                let line: Vec<String> = cells.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
                let _ = writeln!(out, "{}", line.join(GAP).trim_end());
            }
            RenderedRow::Placeholder { text, .. } => {
                let _ = writeln!(out, "{}", text);
            }
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{}", pager(&table.pages, table.page));
    let _ = writeln!(out, "{}", table.range);
    out
}

/// The snapshot as pretty JSON.
pub fn json(table: &RenderedTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

/// One filter option per line.
pub fn options(column: &str, values: &[Value]) -> String {
    let mut out = format!("Filter options for {}:\n", column);
    for value in values {
        let _ = writeln!(out, "  {}", value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_lib::console::fixtures;
    use marquee_lib::console::screens::theatre_columns;
    use marquee_lib::table::DataTable;

    #[test]
    fn test_pad_counts_display_width() {
        assert_eq!(pad("Pathé", 7), "Pathé  ");
        assert_eq!(pad("映画館", 8), "映画館  ");
        assert_eq!(pad("too long", 3), "too long");
    }

    #[test]
    fn test_pager_marks_current_page() {
        let pages = marquee_lib::table::paginate::page_window(8, 5);
        assert_eq!(pager(&pages, 5), "1 … 4 [5] 6 … 8");
    }

    #[test]
    fn test_text_layout() {
        let table = DataTable::new(theatre_columns(), fixtures::theatres());
        table.set_search("square");
        let out = text("Theatres", &table.render());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Theatres matching \"square\"");
        assert!(lines[1].starts_with("Name ↕"));
        assert!(lines[3].starts_with("Regal Cinemas Union Square"));
        assert_eq!(lines.last(), Some(&"Showing 1-3 of 3"));
    }

    #[test]
    fn test_empty_table_shows_placeholder() {
        let table = DataTable::new(theatre_columns(), fixtures::theatres());
        table.set_search("drive-in");
        let out = text("Theatres", &table.render());
        assert!(out.contains("No results."));
        assert!(out.contains("Showing 0 of 0"));
    }

    #[test]
    fn test_json_snapshot() {
        let table = DataTable::new(theatre_columns(), fixtures::theatres());
        let out = json(&table.render()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 10);
        assert_eq!(parsed["rows"][0]["kind"], "data");
    }
}
