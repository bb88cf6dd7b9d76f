//! Plain-text rendering of a [`Presentation`].
//!
//! Unstyled and deterministic, for terminals, logs and snapshot tests:
//!
//! ```text
//! Search...  [+ Add]
//! Name ▲  Age
//! ──────  ───
//! Ada     36
//! Brian   41
//! Page 1 of 1 (2 rows)
//! ```
//!
//! Column width is the size hint when given, otherwise the widest of the
//! header and its cells. Longer text is cut with `…`.

use std::fmt;

use gridwork_query::Dir;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::shell::{ExpandControl, Footer, GridBody, HeaderView, Presentation, Toolbar};

const GAP: &str = "  ";

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = match self {
            Presentation::Error {
                message,
                retry_available,
            } => {
                let mut lines = vec![format!("Error: {}", message)];
                if *retry_available {
                    lines.push("[Retry]".to_string());
                }
                lines
            }
            Presentation::Empty {
                message,
                add_button,
            } => {
                let mut lines = vec![message.clone()];
                if let Some(button) = add_button {
                    lines.push(format!("[+ {}]", button.label));
                }
                lines
            }
            Presentation::Skeleton { headers, rows } => {
                let widths = column_widths(headers, &[]);
                let placeholder: Vec<String> = widths.iter().map(|w| "░".repeat(*w)).collect();
                let body = vec![placeholder; *rows];
                table_lines(headers, &widths, &body)
            }
            Presentation::Populated {
                toolbar,
                grid,
                footer,
            } => {
                let mut lines = vec![toolbar_line(toolbar)];
                match &grid.body {
                    GridBody::Rows { rows } => {
                        let body: Vec<Vec<String>> = rows
                            .iter()
                            .map(|row| row.cells.iter().map(|c| single_line(&c.to_text())).collect())
                            .collect();
                        let widths = column_widths(&grid.headers, &body);
                        lines.extend(table_lines(&grid.headers, &widths, &body));
                    }
                    GridBody::NoResults { message, .. } | GridBody::Loading { message, .. } => {
                        let widths = column_widths(&grid.headers, &[]);
                        lines.extend(table_lines(&grid.headers, &widths, &[]));
                        lines.push(message.clone());
                    }
                }
                if let Some(line) = footer_line(footer) {
                    lines.push(line);
                }
                lines
            }
        };

        let text: Vec<&str> = lines.iter().map(|l| l.trim_end()).collect();
        f.write_str(&text.join("\n"))
    }
}

fn toolbar_line(toolbar: &Toolbar) -> String {
    let mut line = if toolbar.query.is_empty() {
        toolbar.search_placeholder.clone()
    } else {
        format!("Search: {}", toolbar.query)
    };
    if let Some(button) = &toolbar.add_button {
        line.push_str(GAP);
        line.push_str(&format!("[+ {}]", button.label));
    }
    line
}

fn footer_line(footer: &Footer) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(p) = &footer.pagination {
        parts.push(format!(
            "Page {} of {} ({} rows)",
            p.page_index + 1,
            p.page_count,
            p.filtered_count
        ));
    }
    match &footer.expand {
        Some(ExpandControl::Expand { hidden }) => parts.push(format!("[Show {} more]", hidden)),
        Some(ExpandControl::Collapse) => parts.push("[Show less]".to_string()),
        None => {}
    }
    (!parts.is_empty()).then(|| parts.join(GAP))
}

fn header_text(header: &HeaderView) -> String {
    match header.sorted {
        Some(Dir::Asc) => format!("{} ▲", header.label),
        Some(Dir::Desc) => format!("{} ▼", header.label),
        None => header.label.clone(),
    }
}

fn column_widths(headers: &[HeaderView], body: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            header.width.unwrap_or_else(|| {
                body.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .fold(header_text(header).width(), usize::max)
            })
        })
        .collect()
}

fn table_lines(headers: &[HeaderView], widths: &[usize], body: &[Vec<String>]) -> Vec<String> {
    let header_cells: Vec<String> = headers.iter().map(header_text).collect();
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(row_line(&header_cells, widths));
    lines.push(row_line(&rule, widths));
    lines.extend(body.iter().map(|row| row_line(row, widths)));
    lines
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| pad(cells.get(i).map(String::as_str).unwrap_or(""), *width))
        .collect::<Vec<_>>()
        .join(GAP)
}

fn pad(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

/// Truncates a string to a display width, marking the cut with `…`.
///
/// ```
/// use gridwork::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}
