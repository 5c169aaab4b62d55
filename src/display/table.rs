//! Fixed-width search result table
//!
//! Four columns plus a banner box with the result count and the current
//! time. Layout is computed from visible text only; the OSC 8 wrapping is
//! applied after truncation and never counts toward column widths.

use crate::core::mapper::PageHit;
use crate::display::hyperlink::hyperlink;
use crate::utils::text::{pad_to_width, truncate_chars};
use chrono::Local;
use unicode_width::UnicodeWidthStr;

const TITLE_WIDTH: usize = 50;
const SPACE_WIDTH: usize = 10;
const USER_WIDTH: usize = 20;
const DATE_WIDTH: usize = 12;

// Four content columns plus five pipes and eight padding spaces
const TABLE_WIDTH: usize = TITLE_WIDTH + SPACE_WIDTH + USER_WIDTH + DATE_WIDTH + 13;
const INNER_WIDTH: usize = TABLE_WIDTH - 2;

/// Titles longer than this are cut to leave room for the ellipsis
const TITLE_TRUNCATE: usize = TITLE_WIDTH - 4;

const NO_RESULTS_MESSAGE: &str = "No documents found.";

#[derive(Default)]
pub struct SearchTable;

impl SearchTable {
    pub fn new() -> Self {
        SearchTable
    }

    /// Render the hits as a bordered table, or the no-results message
    pub fn render(&self, hits: &[PageHit]) -> String {
        if hits.is_empty() {
            return format!("{NO_RESULTS_MESSAGE}\n");
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
        self.render_at(hits, &timestamp)
    }

    fn render_at(&self, hits: &[PageHit], timestamp: &str) -> String {
        let summary = format!(
            "Found {} {}",
            hits.len(),
            if hits.len() == 1 { "result" } else { "results" }
        );

        let mut out = String::new();
        out.push_str(&banner_top());
        out.push('\n');
        out.push_str(&format!(
            "│{}│",
            banner_line(&summary, timestamp, INNER_WIDTH)
        ));
        out.push('\n');
        out.push_str(&column_border('├', '┬', '┤'));
        out.push('\n');
        out.push_str(&header_row());
        out.push('\n');
        out.push_str(&column_border('├', '┼', '┤'));
        out.push('\n');
        for hit in hits {
            out.push_str(&data_row(hit));
            out.push('\n');
        }
        out.push_str(&column_border('└', '┴', '┘'));
        out.push('\n');
        out
    }
}

fn banner_top() -> String {
    format!("┌{}┐", "─".repeat(INNER_WIDTH))
}

fn column_border(left: char, joint: char, right: char) -> String {
    let segments = [
        "─".repeat(TITLE_WIDTH + 2),
        "─".repeat(SPACE_WIDTH + 2),
        "─".repeat(USER_WIDTH + 2),
        "─".repeat(DATE_WIDTH + 2),
    ];
    format!(
        "{}{}{}",
        left,
        segments.join(&joint.to_string()),
        right
    )
}

/// Center the summary with the floor-offset formula, then right-align the
/// timestamp. Both paddings are clamped to at least one space.
fn banner_line(summary: &str, timestamp: &str, width: usize) -> String {
    // The centering offset grows with the summary, so the cap keeps
    // offset + summary + timestamp inside the box even after clamping
    let summary = truncate_chars(
        summary,
        width.saturating_sub(2 * timestamp.chars().count() + 2),
    );

    let left = (width / 2)
        .saturating_sub(summary.chars().count() / 2)
        .max(1);
    let used = left + summary.width() + timestamp.width();
    let gap = width.saturating_sub(used).max(1);

    format!(
        "{}{}{}{}",
        " ".repeat(left),
        summary,
        " ".repeat(gap),
        timestamp
    )
}

fn header_row() -> String {
    format!(
        "│ {} │ {} │ {} │ {} │",
        pad_to_width("Title", TITLE_WIDTH),
        pad_to_width("Space", SPACE_WIDTH),
        pad_to_width("Updated By", USER_WIDTH),
        pad_to_width("Date", DATE_WIDTH),
    )
}

fn data_row(hit: &PageHit) -> String {
    // Truncate before decorating; padding counts the visible title only
    let visible_title = truncate_chars(&hit.title, TITLE_TRUNCATE);
    let title_padding = " ".repeat(TITLE_WIDTH.saturating_sub(visible_title.width()));
    let title_cell = format!("{}{}", hyperlink(&visible_title, &hit.url), title_padding);

    format!(
        "│ {} │ {} │ {} │ {} │",
        title_cell,
        pad_to_width(&truncate_chars(&hit.space_key, SPACE_WIDTH), SPACE_WIDTH),
        pad_to_width(&truncate_chars(&hit.updated_by, USER_WIDTH), USER_WIDTH),
        pad_to_width(&truncate_chars(&hit.updated_date, DATE_WIDTH), DATE_WIDTH),
    )
}

/// Comma-separated rendering of the hits, one line per hit
pub fn render_csv(hits: &[PageHit]) -> String {
    let mut out = String::from("id,title,space_key,space_name,url,updated_by,updated_date\n");
    for hit in hits {
        let fields = [
            hit.id.as_str(),
            hit.title.as_str(),
            hit.space_key.as_str(),
            hit.space_name.as_str(),
            hit.url.as_str(),
            hit.updated_by.as_str(),
            hit.updated_date.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
