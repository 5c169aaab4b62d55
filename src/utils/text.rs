use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "...";

/// Truncate to a maximum number of characters, appending "..." when cut.
///
/// Counts characters rather than bytes so multibyte titles never split
/// mid-codepoint. A string of exactly `max_chars` characters is returned
/// unchanged; longer input keeps `max_chars - 3` characters plus the ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    if max_chars <= ELLIPSIS.len() {
        return ELLIPSIS.chars().take(max_chars).collect();
    }

    let kept: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}
