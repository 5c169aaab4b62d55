//! OSC 8 terminal hyperlinks
//!
//! The escape sequence is out-of-band: it makes the text clickable without
//! changing the visible character count, so column layout must always be
//! computed from the plain text before wrapping.

/// Wrap `text` in an OSC 8 hyperlink pointing at `url`
pub fn hyperlink(text: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperlink_wraps_text() {
        let link = hyperlink("Release Checklist", "http://example.test/wiki/pages/1");
        assert!(link.starts_with("\x1b]8;;http://example.test/wiki/pages/1\x1b\\"));
        assert!(link.contains("Release Checklist"));
        assert!(link.ends_with("\x1b]8;;\x1b\\"));
    }

    #[test]
    fn test_hyperlink_preserves_visible_text_exactly() {
        let link = hyperlink("Title...", "http://example.test");
        let visible: String = link
            .replace("\x1b]8;;http://example.test\x1b\\", "")
            .replace("\x1b]8;;\x1b\\", "");
        assert_eq!(visible, "Title...");
    }
}
