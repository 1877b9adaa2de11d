//! Helpers for building the HTML fragments the client injects into the page.

/// Marker appended after every overview preview.
pub const ELLIPSIS: &str = "...";

/// Escape text for use in element content and double- or single-quoted
/// attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// First `max_chars` characters of `text` followed by [`ELLIPSIS`].
///
/// The marker is appended even when nothing was cut off.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Wrap already-escaped content in a paragraph.
#[must_use]
pub fn paragraph(escaped: &str) -> String {
    format!("<p>{escaped}</p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn should_leave_plain_text_untouched() {
        assert_eq!(escape("Blade Runner 2049"), "Blade Runner 2049");
    }

    #[test]
    fn should_cut_preview_at_character_limit() {
        let text = "A".repeat(150);
        assert_eq!(preview(&text, 100), format!("{}...", "A".repeat(100)));
    }

    #[test]
    fn should_append_ellipsis_when_text_is_short() {
        assert_eq!(preview("Short.", 100), "Short....");
    }

    #[test]
    fn should_count_characters_not_bytes() {
        assert_eq!(preview("élan", 2), "él...");
    }

    #[test]
    fn should_wrap_paragraph() {
        assert_eq!(paragraph("hi"), "<p>hi</p>");
    }
}
