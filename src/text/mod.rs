//! Small text and date helpers shared by the parser, the cache and the CLI.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use scraper::Html;

/// Marker appended to text cut by [`truncate`]
pub const ELLIPSIS: char = '…';

/// Display form used when listing records, e.g. "19 Oct 2026, 14:05 UTC"
pub fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format("%d %b %Y, %H:%M UTC").to_string()
}

/// Canonical RFC 3339 instant with millisecond precision and a `Z` suffix
pub fn format_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Cut `text` to at most `max_chars` characters, appending an ellipsis when
/// anything was removed. Counts chars, so multi-byte text is never split.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push(ELLIPSIS);
    cut
}

/// Extract plain text from an HTML fragment.
///
/// The fragment goes through a real HTML parser rather than a tag regex:
/// - nested tags flatten to their text content
/// - unclosed tags keep their text (`"a <b>bold"` -> `"a bold"`)
/// - a `<` followed by whitespace stays literal text (`"a < b"`)
/// - an unterminated tag at the very end is discarded (`"text <p"` -> `"text"`)
/// - entities are decoded (`"&amp;"` -> `"&"`)
///
/// Block elements add a word break so adjacent paragraphs don't run together,
/// and all whitespace runs collapse to a single space.
pub fn strip_markup(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let document = Html::parse_fragment(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Some(text_node) = node.value().as_text() {
            text.push_str(text_node);
        }
        if let Some(element) = node.value().as_element() {
            match element.name() {
                "p" | "br" | "div" | "li" | "font" => text.push(' '),
                _ => {}
            }
        }
    }

    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).unwrap();
        assert_eq!(format_date(&instant), "19 Oct 2026, 14:05 UTC");
    }

    #[test]
    fn test_format_iso_uses_z_suffix() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert_eq!(format_iso(&instant), "2024-03-01T08:30:00.000Z");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Short text", 50), "Short text");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate("Exactly twenty chars", 20), "Exactly twenty chars");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("Verylongwordwithoutspaces", 10), "Verylongwo…");
    }

    #[test]
    fn test_truncate_trims_trailing_space_before_ellipsis() {
        assert_eq!(truncate("Wind farm approved today", 10), "Wind farm…");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "ééééééééé";
        let truncated = truncate(text, 4);
        assert_eq!(truncated, "éééé…");
    }

    #[test]
    fn test_truncate_snippet_length() {
        let text = "a".repeat(400);
        let truncated = truncate(&text, 180);
        assert_eq!(truncated.chars().count(), 181);
        assert!(truncated.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_strip_markup_simple() {
        assert_eq!(strip_markup("<p>Hello world</p>"), "Hello world");
    }

    #[test]
    fn test_strip_markup_nested_tags() {
        let html = r#"<div><p>Turbines <b>on <i>order</i></b></p></div>"#;
        assert_eq!(strip_markup(html), "Turbines on order");
    }

    #[test]
    fn test_strip_markup_unclosed_tag() {
        assert_eq!(strip_markup("Unclosed <b>bold text"), "Unclosed bold text");
    }

    #[test]
    fn test_strip_markup_literal_less_than() {
        assert_eq!(strip_markup("a < b"), "a < b");
    }

    #[test]
    fn test_strip_markup_unterminated_tag_at_end() {
        assert_eq!(strip_markup("Trailing text <p"), "Trailing text");
    }

    #[test]
    fn test_strip_markup_decodes_entities() {
        assert_eq!(strip_markup("Wind &amp; solar&nbsp;news"), "Wind & solar news");
    }

    #[test]
    fn test_strip_markup_paragraphs_keep_word_break() {
        assert_eq!(
            strip_markup("<p>First paragraph</p><p>Second paragraph</p>"),
            "First paragraph Second paragraph"
        );
    }

    #[test]
    fn test_strip_markup_google_news_description() {
        let html = r##"<a href="https://news.google.com/articles/abc" target="_blank">Floating wind project gets consent</a>&nbsp;&nbsp;<font color="#6f6f6f">The Herald</font>"##;
        assert_eq!(
            strip_markup(html),
            "Floating wind project gets consent The Herald"
        );
    }

    #[test]
    fn test_strip_markup_empty() {
        assert_eq!(strip_markup(""), "");
        assert_eq!(strip_markup("   "), "");
    }
}
