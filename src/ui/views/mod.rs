//! Rendered views. Each view takes plain data and returns a string; nothing
//! here touches the store.

pub mod dashboard;
pub mod detail;
pub mod entries;

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

/// `Feb 01, 2026`
pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Left-pad/truncate to a display width (unicode-aware).
pub(crate) fn pad(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}

/// Right-align to a display width.
pub(crate) fn pad_left(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(width - text_width), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(pad_left("42", 5), "   42");
    }

    #[test]
    fn test_pad_truncates_with_ellipsis() {
        let padded = pad("a very long project name", 10);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), 10);
        assert!(padded.contains('…'));
    }

    #[test]
    fn test_fmt_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(fmt_date(date), "Feb 01, 2026");
    }
}
