use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` so it occupies at most `max_width` terminal columns, marking the
/// cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Split a payload into display lines, each cut to `max_width` columns.
///
/// Payloads are copied verbatim, so lines are cut rather than reflowed.
pub fn payload_lines(text: &str, max_width: usize) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .map(|line| truncate_to_width(&line.replace('\t', "    "), max_width))
        .collect();

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each of these takes two columns.
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_payload_lines() {
        assert_eq!(
            payload_lines("one\ntwo\n\tthree", 20),
            vec!["one".to_string(), "two".to_string(), "    three".to_string()]
        );
        assert_eq!(payload_lines("", 20), vec![String::new()]);
    }
}
