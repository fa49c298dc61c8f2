//! String formatting utilities for UI rendering.
//!
//! Widths are counted in chars.

use cadence_core::theme::Align;

/// Truncate a string to max length, adding an ellipsis if needed.
pub fn truncate(s: &str, max_len: usize, unicode: bool) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    let ellipsis = if unicode { "\u{2026}" } else { "..." };
    let ellipsis_len = ellipsis.chars().count();
    if max_len <= ellipsis_len {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - ellipsis_len).collect();
    format!("{}{}", truncated, ellipsis)
}

/// Place `s` inside `width` columns, filling with `fill`.
pub fn align(s: &str, width: usize, align: Align, fill: &str) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        return s.to_string();
    }
    let gap = width - char_count;
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", fill.repeat(left), s, fill.repeat(right))
}

/// Wrap text to a given width, preserving newlines.
///
/// Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            while word.chars().count() > width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                let head: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                lines.push(head);
            }
            if current_line.is_empty() {
                current_line = word;
            } else if current_line.chars().count() + 1 + word.chars().count() <= width {
                current_line.push(' ');
                current_line.push_str(&word);
            } else {
                lines.push(std::mem::replace(&mut current_line, word));
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// Width in chars of the widest line.
pub fn max_line_width(text: &str) -> usize {
    text.lines().map(|line| line.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10, true), "hello");
    }

    #[test]
    fn test_truncate_exact() {
        assert_eq!(truncate("hello", 5, true), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8, false), "hello...");
        assert_eq!(truncate("hello world", 6, true), "hello\u{2026}");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2, false), "he");
    }

    #[test]
    fn test_align_sides() {
        assert_eq!(align("hi", 5, Align::Left, " "), "hi   ");
        assert_eq!(align("hello", 3, Align::Left, " "), "hello");
        assert_eq!(align("42", 5, Align::Right, " "), "   42");
    }

    #[test]
    fn test_align_center() {
        assert_eq!(align("ab", 6, Align::Center, "-"), "--ab--");
        assert_eq!(align("ab", 5, Align::Center, "-"), "-ab--");
    }

    #[test]
    fn test_wrap_simple() {
        let lines = wrap("hello world foo bar", 10);
        assert_eq!(lines, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        let lines = wrap("hello\n\nworld", 20);
        assert_eq!(lines, vec!["hello", "", "world"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap("abcdefgh ij", 3);
        assert_eq!(lines, vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_max_line_width() {
        assert_eq!(max_line_width("a\nabc\nab"), 3);
        assert_eq!(max_line_width(""), 0);
    }
}
