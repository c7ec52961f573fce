use unicode_width::UnicodeWidthStr;

/// Wrap `s` to `width` terminal columns, breaking on characters.
///
/// Width is measured in display columns, so double-width characters count
/// as two.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            result.push('\n');
            current_line_width = 0;
            continue;
        }

        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }

        result.push(c);
    }

    result
}

/// Truncate `s` to at most `max_height` lines, replacing the tail with "...".
pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap() {
        let actual = wrap_text("stay logged in", 14);
        assert_eq!(actual, "stay logged in");
    }

    #[test]
    fn test_wrap_text_wrap() {
        let actual = wrap_text("stay logged in", 4);
        assert_eq!(actual, "stay\n log\nged \nin");
    }

    #[test]
    fn test_wrap_text_preserves_newlines() {
        let actual = wrap_text("one\ntwo", 10);
        assert_eq!(actual, "one\ntwo");
    }

    #[test]
    fn test_wrap_text_double_width() {
        let actual = wrap_text("設定を保存", 4);
        assert_eq!(actual, "設定\nを保\n存");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("stay logged in", 0), "");
    }

    #[test]
    fn test_truncate_text_no_truncate() {
        let actual = truncate_text("a\nb\nc", 3);
        assert_eq!(actual, "a\nb\nc");
    }

    #[test]
    fn test_truncate_text_truncate() {
        let actual = truncate_text("a\nb\nc", 2);
        assert_eq!(actual, "a\n...");
    }

    #[test]
    fn test_truncate_text_single_line() {
        let actual = truncate_text("a\nb", 1);
        assert_eq!(actual, "...");
    }

    #[test]
    fn test_truncate_text_zero_height() {
        assert_eq!(truncate_text("a\nb\nc", 0), "");
    }
}
