//! Width-aware text fitting for fixed-size cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Fit `text` into `width` columns, ending in an ellipsis when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    with_ellipsis(text, width)
}

/// Word-wrap `text` to `width` columns, keeping at most `max_lines` lines.
///
/// When text is dropped the last kept line ends in an ellipsis. Words
/// wider than a whole line are split across lines.
pub fn wrap_capped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        for piece in split_word(word, width) {
            let needed = if current.is_empty() {
                piece.width()
            } else {
                current.width() + 1 + piece.width()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width);
        }
    }
    lines
}

fn with_ellipsis(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.truncate(out.trim_end().len());
    out.push(ELLIPSIS);
    out
}

fn split_word(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut used = 0;
    for ch in word.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            used = 0;
        }
        piece.push(ch);
        used += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Ooops!", 10), "Ooops!");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let cut = truncate("Replace Existing Folder?", 10);
        assert_eq!(cut, "Replace E…");
        assert!(cut.width() <= 10);
    }

    #[test]
    fn test_wrap_fits_without_cap() {
        let lines = wrap_capped("Are you sure you want to replace", 40, 2);
        assert_eq!(lines, vec!["Are you sure you want to replace"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_capped("one two three four", 9, 3);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_caps_lines_with_ellipsis() {
        let body = "Lorem Ipsum is simply dummy text of the printing and typesetting industry.";
        let lines = wrap_capped(body, 20, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.width() <= 20));
        assert!(lines[1].ends_with(ELLIPSIS));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_capped("abcdefghij", 4, 5);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_degenerate_sizes() {
        assert!(wrap_capped("anything", 0, 2).is_empty());
        assert!(wrap_capped("anything", 10, 0).is_empty());
        assert!(wrap_capped("   ", 10, 2).is_empty());
    }
}
