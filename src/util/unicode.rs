use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_cells`, ending with `…` when something was cut.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `byte_offset`, or None at end
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let len = s[byte_offset..].graphemes(true).next().map_or(0, str::len);
    Some(byte_offset + len)
}

/// Byte offset of the grapheme before `byte_offset`, or None at start
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Display column of a byte offset
pub fn display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Slice of `s` that fits in `width` cells and keeps the text cursor (a byte
/// offset) on screen, scrolled as little as possible. Returns the slice and the
/// cursor's column inside it. One cell is kept free for a cursor at the end.
pub fn scroll_window(s: &str, cursor: usize, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", 0);
    }
    let cursor_col = display_col(s, cursor);
    let skip = (cursor_col + 1).saturating_sub(width);

    let mut col = 0;
    let mut start = (s.len(), display_width(s));
    for (i, g) in s.grapheme_indices(true) {
        if col >= skip {
            start = (i, col);
            break;
        }
        col += display_width(g);
    }
    let (start, start_col) = start;

    let mut end = start;
    let mut used = 0;
    for g in s[start..].graphemes(true) {
        let w = display_width(g);
        if used + w > width {
            break;
        }
        used += w;
        end += g.len();
    }
    (&s[start..end], cursor_col.saturating_sub(start_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("牛奶"), 4);
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn truncate_fits_untouched() {
        assert_eq!(truncate_to_width("Buy milk", 8), "Buy milk");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Buy milk today", 8), "Buy mil\u{2026}");
        assert_eq!(truncate_to_width("牛奶牛奶", 5), "牛奶\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn grapheme_steps_skip_combining_marks() {
        let s = "e\u{0301}x";
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(next_grapheme_boundary(s, 3), Some(4));
        assert_eq!(next_grapheme_boundary(s, 4), None);
        assert_eq!(prev_grapheme_boundary(s, 4), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(0));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn display_col_clamps() {
        assert_eq!(display_col("abc", 2), 2);
        assert_eq!(display_col("abc", 10), 3);
    }

    #[test]
    fn scroll_window_without_overflow_shows_everything() {
        assert_eq!(scroll_window("milk", 0, 10), ("milk", 0));
        assert_eq!(scroll_window("milk", 4, 10), ("milk", 4));
    }

    #[test]
    fn scroll_window_follows_cursor_to_the_end() {
        assert_eq!(scroll_window("abcdef", 6, 4), ("def", 3));
        assert_eq!(scroll_window("abcdef", 4, 4), ("bcde", 3));
    }

    #[test]
    fn scroll_window_cursor_at_start_shows_head() {
        assert_eq!(scroll_window("abcdef", 0, 4), ("abcd", 0));
        assert_eq!(scroll_window("abcdef", 3, 4), ("abcd", 3));
    }

    #[test]
    fn scroll_window_keeps_wide_graphemes_whole() {
        // 牛 and 奶 are two cells each
        let s = "牛奶牛奶";
        let (shown, col) = scroll_window(s, s.len(), 5);
        assert_eq!(shown, "牛奶");
        assert_eq!(col, 4);
        assert_eq!(scroll_window("abc", 3, 0), ("", 0));
    }
}
