//! Keyword highlighting shared by the search engine and the ANSI renderer.
//!
//! Matches are kept as character index ranges over the untouched text, so the
//! pristine string is never rewritten and can always be restored.
//!
//! # Example
//!
//! ```rust
//! use reactor_explorer::ui::helpers::match_ranges;
//!
//! assert_eq!(match_ranges("Page View", "view"), vec![(5, 9)]);
//! ```

use crate::ui::theme::Theme;
use regex::{Regex, RegexBuilder};
use std::io::{self, Write};

/// Characters escaped before a keyword is compiled into a pattern.
const REGEX_SPECIALS: &[char] = &[
    '-', '/', '\\', '^', '$', '*', '+', '?', '.', '(', ')', '|', '[', ']', '{', '}',
];

/// Escapes regex metacharacters in `keyword`.
#[must_use]
pub fn escape_keyword(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if REGEX_SPECIALS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive pattern matching `keyword` literally; `None` for an empty
/// keyword.
#[must_use]
pub fn keyword_regex(keyword: &str) -> Option<Regex> {
    if keyword.is_empty() {
        return None;
    }
    RegexBuilder::new(&escape_keyword(keyword))
        .case_insensitive(true)
        .build()
        .map_err(|e| tracing::warn!(error = %e, keyword = %keyword, "keyword pattern rejected"))
        .ok()
}

/// Character ranges `(start, end)` of every match of `keyword` in `text`.
#[must_use]
pub fn match_ranges(text: &str, keyword: &str) -> Vec<(usize, usize)> {
    keyword_regex(keyword).map_or_else(Vec::new, |regex| ranges_for(&regex, text))
}

/// Converts the byte offsets of `regex` matches into character ranges.
///
/// Matches arrive in increasing order, so one running count covers them all.
#[must_use]
pub fn ranges_for(regex: &Regex, text: &str) -> Vec<(usize, usize)> {
    let mut byte_pos = 0;
    let mut char_pos = 0;
    let mut advance = |byte: usize| {
        char_pos += text[byte_pos..byte].chars().count();
        byte_pos = byte;
        char_pos
    };
    regex
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| {
            let start = advance(m.start());
            (start, advance(m.end()))
        })
        .collect()
}

/// Text with the character ranges currently shown highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
    pub text: String,
    pub ranges: Vec<(usize, usize)>,
}

impl Highlighted {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ranges: Vec::new(),
        }
    }

    /// Highlights every match of `keyword`; an empty keyword highlights nothing.
    #[must_use]
    pub fn with_keyword(text: impl Into<String>, keyword: &str) -> Self {
        let text = text.into();
        let ranges = match_ranges(&text, keyword);
        Self { text, ranges }
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        !self.ranges.is_empty()
    }

    /// Splits at character index `at`, carrying each range to the side it
    /// covers (a range straddling the split is cut in two).
    #[must_use]
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        let chars: Vec<char> = self.text.chars().collect();
        let at = at.min(chars.len());
        let head = Self {
            text: chars[..at].iter().collect(),
            ranges: self
                .ranges
                .iter()
                .filter(|&&(start, _)| start < at)
                .map(|&(start, end)| (start, end.min(at)))
                .collect(),
        };
        let tail = Self {
            text: chars[at..].iter().collect(),
            ranges: self
                .ranges
                .iter()
                .filter(|&&(_, end)| end > at)
                .map(|&(start, end)| (start.saturating_sub(at), end - at))
                .collect(),
        };
        (head, tail)
    }

    /// The highlighted slices, in order.
    #[must_use]
    pub fn highlighted_parts(&self) -> Vec<String> {
        let chars: Vec<char> = self.text.chars().collect();
        self.ranges
            .iter()
            .map(|&(start, end)| chars[start.min(chars.len())..end.min(chars.len())].iter().collect())
            .collect()
    }
}

/// Writes text with highlighted character ranges.
///
/// Highlighted sections use the match colors; after each one `restore` is
/// written so the surrounding style continues.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_highlighted<W: Write + ?Sized>(
    out: &mut W,
    text: &Highlighted,
    theme: &Theme,
    restore: &str,
) -> io::Result<()> {
    if text.ranges.is_empty() {
        return write!(out, "{}", text.text);
    }

    let chars: Vec<char> = text.text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in &text.ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            write!(out, "{normal_section}")?;
        }

        write!(out, "{}", Theme::fg(&theme.colors.match_highlight_fg))?;
        write!(out, "{}", Theme::bg(&theme.colors.match_highlight_bg))?;
        let highlighted_section: String = chars[start.max(current_pos)..end].iter().collect();
        write!(out, "{highlighted_section}")?;
        write!(out, "{}{restore}", Theme::reset())?;

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        write!(out, "{remaining}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metacharacters_match_literally() {
        assert_eq!(escape_keyword("a.b(c)"), "a\\.b\\(c\\)");
        assert_eq!(match_ranges("x = a.b(c) + axb(c)", "a.b(c)"), vec![(4, 10)]);
        assert_eq!(match_ranges("path/to/[x]", "/[x]"), vec![(7, 11)]);
    }

    #[test]
    fn matching_is_case_insensitive_and_global() {
        assert_eq!(match_ranges("View the view", "VIEW"), vec![(0, 4), (9, 13)]);
    }

    #[test]
    fn ranges_count_characters_not_bytes() {
        assert_eq!(match_ranges("héllo wörld", "wö"), vec![(6, 8)]);
    }

    #[test]
    fn many_matches_in_multibyte_text_keep_their_offsets() {
        let text = "é-a ".repeat(500);
        let ranges = match_ranges(&text, "a");
        assert_eq!(ranges.len(), 500);
        assert_eq!(ranges[0], (2, 3));
        assert_eq!(ranges[499], (1998, 1999));
    }

    #[test]
    fn empty_keyword_highlights_nothing() {
        assert!(match_ranges("anything", "").is_empty());
        assert!(!Highlighted::with_keyword("anything", "").is_highlighted());
    }

    #[test]
    fn highlighted_parts_keep_original_case() {
        let text = Highlighted::with_keyword("Page View / pageview", "view");
        assert_eq!(text.highlighted_parts(), vec!["View", "view"]);
    }

    #[test]
    fn split_cuts_straddling_ranges() {
        let text = Highlighted::with_keyword("ab cd", "b c");
        let (head, tail) = text.split_at(2);
        assert_eq!(head, Highlighted { text: "ab".into(), ranges: vec![(1, 2)] });
        assert_eq!(tail, Highlighted { text: " cd".into(), ranges: vec![(0, 2)] });
    }

    #[test]
    fn written_output_wraps_matches_in_highlight_colors() {
        let theme = Theme::default();
        let mut out = Vec::new();

        write_highlighted(&mut out, &Highlighted::with_keyword("a-b-a", "a"), &theme, "").unwrap();

        let rendered = String::from_utf8(out).unwrap();
        let marker = Theme::bg(&theme.colors.match_highlight_bg);
        assert_eq!(rendered.matches(&marker).count(), 2);
        assert!(rendered.contains("-b-"));
    }
}
