//! Stateless search and replace over a buffer's full text.
//!
//! All offsets are byte offsets into the UTF-8 text, the same units FLTK's
//! `TextBuffer` selection API uses.

use std::ops::Range;

use regex_lite::Regex;

/// Result of a single "Replace" press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The selection matched and was replaced; `caret` sits after the replacement.
    Replaced { text: String, caret: usize },
    /// The selection did not match; the next match should be selected instead.
    Found(Range<usize>),
    NotFound,
}

/// Length in bytes of the match of `needle` at byte offset `at`, if any.
///
/// Case-insensitive comparison pairs characters one-to-one on their
/// lower-case forms, so the returned length is measured in the original text.
fn match_len_at(text: &str, at: usize, needle: &str, match_case: bool) -> Option<usize> {
    let hay = &text[at..];
    if match_case {
        return hay.starts_with(needle).then_some(needle.len());
    }

    let mut hay_chars = hay.char_indices();
    for n in needle.chars() {
        let (_, h) = hay_chars.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
    }
    Some(hay_chars.next().map_or(hay.len(), |(i, _)| i))
}

/// First match of `needle` at or after byte offset `from` (a char boundary).
fn find_from(text: &str, needle: &str, from: usize, match_case: bool) -> Option<Range<usize>> {
    if needle.is_empty() || from > text.len() {
        return None;
    }

    if match_case {
        return text[from..]
            .find(needle)
            .map(|pos| from + pos..from + pos + needle.len());
    }

    text[from..].char_indices().find_map(|(i, _)| {
        let at = from + i;
        match_len_at(text, at, needle, false).map(|len| at..at + len)
    })
}

/// Byte offset reached by stepping `chars` characters forward from `start`.
fn advance_chars(text: &str, start: usize, chars: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(i, _)| start + i)
}

/// Find the first occurrence of `query`, always scanning from the start of the text.
///
/// With `whole_word` the query is wrapped in literal `\b` markers and searched
/// as plain text; no pattern interpretation takes place. The returned range
/// starts at the match and spans as many characters as `query` has.
pub fn find_next(text: &str, query: &str, match_case: bool, whole_word: bool) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }

    if whole_word {
        let marked = format!("\\b{}\\b", query);
        let found = find_from(text, &marked, 0, match_case)?;
        let end = advance_chars(text, found.start, query.chars().count());
        return Some(found.start..end);
    }

    find_from(text, query, 0, match_case)
}

/// Whether the selected text is the query under the case policy.
pub fn selection_matches(selected: &str, query: &str, match_case: bool) -> bool {
    if match_case {
        return selected == query;
    }
    !query.is_empty() && match_len_at(selected, 0, query, false) == Some(selected.len())
}

/// "Replace" button semantics.
///
/// Replaces the selection only when it already equals the query; otherwise
/// nothing is mutated and the next match is reported for selection.
pub fn replace_one(
    text: &str,
    selection: Option<Range<usize>>,
    query: &str,
    replacement: &str,
    match_case: bool,
) -> ReplaceOutcome {
    if let Some(sel) = selection.filter(|r| r.start < r.end && r.end <= text.len()) {
        if let Some(selected) = text.get(sel.clone()) {
            if selection_matches(selected, query, match_case) {
                let mut new_text = String::with_capacity(text.len() + replacement.len());
                new_text.push_str(&text[..sel.start]);
                new_text.push_str(replacement);
                new_text.push_str(&text[sel.end..]);
                return ReplaceOutcome::Replaced {
                    text: new_text,
                    caret: sel.start + replacement.len(),
                };
            }
        }
    }

    match find_next(text, query, match_case, false) {
        Some(range) => ReplaceOutcome::Found(range),
        None => ReplaceOutcome::NotFound,
    }
}

/// Replace every non-overlapping occurrence, scanning left to right.
///
/// With `match_case` the query is a literal substring. Without it the query
/// is a case-insensitive pattern, and `$n` in the replacement refers to its
/// capture groups. A pattern that does not compile replaces nothing.
///
/// Returns (new_text, count_of_replacements)
pub fn replace_all(text: &str, query: &str, replacement: &str, match_case: bool) -> (String, usize) {
    if query.is_empty() {
        return (text.to_string(), 0);
    }

    if !match_case {
        return replace_all_pattern(text, query, replacement);
    }

    let mut result = String::with_capacity(text.len());
    let mut count = 0;
    let mut pos = 0;

    while let Some(found) = find_from(text, query, pos, true) {
        result.push_str(&text[pos..found.start]);
        result.push_str(replacement);
        pos = found.end;
        count += 1;
    }
    result.push_str(&text[pos..]);

    (result, count)
}

fn replace_all_pattern(text: &str, pattern: &str, replacement: &str) -> (String, usize) {
    let re = match Regex::new(&format!("(?i){}", pattern)) {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!(pattern, error = %e, "Invalid replace pattern");
            return (text.to_string(), 0);
        }
    };

    let count = re.find_iter(text).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (re.replace_all(text, replacement).into_owned(), count)
}
