//! String utilities for the domain layer.

/// Collapse every run of Unicode whitespace (including non-breaking spaces
/// and line breaks) into a single ASCII space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// Keep at most `max` sentences of `text`.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end of
/// the text. Returns the original text when it has `max` sentences or fewer.
pub fn first_sentences(text: &str, max: usize) -> &str {
    if max == 0 {
        return "";
    }

    let mut count = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some((_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            count += 1;
            if count == max {
                return &text[..idx + ch.len_utf8()];
            }
        }
    }
    text
}
