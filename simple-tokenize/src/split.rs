//! Splitting functions.

use crate::separator::{AnyOf, Separator};

/// Split `input` into the non-empty runs between separator characters.
///
/// Leading, trailing and repeated separators never produce empty tokens.
pub fn tokenize<S: Separator + ?Sized>(input: &str, separator: &S) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start_matches(|c: char| separator.is_separator(c));
        if rest.is_empty() {
            break;
        }
        let end = rest
            .find(|c: char| separator.is_separator(c))
            .unwrap_or(rest.len());
        tokens.push(rest[..end].to_string());
        rest = &rest[end..];
    }

    tokens
}

/// Tokenize and pick the token at `index`.
pub fn nth_token<S: Separator + ?Sized>(
    input: &str,
    separator: &S,
    index: usize,
) -> Option<String> {
    tokenize(input, separator).into_iter().nth(index)
}

/// Tokenize every string of a list with the same separator.
pub fn tokenize_each<T, S>(inputs: &[T], separator: &S) -> Vec<Vec<String>>
where
    T: AsRef<str>,
    S: Separator + ?Sized,
{
    inputs
        .iter()
        .map(|input| tokenize(input.as_ref(), separator))
        .collect()
}

/// Split on every occurrence of a literal `pattern`.
///
/// A single leading occurrence is dropped; everything else is kept, so a
/// trailing pattern yields a trailing empty piece. Empty input or an empty
/// pattern yields no pieces.
pub fn split_on_pattern(input: &str, pattern: &str) -> Vec<String> {
    if input.is_empty() || pattern.is_empty() {
        return Vec::new();
    }

    let rest = input.strip_prefix(pattern).unwrap_or(input);
    rest.split(pattern).map(str::to_string).collect()
}

/// Extract the text enclosed by the first `front` and the following `back`.
///
/// Returns an empty string when `input` lacks either delimiter.
pub fn between(input: &str, front: &str, back: &str) -> String {
    if !input.contains(front) || !input.contains(back) {
        return String::new();
    }

    let pieces = split_on_pattern(input, front);
    let index = if pieces.len() > 1 { 1 } else { 0 };
    pieces
        .get(index)
        .and_then(|piece| split_on_pattern(piece, back).into_iter().next())
        .unwrap_or_default()
}

/// Split on any character of `separators`, dropping empty tokens.
pub fn multi_tokenize(input: &str, separators: &str) -> Vec<String> {
    tokenize(input, &AnyOf::new(separators))
}

/// Split on any character of `separators`, emitting each separator as a
/// token of its own unless it also appears in `filter`.
pub fn split_keep_separators(input: &str, separators: &str, filter: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if separators.contains(c) {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            if !filter.contains(c) {
                tokens.push(c.to_string());
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
