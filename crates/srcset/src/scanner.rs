//! Scanning primitives shared by the tokenizer.
//!
//! [§ 2.3 Collect a sequence of code points](https://infra.spec.whatwg.org/#collect-a-sequence-of-code-points)
//!
//! Both helpers operate on a slice of code points and an index into it, so
//! positions always count Unicode scalar values rather than bytes.

/// [§ 4.6 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
///
/// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR,
/// or U+0020 SPACE."
pub const ASCII_WHITESPACE: [char; 5] = ['\t', '\n', '\x0C', '\r', ' '];

/// ASCII whitespace plus U+002C COMMA, skipped between candidates.
pub const WHITESPACE_OR_COMMA: [char; 6] = ['\t', '\n', '\x0C', '\r', ' ', ','];

/// Returns true for the five ASCII whitespace code points only.
///
/// U+000B VERTICAL TAB and the Unicode space separators are not included.
#[must_use]
pub const fn is_ascii_whitespace(c: char) -> bool {
    // "U+0009 TAB, U+000A LF, U+000C FF, U+000D CR, or U+0020 SPACE"
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// Collect the maximal run of code points in `set`, starting at `start`.
///
/// Returns the position just past the run together with the run itself.
/// Stops at end of input; a `start` past the end yields an empty run.
#[must_use]
pub fn collect_while_in<'a>(input: &'a [char], start: usize, set: &[char]) -> (usize, &'a [char]) {
    collect_while(input, start, |c| set.contains(&c))
}

/// Collect the maximal run of code points NOT in `set`, starting at `start`.
///
/// Returns the position just past the run together with the run itself.
#[must_use]
pub fn collect_while_out<'a>(
    input: &'a [char],
    start: usize,
    set: &[char],
) -> (usize, &'a [char]) {
    collect_while(input, start, |c| !set.contains(&c))
}

fn collect_while<'a>(
    input: &'a [char],
    start: usize,
    predicate: impl Fn(char) -> bool,
) -> (usize, &'a [char]) {
    let start = start.min(input.len());
    let len = input[start..]
        .iter()
        .take_while(|&&c| predicate(c))
        .count();
    let end = start + len;
    (end, &input[start..end])
}
