//! Candidate tokenizer.
//!
//! [§ 4.8.4.3.10 Parse a srcset attribute](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute)
//!
//! Steps 1-8 of the algorithm: split the input into URLs and descriptor
//! tokens. Validation of the tokens (steps 9-15) lives in
//! [`descriptor`](crate::descriptor).
//!
//! The tokenizer is an [`Iterator`] over [`RawCandidate`]s so the parser can
//! validate each group as soon as it is split off.

use std::iter::FusedIterator;
use std::mem;

use strum_macros::Display;

use crate::scanner::{
    ASCII_WHITESPACE, WHITESPACE_OR_COMMA, collect_while_in, collect_while_out,
    is_ascii_whitespace,
};

/// [§ 4.8.4.3.10 Parse a srcset attribute](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute)
///
/// Step 8 "Tokenize descriptors". Parenthesis tracking is single-depth: the
/// first `)` returns to [`DescriptorState::InDescriptor`] however many `(`
/// preceded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DescriptorState {
    /// "In descriptor"
    InDescriptor,
    /// "In parens"
    InParens,
    /// "After descriptor"
    AfterDescriptor,
}

/// A URL with its descriptor tokens, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    /// The URL with any trailing commas removed.
    pub url: String,
    /// Descriptor tokens in input order.
    pub descriptors: Vec<String>,
    /// Code-point index of the first character of the URL.
    pub position: usize,
}

/// Splits a `srcset` value into [`RawCandidate`]s.
pub struct SrcsetTokenizer {
    input: Vec<char>,
    position: usize,
    state: DescriptorState,
    current_descriptor: String,
    descriptors: Vec<String>,
    // When true, the next step of the descriptor loop does not advance.
    reconsume: bool,
}

impl SrcsetTokenizer {
    /// Create a tokenizer over `input`.
    ///
    /// The input is decoded once into code points; every position reported
    /// by the tokenizer is an index into that sequence.
    #[must_use]
    pub fn new(input: &str) -> Self {
        // STEP 1-2: "Let input be the value passed to this algorithm. Let
        // position be a pointer into input, initially pointing at the start
        // of the string."
        Self {
            input: input.chars().collect(),
            position: 0,
            state: DescriptorState::InDescriptor,
            current_descriptor: String::new(),
            descriptors: Vec::new(),
            reconsume: false,
        }
    }

    /// Current code-point position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Current descriptor tokenizer state.
    #[must_use]
    pub const fn state(&self) -> DescriptorState {
        self.state
    }

    /// Split off the next raw candidate, or `None` once the input is exhausted.
    pub fn next_candidate(&mut self) -> Option<RawCandidate> {
        // STEP 4: "Splitting loop: Collect a sequence of code points that are
        // ASCII whitespace or U+002C COMMA characters from input given position."
        self.position = collect_while_in(&self.input, self.position, &WHITESPACE_OR_COMMA).0;

        // STEP 5: "If position is past the end of input, return candidates."
        if self.position >= self.input.len() {
            return None;
        }

        // STEP 6: "Collect a sequence of code points that are not ASCII
        // whitespace from input given position, and let that be url."
        let url_start = self.position;
        let (end, url) = collect_while_out(&self.input, self.position, &ASCII_WHITESPACE);
        let mut url: String = url.iter().collect();
        self.position = end;

        // STEP 7: "Let descriptors be a new empty list."
        self.descriptors.clear();

        // STEP 8: "If url ends with U+002C (,), then: Remove all trailing
        // U+002C COMMA characters from url. If this removed more than one
        // character, that is a parse error."
        if url.ends_with(',') {
            let trimmed = url.trim_end_matches(',').len();
            url.truncate(trimmed);
        } else {
            self.tokenize_descriptors();
        }

        Some(RawCandidate {
            url,
            descriptors: mem::take(&mut self.descriptors),
            position: url_start,
        })
    }

    /// STEP 8 "Otherwise": the descriptor tokenizer.
    fn tokenize_descriptors(&mut self) {
        // STEP 8.1: "Descriptor tokenizer: Skip ASCII whitespace within input
        // given position."
        self.position = collect_while_in(&self.input, self.position, &ASCII_WHITESPACE).0;

        // STEP 8.2: "Let current descriptor be the empty string."
        self.current_descriptor.clear();

        // STEP 8.3: "Let state be in descriptor."
        self.switch_to(DescriptorState::InDescriptor);

        // STEP 8.4: "Let c be the character at position. Do the following
        // depending on the value of state. For the purpose of this step, 'EOF'
        // is a special character representing that position is past the end
        // of input."
        loop {
            let c = self.input.get(self.position).copied();

            match self.state {
                DescriptorState::InDescriptor => match c {
                    // "ASCII whitespace: If current descriptor is not empty,
                    // append current descriptor to descriptors, let current
                    // descriptor be the empty string, and set state to after
                    // descriptor."
                    Some(c) if is_ascii_whitespace(c) => {
                        if !self.current_descriptor.is_empty() {
                            self.emit_descriptor();
                            self.switch_to(DescriptorState::AfterDescriptor);
                        }
                    }
                    // "U+002C COMMA (,): Advance position to the next character
                    // in input. If current descriptor is not empty, append
                    // current descriptor to descriptors. Jump to the step
                    // labeled descriptor parser."
                    Some(',') => {
                        self.position += 1;
                        self.emit_descriptor();
                        return;
                    }
                    // "U+0028 LEFT PARENTHESIS ((): Append c to current
                    // descriptor. Set state to in parens."
                    Some('(') => {
                        self.current_descriptor.push('(');
                        self.switch_to(DescriptorState::InParens);
                    }
                    // "EOF: If current descriptor is not empty, append current
                    // descriptor to descriptors. Jump to the step labeled
                    // descriptor parser."
                    None => {
                        self.emit_descriptor();
                        return;
                    }
                    // "Anything else: Append c to current descriptor."
                    Some(c) => self.current_descriptor.push(c),
                },

                DescriptorState::InParens => match c {
                    // "U+0029 RIGHT PARENTHESIS ()): Append c to current
                    // descriptor. Set state to in descriptor."
                    Some(')') => {
                        self.current_descriptor.push(')');
                        self.switch_to(DescriptorState::InDescriptor);
                    }
                    // "EOF: Append current descriptor to descriptors. Jump to
                    // the step labeled descriptor parser."
                    None => {
                        self.emit_descriptor();
                        return;
                    }
                    // "Anything else: Append c to current descriptor."
                    Some(c) => self.current_descriptor.push(c),
                },

                DescriptorState::AfterDescriptor => match c {
                    // "ASCII whitespace: Stay in this state."
                    Some(c) if is_ascii_whitespace(c) => {}
                    // "EOF: Jump to the step labeled descriptor parser."
                    None => return,
                    // "Anything else: Set state to in descriptor. Set position
                    // to the previous character in input."
                    Some(_) => self.reconsume_in(DescriptorState::InDescriptor),
                },
            }

            // "Advance position to the next character in input. Repeat this step."
            if mem::take(&mut self.reconsume) {
                continue;
            }
            self.position += 1;
        }
    }

    /// "Set state to X"
    const fn switch_to(&mut self, new_state: DescriptorState) {
        self.state = new_state;
    }

    /// "Set state to X. Set position to the previous character in input."
    ///
    /// The loop then skips its advance, so the same character is processed
    /// again in the new state.
    const fn reconsume_in(&mut self, new_state: DescriptorState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// "Append current descriptor to descriptors" (only if it is not empty).
    fn emit_descriptor(&mut self) {
        if !self.current_descriptor.is_empty() {
            self.descriptors.push(mem::take(&mut self.current_descriptor));
        }
    }
}

impl Iterator for SrcsetTokenizer {
    type Item = RawCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_candidate()
    }
}

impl FusedIterator for SrcsetTokenizer {}
