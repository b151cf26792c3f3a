//! Error types for the srcset parser.
//!
//! Grammar errors never escape [`SrcSet::parse`](crate::SrcSet::parse): a
//! [`DescriptorError`] only explains why one candidate was dropped. The single
//! caller-facing error is [`SrcsetError`].

use thiserror::Error;

use crate::descriptor::DescriptorKind;

/// Errors returned to callers of the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SrcsetError {
    /// `stringify()` was called before `parse()` ever ran.
    #[error("srcset has not been parsed yet; call parse() before stringify()")]
    NotParsed,
}

/// [§ 4.8.4.3.10 Parse a srcset attribute](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute)
///
/// The reason a candidate's descriptors set the "error" flag (step 13), which
/// causes the whole candidate to be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A descriptor shorter than a value plus a classification letter.
    #[error("descriptor `{descriptor}` is too short")]
    TooShort {
        /// The offending descriptor token.
        descriptor: String,
    },

    /// The last character is not `w`, `x` or `h`.
    #[error("descriptor `{descriptor}` has an unknown kind")]
    UnknownKind {
        /// The offending descriptor token.
        descriptor: String,
    },

    /// A descriptor of this kind cannot follow those already seen.
    #[error("`{kind}` descriptor conflicts with an earlier descriptor")]
    Conflict {
        /// The kind that could not be applied.
        kind: DescriptorKind,
    },

    /// A `w` or `h` value that is not a valid non-negative integer greater than zero.
    #[error("`{value}` is not a valid `{kind}` value")]
    InvalidInteger {
        /// The kind being parsed (`w` or `h`).
        kind: DescriptorKind,
        /// The value text without its suffix.
        value: String,
    },

    /// An `x` value that is not a valid non-negative floating-point number.
    #[error("`{value}` is not a valid density")]
    InvalidDensity {
        /// The value text without its suffix.
        value: String,
    },

    /// An `h` descriptor with no accompanying `w` descriptor.
    #[error("height descriptor without a width descriptor")]
    HeightWithoutWidth,
}
