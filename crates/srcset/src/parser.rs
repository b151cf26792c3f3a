//! The `srcset` parser instance.
//!
//! [`SrcSet`] holds one raw attribute value and the candidate list computed
//! from it. Parsing never fails: invalid candidates are dropped and recorded
//! as [`ParseIssue`]s.

use crate::candidate::Candidate;
use crate::descriptor::parse_descriptors;
use crate::error::{DescriptorError, SrcsetError};
use crate::serializer::serialize;
use crate::tokenizer::SrcsetTokenizer;

/// A candidate that was dropped while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// URL of the dropped candidate.
    pub url: String,
    /// Code-point index where the URL starts in the raw input.
    pub position: usize,
    /// Why the descriptor parser set its error flag.
    pub error: DescriptorError,
}

/// A `srcset` attribute value and its parsed candidates.
///
/// # Example
///
/// ```
/// use srcset::SrcSet;
///
/// let mut srcset = SrcSet::new("data:,a 1h 1w");
/// assert_eq!(srcset.parse()[0].width.as_deref(), Some("1"));
/// assert_eq!(srcset.stringify().unwrap(), "data:,a 1w 1h");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrcSet {
    raw: String,
    candidates: Option<Vec<Candidate>>,
    issues: Vec<ParseIssue>,
}

impl SrcSet {
    /// Store a raw attribute value. Nothing is parsed yet.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            candidates: None,
            issues: Vec::new(),
        }
    }

    /// The raw attribute value, exactly as given.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// [§ 4.8.4.3.10 Parse a srcset attribute](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute)
    ///
    /// Parse the raw value, store the result and return it. Each call starts
    /// from scratch, so repeated calls give the same candidates and issues.
    pub fn parse(&mut self) -> &[Candidate] {
        // STEP 3: "Let candidates be an initially empty source set."
        let mut candidates = Vec::new();
        self.issues.clear();

        for raw in SrcsetTokenizer::new(&self.raw) {
            match parse_descriptors(&raw.url, &raw.descriptors) {
                Ok(candidate) => candidates.push(candidate),
                Err(error) => self.issues.push(ParseIssue {
                    url: raw.url,
                    position: raw.position,
                    error,
                }),
            }
        }

        self.candidates.insert(candidates)
    }

    /// Candidates from the most recent [`parse`](Self::parse), or `None` if
    /// it has not run.
    #[must_use]
    pub fn candidates(&self) -> Option<&[Candidate]> {
        self.candidates.as_deref()
    }

    /// Candidates dropped by the most recent [`parse`](Self::parse).
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Consume the parser, returning the parsed candidates (empty if
    /// [`parse`](Self::parse) never ran).
    #[must_use]
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates.unwrap_or_default()
    }

    /// Canonical serialization of the most recently parsed candidates.
    ///
    /// # Errors
    ///
    /// Returns [`SrcsetError::NotParsed`] if [`parse`](Self::parse) has not
    /// been called.
    pub fn stringify(&self) -> Result<String, SrcsetError> {
        self.candidates
            .as_deref()
            .map(serialize)
            .ok_or(SrcsetError::NotParsed)
    }
}

/// Parse a `srcset` value in one call.
#[must_use]
pub fn parse_srcset(raw: &str) -> Vec<Candidate> {
    let mut srcset = SrcSet::new(raw);
    let _ = srcset.parse();
    srcset.into_candidates()
}
