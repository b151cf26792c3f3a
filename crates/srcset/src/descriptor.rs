//! Descriptor parser.
//!
//! [§ 4.8.4.3.10 Parse a srcset attribute](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute)
//!
//! Steps 9-15: "Descriptor parser". Every descriptor is a value followed by a
//! single classification letter. The first failing descriptor sets the error
//! flag and the whole candidate is dropped.

use strum_macros::{Display, EnumIter};

use crate::candidate::Candidate;
use crate::error::DescriptorError;

/// The classification letter ending a descriptor.
///
/// `Display` renders the letter itself, as it appears in the attribute.
/// Variants are declared in canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DescriptorKind {
    /// "If the last character in descriptor is U+0077 (w)"
    #[strum(serialize = "w")]
    Width,
    /// "If the last character in descriptor is U+0078 (x)"
    #[strum(serialize = "x")]
    Density,
    /// "If the last character in descriptor is U+0068 (h)"
    #[strum(serialize = "h")]
    Height,
}

impl DescriptorKind {
    /// Classify a descriptor by its last character. Matching is case-sensitive.
    #[must_use]
    pub const fn from_suffix(c: char) -> Option<Self> {
        match c {
            'w' => Some(Self::Width),
            'x' => Some(Self::Density),
            'h' => Some(Self::Height),
            _ => None,
        }
    }

    /// The classification letter.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Width => 'w',
            Self::Density => 'x',
            Self::Height => 'h',
        }
    }
}

/// Run the descriptor parser over one raw candidate.
///
/// Returns the accepted candidate, or the first error that set the error flag.
///
/// # Errors
///
/// Returns a [`DescriptorError`] if any descriptor is malformed, conflicts
/// with an earlier one, or if a height is given without a width. The caller
/// drops the candidate in that case.
pub fn parse_descriptors(
    url: &str,
    descriptors: &[String],
) -> Result<Candidate, DescriptorError> {
    // STEP 9-12: "Let error be no. Let width be absent. Let density be absent.
    // Let future-compat-h be absent."
    let mut candidate = Candidate::new(url);

    // STEP 13: "For each descriptor in descriptors, run the appropriate set of
    // steps from the following list"
    for descriptor in descriptors {
        apply_descriptor(&mut candidate, descriptor)?;
    }

    // STEP 14: "If future-compat-h is not absent and width is absent, let
    // error be yes."
    if candidate.height.is_some() && candidate.width.is_none() {
        return Err(DescriptorError::HeightWithoutWidth);
    }

    // STEP 15: "If error is still no, then append a new image source to candidates"
    Ok(candidate)
}

fn apply_descriptor(candidate: &mut Candidate, descriptor: &str) -> Result<(), DescriptorError> {
    let mut chars = descriptor.chars();
    let Some(suffix) = chars.next_back() else {
        return Err(DescriptorError::TooShort {
            descriptor: descriptor.to_string(),
        });
    };
    let value = chars.as_str();
    if value.is_empty() {
        return Err(DescriptorError::TooShort {
            descriptor: descriptor.to_string(),
        });
    }

    let Some(kind) = DescriptorKind::from_suffix(suffix) else {
        // "Anything else: Let error be yes."
        return Err(DescriptorError::UnknownKind {
            descriptor: descriptor.to_string(),
        });
    };

    match kind {
        // "If width and density are not both absent, then let error be yes."
        DescriptorKind::Width => {
            if candidate.width.is_some() || candidate.density.is_some() {
                return Err(DescriptorError::Conflict { kind });
            }
            candidate.width = Some(parse_dimension(kind, value)?);
        }
        // "If width, density and future-compat-h are not all absent, then let
        // error be yes."
        DescriptorKind::Density => {
            if candidate.width.is_some()
                || candidate.density.is_some()
                || candidate.height.is_some()
            {
                return Err(DescriptorError::Conflict { kind });
            }
            candidate.density = Some(parse_density(value)?);
        }
        // "If future-compat-h and density are not both absent, then let error be yes."
        DescriptorKind::Height => {
            if candidate.height.is_some() || candidate.density.is_some() {
                return Err(DescriptorError::Conflict { kind });
            }
            candidate.height = Some(parse_dimension(kind, value)?);
        }
    }
    Ok(())
}

/// [§ 2.3.4.2 Non-negative integers](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#non-negative-integers)
///
/// "Apply the rules for parsing non-negative integers... If the result is
/// zero, let error be yes."
///
/// Only ASCII digits are accepted, so signs, exponents and fractions fail.
/// The digits are not converted, which keeps arbitrarily long values valid.
fn parse_dimension(kind: DescriptorKind, value: &str) -> Result<String, DescriptorError> {
    let all_digits = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    let non_zero = value.bytes().any(|b| b != b'0');
    if all_digits && non_zero {
        Ok(value.to_string())
    } else {
        Err(DescriptorError::InvalidInteger {
            kind,
            value: value.to_string(),
        })
    }
}

/// [§ 2.3.4.3 Floating-point numbers](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#floating-point-numbers)
///
/// "If the descriptor consists of a valid floating-point number... If the
/// result is less than zero, let error be yes."
///
/// `-0` is not less than zero and is kept. A leading `+`, a trailing `.`,
/// and the `inf`/`NaN` spellings the Rust float parser understands are all
/// rejected.
fn parse_density(value: &str) -> Result<String, DescriptorError> {
    let invalid = || DescriptorError::InvalidDensity {
        value: value.to_string(),
    };

    if value.starts_with('+') || value.ends_with('.') {
        return Err(invalid());
    }
    let number: f64 = value.parse().map_err(|_| invalid())?;
    if number < 0.0 || !number.is_finite() {
        return Err(invalid());
    }
    Ok(value.to_string())
}
