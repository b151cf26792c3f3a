//! Canonical `srcset` serialization.
//!
//! Candidates are joined with `", "`. Each renders as its URL followed by the
//! descriptors that are present, always in `w`, `x`, `h` order, whatever
//! order they were written in.

use strum::IntoEnumIterator;

use crate::candidate::Candidate;
use crate::descriptor::DescriptorKind;

/// Separator between serialized candidates.
pub const CANDIDATE_SEPARATOR: &str = ", ";

/// Serialize a candidate list. An empty list serializes to `""`.
#[must_use]
pub fn serialize(candidates: &[Candidate]) -> String {
    let mut out = String::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if i > 0 {
            out.push_str(CANDIDATE_SEPARATOR);
        }
        write_candidate(candidate, &mut out);
    }
    out
}

/// Append the canonical form of one candidate to `out`.
pub(crate) fn write_candidate(candidate: &Candidate, out: &mut String) {
    out.push_str(&candidate.url);
    for kind in DescriptorKind::iter() {
        if let Some(value) = candidate.descriptor(kind) {
            out.push(' ');
            out.push_str(value);
            out.push(kind.suffix());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_url_only() {
        assert_eq!(serialize(&[Candidate::new("data:,a")]), "data:,a");
    }

    #[test]
    fn test_fixed_descriptor_order() {
        let candidate = Candidate {
            url: "a.png".to_string(),
            width: Some("100".to_string()),
            density: None,
            height: Some("50".to_string()),
        };
        assert_eq!(serialize(&[candidate]), "a.png 100w 50h");
    }

    #[test]
    fn test_values_are_written_verbatim() {
        let candidate = Candidate {
            url: "a.png".to_string(),
            density: Some("1.5e1".to_string()),
            ..Candidate::default()
        };
        assert_eq!(candidate.to_string(), "a.png 1.5e1x");
    }

    #[test]
    fn test_separator() {
        let list = [
            Candidate::new("a"),
            Candidate {
                url: "b".to_string(),
                density: Some("2".to_string()),
                ..Candidate::default()
            },
            Candidate::new("a"),
        ];
        assert_eq!(serialize(&list), "a, b 2x, a");
    }
}
