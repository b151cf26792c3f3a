//! `srcset` attribute parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Parse a srcset attribute** ([WHATWG § 4.8.4.3.10](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute))
//!   - URL collection with trailing-comma splitting
//!   - The descriptor tokenizer (in descriptor, in parens, after descriptor)
//!   - Width (`w`), pixel density (`x`) and height (`h`) descriptor validation
//!   - Error recovery: invalid candidates are dropped, never fatal
//!
//! - **Canonical serialization** of the accepted candidates, with descriptor
//!   values preserved exactly as written.
//!
//! # Example
//!
//! ```
//! use srcset::SrcSet;
//!
//! let mut srcset = SrcSet::new("data:,a  1x  , data:,b 1w");
//! let candidates = srcset.parse();
//! assert_eq!(candidates.len(), 2);
//! assert_eq!(candidates[0].density.as_deref(), Some("1"));
//! assert_eq!(srcset.stringify().unwrap(), "data:,a 1x, data:,b 1w");
//! ```

/// Accepted image candidates.
pub mod candidate;
/// Descriptor classification and validation.
pub mod descriptor;
/// Error types.
pub mod error;
/// The parser instance tying tokenizer, validator and serializer together.
pub mod parser;
/// Code-point scanning primitives.
pub mod scanner;
/// Canonical serialization.
pub mod serializer;
/// Splits raw input into URL and descriptor-token groups.
pub mod tokenizer;

pub use candidate::Candidate;
pub use descriptor::{DescriptorKind, parse_descriptors};
pub use error::{DescriptorError, SrcsetError};
pub use parser::{ParseIssue, SrcSet, parse_srcset};
pub use serializer::serialize;
pub use tokenizer::{DescriptorState, RawCandidate, SrcsetTokenizer};
