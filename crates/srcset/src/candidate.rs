//! Image candidates.
//!
//! [§ 4.8.4.3.10 Parse a srcset attribute](https://html.spec.whatwg.org/multipage/images.html#parse-a-srcset-attribute)
//!
//! "Return candidates" - each accepted entry is an image source with at most
//! one width, one density and one height descriptor. Descriptor values keep
//! their source text so that serialization reproduces them exactly
//! (`1.5e1x` stays `1.5e1x`, never `15x`).

use std::fmt;

use serde::Serialize;

use crate::descriptor::DescriptorKind;
use crate::serializer::write_candidate;

/// One accepted image candidate.
///
/// Invariants (established by [`parse_descriptors`](crate::parse_descriptors)):
/// - `density` excludes both `width` and `height`
/// - `height` requires `width`
/// - `width` and `height` are non-empty ASCII digit strings with a non-zero value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    /// The image URL, copied verbatim.
    pub url: String,
    /// Width descriptor value (`<digits>w`), without the suffix.
    #[serde(rename = "w")]
    pub width: Option<String>,
    /// Pixel density descriptor value (`<float>x`), without the suffix.
    #[serde(rename = "x")]
    pub density: Option<String>,
    /// Height descriptor value (`<digits>h`), without the suffix.
    #[serde(rename = "h")]
    pub height: Option<String>,
}

impl Candidate {
    /// A candidate with no descriptors.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// The stored value text for one descriptor kind.
    #[must_use]
    pub fn descriptor(&self, kind: DescriptorKind) -> Option<&str> {
        match kind {
            DescriptorKind::Width => self.width.as_deref(),
            DescriptorKind::Density => self.density.as_deref(),
            DescriptorKind::Height => self.height.as_deref(),
        }
    }

    /// True if any descriptor is set.
    #[must_use]
    pub const fn has_descriptors(&self) -> bool {
        self.width.is_some() || self.density.is_some() || self.height.is_some()
    }

    /// The width as a number. `None` if unset or too large for `u64`.
    #[must_use]
    pub fn width_value(&self) -> Option<u64> {
        self.width.as_deref().and_then(|w| w.parse().ok())
    }

    /// The height as a number. `None` if unset or too large for `u64`.
    #[must_use]
    pub fn height_value(&self) -> Option<u64> {
        self.height.as_deref().and_then(|h| h.parse().ok())
    }

    /// The pixel density as a number. `None` if unset.
    #[must_use]
    pub fn density_value(&self) -> Option<f64> {
        self.density.as_deref().and_then(|x| x.parse().ok())
    }
}

impl fmt::Display for Candidate {
    /// Canonical form of a single candidate, e.g. `image.png 100w 50h`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_candidate(self, &mut out);
        f.write_str(&out)
    }
}
