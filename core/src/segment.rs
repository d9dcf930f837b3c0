//! Display segments produced by the annotators.
//!
//! A segment is either a run of plain text or a highlighted run carrying a
//! tooltip. Segments are ordered left to right and consecutive segments are
//! separated by exactly one [`SEGMENT_SEPARATOR`], so joining them with the
//! separator reproduces the original text byte for byte.

use serde::{Deserialize, Serialize};

/// Separator a renderer places between consecutive segments.
pub const SEGMENT_SEPARATOR: &str = " ";

/// A unit of render output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Text shown as-is
    Plain { text: String },
    /// Flagged text; `tooltip` holds the correction and its explanation
    Highlighted { text: String, tooltip: String },
}

impl Segment {
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Segment::Plain { text: text.into() }
    }

    pub fn highlighted<T: Into<String>, U: Into<String>>(text: T, tooltip: U) -> Self {
        Segment::Highlighted {
            text: text.into(),
            tooltip: tooltip.into(),
        }
    }

    /// The original text covered by this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Highlighted { text, .. } => text,
        }
    }

    /// Tooltip of a highlighted segment, `None` for plain text.
    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Highlighted { tooltip, .. } => Some(tooltip),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted { .. })
    }
}

/// Concatenate segment texts, ignoring highlights.
///
/// For any annotator output this equals the text that was annotated.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::text)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Number of highlighted segments in `segments`.
pub fn highlighted_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.is_highlighted()).count()
}
