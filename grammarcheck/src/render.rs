//! Renderers for annotated segments.
//!
//! Terminal output prints plain segments literally and marks each highlighted
//! segment with a footnote number; the tooltips are listed under the text:
//!
//! ```text
//! The dog run[1] fast
//!
//!   [1] runs: subject-verb agreement
//! ```

use colored::Colorize;

use grammarcheck_core::{Segment, SEGMENT_SEPARATOR};

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Annotated text with footnoted tooltips
    #[default]
    Text,
    /// JSON array of segments
    Json,
}

/// Render segments for a terminal.
///
/// With `color` set, highlighted text is underlined in yellow and the footnote
/// markers are dimmed.
pub fn render_terminal(segments: &[Segment], color: bool) -> String {
    let mut body = String::new();
    let mut notes = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            body.push_str(SEGMENT_SEPARATOR);
        }
        match segment {
            Segment::Plain { text } => body.push_str(text),
            Segment::Highlighted { text, tooltip } => {
                notes.push(tooltip.as_str());
                let marker = format!("[{}]", notes.len());
                if color {
                    body.push_str(&format!("{}{}", text.yellow().underline(), marker.dimmed()));
                } else {
                    body.push_str(text);
                    body.push_str(&marker);
                }
            }
        }
    }

    if notes.is_empty() {
        return body;
    }

    body.push_str("\n\n");
    for (n, tooltip) in notes.iter().enumerate() {
        let marker = format!("[{}]", n + 1);
        if color {
            body.push_str(&format!("  {} {}\n", marker.yellow().bold(), tooltip));
        } else {
            body.push_str(&format!("  {} {}\n", marker, tooltip));
        }
    }
    body
}

/// Render segments as a pretty JSON array.
pub fn render_json(segments: &[Segment]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(segments)
}

/// Render in the requested format.
pub fn render(segments: &[Segment], format: OutputFormat, color: bool) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_terminal(segments, color)),
        OutputFormat::Json => render_json(segments),
    }
}
