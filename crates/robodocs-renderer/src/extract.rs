//! Fenced markdown block extraction.
//!
//! Source documents wrap the publishable markdown in a fence opened by
//! `` ```markdown `` on its own line. Extraction slices that block out of
//! the document; when the expected structure is missing the whole
//! document is returned untouched.

use std::fmt;
use std::str::FromStr;

/// Opening marker: a `markdown` fence followed by a line feed.
pub const START_MARKER: &str = "```markdown\n";

/// Bare fence used as the closing marker.
pub const FENCE: &str = "```";

/// How the closing fence is located.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ExtractPolicy {
    /// Close at the last bare fence anywhere in the document.
    #[default]
    LastFence,
    /// Close at the first bare fence after the opening marker.
    FirstFenceAfterStart,
}

impl ExtractPolicy {
    /// Policy name as used in configuration and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LastFence => "last-fence",
            Self::FirstFenceAfterStart => "first-fence-after-start",
        }
    }
}

impl fmt::Display for ExtractPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, thiserror::Error)]
#[error("unknown extraction policy `{0}` (expected `last-fence` or `first-fence-after-start`)")]
pub struct ParsePolicyError(String);

impl FromStr for ExtractPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-fence" => Ok(Self::LastFence),
            "first-fence-after-start" => Ok(Self::FirstFenceAfterStart),
            other => Err(ParsePolicyError(other.to_owned())),
        }
    }
}

/// Outcome of an extraction.
///
/// Both variants borrow from the source document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extraction<'a> {
    /// Trimmed contents of the fenced block.
    Block(&'a str),
    /// The full document, unchanged, because no valid block was found.
    Fallback(&'a str),
}

impl<'a> Extraction<'a> {
    /// Text to hand to the markdown renderer.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Block(text) | Self::Fallback(text) => text,
        }
    }

    /// Whether the fallback path was taken.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Extract the fenced markdown block using the given closing-fence policy.
///
/// The opening marker is always the first [`START_MARKER`]. The block is
/// valid only when a closing fence exists strictly after the opening one;
/// anything else yields [`Extraction::Fallback`] with the whole document.
#[must_use]
pub fn extract(content: &str, policy: ExtractPolicy) -> Extraction<'_> {
    let Some(start) = content.find(START_MARKER) else {
        return Extraction::Fallback(content);
    };
    let body_start = start + START_MARKER.len();

    let end = match policy {
        ExtractPolicy::LastFence => content.rfind(FENCE).filter(|&end| end > start),
        ExtractPolicy::FirstFenceAfterStart => content[body_start..]
            .find(FENCE)
            .map(|offset| body_start + offset),
    };

    match end {
        // A fence cannot begin inside the opening marker, so `end > start`
        // already implies `end >= body_start`.
        Some(end) if end >= body_start => Extraction::Block(content[body_start..end].trim()),
        _ => Extraction::Fallback(content),
    }
}

/// Extract the fenced markdown block, closing at the last bare fence.
///
/// Returns the trimmed block, or `content` unchanged when no valid block
/// exists.
///
/// # Examples
///
/// ```
/// use robodocs_renderer::extract_markdown;
///
/// let doc = "intro\n```markdown\n# Title\nbody\n```\noutro";
/// assert_eq!(extract_markdown(doc), "# Title\nbody");
/// assert_eq!(extract_markdown("no fences here"), "no fences here");
/// ```
#[must_use]
pub fn extract_markdown(content: &str) -> &str {
    extract(content, ExtractPolicy::LastFence).as_str()
}
