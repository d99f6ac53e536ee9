use serde::Serialize;
use std::fmt;

/// Commit counts relative to the configured upstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tracking {
    pub ahead: u32,
    pub behind: u32,
}

impl Tracking {
    pub fn new(ahead: u32, behind: u32) -> Self {
        Tracking { ahead, behind }
    }

    /// Parse the `## ...` header line of `git status --porcelain -b`.
    ///
    /// The header has the shape `## <branch>[...<upstream>[ [<info>]]]` where
    /// `<info>` is one of `ahead N`, `behind N`, `ahead N, behind M` or `gone`.
    /// Anything else (no upstream, unborn branch, detached HEAD, unexpected
    /// text) yields zero counts.
    pub fn from_header(header: &str) -> Self {
        Self::parse_header(header).unwrap_or_default()
    }

    fn parse_header(header: &str) -> Option<Self> {
        let rest = header.trim_end().strip_prefix("## ")?;

        // No "..." means no upstream is configured
        let (_, upstream) = rest.split_once("...")?;
        let (_, info) = upstream.split_once(" [")?;
        let info = info.strip_suffix(']')?;

        // First match wins: ahead only, behind only, then combined
        if let Some(ahead) = info.strip_prefix("ahead ").and_then(parse_count) {
            return Some(Tracking::new(ahead, 0));
        }
        if let Some(behind) = info.strip_prefix("behind ").and_then(parse_count) {
            return Some(Tracking::new(0, behind));
        }

        let (ahead, behind) = info.split_once(", ")?;
        Some(Tracking::new(
            ahead.strip_prefix("ahead ").and_then(parse_count)?,
            behind.strip_prefix("behind ").and_then(parse_count)?,
        ))
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}

// Strict digits only, so "2, behind 5" is rejected by the single-count forms
fn parse_count(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Tracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ahead {}, behind {}", self.ahead, self.behind)
    }
}
