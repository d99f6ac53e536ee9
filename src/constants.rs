use std::time::Duration;

/// Shown in place of the branch name when HEAD points directly at a commit
pub const DETACHED_HEAD_MARKER: &str = "(detached-HEAD)";

/// What `git rev-parse --abbrev-ref HEAD` prints for an unnamed ref
pub const GIT_DETACHED_SENTINEL: &str = "HEAD";

/// Branch names rendered in the red family (case-sensitive, exact match)
pub const PROTECTED_BRANCHES: [&str; 6] = ["master", "main", "trunk", "root", "prod", "production"];

/// Upper bound for a single git query before it is killed
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(500);

// Glyphs for the extra status groups
pub const AHEAD_GLYPH: char = '↑';
pub const BEHIND_GLYPH: char = '↓';
pub const UNTRACKED_GLYPH: char = '?';

// Environment variables
pub const ENV_LOG: &str = "GIT_PROMPT_LOG";
pub const ENV_SHELL: &str = "GIT_PROMPT_SHELL";
pub const ENV_TIMEOUT_MS: &str = "GIT_PROMPT_TIMEOUT_MS";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
