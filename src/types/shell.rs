use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Prompt host that consumes the rendered segment.
///
/// Escape sequences have no printable width, so each shell needs them wrapped
/// in its own zero-width markers or line editing miscounts the prompt length.
/// Bash gets readline's raw ignore markers rather than `\[ \]`, because the
/// segment reaches `PS1` through a variable expansion and `\[` is only decoded
/// in literal prompt text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    #[default]
    Bash,
    Zsh,
    /// No markers, for hosts that measure escapes themselves
    Plain,
}

impl Shell {
    /// Wrap a raw escape sequence in zero-width markers
    pub fn zero_width(&self, escape: &str) -> String {
        match self {
            Shell::Bash => format!("\x01{}\x02", escape),
            Shell::Zsh => format!("%{{{}%}}", escape),
            Shell::Plain => escape.to_string(),
        }
    }

    /// Escape printable text so the shell shows it literally
    pub fn escape_text(&self, text: &str) -> String {
        match self {
            Shell::Zsh => text.replace('%', "%%"),
            Shell::Bash | Shell::Plain => text.to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Plain => "plain",
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "plain" | "none" => Ok(Shell::Plain),
            other => Err(format!("unknown shell '{}'", other)),
        }
    }
}
