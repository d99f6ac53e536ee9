// Module declarations
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod git;
pub mod hook;
pub mod logger;
pub mod prompt;
pub mod types;

pub use config::Config;
pub use error::{PromptError, Result};
pub use formatting::Painter;
pub use git::{GitCli, GitQuery, GitSnapshot, StatusSource};
pub use types::{BranchClass, PromptTheme, RepositoryStatus, SemanticColor, Shell, Tracking};

use std::path::Path;

/// Render the prompt segment for `dir` with the given settings.
///
/// Returns `""` outside a repository or when git cannot be queried.
pub async fn render_prompt(dir: &Path, config: &Config) -> String {
    let snapshot = GitCli::new(dir).with_timeout(config.timeout).snapshot().await;
    prompt::compose(&snapshot, &Painter::new(config.shell, config.color))
}

/// Status for `dir`, or `None` outside a repository
pub async fn repository_status(dir: &Path, config: &Config) -> Option<RepositoryStatus> {
    let snapshot = GitCli::new(dir).with_timeout(config.timeout).snapshot().await;
    prompt::collect_status(&snapshot)
}
