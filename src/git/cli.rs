use super::{GitQuery, GitSnapshot};
use crate::constants::DEFAULT_QUERY_TIMEOUT;
use crate::error::{PromptError, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs git queries as subprocesses in one working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    dir: PathBuf,
    timeout: Duration,
}

impl GitCli {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        GitCli {
            program: OsString::from("git"),
            dir: dir.into(),
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different executable in place of `git`
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Run one query and return its stdout.
    ///
    /// The child is killed if it outlives the timeout.
    pub async fn run(&self, query: GitQuery) -> Result<String> {
        let output = Command::new(&self.program)
            .args(query.args())
            .current_dir(&self.dir)
            // Keep status from taking the index lock on every prompt
            .env("GIT_OPTIONAL_LOCKS", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, output).await {
            Ok(result) => result.map_err(|source| PromptError::GitSpawn { query, source })?,
            Err(_) => {
                return Err(PromptError::GitTimeout {
                    query,
                    timeout: self.timeout,
                });
            }
        };

        if !output.status.success() {
            return Err(PromptError::GitExit {
                query,
                status: output.status,
            });
        }

        String::from_utf8(output.stdout).map_err(|source| PromptError::GitOutput { query, source })
    }

    /// Like [`GitCli::run`], with failures logged and folded into `None`
    pub async fn query(&self, query: GitQuery) -> Option<String> {
        match self.run(query).await {
            Ok(stdout) => Some(stdout),
            Err(e) => {
                debug!(error = %e, dir = %self.dir.display(), "git query failed");
                None
            }
        }
    }

    /// Collect everything a render needs.
    ///
    /// The branch query runs first; outside a repository the remaining
    /// queries are skipped.
    pub async fn snapshot(&self) -> GitSnapshot {
        let branch = self.query(GitQuery::CurrentBranch).await;
        if branch.as_deref().is_none_or(|b| b.trim().is_empty()) {
            return GitSnapshot::default();
        }

        let (porcelain, porcelain_with_branch, untracked_files) = tokio::join!(
            self.query(GitQuery::Porcelain),
            self.query(GitQuery::PorcelainWithBranch),
            self.query(GitQuery::UntrackedFiles),
        );

        GitSnapshot {
            current_branch: branch,
            porcelain,
            porcelain_with_branch,
            untracked_files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let git = GitCli::new(".").with_program("git-prompt-no-such-binary");
        let err = git.run(GitQuery::CurrentBranch).await.unwrap_err();
        assert!(matches!(err, PromptError::GitSpawn { .. }));
        assert!(git.query(GitQuery::CurrentBranch).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_program_gives_empty_snapshot() {
        let git = GitCli::new(".").with_program("git-prompt-no-such-binary");
        assert_eq!(git.snapshot().await, GitSnapshot::default());
    }

    #[tokio::test]
    async fn test_missing_directory_is_spawn_error() {
        let git = GitCli::new("/definitely/not/a/real/dir");
        assert!(git.query(GitQuery::Porcelain).await.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_slow_query_is_killed_after_timeout() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::Instant;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("slow-git");
        std::fs::write(&script, "#!/bin/sh\nexec sleep 5\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let git = GitCli::new(dir.path())
            .with_program(script.as_os_str())
            .with_timeout(Duration::from_millis(100));

        let started = Instant::now();
        let err = git.run(GitQuery::CurrentBranch).await.unwrap_err();
        assert!(matches!(
            err,
            PromptError::GitTimeout {
                query: GitQuery::CurrentBranch,
                ..
            }
        ));
        assert!(started.elapsed() < Duration::from_secs(2));

        let started = Instant::now();
        assert_eq!(git.snapshot().await, GitSnapshot::default());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_builder_settings() {
        let git = GitCli::new("/tmp").with_timeout(Duration::from_millis(50));
        assert_eq!(git.dir, PathBuf::from("/tmp"));
        assert_eq!(git.timeout, Duration::from_millis(50));
    }
}
