pub mod cli;
pub mod snapshot;

pub use cli::GitCli;
pub use snapshot::GitSnapshot;

use std::fmt;

/// The git invocations a render needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitQuery {
    /// `rev-parse --abbrev-ref HEAD`
    CurrentBranch,
    /// `status --porcelain`
    Porcelain,
    /// `status --porcelain -b`, first line is the branch header
    PorcelainWithBranch,
    /// `ls-files --others --exclude-standard`
    UntrackedFiles,
}

impl GitQuery {
    pub const ALL: [GitQuery; 4] = [
        GitQuery::CurrentBranch,
        GitQuery::Porcelain,
        GitQuery::PorcelainWithBranch,
        GitQuery::UntrackedFiles,
    ];

    pub fn args(self) -> &'static [&'static str] {
        match self {
            GitQuery::CurrentBranch => &["rev-parse", "--abbrev-ref", "HEAD"],
            GitQuery::Porcelain => &["status", "--porcelain"],
            GitQuery::PorcelainWithBranch => &["status", "--porcelain", "-b"],
            GitQuery::UntrackedFiles => &["ls-files", "--others", "--exclude-standard"],
        }
    }
}

impl fmt::Display for GitQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

/// Source of git query output.
///
/// `None` means the query failed for any reason (not a repository, git
/// missing, timeout). Callers treat failure as "nothing to show".
#[cfg_attr(test, mockall::automock)]
pub trait StatusSource {
    fn output(&self, query: GitQuery) -> Option<String>;
}
