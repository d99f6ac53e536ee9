use super::{GitQuery, StatusSource};

/// Captured output of every query for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitSnapshot {
    pub current_branch: Option<String>,
    pub porcelain: Option<String>,
    pub porcelain_with_branch: Option<String>,
    pub untracked_files: Option<String>,
}

impl StatusSource for GitSnapshot {
    fn output(&self, query: GitQuery) -> Option<String> {
        match query {
            GitQuery::CurrentBranch => self.current_branch.clone(),
            GitQuery::Porcelain => self.porcelain.clone(),
            GitQuery::PorcelainWithBranch => self.porcelain_with_branch.clone(),
            GitQuery::UntrackedFiles => self.untracked_files.clone(),
        }
    }
}
