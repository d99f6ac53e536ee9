use super::{BranchClass, Tracking};
use serde::Serialize;
use std::fmt;

/// Everything the prompt shows about one repository, recomputed per render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    pub branch_name: String,
    pub is_dirty: bool,
    pub ahead: u32,
    pub behind: u32,
    pub untracked: u32,
}

impl RepositoryStatus {
    pub fn new(branch_name: impl Into<String>) -> Self {
        RepositoryStatus {
            branch_name: branch_name.into(),
            is_dirty: false,
            ahead: 0,
            behind: 0,
            untracked: 0,
        }
    }

    pub fn with_tracking(mut self, tracking: Tracking) -> Self {
        self.ahead = tracking.ahead;
        self.behind = tracking.behind;
        self
    }

    pub fn tracking(&self) -> Tracking {
        Tracking::new(self.ahead, self.behind)
    }

    pub fn branch_class(&self) -> BranchClass {
        BranchClass::classify(&self.branch_name)
    }
}

impl fmt::Display for RepositoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {}, {} untracked",
            self.branch_name,
            if self.is_dirty { "dirty" } else { "clean" },
            self.tracking(),
            self.untracked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_json_shape() {
        let status = RepositoryStatus {
            is_dirty: true,
            untracked: 4,
            ..RepositoryStatus::new("main")
        }
        .with_tracking(Tracking::new(2, 5));

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "branch_name": "main",
                "is_dirty": true,
                "ahead": 2,
                "behind": 5,
                "untracked": 4
            })
        );
    }

    #[test]
    fn test_status_display() {
        let status = RepositoryStatus::new("feature").with_tracking(Tracking::new(1, 0));
        assert_eq!(
            status.to_string(),
            "feature (clean), ahead 1, behind 0, 0 untracked"
        );
    }
}
