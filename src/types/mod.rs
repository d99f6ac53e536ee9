pub mod shell;
pub mod status;
pub mod theme;
pub mod tracking;

pub use shell::Shell;
pub use status::RepositoryStatus;
pub use theme::{BranchClass, PromptTheme, SemanticColor};
pub use tracking::Tracking;
