use crate::git::GitQuery;
use crate::types::Shell;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    // git subprocess errors
    #[error("Failed to run `git {query}`")]
    GitSpawn {
        query: GitQuery,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {query}` exited with {status}")]
    GitExit { query: GitQuery, status: ExitStatus },

    #[error("`git {query}` timed out after {timeout:?}")]
    GitTimeout { query: GitQuery, timeout: Duration },

    #[error("`git {query}` produced non-UTF-8 output")]
    GitOutput {
        query: GitQuery,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // Configuration errors
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for environment variable '{var}': {value}")]
    EnvVarInvalid { var: String, value: String },

    // Output errors
    #[error("No prompt hook available for shell '{0}'")]
    UnsupportedShell(Shell),

    #[error("Failed to serialize repository status")]
    StatusSerialize(#[from] serde_json::Error),

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PromptError>;
