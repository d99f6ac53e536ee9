use crate::constants::{DEFAULT_QUERY_TIMEOUT, ENV_NO_COLOR, ENV_SHELL, ENV_TIMEOUT_MS};
use crate::error::{PromptError, Result};
use crate::types::Shell;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// On-disk settings; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub shell: Option<Shell>,
    pub timeout_ms: Option<u64>,
    pub color: Option<bool>,
}

/// Effective settings for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub shell: Shell,
    pub timeout: Duration,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            shell: Shell::default(),
            timeout: DEFAULT_QUERY_TIMEOUT,
            color: true,
        }
    }
}

impl Config {
    /// Defaults, then the config file, then environment variables.
    ///
    /// Problems are logged and skipped so the prompt always renders.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = config_path() {
            match read_config_file(&path) {
                Ok(Some(file)) => config.apply_file(file),
                Ok(None) => {}
                Err(e) => warn!(error = %e, "ignoring config file"),
            }
        }

        if let Err(e) = config.apply_env(|var| env::var(var).ok()) {
            warn!(error = %e, "ignoring environment override");
        }

        config
    }

    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(shell) = file.shell {
            self.shell = shell;
        }
        if let Some(ms) = file.timeout_ms {
            self.timeout = Duration::from_millis(ms);
        }
        if let Some(color) = file.color {
            self.color = color;
        }
    }

    /// Apply overrides from `lookup`; valid variables are applied even if
    /// another one is rejected
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut first_error = None;

        if let Some(value) = lookup(ENV_SHELL) {
            match value.parse::<Shell>() {
                Ok(shell) => self.shell = shell,
                Err(_) => first_error = Some(invalid(ENV_SHELL, value)),
            }
        }

        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            match value.trim().parse::<u64>() {
                Ok(ms) => self.timeout = Duration::from_millis(ms),
                Err(_) => {
                    first_error.get_or_insert(invalid(ENV_TIMEOUT_MS, value));
                }
            }
        }

        // https://no-color.org: presence with any non-empty value disables color
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }

        first_error.map_or(Ok(()), Err)
    }
}

fn invalid(var: &str, value: String) -> PromptError {
    PromptError::EnvVarInvalid {
        var: var.to_string(),
        value,
    }
}

/// `~/.config/git-prompt/config.json`
pub fn config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".config").join("git-prompt").join("config.json"))
}

/// Read a config file; a missing file is `Ok(None)`
pub fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PromptError::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| PromptError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = read_config_file(&dir.path().join("config.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "shell": "zsh", "timeout_ms": 250 }"#).unwrap();

        let mut config = Config::default();
        config.apply_file(read_config_file(&path).unwrap().unwrap());

        assert_eq!(config.shell, Shell::Zsh);
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert!(config.color);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "shell": "fish" }"#).unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, PromptError::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "colour": false }"#).unwrap();

        assert!(read_config_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(lookup(&[
                ("GIT_PROMPT_SHELL", "plain"),
                ("GIT_PROMPT_TIMEOUT_MS", "1000"),
                ("NO_COLOR", "1"),
            ]))
            .unwrap();

        assert_eq!(
            config,
            Config {
                shell: Shell::Plain,
                timeout: Duration::from_secs(1),
                color: false,
            }
        );
    }

    #[test]
    fn test_empty_no_color_keeps_color() {
        let mut config = Config::default();
        config.apply_env(lookup(&[("NO_COLOR", "")])).unwrap();
        assert!(config.color);
    }

    #[test]
    fn test_invalid_env_reports_but_applies_rest() {
        let mut config = Config::default();
        let err = config
            .apply_env(lookup(&[
                ("GIT_PROMPT_SHELL", "fish"),
                ("GIT_PROMPT_TIMEOUT_MS", "75"),
            ]))
            .unwrap_err();

        assert!(matches!(err, PromptError::EnvVarInvalid { ref var, .. } if var == "GIT_PROMPT_SHELL"));
        assert_eq!(config.shell, Shell::Bash);
        assert_eq!(config.timeout, Duration::from_millis(75));
    }
}
