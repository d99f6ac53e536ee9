use crate::constants::ENV_LOG;
use std::env;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber when `GIT_PROMPT_LOG` is set.
///
/// Without it nothing is logged; anything written to the terminal during a
/// prompt render ends up in front of the user.
pub fn init() {
    let Ok(directive) = env::var(ENV_LOG) else {
        return;
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("git-prompt: invalid {} '{}': {}", ENV_LOG, directive, e);
        EnvFilter::new("warn")
    });

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
