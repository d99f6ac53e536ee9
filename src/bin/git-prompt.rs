use clap::{Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use git_prompt::hook::init_script;
use git_prompt::{BranchClass, Config, RepositoryStatus, Result, Shell, logger};

#[derive(Parser, Debug)]
#[command(author, version, about = "Git status segment for shell prompts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the prompt segment for a directory (default)
    Render {
        /// Zero-width marker style for escape sequences
        #[arg(long, value_enum)]
        shell: Option<Shell>,

        /// Repository directory (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Emit no color escapes
        #[arg(long)]
        no_color: bool,
    },

    /// Print the repository status
    Status {
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print JSON instead of a summary line
        #[arg(long)]
        json: bool,
    },

    /// Print the shell code that installs the prompt hook
    Init {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();
    let mut config = Config::load();

    // colored detects the terminal unless color is turned off
    if !config.color {
        colored::control::set_override(false);
    }

    let command = cli.command.unwrap_or(Commands::Render {
        shell: None,
        dir: None,
        no_color: false,
    });

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Render {
            shell,
            dir,
            no_color,
        } => {
            if let Some(shell) = shell {
                config.shell = shell;
            }
            if no_color {
                config.color = false;
            }

            let segment = git_prompt::render_prompt(&working_dir(dir), &config).await;
            write!(stdout, "{}", segment)?;
        }
        Commands::Status { dir, json } => {
            if let Some(status) = git_prompt::repository_status(&working_dir(dir), &config).await {
                if json {
                    writeln!(stdout, "{}", serde_json::to_string(&status)?)?;
                } else {
                    writeln!(stdout, "{}", summary(&status))?;
                }
            }
        }
        Commands::Init { shell } => {
            let exe = env::current_exe()
                .ok()
                .and_then(|p| p.to_str().map(str::to_string))
                .unwrap_or_else(|| "git-prompt".to_string());
            write!(stdout, "{}", init_script(shell, &exe)?)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn working_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

// One-line human summary
fn summary(status: &RepositoryStatus) -> String {
    let branch = if status.branch_class() == BranchClass::Protected {
        status.branch_name.red()
    } else {
        status.branch_name.green()
    };

    let tracking = status.tracking();
    let tracking = if tracking.is_even() {
        "even".normal()
    } else {
        format!("↑{} ↓{}", tracking.ahead, tracking.behind).yellow()
    };

    format!(
        "{} {} {} ?{}",
        branch,
        if status.is_dirty {
            "dirty".yellow()
        } else {
            "clean".normal()
        },
        tracking,
        status.untracked
    )
}
