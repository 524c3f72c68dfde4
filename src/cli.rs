//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use wipguard::config::SettingsInput;
use wipguard::output::OutputMode;

/// wipguard - Block work-in-progress pull requests with a status check
#[derive(Parser, Debug)]
#[command(
    name = "wipguard",
    version,
    about = "Block work-in-progress pull requests with a status check",
    long_about = "Inspect a pull request's title, labels and commit subjects for\n\
                  work-in-progress markers and publish the verdict as a check run.\n\n\
                  A check run is written only when the verdict changes."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate the triggering pull request and publish the check run
    Run {
        /// Evaluate and render, but do not write the check run
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Evaluate a pull request event offline (no network access)
    Evaluate {
        /// Path to a pull_request event payload
        #[arg(short, long)]
        event: PathBuf,

        /// Local configuration file
        #[arg(short, long)]
        config_file: Option<PathBuf>,

        /// Commit subject (repeatable)
        #[arg(long = "commit")]
        commits: Vec<String>,

        /// Description of the ready state
        #[arg(long)]
        ready_desc: Option<String>,
    },

    /// Show version
    Version,
}

/// Settings for a live run, each with an environment fallback
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository, owner/name
    #[arg(long = "repo", env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Path to the event payload
    #[arg(long = "event", env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Configuration file path in the repository
    #[arg(long = "config", env = "INPUT_CONFIG")]
    pub config_path: Option<String>,

    /// Check run name
    #[arg(long, env = "INPUT_CHECK_NAME")]
    pub check_name: Option<String>,

    /// Description of the ready state
    #[arg(long, env = "INPUT_READY_DESC")]
    pub ready_desc: Option<String>,
}

impl From<SettingsArgs> for SettingsInput {
    fn from(args: SettingsArgs) -> Self {
        Self {
            // Actions passes `with:` inputs as INPUT_* variables
            token: args.token.or_else(|| std::env::var("INPUT_GITHUB_TOKEN").ok()),
            repository: args.repository,
            event_path: args.event_path,
            event_name: args.event_name,
            api_url: args.api_url,
            config_path: args.config_path,
            check_name: args.check_name,
            ready_desc: args.ready_desc,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run { dry_run, settings }) => {
            commands::run(settings.into(), dry_run, output_mode)
        },
        Some(Command::Evaluate {
            event,
            config_file,
            commits,
            ready_desc,
        }) => commands::evaluate(
            &event,
            config_file.as_deref(),
            &commits,
            ready_desc.as_deref(),
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": wipguard::VERSION
                    })
                );
            } else {
                println!("wipguard v{}", wipguard::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": wipguard::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("wipguard v{}", wipguard::VERSION);
                println!("\nRun 'wipguard --help' for usage");
                println!("Run 'wipguard run' inside a pull_request workflow");
            }
            Ok(())
        },
    }
}
