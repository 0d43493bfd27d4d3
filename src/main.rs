mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod messages;
mod services;
#[cfg(test)]
mod testing;
mod workflow;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::branch::BranchArgs;
use crate::cmd::commit::CommitArgs;
use crate::cmd::config::ConfigArgs;
use crate::cmd::pull_request::PullRequestArgs;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::browser::SystemBrowser;
use crate::infra::git::GitCli;
use crate::infra::terminal::TerminalConsole;
use crate::infra::tracker::HttpIssueTracker;
use crate::messages::Palette;
use crate::services::VersionControlService;

#[derive(Parser)]
#[command(
    name = "mgit",
    author,
    version,
    about = "Run Git work flows for GitHub with issue tracking ticket numbers."
)]
struct Cli {
    /// Show detailed logs.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a branch using issue ID and title.
    ///
    /// The new branch name is taken from the title of the issue found. The
    /// new branch is created off of the --base-branch or the default base
    /// branch. User confirmation is required before the branch is created.
    Branch(BranchArgs),
    /// Create a commit and push to GitHub.
    ///
    /// All of the un-staged files are added, committed and pushed. The commit
    /// message is extracted from the branch name if one is not supplied using
    /// the --message option.
    Commit(CommitArgs),
    /// Open the issue of the current branch in the browser.
    Open,
    /// Create a GitHub Pull Request for the current branch.
    #[command(name = "pull-request", visible_alias = "pr")]
    PullRequest(PullRequestArgs),
    /// Manage the project configuration.
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(cli).await {
        match error {
            AppError::Aborted => eprintln!("{error}"),
            _ => eprintln!("Error: {error}"),
        }
        std::process::exit(error.exit_code());
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> AppResult<()> {
    let default_filter = if verbose { "warn,mgit=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

async fn run(cli: Cli) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let console = Arc::new(TerminalConsole);

    match cli.command {
        Commands::Config(args) => cmd::config::run(args.command, &cwd, console.as_ref()),
        Commands::Branch(args) => cmd::branch::run(&build_context(&cwd, console)?, args).await,
        Commands::Commit(args) => cmd::commit::run(&build_context(&cwd, console)?, args).await,
        Commands::Open => cmd::open::run(&build_context(&cwd, console)?).await,
        Commands::PullRequest(args) => {
            let ctx = build_context(&cwd, console)?;
            cmd::pull_request::run(&ctx, args).await
        }
    }
}

fn build_context(cwd: &Path, console: Arc<TerminalConsole>) -> AppResult<AppContext> {
    let git = Arc::new(GitCli::new(cwd.to_path_buf()));
    if !git.is_repository() {
        return Err(AppError::NotARepository);
    }

    let config = match AppConfig::load(cwd)? {
        Some(config) => config,
        None => cmd::config::initialize(cwd, console.as_ref())?,
    };
    let issue_tracker = Arc::new(HttpIssueTracker::new(&config)?);

    Ok(AppContext::new(
        config,
        git,
        issue_tracker,
        console,
        Arc::new(SystemBrowser),
        Palette::detect(),
    ))
}
