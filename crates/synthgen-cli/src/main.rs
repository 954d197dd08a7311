mod headless;
mod logging;
mod tui;
mod workspace;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use synthgen_client::GenerationError;
use synthgen_core::{Attribute, CoreError, ViewMode};
use thiserror::Error;

use headless::parse_attribute;
use logging::init_logging;
use workspace::{WorkspaceError, WorkspacePaths, load_or_create_settings};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "synthgen", version, about = "Synthetic dataset generator")]
struct Cli {
    /// Workspace directory holding config and logs.
    #[arg(long, global = true, default_value = ".synthgen")]
    workspace: PathBuf,
    /// Generation service endpoint (overrides settings.toml for this run).
    #[arg(long, global = true)]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive form (default).
    Tui,
    /// Submit one request and print the result.
    Generate(GenerateArgs),
    /// Print the descriptor and form fields that would be sent.
    Describe(AuthoringArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AuthoringArgs {
    /// Dataset domain, e.g. Employee.
    #[arg(long, default_value = "")]
    pub domain: String,
    /// Attribute as NAME:KIND (string, number, boolean, date). Repeatable.
    #[arg(long = "attr", value_name = "NAME:KIND", value_parser = parse_attribute)]
    pub attributes: Vec<Attribute>,
    /// Number of records to request. Sent as given, without range checks.
    #[arg(long, allow_hyphen_values = true)]
    pub records: Option<i64>,
    /// Optional reproducibility seed.
    #[arg(long, default_value = "")]
    pub seed: String,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub authoring: AuthoringArgs,
    /// Output view: table or raw.
    #[arg(long)]
    pub view: Option<ViewMode>,
    /// Save the result to the configured export path.
    #[arg(long, default_value_t = false)]
    pub save: bool,
    /// Save the result to this path instead.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let paths = WorkspacePaths::new(cli.workspace);
    paths.ensure_dirs()?;
    let mut settings = load_or_create_settings(&paths)?;
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }

    init_logging(&paths.log_path())?;
    tracing::info!(
        event = "config_loaded",
        workspace = %paths.root.display(),
        endpoint = %settings.endpoint
    );

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let runtime = tokio::runtime::Handle::current();
            tokio::task::block_in_place(|| tui::run(runtime, paths, settings))
        }
        Command::Generate(args) => headless::run_generate(args, &paths, &settings).await,
        Command::Describe(args) => {
            headless::run_describe(&args, &settings);
            Ok(())
        }
    }
}
