//! tfrun CLI - create remote runs and wait for them to finish.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tfrun_client::config::{DEFAULT_HOSTNAME, HOSTNAME_ENV, TOKEN_ENV};
use tfrun_client::{ClientConfig, RunApi, TfeClient};
use tfrun_core::{Run, RunCreateOptions, RunId, RunVariable, WorkspaceRef};
use tfrun_runner::{Runner, RunnerConfig};

mod output;

/// tfrun - Drive remote plan/apply runs to completion
#[derive(Parser)]
#[command(name = "tfrun")]
#[command(about = "Create remote runs and wait for them to finish", long_about = None)]
struct Cli {
    /// Control plane hostname
    #[arg(long, env = HOSTNAME_ENV, default_value = DEFAULT_HOSTNAME)]
    hostname: String,

    /// API token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    token: String,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the run as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a run, optionally waiting for it to finish
    #[command(name = "create-run")]
    CreateRun(CreateRunArgs),

    /// Show the current state of a run
    #[command(name = "show-run")]
    ShowRun {
        /// Run ID
        id: String,
    },
}

#[derive(clap::Args)]
struct CreateRunArgs {
    /// Workspace as <organization>/<workspace>
    #[arg(short, long)]
    workspace: WorkspaceRef,

    /// Wait for the run to finish and its state to be processed
    #[arg(long)]
    wait: bool,

    /// Message attached to the run
    #[arg(short, long)]
    message: Option<String>,

    /// Speculative plan only
    #[arg(long)]
    plan_only: bool,

    /// Apply automatically after a successful plan
    #[arg(long)]
    auto_apply: bool,

    /// Plan a destroy
    #[arg(long)]
    destroy: bool,

    /// Only refresh state
    #[arg(long)]
    refresh_only: bool,

    /// Resource address to target (repeatable)
    #[arg(long = "target")]
    targets: Vec<String>,

    /// Resource address to replace (repeatable)
    #[arg(long = "replace")]
    replaces: Vec<String>,

    /// Run variable as KEY=VALUE (repeatable)
    #[arg(long = "var", value_parser = parse_variable)]
    variables: Vec<RunVariable>,

    /// Configuration version to plan against
    #[arg(long)]
    configuration_version: Option<String>,

    /// Milliseconds between run status polls
    #[arg(long, default_value_t = 2000, value_parser = clap::value_parser!(u64).range(1..))]
    run_poll_ms: u64,

    /// Milliseconds between state version polls
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    resource_poll_ms: u64,

    /// Give up waiting after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl CreateRunArgs {
    fn options(&self) -> RunCreateOptions {
        let mut options = RunCreateOptions::new();
        options.message = self.message.clone();
        options.plan_only = self.plan_only.then_some(true);
        options.auto_apply = self.auto_apply.then_some(true);
        options.is_destroy = self.destroy.then_some(true);
        options.refresh_only = self.refresh_only.then_some(true);
        options.target_addrs = self.targets.clone();
        options.replace_addrs = self.replaces.clone();
        options.variables = self.variables.clone();
        options.configuration_version_id = self.configuration_version.clone();
        options
    }

    fn runner_config(&self) -> RunnerConfig {
        let mut config = RunnerConfig::default()
            .with_wait(self.wait)
            .with_run_poll_interval(Duration::from_millis(self.run_poll_ms))
            .with_resource_poll_interval(Duration::from_millis(self.resource_poll_ms));
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

fn parse_variable(s: &str) -> Result<RunVariable, String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok(RunVariable::new(key, value)),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so --json output stays clean
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::new(cli.token.clone()).with_hostname(cli.hostname.clone());
    let client = Arc::new(TfeClient::new(&config));

    match &cli.command {
        Commands::CreateRun(args) => {
            create_run(client, args, cli.json).await?;
        }
        Commands::ShowRun { id } => {
            show_run(client, id, cli.json).await?;
        }
    }

    Ok(())
}

async fn create_run(
    client: Arc<TfeClient>,
    args: &CreateRunArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = client.read_workspace(&args.workspace).await?;
    info!(
        workspace = %args.workspace,
        workspace_id = %workspace.id,
        wait = args.wait,
        "Creating run"
    );

    let runner = Runner::new(client, args.runner_config(), workspace);
    let run = runner.create_run(args.options()).await?;

    if !json {
        println!("Run created:");
    }
    print_run(&run, json)
}

async fn show_run(
    client: Arc<TfeClient>,
    id: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let run = client.read_run(&RunId::new(id)).await?;
    print_run(&run, json)
}

fn print_run(run: &Run, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(run)?);
    } else {
        print!("{}", output::format_run(run));
    }
    Ok(())
}
