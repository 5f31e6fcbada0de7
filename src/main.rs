//! TestRail command-line client
//!
//! Read-only queries against a TestRail instance, printed as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use testrail_client::{
    TestRail,
    codec::Timestamp,
    config::{LogFormat, LoggingConfig, load_config},
};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// TestRail CLI - query projects, cases, runs and results
#[derive(Parser, Debug)]
#[command(name = "testrail")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "TESTRAIL_CLIENT_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "TESTRAIL_CLIENT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all projects
    Projects,
    /// Show one project
    Project { id: u64 },
    /// List the cases of a project
    Cases {
        project_id: u64,
        #[arg(long)]
        suite_id: Option<u64>,
        #[arg(long)]
        section_id: Option<u64>,
        /// Creator user ids, comma separated
        #[arg(long, value_delimiter = ',')]
        created_by: Vec<u64>,
        /// Unix timestamp (seconds)
        #[arg(long)]
        created_after: Option<i64>,
        /// Unix timestamp (seconds)
        #[arg(long)]
        created_before: Option<i64>,
    },
    /// List the runs of a project
    Runs { project_id: u64 },
    /// List the tests of a run
    Tests { run_id: u64 },
    /// List the results of a run
    Results { run_id: u64 },
    /// List result statuses
    Statuses,
    /// List users
    Users,
}

fn init_logging(logging: &LoggingConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match logging.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}

fn timestamp(secs: i64) -> anyhow::Result<Timestamp> {
    Timestamp::from_unix(secs).with_context(|| format!("timestamp out of range: {}", secs))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(client: &TestRail, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Projects => print_json(&client.projects().list()?.execute().await?),
        Command::Project { id } => print_json(&client.projects().get(id)?.execute().await?),
        Command::Cases {
            project_id,
            suite_id,
            section_id,
            created_by,
            created_after,
            created_before,
        } => {
            let mut request = client.cases().list(project_id)?;
            if let Some(suite_id) = suite_id {
                request = request.suite_id(suite_id);
            }
            if let Some(section_id) = section_id {
                request = request.section_id(section_id);
            }
            if let Some(secs) = created_after {
                request = request.created_after(timestamp(secs)?);
            }
            if let Some(secs) = created_before {
                request = request.created_before(timestamp(secs)?);
            }
            let request = request.created_by(&created_by);
            debug!(url = %request.url(), "Listing cases");
            print_json(&request.execute().await?)
        }
        Command::Runs { project_id } => {
            print_json(&client.runs().list(project_id)?.execute().await?)
        }
        Command::Tests { run_id } => print_json(&client.tests().list(run_id)?.execute().await?),
        Command::Results { run_id } => {
            print_json(&client.results().list_for_run(run_id)?.execute().await?)
        }
        Command::Statuses => print_json(&client.statuses().list()?.execute().await?),
        Command::Users => print_json(&client.users().list()?.execute().await?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up TESTRAIL_* variables from a local .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = load_config(args.config.as_deref())?;

    init_logging(&config.logging, args.log_level.as_deref());

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        url = %config.testrail.url,
        "Starting TestRail CLI"
    );

    let client = TestRail::from_config(&config.testrail)
        .inspect_err(|e| error!(error = %e, "Failed to create TestRail client"))?;

    run(&client, args.command)
        .await
        .inspect_err(|e| error!(error = %e, "Request failed"))
}
