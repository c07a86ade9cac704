mod transport;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use users_core::{ApiError, SequenceMode, UserService, UsersClient};

use crate::transport::UreqTransport;

const DEFAULT_BASE_URL: &str = "http://94.198.50.185:7081";

/// Open a session on the users service, then create, update and delete
/// user 3 and print the three response bodies back to back.
///
/// Examples:
///   users-demo                                   # Run against the default host
///   users-demo --base-url http://127.0.0.1:7081  # Run against a local mock server
///   users-demo --fail-fast -v                    # Stop on the first rejected step
#[derive(Debug, Parser)]
#[command(name = "users-demo")]
#[command(version)]
#[command(about = "Session-cookie CRUD demo against a /api/users service")]
struct Cli {
    /// Scheme, host and port of the users service.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Abort on the first non-2xx create/update/delete response instead of
    /// concatenating its body.
    #[arg(long)]
    fail_fast: bool,

    /// Print the current users as JSON before running the sequence.
    #[arg(long)]
    list: bool,

    /// Log each request to stderr (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to render user list: {0}")]
    Render(serde_json::Error),
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = if cli.fail_fast {
        SequenceMode::FailFast
    } else {
        SequenceMode::Lenient
    };
    let client = UsersClient::new(&cli.base_url);
    info!(endpoint = client.endpoint(), ?mode, "starting");

    let mut service = UserService::connect(client, UreqTransport::new(), mode)?;

    if cli.list {
        let users = service.list_users()?;
        let rendered = serde_json::to_string_pretty(&users).map_err(CliError::Render)?;
        println!("{rendered}");
    }

    let answer = service.run_demo_sequence()?;
    println!("{answer}");
    Ok(())
}

/// Human-readable logs on stderr so stdout carries only the result.
fn init_logging(verbose: bool) {
    let default = if verbose { "warn,users_core=debug,users_demo=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
