use anyhow::Result;
use clap::{Parser, Subcommand};
use ghfetch::commands::validators;
use ghfetch::{build_client, commands::*, constants};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghfetch")]
#[command(about = "Fetch GitHub organization, member and rate limit data")]
#[command(version)]
struct Cli {
    /// GitHub token (falls back to GITHUB_TOKEN, then the token file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// File containing a GitHub token
    #[arg(long, global = true)]
    token_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    /// Items requested per page (1-100)
    #[arg(long, global = true)]
    per_page: Option<u32>,

    /// API base URI, eg for GitHub Enterprise
    #[arg(long, global = true)]
    base_uri: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an organization
    Org {
        /// Organization login
        org: String,

        /// Output the raw object as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the members of an organization
    Members {
        /// Organization login
        org: String,

        /// Print only member logins, one per line
        #[arg(long, conflicts_with = "json")]
        handles: bool,

        /// Output the raw member objects as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the rate limit for the current token
    RateLimit {
        /// Print only the remaining request count
        #[arg(long)]
        remaining: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch every page of an arbitrary API path
    Get {
        /// API path without leading or trailing slash, eg users/octocat/repos
        query: String,
    },

    /// Capture API responses into a JSON fixture file
    Capture {
        /// User whose profile and repositories are captured
        #[arg(long, default_value_t = constants::capture::DEFAULT_USER.to_string())]
        user: String,

        /// Repository (owned by --user) whose details and languages are captured
        #[arg(long, default_value_t = constants::capture::DEFAULT_REPO.to_string())]
        repo: String,

        /// Organization whose details and members are captured
        #[arg(long, default_value_t = constants::capture::DEFAULT_ORG.to_string())]
        org: String,

        /// Extra query to capture (can be specified multiple times)
        #[arg(short, long)]
        query: Vec<String>,

        /// Output file
        #[arg(short, long, default_value = constants::capture::DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    validators::validate_per_page(&cli.per_page)?;
    validate_command(&cli.command)?;

    let client = build_client(
        &cli.config,
        cli.token,
        cli.token_file.as_deref(),
        cli.base_uri,
        cli.per_page,
    )?;
    let context = CommandContext { client };

    execute_command(cli.command, &context).await
}

/// Validate command arguments using centralized validators
fn validate_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Org { org, .. } | Commands::Members { org, .. } => {
            validators::validate_login("organization", org)?;
        }
        Commands::RateLimit { .. } => {}
        Commands::Get { query } => validators::validate_query(query)?,
        Commands::Capture {
            user,
            repo,
            org,
            query,
            ..
        } => {
            validators::validate_login("--user", user)?;
            validators::validate_repo_name(repo)?;
            validators::validate_login("--org", org)?;
            for q in query {
                validators::validate_query(q)?;
            }
        }
    }
    Ok(())
}

async fn execute_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Org { org, json } => OrgCommand { org, json }.execute(context).await?,
        Commands::Members { org, handles, json } => {
            MembersCommand { org, handles, json }
                .execute(context)
                .await?
        }
        Commands::RateLimit { remaining, json } => {
            RateLimitCommand { remaining, json }
                .execute(context)
                .await?
        }
        Commands::Get { query } => GetCommand { query }.execute(context).await?,
        Commands::Capture {
            user,
            repo,
            org,
            query,
            output,
        } => {
            CaptureCommand {
                user,
                repo,
                org,
                extra_queries: query,
                output,
            }
            .execute(context)
            .await?
        }
    }

    Ok(())
}
