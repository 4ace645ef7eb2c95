//! `claimcheck`: check a news claim against a classifier and fact-check sources.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use claimcheck_core::{Claim, FailurePolicy};
use claimcheck_runtime::{Checker, OracleCredentials, RuntimeConfig};

mod render;
mod session;

#[derive(Parser, Debug)]
#[command(name = "claimcheck", version, about = "AI + multi-source fact verification for news claims")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML config file (endpoints, timeout, failure policy, inline keys)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a single claim
    Check {
        /// The claim or headline (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        claim: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// What a classifier failure turns into: treat_as_fake or undetermined
        #[arg(long, value_name = "POLICY")]
        failure_policy: Option<FailurePolicy>,
    },

    /// Check claims read line by line from stdin
    Interactive {
        /// Print each report as a JSON line
        #[arg(long)]
        json: bool,

        /// What a classifier failure turns into: treat_as_fake or undetermined
        #[arg(long, value_name = "POLICY")]
        failure_policy: Option<FailurePolicy>,
    },

    /// Show resolved credentials (redacted), endpoints and policy
    Config,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>, policy: Option<FailurePolicy>) -> Result<RuntimeConfig> {
    let config = match path {
        Some(path) => RuntimeConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RuntimeConfig::default(),
    };
    Ok(match policy {
        Some(policy) => config.with_failure_policy(policy),
        None => config,
    })
}

/// Resolve every credential up front; a missing key stops here, before any
/// oracle is contacted.
fn build_checker(config: &RuntimeConfig) -> Result<Checker> {
    let credentials = OracleCredentials::resolve(config)?;
    for credential in [&credentials.classifier, &credentials.fact_check, &credentials.news] {
        tracing::debug!(
            credential = credential.name(),
            source = %credential.source(),
            "Credential resolved"
        );
    }
    Ok(Checker::from_config(config, credentials)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; real environment variables still apply
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = !cli.no_color && std::io::stdout().is_terminal();

    match cli.command {
        Command::Check {
            claim,
            json,
            failure_policy,
        } => {
            let claim = Claim::new(claim.join(" "))?;
            let config = load_config(cli.config.as_deref(), failure_policy)?;
            let checker = build_checker(&config)?;

            let report = checker.check(&claim).await;

            let mut stdout = std::io::stdout().lock();
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(stdout, "{}", render::report(&report, color))?;
            }
        }

        Command::Interactive {
            json,
            failure_policy,
        } => {
            let config = load_config(cli.config.as_deref(), failure_policy)?;
            let checker = build_checker(&config)?;

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run(&checker, stdin, &mut stdout, session::Output { json, color }).await?;
        }

        Command::Config => {
            let config = load_config(cli.config.as_deref(), None)?;
            let statuses = OracleCredentials::describe(&config);
            print!("{}", render::config(&config, &statuses));
        }
    }

    Ok(())
}
