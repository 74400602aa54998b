mod client;
mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use reports::{
    ApiError, AuditRequest, AuditResult, CheckoutRequest, CheckoutSession, DomainAnalysis, DomainRequest, Endpoint,
    Health, History, KeywordReport, KeywordRequest, Operation, PLANS, find_plan, normalize_query, plausible_email,
};
use serde_json::Value;

use crate::client::{ApiClient, typed};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing API key; pass --api-key or set SEODASH_API_KEY")]
    MissingApiKey,
    #[error("unknown plan `{0}`; run `plans` to list them")]
    UnknownPlan(String),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "seodash-cli", about = "SEO analysis API command-line client")]
struct Cli {
    #[arg(long, global = true, env = "SEODASH_API_URL", default_value = "http://127.0.0.1:8002")]
    base_url: String,

    #[arg(long, global = true, env = "SEODASH_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Print the raw JSON response instead of a text summary.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is up.
    Ping,
    /// Domain overview: score, on-page signals, issues.
    Domain { domain: String },
    /// Keyword research: volume, difficulty, CPC, related terms.
    Keywords {
        keyword: String,
        #[arg(long)]
        country: Option<String>,
    },
    /// Technical site audit.
    Audit { url: String },
    /// Recent reports and quota usage.
    History,
    /// List subscription plans.
    Plans,
    /// Start a checkout and print the payment URL.
    Checkout {
        #[arg(long)]
        plan: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// Single stderr line for a failed command, using the display text.
fn error_line(err: &CliError) -> String {
    format!("error: {err}")
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api = ApiClient::new(&cli.base_url, cli.api_key)?;

    match cli.command {
        Command::Ping => run_ping(&api, cli.json).await,
        Command::Domain { domain } => {
            let req = DomainRequest { domain: required(Operation::Analysis, &domain)? };
            let value = api.call(Endpoint::Domain, Some(&req)).await?;
            emit::<DomainAnalysis>(Operation::Analysis, value, cli.json, render::domain)
        }
        Command::Keywords { keyword, country } => {
            let req = KeywordRequest::new(required(Operation::Research, &keyword)?, country.as_deref());
            let value = api.call(Endpoint::Keywords, Some(&req)).await?;
            emit::<KeywordReport>(Operation::Research, value, cli.json, render::keywords)
        }
        Command::Audit { url } => {
            let req = AuditRequest { url: required(Operation::Audit, &url)? };
            let value = api.call(Endpoint::Audit, Some(&req)).await?;
            emit::<AuditResult>(Operation::Audit, value, cli.json, render::audit)
        }
        Command::History => {
            let value = api.call::<()>(Endpoint::History, None).await?;
            emit::<History>(Operation::History, value, cli.json, render::history)
        }
        Command::Plans => {
            if cli.json {
                print_json(&serde_json::to_value(PLANS)?)
            } else {
                print!("{}", render::plans(PLANS));
                Ok(())
            }
        }
        Command::Checkout { plan, email } => run_checkout(&api, &plan, &email, cli.json).await,
    }
}

async fn run_ping(api: &ApiClient, json: bool) -> Result<(), CliError> {
    let value = api.call::<()>(Endpoint::Health, None).await?;
    if json {
        return print_json(&value);
    }
    let health: Health = typed(Operation::Health, value)?;
    println!("{}", if health.status.is_empty() { "ok" } else { health.status.as_str() });
    Ok(())
}

async fn run_checkout(api: &ApiClient, plan: &str, email: &str, json: bool) -> Result<(), CliError> {
    let plan = find_plan(plan).ok_or_else(|| CliError::UnknownPlan(plan.to_owned()))?;
    let email = email.trim();
    if !plausible_email(email) {
        return Err(CliError::InvalidEmail(email.to_owned()));
    }
    let req = CheckoutRequest { plan: plan.id.to_owned(), email: email.to_owned() };
    eprintln!("starting checkout for {} ({})", plan.name, plan.price_label());
    let value = api.call(Endpoint::Checkout, Some(&req)).await?;
    if json {
        return print_json(&value);
    }
    let session: CheckoutSession = typed(Operation::Checkout, value)?;
    println!("{}", session.checkout_url);
    Ok(())
}

/// Trimmed input, or the operation's validation error when blank.
fn required(op: Operation, raw: &str) -> Result<String, ApiError> {
    normalize_query(raw).ok_or(ApiError::InvalidInput(op))
}

fn emit<T: serde::de::DeserializeOwned>(
    op: Operation,
    value: Value,
    json: bool,
    render: fn(&T) -> String,
) -> Result<(), CliError> {
    if json {
        return print_json(&value);
    }
    let report: T = typed(op, value)?;
    print!("{}", render(&report));
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
