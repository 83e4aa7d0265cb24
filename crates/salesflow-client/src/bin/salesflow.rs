//! # SalesFlow CLI
//!
//! Inspects the sale workflow without the front end.
//!
//! ## Usage
//! ```bash
//! # What can a `paid` sale do next?
//! cargo run -p salesflow-client --bin salesflow -- actions paid
//!
//! # Walk a fresh sale through a sequence of actions
//! cargo run -p salesflow-client --bin salesflow -- walk confirmed payment_pending fast_track
//!
//! # Show the effective client configuration
//! cargo run -p salesflow-client --bin salesflow -- config --config ./client.toml
//! ```

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use salesflow_client::logging::init_tracing;
use salesflow_client::{ClientConfig, InMemorySalesBackend, SaleSession};
use salesflow_core::{workflow, Money, SaleStatus, SaleTotals, StatusAction};
use tracing::debug;

fn print_help() {
    println!("SalesFlow - sale status workflow");
    println!();
    println!("Usage: salesflow [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  actions <STATUS>       List the actions offered from STATUS");
    println!("  walk <ACTION>...       Apply ACTIONs to a new in-memory sale");
    println!("  config                 Print the effective client configuration");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>    Client config file");
    println!("  -h, --help             Show this help message");
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    help: bool,
    positional: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| format!("{}: missing PATH", arg))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => parsed.help = true,
            other => parsed.positional.push(other.to_string()),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let CliArgs {
        config_path,
        help,
        positional,
    } = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            print_help();
            return Err(e.into());
        }
    };

    if help {
        print_help();
        return Ok(());
    }

    let config = ClientConfig::load(config_path)?;
    debug!(url = %config.sales_url(), "Configuration loaded");

    match positional.split_first() {
        Some((cmd, rest)) if cmd == "actions" => {
            let status: SaleStatus = rest
                .first()
                .ok_or("actions: missing STATUS")?
                .parse()?;
            print_actions(status);
        }
        Some((cmd, rest)) if cmd == "walk" => {
            let actions = rest
                .iter()
                .map(|token| token.parse::<StatusAction>())
                .collect::<Result<Vec<_>, _>>()?;
            walk(&config, &actions).await?;
        }
        Some((cmd, _)) if cmd == "config" => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
        _ => print_help(),
    }

    Ok(())
}

fn print_actions(status: SaleStatus) {
    println!("{} ({})", status.label(), status);

    let actions = workflow::allowed_actions(status);
    if actions.is_empty() {
        println!("  terminal: no further actions");
        return;
    }

    for action in actions {
        match action.label() {
            Some(label) => println!("  {:<16} {}", action.as_str(), label),
            None => println!("  {:<16} -> {}", action.as_str(), action.target()),
        }
    }
}

async fn walk(
    config: &ClientConfig,
    actions: &[StatusAction],
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = Arc::new(InMemorySalesBackend::new());
    let totals = SaleTotals::new(
        Money::from_cents(10_000),
        Money::from_cents(2_100),
        Money::zero(),
    );
    let sale = backend.create_sale("DEMO-0001", "demo-client", "demo-zone", totals).await?;

    let mut session = SaleSession::open(Arc::clone(&backend), &sale.id)
        .await?
        .with_config(config);

    println!("{} created: {} ({})", sale.reference, sale.status, sale.total());

    for action in actions {
        let before = session.status();
        match session.request(*action).await {
            Ok(updated) => println!("  {:<16} {} -> {}", action.as_str(), before, updated.status),
            Err(e) => println!("  {:<16} rejected: {}", action.as_str(), e.message),
        }
    }

    let offered: Vec<&str> = session
        .available_actions()
        .iter()
        .map(StatusAction::as_str)
        .collect();

    println!("Final status: {}", session.status());
    println!("Requests sent: {}", backend.request_count());
    println!(
        "Next actions: {}",
        if offered.is_empty() { "-".to_string() } else { offered.join(", ") }
    );

    Ok(())
}
