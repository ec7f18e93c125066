use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dataroma_scraper::{Dataroma, Holding, Investor, Parsed, Settings, Skipped};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "dataroma", about = "Superinvestor holdings from dataroma.com")]
struct Cli {
    /// Print rows that were dropped while parsing
    #[arg(long, global = true)]
    show_skipped: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every tracked investor
    Investors {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the current portfolio of one investor
    Portfolio {
        /// Part of the investor's name, e.g. "ackman"
        name: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let dataroma = Dataroma::from_settings(&settings)?;

    let skipped = match cli.command {
        Commands::Investors { json } => {
            let parsed = dataroma
                .list_investors()
                .context("Failed to list investors")?;
            if json {
                print_json(&parsed, cli.show_skipped)?;
                return Ok(());
            }
            print_investors(&parsed.records);
            parsed.skipped
        }
        Commands::Portfolio { name, json } => {
            let investor = dataroma
                .find_investor(&name)
                .with_context(|| format!("Failed to find investor {:?}", name))?;
            let parsed = dataroma
                .holdings_at(&investor.profile_url)
                .with_context(|| format!("Failed to fetch portfolio of {}", investor.name))?;
            if json {
                print_json(&parsed, cli.show_skipped)?;
                return Ok(());
            }
            print_portfolio(&investor, &parsed.records);
            parsed.skipped
        }
    };

    if cli.show_skipped {
        print_skipped(&skipped);
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

/// Records only, or records plus skip diagnostics.
fn print_json<T: Serialize>(parsed: &Parsed<T>, with_skipped: bool) -> anyhow::Result<()> {
    let out = if with_skipped {
        serde_json::to_string_pretty(parsed)?
    } else {
        serde_json::to_string_pretty(&parsed.records)?
    };
    println!("{}", out);
    Ok(())
}

fn print_investors(investors: &[Investor]) {
    if investors.is_empty() {
        println!("No investors found.");
        return;
    }
    println!("{:>3} | {:<48} | {:<10} | {}", "#", "Investor", "Updated", "Profile");
    println!("{}", "-".repeat(110));
    for (i, inv) in investors.iter().enumerate() {
        println!(
            "{:>3} | {:<48} | {:<10} | {}",
            i + 1,
            truncate(&inv.name, 48),
            inv.update_date.format("%Y-%m-%d"),
            inv.profile_url
        );
    }
    println!("\n{} investors", investors.len());
}

fn print_portfolio(investor: &Investor, holdings: &[Holding]) {
    println!(
        "{} (Updated: {})",
        investor.name,
        investor.update_date.format("%Y-%m-%d")
    );
    if holdings.is_empty() {
        println!("No holdings found.");
        return;
    }
    println!(
        "{:<8} | {:<32} | {:>7} | {:>14} | {:>10} | {:>16}",
        "Symbol", "Name", "Weight", "Shares", "Cost", "Value"
    );
    println!("{}", "-".repeat(102));
    for h in holdings {
        println!(
            "{:<8} | {:<32} | {:>6.2}% | {:>14.0} | {:>10.2} | {:>16.0}",
            h.symbol,
            truncate(&h.name, 32),
            h.portfolio_weight * 100.0,
            h.shares,
            h.cost_price,
            h.value
        );
    }
    let total: f64 = holdings.iter().map(|h| h.portfolio_weight).sum();
    println!("\n{} holdings, {:.2}% of portfolio", holdings.len(), total * 100.0);
}

fn print_skipped(skipped: &[Skipped]) {
    if skipped.is_empty() {
        println!("\nNo rows skipped.");
        return;
    }
    println!("\n--- Skipped ({}) ---", skipped.len());
    for s in skipped {
        println!("  {}", s);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
