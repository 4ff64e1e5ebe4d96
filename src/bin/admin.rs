//! CLI administration tool for adtech-campaigns.
//!
//! Provides commands for seeding campaigns, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Insert a sample campaign (prompts for confirmation)
//! cargo run --bin admin -- seed
//!
//! # Insert a custom campaign without prompting
//! cargo run --bin admin -- seed --name "Spring Audio" --budget 8000 --days 14 -y
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`, `DB_USER`, ...): PostgreSQL connection

use adtech_campaigns::config::{Config, mask_connection_string};
use adtech_campaigns::domain::entities::CampaignStatus;
use adtech_campaigns::domain::metrics::compute_stats;
use adtech_campaigns::domain::repositories::CampaignRepository;
use adtech_campaigns::infrastructure::persistence::PgCampaignRepository;
use adtech_campaigns::server::migrate;
use adtech_campaigns::validation::validate_campaign_payload;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing adtech-campaigns.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Insert a campaign directly into the database
    Seed(SeedArgs),

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Campaign fields for `seed`; defaults describe a running CTV campaign.
#[derive(clap::Args)]
struct SeedArgs {
    #[arg(long, default_value = "CTV Campaign Q2")]
    name: String,

    #[arg(long, default_value = "RetailSpot")]
    advertiser: String,

    #[arg(long, default_value_t = 15000.0)]
    budget: f64,

    /// Campaign length in days, starting today
    #[arg(long, default_value_t = 30)]
    days: i64,

    #[arg(long, default_value = "active")]
    status: String,

    #[arg(long, default_value_t = 100_000)]
    impressions: i64,

    #[arg(long, default_value_t = 2500)]
    clicks: i64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Seed(args) => seed_campaign(args, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Inserts one campaign after checking it against the same rules as the API.
///
/// # Flow
///
/// 1. Build the payload from flags (dates: today → today + `days`)
/// 2. Validate; print every violation and stop if any
/// 3. Display campaign details
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Apply migrations and store the campaign
async fn seed_campaign(args: SeedArgs, pool: &PgPool) -> Result<()> {
    println!("{}", "🌱 Seed Campaign".bright_blue().bold());
    println!();

    let (start, end) = flight_dates(Utc::now(), args.days)?;

    let payload = json!({
        "name": args.name,
        "advertiser": args.advertiser,
        "budget": args.budget,
        "startDate": start.to_rfc3339(),
        "endDate": end.to_rfc3339(),
        "status": args.status,
        "impressions": args.impressions,
        "clicks": args.clicks,
    });

    let new_campaign = match validate_campaign_payload(&payload) {
        Ok(campaign) => campaign,
        Err(e) => {
            println!("{} {}", "❌ Invalid campaign:".red().bold(), e);
            anyhow::bail!("Campaign rejected by validation");
        }
    };

    println!("{}", "Campaign details:".bright_white().bold());
    println!("  Name:        {}", new_campaign.name.cyan());
    println!("  Advertiser:  {}", new_campaign.advertiser.cyan());
    println!("  Budget:      {}", new_campaign.budget.to_string().cyan());
    println!(
        "  Flight:      {} → {}",
        new_campaign.start_date.format("%Y-%m-%d"),
        new_campaign.end_date.format("%Y-%m-%d")
    );
    println!("  Status:      {}", status_label(new_campaign.status));
    println!(
        "  Delivery:    {} impressions, {} clicks",
        new_campaign.impressions, new_campaign.clicks
    );
    println!();

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Create this campaign?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    migrate(pool).await?;

    let repo = PgCampaignRepository::new(Arc::new(pool.clone()));
    let campaign = repo
        .create(new_campaign)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create campaign: {}", e))?;

    let stats = compute_stats(&campaign);

    println!();
    println!("{}", "✅ Campaign created successfully!".green().bold());
    println!("  ID:  {}", campaign.id.to_string().bright_yellow().bold());
    println!("  CTR: {:.2}%", stats.ctr);
    println!("  CPC: {:.2}", stats.cpc);
    println!();

    Ok(())
}

/// Start and end of a flight lasting `days` from `start`.
fn flight_dates(start: DateTime<Utc>, days: i64) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let Some(end) = Duration::try_days(days).and_then(|d| start.checked_add_signed(d)) else {
        anyhow::bail!("--days {days} is out of range");
    };

    Ok((start, end))
}

/// Displays campaign counts, total and per status.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = PgCampaignRepository::new(Arc::new(pool.clone()));

    let total = repo
        .count(None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count campaigns: {}", e))?;

    println!(
        "  Campaigns:     {}",
        total.to_string().bright_green().bold()
    );

    for status in CampaignStatus::ALL {
        let count = repo
            .count(Some(status))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to count campaigns: {}", e))?;

        println!(
            "    {:<12} {}",
            status_label(status),
            count.to_string().bright_white()
        );
    }
    println!();

    Ok(())
}

fn status_label(status: CampaignStatus) -> ColoredString {
    match status {
        CampaignStatus::Active => status.as_str().green(),
        CampaignStatus::Paused => status.as_str().yellow(),
        CampaignStatus::Finished => status.as_str().bright_black(),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
