//! tmnt-seed CLI
//!
//! Loads, clears and reloads the record store from the seed catalog fixture.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tmnt_db::repositories::CatalogRepo;
use tmnt_db::seed::{self, CatalogFixture, SeedReport};
use tmnt_db::DbPool;

const DEFAULT_DATABASE_URL: &str = "sqlite://tmnt.db?mode=rwc";

#[derive(Parser)]
#[command(name = "tmnt-seed")]
#[command(about = "Seed the TMNT catalog record store", long_about = None)]
struct Cli {
    /// Record store location
    #[arg(long, global = true, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Where the catalog comes from.
#[derive(Args, Clone)]
struct FixtureArgs {
    /// Load this fixture file instead of the bundled catalog
    #[arg(short, long)]
    fixture: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert fixture records that are not already present
    Load {
        #[command(flatten)]
        source: FixtureArgs,
    },

    /// Delete every record in every collection
    Clear,

    /// Clear the store, then load the fixture
    Reload {
        #[command(flatten)]
        source: FixtureArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tmnt_seed=info,tmnt_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let pool = tmnt_db::create_pool(&cli.database_url)
        .await
        .with_context(|| format!("Failed to open record store at {}", cli.database_url))?;
    tmnt_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    match cli.command {
        Commands::Load { source } => {
            let fixture = read_fixture(&source)?;
            let report = seed::load(&pool, &fixture).await?;
            print_report(&report);
        }
        Commands::Clear => clear(&pool).await?,
        Commands::Reload { source } => {
            let fixture = read_fixture(&source)?;
            clear(&pool).await?;
            let report = seed::load(&pool, &fixture).await?;
            print_report(&report);
        }
    }

    pool.close().await;
    Ok(())
}

fn read_fixture(source: &FixtureArgs) -> anyhow::Result<CatalogFixture> {
    match &source.fixture {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read fixture {}", path.display()))?;
            Ok(CatalogFixture::parse(&json)?)
        }
        None => Ok(CatalogFixture::bundled()?),
    }
}

async fn clear(pool: &DbPool) -> anyhow::Result<()> {
    let report = CatalogRepo::clear_all(pool).await?;
    for entry in &report.deleted {
        println!("{:<10} deleted {}", entry.collection, entry.count);
    }
    println!("Cleared {} records", report.total());
    Ok(())
}

fn print_report(report: &SeedReport) {
    for entry in &report.collections {
        println!(
            "{:<10} inserted {:>3}  skipped {:>3}",
            entry.collection, entry.inserted, entry.skipped
        );
    }
    println!(
        "Loaded {} records ({} already present)",
        report.inserted(),
        report.skipped()
    );
}
