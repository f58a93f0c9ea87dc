//! pkucat maintenance entry point.
//!
//! Applies, reverts or reports schema migrations for the feed database.

use anyhow::bail;
use pkucat_common::{AppError, AppResult, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What the binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Migrate,
    Rollback,
    Status,
}

impl Command {
    fn parse(arg: Option<&str>) -> anyhow::Result<Self> {
        match arg {
            None | Some("migrate") => Ok(Self::Migrate),
            Some("rollback") => Ok(Self::Rollback),
            Some("status") => Ok(Self::Status),
            Some(other) => bail!("unknown command `{other}`, expected migrate|rollback|status"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pkucat=info,pkucat_common=info,pkucat_db=info,sea_orm_migration=info".into()
            }),
        )
        .init();

    let command = Command::parse(std::env::args().nth(1).as_deref())?;

    let config = Config::load().map_err(|e| report(e.into()))?;
    run(command, &config).await.map_err(report)?;

    Ok(())
}

async fn run(command: Command, config: &Config) -> AppResult<()> {
    let db = pkucat_db::init(config).await?;
    info!("Connected to database");

    match command {
        Command::Migrate => {
            info!("Running database migrations...");
            pkucat_db::migrate(&db).await?;
            info!("Migrations completed");
        }
        Command::Rollback => {
            info!("Reverting last migration...");
            pkucat_db::rollback(&db).await?;
            info!("Rollback completed");
        }
        Command::Status => {
            let (applied, pending) = pkucat_db::migration_status(&db).await?;
            for name in &applied {
                info!(migration = %name, "Applied");
            }
            for name in &pending {
                info!(migration = %name, "Pending");
            }
            info!(applied = applied.len(), pending = pending.len(), "Migration status");
        }
    }

    db.close()
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Log an error through its taxonomy before it leaves `main`.
fn report(err: AppError) -> anyhow::Error {
    err.log();
    err.into()
}
