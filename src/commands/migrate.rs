//! Migrate command - manual migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are applied explicitly here, so connect without the
    // automatic run that `serve` performs.
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Pending migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Last migration rolled back");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let estado = if applied { "applied" } else { "pending" };
                println!("{}: {}", name, estado);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations applied");
        }
    }

    Ok(())
}
