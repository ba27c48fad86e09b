//! Migrate command - manual control over the `users` and `candidates` schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // `serve` migrates on startup; here nothing runs until asked
    let db = Database::connect_without_migrations(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await.map_err(migration_failed)?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await.map_err(migration_failed)?;
            tracing::info!("Rolled back the latest migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await.map_err(migration_failed)?;
            let pending = status.iter().filter(|(_, applied)| !applied).count();

            for (name, applied) in &status {
                println!("{:<10} {}", if *applied { "applied" } else { "pending" }, name);
            }
            println!("{} migration(s), {} pending", status.len(), pending);
        }
        MigrateAction::Fresh => {
            if config.environment.is_production() {
                return Err(AppError::validation(
                    "Refusing to drop every table while APP_ENV=prod",
                ));
            }
            tracing::warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await.map_err(migration_failed)?;
            tracing::info!("Fresh schema created");
        }
    }

    Ok(())
}

fn migration_failed(e: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}
