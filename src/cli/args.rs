//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Candidate API - candidate records behind JWT authentication
#[derive(Parser, Debug)]
#[command(name = "candidate-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "LOG_JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
///
/// Both flags override `SERVER_HOST` / `SERVER_PORT` from the configuration.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["candidate-api", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["candidate-api", "serve", "--port", "8080", "--verbose"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_migrate_requires_action() {
        assert!(Cli::try_parse_from(["candidate-api", "migrate"]).is_err());

        let cli = Cli::try_parse_from(["candidate-api", "migrate", "status"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }
}
