//! CLI module for pharmatrace
//!
//! Provides command-line interface for the supply-chain tracker.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// pharmatrace - Pharmaceutical supply-chain tracker with a hash-chained audit log
#[derive(Parser, Debug)]
#[command(name = "pharmatrace")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PHARMATRACE_HOST                 Bind address (default: 0.0.0.0)
    PHARMATRACE_PORT                 Listen port (default: 5010)
    PHARMATRACE_LOG_LEVEL            Log level (default: info)
    PHARMATRACE_LOG_DIR              Directory for daily rolling log files
    PHARMATRACE_DATABASE_URL         Database URL (default: sqlite://pharmatrace.db)
    PHARMATRACE_SENDGRID_API_KEY     SendGrid API key (receipts are skipped if unset)
    PHARMATRACE_MAIL_FROM            Receipt sender address
    PHARMATRACE_ENFORCE_TRANSITIONS  Reject out-of-order status transitions
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),
    /// Apply database migrations and exit
    Migrate(migrate::MigrateArgs),
}
