//! pharmatrace Server Entry Point

use clap::Parser;
use pharmatrace::cli::{Cli, Commands};
use pharmatrace::config::{ServerConfig, TransitionPolicy};
use pharmatrace::{bootstrap, logging, server};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: failed to initialize logging: {:#}", e);
        std::process::exit(1);
    }

    // Handle subcommands
    let result = match cli.command {
        Some(Commands::Migrate(args)) => pharmatrace::cli::migrate::execute(&args)
            .await
            .map_err(anyhow::Error::from),
        Some(Commands::Serve(args)) => {
            run_server(args.server_config(), args.transition_policy()).await
        }
        None => {
            // No subcommand - default to serve
            run_server(ServerConfig::from_env(), TransitionPolicy::from_env()).await
        }
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig, policy: TransitionPolicy) -> anyhow::Result<()> {
    let state = bootstrap::initialize(policy).await?;
    server::run(state, &config.bind_addr()).await
}
