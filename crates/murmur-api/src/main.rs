//! Murmur CLI and REST API entry point.
//!
//! Binary name: `murmur`
//!
//! Parses CLI arguments, initializes database and services, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,murmur=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "murmur", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (DB, provider, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::List { offset, limit } => {
            cli::conversation::list_conversations(&state, offset, limit, cli.json).await?;
        }

        Commands::Show { id } => {
            cli::conversation::show_conversation(&state, &id, cli.json).await?;
        }

        Commands::Delete { id } => {
            cli::conversation::delete_conversation(&state, &id, cli.json).await?;
        }

        Commands::Seed => {
            let created = murmur_infra::sqlite::seed::seed_sample_data(&state.db_pool).await?;
            if created == 0 {
                println!("  Database already has conversations, nothing to seed.");
            } else {
                println!(
                    "  {} Seeded {created} sample conversations",
                    console::style("✓").green().bold()
                );
            }
        }

        Commands::Serve { port, host, seed } => {
            if seed {
                murmur_infra::sqlite::seed::seed_sample_data(&state.db_pool).await?;
            }

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Murmur API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
