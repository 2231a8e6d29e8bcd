//! HTTP server command
//!
//! Runs the trivia API with all routes, migrating the schema first.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use trivia_server::db::migrations;
use trivia_server::models::QUESTIONS_PER_PAGE;
use trivia_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Questions returned per page by GET /questions (minimum 1)
    #[arg(long, env = "TRIVIA_QUESTIONS_PER_PAGE", default_value_t = QUESTIONS_PER_PAGE)]
    pub questions_per_page: usize,

    /// Seed for quiz question selection (reproducible quizzes)
    #[arg(long, env = "TRIVIA_RNG_SEED")]
    pub rng_seed: Option<u64>,

    /// Skip schema migration on startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting trivia server on {}", args.bind);

    let pool = args.db.connect().await?;

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        questions_per_page: args.questions_per_page,
        rng_seed: args.rng_seed,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
