use std::io::Write;
use std::net::SocketAddr;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use shakesearch::server::{create_router, AppState};
use shakesearch::{CorpusIndex, Searcher};
use tracing::info;

mod cli;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let started = Instant::now();
    let index = CorpusIndex::load(&cli.corpus)?;
    info!(
        "Loaded {} ({} bytes) in {:?}",
        cli.corpus.display(),
        index.len(),
        started.elapsed()
    );
    let searcher = Searcher::new(index);

    match &cli.command {
        Some(Commands::Query {
            query,
            page,
            page_size,
        }) => run_query(&searcher, query, *page, *page_size),
        None => serve(searcher, &cli).await,
    }
}

/// Print one page of results to stdout.
fn run_query(searcher: &Searcher, query: &str, page: i64, page_size: i64) -> Result<()> {
    let results = searcher.search(query, page, page_size);
    info!(
        "{} total matches for {:?}, showing {}",
        searcher.total_matches(query),
        query,
        results.len()
    );

    let serialized = serde_json::to_string_pretty(&results).context("encoding results")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serialized).context("writing results")?;
    Ok(())
}

async fn serve(searcher: Searcher, cli: &Cli) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", cli.host, cli.port))?;

    let app = create_router(AppState { searcher }, &cli.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("shakesearch available at http://localhost:{}", cli.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
