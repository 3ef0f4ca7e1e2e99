use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::Parser;
use invoice_dashboard::{AppState, SharedState, api, config::AppConfig, db};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", value_name = "URL", hide_env_values = true)]
    database_url: String,
    /// Listen address for the HTTP server
    #[arg(long, env = "LISTEN_ADDR", value_name = "ADDR", default_value = "0.0.0.0:8080")]
    listen: SocketAddr,
    /// Upper bound on pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", value_name = "N", default_value_t = 5)]
    max_connections: u32,
    /// Rows per page in the invoice table
    #[arg(long, env = "ITEMS_PER_PAGE", value_name = "N", default_value_t = invoice_dashboard::pagination::ITEMS_PER_PAGE)]
    items_per_page: u32,
    /// Do not mount the `GET /seed` endpoint
    #[arg(long, env = "DISABLE_SEED")]
    disable_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = build_app_config(&cli)?;
    let state = init_shared_state(&cli, config).await?;

    let app = api::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("failed to bind to {}", cli.listen))?;

    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited with error")?;

    Ok(())
}

async fn init_shared_state(cli: &Cli, config: AppConfig) -> Result<SharedState> {
    let db = db::init_db(&cli.database_url, cli.max_connections)
        .await
        .context("failed to connect to the database")?;

    Ok(Arc::new(AppState { config, db }))
}

fn build_app_config(cli: &Cli) -> Result<AppConfig> {
    if cli.items_per_page == 0 {
        bail!("--items-per-page must be at least 1");
    }
    if cli.max_connections == 0 {
        bail!("--max-connections must be at least 1");
    }
    if cli.disable_seed {
        info!("seed endpoint disabled");
    }

    Ok(AppConfig {
        items_per_page: cli.items_per_page,
        seed_enabled: !cli.disable_seed,
        ..AppConfig::default()
    })
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("failed to install CTRL+C handler: {err}");
    }
    info!("shutdown signal received");
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["invoice-dashboard", "--database-url", "postgres://localhost/db"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_the_dashboard() {
        let config = build_app_config(&parse(&[])).unwrap();
        assert_eq!(config.items_per_page, 6);
        assert_eq!(config.latest_invoices_limit, 5);
        assert!(config.seed_enabled);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(build_app_config(&parse(&["--items-per-page", "0"])).is_err());
    }

    #[test]
    fn seed_can_be_switched_off() {
        let config = build_app_config(&parse(&["--disable-seed"])).unwrap();
        assert!(!config.seed_enabled);
    }
}
