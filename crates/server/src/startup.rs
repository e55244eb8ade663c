use std::sync::Arc;

use axum::Router;
use common::env::{parse_var, var_or};
use configs::{AppConfig, ServerConfig, StoreConfig};
use models::{seed, Employee};
use service::{employee::EmployeeService, repository::Repository, storage::InMemoryRepository};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;

/// Shared handler state. The service sits behind a trait object so another
/// repository backend can be swapped in without touching the handlers.
#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<EmployeeService<dyn Repository<Employee>>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn Repository<Employee>>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(repo)) }
    }

    /// In-memory state, optionally pre-filled with the demo employees.
    pub fn in_memory(store: &StoreConfig) -> Self {
        let initial = if store.seed_demo_data { seed::employees() } else { Vec::new() };
        info!(seeded = initial.len(), "in-memory employee store ready");
        Self::new(Arc::new(InMemoryRepository::new(initial)))
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`); fall back to env vars when it is
/// missing or invalid.
pub fn load_config() -> AppConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            config_from_env_values(
                var_or("SERVER_HOST", "127.0.0.1"),
                parse_var::<u16>("SERVER_PORT"),
                parse_var::<usize>("TOKIO_WORKER_THREADS"),
            )
        }
    }
}

/// Env-sourced settings go through the same normalization as the file.
fn config_from_env_values(host: String, port: Option<u16>, worker_threads: Option<usize>) -> AppConfig {
    let mut cfg = AppConfig {
        server: ServerConfig {
            host,
            port: port.filter(|p| *p != 0).unwrap_or(8080),
            worker_threads,
        },
        store: StoreConfig::default(),
    };
    if let Err(e) = cfg.normalize_and_validate() {
        warn!(error = %e, "environment config rejected, using defaults");
        cfg = AppConfig::default();
    }
    cfg
}

/// Bind `host:port`; the host may be a name (`localhost`) or an IP.
pub async fn bind_listener(server: &ServerConfig) -> Result<TcpListener, StartupError> {
    let addr = server.bind_addr();
    TcpListener::bind(addr.as_str())
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

pub fn build_app(cfg: &AppConfig) -> Router {
    let state = ServerState::in_memory(&cfg.store);
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);

    let listener = bind_listener(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting employee registry");
    axum::serve(listener, app).await?;
    Ok(())
}
