//! Server assembly for Lobby: configuration and the top-level router.

use std::{path::Path, sync::Arc};

use axum::{Router, routing::get};
use config::{ConfigBuilder, ConfigError, builder::DefaultState};
use lobby_core::{
  directory::{Directory, NewEmployee},
  registry::VisitorRegistry,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `LOBBY_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:               String,
  #[serde(default = "default_port")]
  pub port:               u16,
  /// Employee directory, numbered from 1 in this order.
  #[serde(default)]
  pub employees:          Vec<NewEmployee>,
  #[serde(default)]
  pub approved_companies: Vec<String>,
}

/// `LOBBY_*` variables. `LOBBY_APPROVED_COMPANIES` is a comma-separated
/// list; employees can only be configured from the file.
fn environment() -> config::Environment {
  config::Environment::with_prefix("LOBBY")
    .try_parsing(true)
    .list_separator(",")
    .with_list_parse_key("approved_companies")
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

impl ServerConfig {
  /// Read `path` (if it exists), then overlay the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_sources(
      config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false)),
      environment(),
    )
  }

  fn from_sources(
    builder: ConfigBuilder<DefaultState>,
    env: config::Environment,
  ) -> Result<Self, ConfigError> {
    builder.add_source(env).build()?.try_deserialize()
  }

  /// The directory to seed the registry with. Falls back to the built-in
  /// sample when neither list is configured.
  pub fn directory(&self) -> Directory {
    if self.employees.is_empty() && self.approved_companies.is_empty() {
      return Directory::sample();
    }
    Directory::new(self.employees.clone(), self.approved_companies.clone())
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: registry API, liveness probe and request tracing.
pub fn app<R>(registry: Arc<R>) -> Router
where
  R: VisitorRegistry + 'static,
{
  Router::new()
    .route("/health", get(health))
    .merge(lobby_api::api_router(registry))
    .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str { "ok" }
