use std::sync::Arc;

use pixellingual_core::catalog::Catalog;
use pixellingual_core::error::CoreError;
use pixellingual_core::types::CalendarDate;

use crate::config::ServerConfig;

/// Records compiled into the binary, used when `CATALOG_PATH` is unset.
pub const BUNDLED_PACKS: &str = include_str!("../../../data/packs.json");

/// Source of "today" for status badges. Read once per request.
pub type Clock = fn() -> CalendarDate;

/// The server's local calendar day.
pub fn local_today() -> CalendarDate {
    chrono::Local::now().date_naive()
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Immutable pack snapshot, loaded once before the server starts.
    pub catalog: Arc<Catalog>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Calendar day used for new / updated badges.
    pub clock: Clock,
}

impl AppState {
    pub fn new(catalog: Catalog, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            clock: local_today,
        }
    }

    pub fn today(&self) -> CalendarDate {
        (self.clock)()
    }
}

/// Load the pack snapshot named by the configuration.
///
/// Reads `catalog_path` when set, otherwise parses [`BUNDLED_PACKS`].
pub fn load_catalog(config: &ServerConfig) -> Result<Catalog, CoreError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                CoreError::Internal(format!("Cannot read pack records at {}: {e}", path.display()))
            })?;
            let catalog = Catalog::from_json(&raw)?;
            tracing::info!(path = %path.display(), packs = catalog.len(), "Loaded pack records");
            catalog
        }
        None => {
            let catalog = Catalog::from_json(BUNDLED_PACKS)?;
            tracing::info!(packs = catalog.len(), "Loaded bundled pack records");
            catalog
        }
    };

    Ok(catalog)
}
