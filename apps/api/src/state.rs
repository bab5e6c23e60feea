use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Immutable: every request builds its own puzzle grid.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
