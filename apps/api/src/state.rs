use std::sync::Arc;

use crate::auth::CredentialStore;
use crate::completion::CompletionClient;
use crate::config::Config;
use crate::weather::WeatherClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is cheap to clone: the HTTP clients share
/// their connection pools, and the credential store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub completion: CompletionClient,
    pub weather: WeatherClient,
    /// Pluggable credential capability. Default: in-memory SHA-256 store.
    pub credentials: Arc<dyn CredentialStore>,
    /// Kept for handlers that need runtime configuration; none read it yet.
    #[allow(dead_code)]
    pub config: Config,
}
