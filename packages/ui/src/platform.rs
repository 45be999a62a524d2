//! Platform-specific construction of the client and browser plumbing.
//!
//! - **Web** (WASM + `web` feature): token in `localStorage`, tenant from
//!   `window.location.host`, full-page navigation through `location.href`.
//! - **Native**: token in a file under the platform data dir, no tenant.

use std::sync::Arc;

use api::{Api, ApiError, HttpTransport};
use store::{AppConfig, TokenStore};

pub type AppApi = Api<HttpTransport>;

/// Configuration and the configured client, shared through context.
#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub api: AppApi,
}

impl Services {
    pub fn init() -> Result<Self, ApiError> {
        let config = AppConfig::from_env().unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid build configuration, using defaults");
            AppConfig::default()
        });
        let api = make_api(&config)?;
        Ok(Self { config, api })
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

pub fn make_api(config: &AppConfig) -> Result<AppApi, ApiError> {
    let transport = HttpTransport::from_config(config)?;
    let tenant = current_host().and_then(|host| api::subdomain_from_host(&host));
    tracing::info!(base_url = %config.api_base_url, tenant = ?tenant, "api client ready");
    Ok(Api::new(transport, make_token_store()).with_tenant(tenant))
}

pub fn make_token_store() -> Arc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::FileStore::default_location())
    }
}

/// `host[:port]` the page was served from.
pub fn current_host() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().host().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Full-page navigation, dropping all in-memory state.
pub fn redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!(url, error = ?e, "failed to navigate");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(url, "full-page navigation requested");
    }
}
