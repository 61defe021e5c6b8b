mod dioxus_gui; // dioxus implementation
mod api; mod catalog; mod clipboard; mod config; mod i18n; mod lang; mod locale; mod store; mod theme; mod translator;
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::api::{HttpTranslationService, PreviewTranslationService, TranslationService};
use crate::clipboard::SystemClipboard;
use crate::config::{AppConfig, Backend};
use crate::store::{FileStore, MemoryStore, PreferenceStore};

fn init_logging() {
    let filter = EnvFilter::try_from_env(config::ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    init_logging();
    let cfg = AppConfig::from_env()?;
    let store: Arc<dyn PreferenceStore> = match &cfg.data_dir {
        Some(dir) => {
            let fs = FileStore::open(dir);
            tracing::debug!(path = %fs.path().display(), "preferences file");
            Arc::new(fs)
        }
        None => {
            tracing::warn!("no config directory on this platform; preferences will not persist");
            Arc::new(MemoryStore::new())
        }
    };
    let locale = i18n::LocaleContext::init(store.clone());
    let theme = theme::ThemeState::init(store);
    let translator: Arc<dyn TranslationService> = match cfg.backend {
        Backend::Http => Arc::new(HttpTranslationService::new(&cfg.api_base_url, cfg.request_timeout)?),
        Backend::Preview => Arc::new(PreviewTranslationService::new(locale.clone())),
    };
    let clipboard = SystemClipboard::open()
        .map_err(|e| tracing::warn!(error = %e, "system clipboard unavailable; copy is disabled"))
        .ok();
    tracing::info!(
        backend = ?cfg.backend,
        api = %cfg.api_base_url,
        locale = %locale.active_locale(),
        "starting translator"
    );
    dioxus_gui::run(dioxus_gui::Services {
        locale,
        theme,
        translator,
        clipboard: Arc::new(parking_lot::Mutex::new(clipboard)),
    })?;
    Ok(())
}
