use metrics_exporter_prometheus::PrometheusHandle;
use skillfolio::config::AppConfig;
use skillfolio::content::PostLoader;
use skillfolio::error::AppError;
use skillfolio::site::SiteService;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) site: Arc<SiteService>,
}

/// Loads configuration, applying a posts directory override.
pub(crate) fn load_config(posts_dir: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = posts_dir {
        config.content.posts_dir = dir;
    }
    Ok(config)
}

/// Reads the posts snapshot that every page is built from.
pub(crate) fn build_site(config: &AppConfig) -> Result<SiteService, AppError> {
    let posts = PostLoader::from_dir(&config.content.posts_dir)?;
    Ok(SiteService::new(config.site.clone(), posts))
}

pub(crate) fn load_site(posts_dir: Option<PathBuf>) -> Result<SiteService, AppError> {
    let config = load_config(posts_dir)?;
    build_site(&config)
}
