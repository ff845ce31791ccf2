//! Route table of the application.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Event;
use crate::routes::{AutoRoutes, UrlConf};

pub fn event_routes(cfg: &Config) -> AutoRoutes {
    AutoRoutes::for_model::<Event>(&cfg.app_namespace, &cfg.event_prefix)
}

pub fn urlconf(cfg: &Config) -> AppResult<UrlConf> {
    let mut urls = UrlConf::new();
    urls.include(&event_routes(cfg))?;
    Ok(urls)
}
