use tracing::level_filters::LevelFilter;

use crate::dtos::referraldtos::MAX_ITEMS_PER_PAGE;
use crate::service::error::ReferralError;

#[derive(Debug, Clone)]
pub struct Config {
    pub app_url: String,
    pub items_per_page: i64,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn init() -> Result<Config, ReferralError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ReferralError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_url = lookup("APP_URL").unwrap_or_else(|| "http://localhost:5173".to_string());

        let items_per_page = match lookup("ITEMS_PER_PAGE") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| (1..=MAX_ITEMS_PER_PAGE).contains(n))
                .ok_or_else(|| {
                    ReferralError::Config(format!(
                        "ITEMS_PER_PAGE must be between 1-{}, got {:?}",
                        MAX_ITEMS_PER_PAGE, raw
                    ))
                })?,
            None => 10,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw.trim().parse::<LevelFilter>().map_err(|_| {
                ReferralError::Config(format!("LOG_LEVEL is not a log level, got {:?}", raw))
            })?,
            None => LevelFilter::INFO,
        };

        Ok(Config {
            app_url,
            items_per_page,
            log_level,
        })
    }
}
