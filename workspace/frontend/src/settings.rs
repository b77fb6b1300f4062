use common::HistogramMode;
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Analytics API base URL (e.g., "http://127.0.0.1:8000")
    pub api_base_url: String,

    /// Static key sent as the `X-API-Key` header on every request
    pub api_key: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Default request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// CSV upload timeout in milliseconds (large files, slow ingestion)
    pub upload_timeout_ms: u32,

    /// Histogram timeout in milliseconds (slow server-side aggregation)
    pub histogram_timeout_ms: u32,

    /// Polling cadence once the push channel has failed
    pub poll_interval_ms: u32,

    /// Requested amount-histogram bucket count
    pub histogram_bins: u32,

    /// Amount-histogram bucketing strategy
    pub histogram_mode: HistogramMode,

    /// Row limit for the per-category and top-merchant rankings
    pub ranking_limit: u32,

    /// Transactions-table page size
    pub page_size: u32,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            api_key: String::new(),
            log_level: Level::Info,
            request_timeout_ms: 60_000,
            upload_timeout_ms: 300_000,
            histogram_timeout_ms: 120_000,
            poll_interval_ms: 5_000,
            histogram_bins: 20,
            histogram_mode: HistogramMode::Fast,
            ranking_limit: 12,
            page_size: 50,
            toast_duration_ms: 5_000,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_url)) = storage.get_item("fraudlens_api_url") {
                    settings.api_base_url = api_url;
                }

                if let Ok(Some(api_key)) = storage.get_item("fraudlens_api_key") {
                    settings.api_key = api_key;
                }

                if let Ok(Some(log_level)) = storage.get_item("fraudlens_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(interval)) = storage.get_item("fraudlens_poll_interval_ms") {
                    if let Ok(interval_val) = interval.parse::<u32>() {
                        settings.poll_interval_ms = interval_val;
                    }
                }

                if let Ok(Some(bins)) = storage.get_item("fraudlens_histogram_bins") {
                    if let Ok(bins_val) = bins.parse::<u32>() {
                        settings.histogram_bins = bins_val;
                    }
                }

                if let Ok(Some(mode)) = storage.get_item("fraudlens_histogram_mode") {
                    settings.histogram_mode = match mode.to_lowercase().as_str() {
                        "quantile" => HistogramMode::Quantile,
                        "fast" => HistogramMode::Fast,
                        _ => settings.histogram_mode,
                    };
                }

                if let Ok(Some(page_size)) = storage.get_item("fraudlens_page_size") {
                    if let Ok(page_val) = page_size.parse::<u32>() {
                        settings.page_size = page_val;
                    }
                }
            }
        }

        settings
    }

    /// Save the override-able settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("fraudlens_api_url", &self.api_base_url)?;
                storage.set_item("fraudlens_api_key", &self.api_key)?;
                storage.set_item(
                    "fraudlens_log_level",
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                storage.set_item(
                    "fraudlens_poll_interval_ms",
                    &self.poll_interval_ms.to_string(),
                )?;
                storage.set_item("fraudlens_histogram_bins", &self.histogram_bins.to_string())?;
                storage.set_item("fraudlens_histogram_mode", self.histogram_mode.as_str())?;
                storage.set_item("fraudlens_page_size", &self.page_size.to_string())?;
            }
        }
        Ok(())
    }

    /// URL of the push-update channel: same host as the API with the scheme
    /// upgraded to its streaming variant, path `/ws/changes`.
    pub fn changes_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let streaming_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            format!("ws://{base}")
        };
        format!("{streaming_base}/ws/changes")
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_url_upgrades_http_scheme() {
        let settings = AppSettings::default();
        assert_eq!(settings.changes_url(), "ws://127.0.0.1:8000/ws/changes");
    }

    #[test]
    fn changes_url_upgrades_https_scheme() {
        let settings = AppSettings {
            api_base_url: "https://api.example.com/".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(settings.changes_url(), "wss://api.example.com/ws/changes");
    }
}
