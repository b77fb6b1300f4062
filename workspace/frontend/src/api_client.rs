pub mod analytics;
pub mod ingest;
pub mod transaction;

use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::settings::AppSettings;

/// Connection parameters for the analytics API. Built once from the settings
/// when the dashboard mounts and passed by reference to every call, so the
/// client itself never reaches into ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout_ms: u32,
    pub upload_timeout_ms: u32,
    pub histogram_timeout_ms: u32,
}

impl ApiConfig {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            request_timeout_ms: settings.request_timeout_ms,
            upload_timeout_ms: settings.upload_timeout_ms,
            histogram_timeout_ms: settings.histogram_timeout_ms,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

/// Error body FastAPI-style backends return for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// Races a request against its deadline. The loser is dropped; an
/// in-flight request past its deadline is reported as a timeout.
async fn with_deadline<T>(
    endpoint: &str,
    timeout_ms: u32,
    request: impl Future<Output = Result<T, String>>,
) -> Result<T, String> {
    let deadline = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(request);
    futures::pin_mut!(deadline);

    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            let error_msg = format!("Request timed out after {} ms", timeout_ms);
            log::error!("{} - {}", endpoint, error_msg);
            Err(error_msg)
        }
    }
}

/// Common GET request handler
pub async fn get<T>(config: &ApiConfig, endpoint: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    get_with_timeout(config, endpoint, config.request_timeout_ms).await
}

/// GET with an explicit deadline, for endpoints whose server-side
/// aggregation is known to be slow.
pub async fn get_with_timeout<T>(
    config: &ApiConfig,
    endpoint: &str,
    timeout_ms: u32,
) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = config.url(endpoint);
    log::debug!("GET request to: {}", url);

    let request = async {
        let response = Request::get(&url)
            .header("X-API-Key", &config.api_key)
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Request failed: {}", e);
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            })?;

        if !response.ok() {
            let error_msg = format!("HTTP error: {}", response.status());
            log::error!("GET {} - {}", endpoint, error_msg);
            return Err(error_msg);
        }

        log::trace!("GET {} - Response received, parsing JSON", endpoint);
        response.json::<T>().await.map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })
    };

    let result = with_deadline(endpoint, timeout_ms, request).await;
    if result.is_ok() {
        log::info!("GET {} - Success", endpoint);
    }
    result
}

/// Common POST request handler for JSON bodies
pub async fn post<T, B>(config: &ApiConfig, endpoint: &str, body: &B) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = config.url(endpoint);
    log::debug!("POST request to: {}", url);

    let request = async {
        let response = Request::post(&url)
            .header("X-API-Key", &config.api_key)
            .json(body)
            .map_err(|e| {
                let error_msg = format!("Failed to serialize request: {}", e);
                log::error!("POST {} - {}", endpoint, error_msg);
                error_msg
            })?
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Request failed: {}", e);
                log::error!("POST {} - {}", endpoint, error_msg);
                error_msg
            })?;

        read_post_response(endpoint, response).await
    };

    let result = with_deadline(endpoint, config.request_timeout_ms, request).await;
    if result.is_ok() {
        log::info!("POST {} - Success", endpoint);
    }
    result
}

/// Multipart POST handler. The browser sets the multipart boundary itself,
/// so no content-type header is attached here.
pub async fn post_form<T>(
    config: &ApiConfig,
    endpoint: &str,
    form: web_sys::FormData,
    timeout_ms: u32,
) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = config.url(endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let request = async {
        let response = Request::post(&url)
            .header("X-API-Key", &config.api_key)
            .body(form)
            .map_err(|e| {
                let error_msg = format!("Failed to build request: {}", e);
                log::error!("POST {} - {}", endpoint, error_msg);
                error_msg
            })?
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Request failed: {}", e);
                log::error!("POST {} - {}", endpoint, error_msg);
                error_msg
            })?;

        read_post_response(endpoint, response).await
    };

    let result = with_deadline(endpoint, timeout_ms, request).await;
    if result.is_ok() {
        log::info!("POST {} - Success", endpoint);
    }
    result
}

async fn read_post_response<T>(endpoint: &str, response: gloo_net::http::Response) -> Result<T, String>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        let status = response.status();
        let error_response: Result<ErrorDetail, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("POST {} - API error: {}", endpoint, err.detail);
                format!("Error: {}", err.detail)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", status);
                log::error!("POST {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })
}
