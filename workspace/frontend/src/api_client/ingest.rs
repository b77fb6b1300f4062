use common::IngestReceipt;
use web_sys::{File, FormData};

use crate::api_client::{self, ApiConfig};

/// Upload a CSV file for server-side ingestion. Uses the long deadline:
/// uploads can be large and ingestion is batched.
pub async fn upload_csv(config: &ApiConfig, file: File) -> Result<IngestReceipt, String> {
    log::debug!("Uploading CSV file: {} ({} bytes)", file.name(), file.size());

    let form = FormData::new().map_err(|e| {
        let error_msg = format!("Failed to build form data: {:?}", e);
        log::error!("POST /ingest/csv - {}", error_msg);
        error_msg
    })?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| {
            let error_msg = format!("Failed to attach file: {:?}", e);
            log::error!("POST /ingest/csv - {}", error_msg);
            error_msg
        })?;

    let result = api_client::post_form::<IngestReceipt>(
        config,
        "/ingest/csv",
        form,
        config.upload_timeout_ms,
    )
    .await;
    match &result {
        Ok(receipt) => log::info!("Ingested {} rows from {}", receipt.inserted, file.name()),
        Err(e) => log::error!("Failed to ingest {}: {}", file.name(), e),
    }
    result
}
