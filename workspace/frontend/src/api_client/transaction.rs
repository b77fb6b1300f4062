use common::{Ack, NewTransaction, TransactionPage};

use crate::api_client::{self, ApiConfig};

/// Get one page of transactions, optionally narrowed to fraud cases.
pub async fn get_transactions(
    config: &ApiConfig,
    limit: u32,
    offset: u64,
    fraud_only: bool,
) -> Result<TransactionPage, String> {
    log::trace!(
        "Fetching transactions (limit={}, offset={}, fraud_only={})",
        limit,
        offset,
        fraud_only
    );
    let mut endpoint = format!("/transactions?limit={}&offset={}", limit, offset);
    if fraud_only {
        endpoint.push_str("&fraud=1");
    }
    let result = api_client::get::<TransactionPage>(config, &endpoint).await;
    match &result {
        Ok(page) => log::info!("Fetched {} of {} transactions", page.items.len(), page.count),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}

/// Create a single transaction.
pub async fn create_transaction(config: &ApiConfig, request: &NewTransaction) -> Result<Ack, String> {
    log::debug!("Creating transaction for customer: {}", request.customer);
    let result = api_client::post::<Ack, _>(config, "/transactions", request).await;
    match &result {
        Ok(_) => log::info!("Successfully created transaction for {}", request.customer),
        Err(e) => log::error!(
            "Failed to create transaction for '{}': {}",
            request.customer,
            e
        ),
    }
    result
}
