use common::{
    CategoryAvgAmount, CategoryFraud, CategorySpend, FraudTrendPoint, GenderAmount, HistogramBin,
    HistogramMode, MerchantTotal, Summary,
};

use crate::api_client::{self, ApiConfig};

/// Dataset-wide KPI totals.
pub async fn get_summary(config: &ApiConfig) -> Result<Summary, String> {
    log::trace!("Fetching summary");
    let result = api_client::get::<Summary>(config, "/summary").await;
    match &result {
        Ok(summary) => log::info!(
            "Fetched summary: {} transactions, {} fraud cases",
            summary.total_transactions,
            summary.fraud_cases
        ),
        Err(e) => log::error!("Failed to fetch summary: {}", e),
    }
    result
}

/// Total spend per category, server-ranked descending.
pub async fn get_category_spend(config: &ApiConfig) -> Result<Vec<CategorySpend>, String> {
    log::trace!("Fetching category spend");
    let result = api_client::get::<Vec<CategorySpend>>(config, "/category-spend").await;
    match &result {
        Ok(rows) => log::info!("Fetched spend for {} categories", rows.len()),
        Err(e) => log::error!("Failed to fetch category spend: {}", e),
    }
    result
}

/// Fraud count per step, ascending by step.
pub async fn get_fraud_trend(config: &ApiConfig) -> Result<Vec<FraudTrendPoint>, String> {
    log::trace!("Fetching fraud trend");
    let result = api_client::get::<Vec<FraudTrendPoint>>(config, "/fraud-trend").await;
    match &result {
        Ok(points) => log::info!("Fetched fraud trend with {} steps", points.len()),
        Err(e) => log::error!("Failed to fetch fraud trend: {}", e),
    }
    result
}

/// Total amount per gender.
pub async fn get_amount_by_gender(config: &ApiConfig) -> Result<Vec<GenderAmount>, String> {
    log::trace!("Fetching amount by gender");
    let result = api_client::get::<Vec<GenderAmount>>(config, "/amount-by-gender").await;
    match &result {
        Ok(rows) => log::info!("Fetched amounts for {} genders", rows.len()),
        Err(e) => log::error!("Failed to fetch amount by gender: {}", e),
    }
    result
}

/// Fraud count and rate per category, limited to the worst offenders.
pub async fn get_fraud_by_category(
    config: &ApiConfig,
    limit: u32,
) -> Result<Vec<CategoryFraud>, String> {
    log::trace!("Fetching fraud by category (limit={})", limit);
    let result =
        api_client::get::<Vec<CategoryFraud>>(config, &format!("/fraud-by-category?limit={}", limit))
            .await;
    match &result {
        Ok(rows) => log::info!("Fetched fraud stats for {} categories", rows.len()),
        Err(e) => log::error!("Failed to fetch fraud by category: {}", e),
    }
    result
}

/// Average amount per category.
pub async fn get_avg_amount_by_category(
    config: &ApiConfig,
    limit: u32,
) -> Result<Vec<CategoryAvgAmount>, String> {
    log::trace!("Fetching avg amount by category (limit={})", limit);
    let result = api_client::get::<Vec<CategoryAvgAmount>>(
        config,
        &format!("/avg-amount-by-category?limit={}", limit),
    )
    .await;
    match &result {
        Ok(rows) => log::info!("Fetched avg amounts for {} categories", rows.len()),
        Err(e) => log::error!("Failed to fetch avg amount by category: {}", e),
    }
    result
}

/// Top merchants by total amount.
pub async fn get_top_merchants(
    config: &ApiConfig,
    limit: u32,
) -> Result<Vec<MerchantTotal>, String> {
    log::trace!("Fetching top merchants (limit={})", limit);
    let result =
        api_client::get::<Vec<MerchantTotal>>(config, &format!("/top-merchants?limit={}", limit))
            .await;
    match &result {
        Ok(rows) => log::info!("Fetched {} top merchants", rows.len()),
        Err(e) => log::error!("Failed to fetch top merchants: {}", e),
    }
    result
}

/// Amount histogram. Uses the extended deadline: the server-side
/// aggregation scans every amount.
pub async fn get_amount_histogram(
    config: &ApiConfig,
    bins: u32,
    mode: HistogramMode,
) -> Result<Vec<HistogramBin>, String> {
    log::trace!("Fetching amount histogram (bins={}, mode={})", bins, mode.as_str());
    let result = api_client::get_with_timeout::<Vec<HistogramBin>>(
        config,
        &format!("/amount-histogram?bins={}&mode={}", bins, mode.as_str()),
        config.histogram_timeout_ms,
    )
    .await;
    match &result {
        Ok(histogram) => log::info!("Fetched histogram with {} buckets", histogram.len()),
        Err(e) => log::error!("Failed to fetch amount histogram: {}", e),
    }
    result
}
