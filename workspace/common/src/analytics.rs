use serde::{Deserialize, Serialize};

/// Dataset-wide KPI totals returned by `GET /summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_transactions: u64,
    pub total_amount: f64,
    pub fraud_cases: u64,
    pub unique_customers: u64,
}

/// One `GET /category-spend` row, server-ranked by amount descending.
/// The category is `None` for documents ingested without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: Option<String>,
    pub amount: f64,
}

/// One `GET /fraud-trend` row: fraud count per step, ascending by step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudTrendPoint {
    pub step: i64,
    pub fraud: u64,
}

/// One `GET /amount-by-gender` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderAmount {
    pub gender: String,
    pub amount: f64,
    pub count: u64,
}

/// One `GET /fraud-by-category` row. `fraud_rate` is fraud count over total
/// transactions within the category, already guarded server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFraud {
    pub category: String,
    pub fraud_count: u64,
    pub fraud_rate: f64,
}

/// One `GET /avg-amount-by-category` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAvgAmount {
    pub category: String,
    pub avg_amount: f64,
    pub count: u64,
}

/// One `GET /top-merchants` row, server-limited to the top N by amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantTotal {
    pub merchant: String,
    pub amount: f64,
    pub count: u64,
}

/// One `GET /amount-histogram` bucket. Equal-width mode returns only the
/// midpoint and count; quantile mode also carries the bucket bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub mid: f64,
    pub count: u64,
    #[serde(default)]
    pub bin_min: Option<f64>,
    #[serde(default)]
    pub bin_max: Option<f64>,
}

impl HistogramBin {
    pub fn new(mid: f64, count: u64) -> Self {
        Self {
            mid,
            count,
            bin_min: None,
            bin_max: None,
        }
    }
}

/// Bucketing strategy for `GET /amount-histogram`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistogramMode {
    /// Equal-width buckets. Fast, but skewed for long-tailed amounts.
    #[default]
    Fast,
    /// Roughly equal-count buckets.
    Quantile,
}

impl HistogramMode {
    /// Query-string value the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistogramMode::Fast => "fast",
            HistogramMode::Quantile => "quantile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_deserializes_backend_shape() {
        let json = r#"{
            "total_transactions": 594643,
            "total_amount": 22563585.32,
            "fraud_cases": 7200,
            "unique_customers": 4112
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_transactions, 594_643);
        assert_eq!(summary.fraud_cases, 7200);
    }

    #[test]
    fn category_spend_tolerates_null_category() {
        let rows: Vec<CategorySpend> =
            serde_json::from_str(r#"[{"category":"travel","amount":12.5},{"category":null,"amount":3.0}]"#)
                .unwrap();
        assert_eq!(rows[0].category.as_deref(), Some("travel"));
        assert!(rows[1].category.is_none());
    }

    #[test]
    fn histogram_bin_parses_both_modes() {
        let fast: HistogramBin = serde_json::from_str(r#"{"count":42,"mid":75.0}"#).unwrap();
        assert_eq!(fast.count, 42);
        assert!(fast.bin_min.is_none());

        let quantile: HistogramBin =
            serde_json::from_str(r#"{"count":10,"mid":25.0,"bin_min":20.0,"bin_max":30.0}"#)
                .unwrap();
        assert_eq!(quantile.bin_min, Some(20.0));
        assert_eq!(quantile.bin_max, Some(30.0));
    }

    #[test]
    fn histogram_mode_query_values() {
        assert_eq!(HistogramMode::Fast.as_str(), "fast");
        assert_eq!(HistogramMode::Quantile.as_str(), "quantile");
    }
}
