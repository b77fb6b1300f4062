//! Transport-layer types shared across the workspace.
//! These structs mirror the analytics API's response and request payloads
//! so the frontend can deserialize endpoint bodies without duplicating shapes.

mod analytics;
mod transaction;

pub use analytics::{
    CategoryAvgAmount, CategoryFraud, CategorySpend, FraudTrendPoint, GenderAmount, HistogramBin,
    HistogramMode, MerchantTotal, Summary,
};
pub use transaction::{Ack, IngestReceipt, NewTransaction, Transaction, TransactionPage};
