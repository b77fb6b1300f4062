use serde::{Deserialize, Serialize};

/// One transaction document as the API returns it. Rows ingested via CSV
/// carry every field; rows created through the form may leave the optional
/// ones null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub step: i64,
    pub customer: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub zipcodeori: Option<String>,
    pub merchant: Option<String>,
    pub zipmerchant: Option<String>,
    pub category: Option<String>,
    pub amount: f64,
    pub fraud: u8,
}

impl Transaction {
    pub fn is_fraud(&self) -> bool {
        self.fraud != 0
    }
}

/// Response of `GET /transactions`: the total row count for the active
/// filter plus one bounded page of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    pub count: u64,
    pub items: Vec<Transaction>,
}

/// Request body for `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub step: i64,
    pub customer: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub zipcodeori: Option<String>,
    pub merchant: Option<String>,
    pub zipmerchant: Option<String>,
    pub category: Option<String>,
    pub amount: f64,
    pub fraud: u8,
}

/// Response of `POST /ingest/csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestReceipt {
    pub inserted: u64,
}

/// Response of `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_page_deserializes_with_nullable_fields() {
        let json = r#"{
            "count": 2,
            "items": [
                {
                    "step": 0,
                    "customer": "C1093826151",
                    "age": "26-35",
                    "gender": "male",
                    "zipcodeori": "28007",
                    "merchant": "M348934600",
                    "zipmerchant": "28007",
                    "category": "transportation",
                    "amount": 4.55,
                    "fraud": 0
                },
                {
                    "step": 12,
                    "customer": "C0000000001",
                    "age": null,
                    "gender": null,
                    "zipcodeori": null,
                    "merchant": null,
                    "zipmerchant": null,
                    "category": null,
                    "amount": 250.0,
                    "fraud": 1
                }
            ]
        }"#;
        let page: TransactionPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert!(!page.items[0].is_fraud());
        assert!(page.items[1].is_fraud());
        assert!(page.items[1].merchant.is_none());
    }

    #[test]
    fn new_transaction_serializes_api_field_names() {
        let tx = NewTransaction {
            step: 3,
            customer: "C42".to_string(),
            age: Some("19-25".to_string()),
            gender: Some("female".to_string()),
            zipcodeori: Some("28007".to_string()),
            merchant: Some("M42".to_string()),
            zipmerchant: Some("28007".to_string()),
            category: Some("travel".to_string()),
            amount: 99.9,
            fraud: 0,
        };
        let value = serde_json::to_value(&tx).unwrap();
        for key in [
            "step",
            "customer",
            "age",
            "gender",
            "zipcodeori",
            "merchant",
            "zipmerchant",
            "category",
            "amount",
            "fraud",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
    }
}
