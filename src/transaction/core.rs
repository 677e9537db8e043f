//! Defines the core data model for payment transactions.

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A single payment transaction.
///
/// All five fields are required. Instances are constructed through serde,
/// either from a CSV row read by the store or from a JSON request body, and a
/// missing or uncoercible field fails construction. Serialization produces
/// the same five fields in the same fixed order, with the date rendered as an
/// ISO 8601 calendar date.
///
/// `transaction_id` is intended to be unique but uniqueness is not enforced
/// anywhere; lookups that take an ID return the first match in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The identifier of the transaction.
    pub transaction_id: String,
    /// The identifier of the customer the payment belongs to.
    pub customer_id: String,
    /// The amount of money paid.
    pub payment_amount: f64,
    /// The calendar date the payment was made.
    #[serde(with = "iso_date")]
    pub payment_date: Date,
    /// The processing status of the payment, e.g. "Paid" or "Pending".
    pub payment_status: String,
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use super::Transaction;

    #[test]
    fn serializes_date_as_iso_8601() {
        let transaction = Transaction {
            transaction_id: "T1".to_owned(),
            customer_id: "C1".to_owned(),
            payment_amount: 42.5,
            payment_date: date!(2024 - 01 - 15),
            payment_status: "Paid".to_owned(),
        };

        let json = serde_json::to_string(&transaction).unwrap();

        assert!(
            json.contains("\"payment_date\":\"2024-01-15\""),
            "got JSON {json}"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let transaction = Transaction {
            transaction_id: "T1".to_owned(),
            customer_id: "C1".to_owned(),
            payment_amount: 42.57,
            payment_date: date!(2024 - 01 - 15),
            payment_status: "Paid".to_owned(),
        };

        let json = serde_json::to_string(&transaction).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, transaction);
    }

    #[test]
    fn missing_field_fails_construction() {
        let json = r#"{
            "transaction_id": "T1",
            "customer_id": "C1",
            "payment_amount": 42.5,
            "payment_date": "2024-01-15"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn uncoercible_amount_fails_construction() {
        let json = r#"{
            "transaction_id": "T1",
            "customer_id": "C1",
            "payment_amount": "lots",
            "payment_date": "2024-01-15",
            "payment_status": "Paid"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn unparseable_date_fails_construction() {
        let json = r#"{
            "transaction_id": "T1",
            "customer_id": "C1",
            "payment_amount": 42.5,
            "payment_date": "15/01/2024",
            "payment_status": "Paid"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
