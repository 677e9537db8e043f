use axum::{Json, extract::State};

use crate::{Error, app_state::TransactionState, transaction::Transaction};

/// A route handler for getting the transaction with the largest payment
/// amount.
///
/// Ties go to the record that appears first in file order.
pub async fn get_max_transaction_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Transaction>, Error> {
    let transactions = state.store.load()?;

    max_by_amount(&transactions)
        .cloned()
        .map(Json)
        .ok_or(Error::EmptyStore)
}

/// A route handler for getting the transaction with the smallest payment
/// amount.
///
/// Ties go to the record that appears first in file order.
pub async fn get_min_transaction_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Transaction>, Error> {
    let transactions = state.store.load()?;

    min_by_amount(&transactions)
        .cloned()
        .map(Json)
        .ok_or(Error::EmptyStore)
}

// The strict comparisons keep the first record on ties, matching the
// first-occurrence semantics of a linear scan.
fn max_by_amount(transactions: &[Transaction]) -> Option<&Transaction> {
    transactions.iter().reduce(|best, transaction| {
        if transaction.payment_amount > best.payment_amount {
            transaction
        } else {
            best
        }
    })
}

fn min_by_amount(transactions: &[Transaction]) -> Option<&Transaction> {
    transactions.iter().reduce(|best, transaction| {
        if transaction.payment_amount < best.payment_amount {
            transaction
        } else {
            best
        }
    })
}

#[cfg(test)]
mod minmax_tests {
    use time::macros::date;

    use crate::transaction::Transaction;

    use super::{max_by_amount, min_by_amount};

    fn transaction(id: &str, amount: f64) -> Transaction {
        Transaction {
            transaction_id: id.to_owned(),
            customer_id: "C1".to_owned(),
            payment_amount: amount,
            payment_date: date!(2024 - 03 - 02),
            payment_status: "Paid".to_owned(),
        }
    }

    #[test]
    fn ties_resolve_to_first_in_file_order() {
        let transactions = vec![
            transaction("A", 5.0),
            transaction("B", 5.0),
            transaction("C", 9.0),
        ];

        assert_eq!(max_by_amount(&transactions).unwrap().transaction_id, "C");
        assert_eq!(min_by_amount(&transactions).unwrap().transaction_id, "A");
    }

    #[test]
    fn all_equal_amounts_resolve_to_first() {
        let transactions = vec![transaction("A", 5.0), transaction("B", 5.0)];

        assert_eq!(max_by_amount(&transactions).unwrap().transaction_id, "A");
        assert_eq!(min_by_amount(&transactions).unwrap().transaction_id, "A");
    }

    #[test]
    fn empty_collection_has_no_extremes() {
        assert_eq!(max_by_amount(&[]), None);
        assert_eq!(min_by_amount(&[]), None);
    }
}
