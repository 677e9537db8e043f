use axum::{
    Json,
    extract::State,
};

use crate::{
    Error,
    app_state::TransactionState,
    transaction::{Confirmation, Transaction},
};

/// A route handler for creating a new transaction, requires credentials.
///
/// The record is appended at the end of the collection. No uniqueness check
/// is made on `transaction_id`: creating a record whose ID already exists
/// succeeds and leaves both records in the store.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Json(transaction): Json<Transaction>,
) -> Result<Json<Confirmation>, Error> {
    state
        .store
        .mutate(|transactions| transactions.push(transaction))?;

    Ok(Json(Confirmation::new("Transaction created successfully")))
}
