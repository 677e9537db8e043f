use axum::{
    Json,
    extract::{Path, State},
};

use crate::{Error, app_state::TransactionState, transaction::Transaction};

/// A route handler for getting a single transaction by its ID.
///
/// When several records share the ID, the first one in file order is
/// returned.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, Error> {
    let transactions = state.store.load()?;

    transactions
        .into_iter()
        .find(|transaction| transaction.transaction_id == transaction_id)
        .map(Json)
        .ok_or(Error::NotFound)
}
