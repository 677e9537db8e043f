use axum::{Json, extract::State};

use crate::{Error, app_state::TransactionState, transaction::Transaction};

/// A route handler for listing every transaction in the store, in file order.
///
/// This route is public, unlike the count route which requires credentials.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let transactions = state.store.load()?;

    Ok(Json(transactions))
}
