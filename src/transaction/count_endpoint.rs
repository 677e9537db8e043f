use axum::{Json, extract::State};

use crate::{Error, app_state::TransactionState};

/// A route handler for counting the transactions in the store.
///
/// Requires credentials even though the full listing is public. The
/// asymmetry is deliberate and kept for compatibility with existing clients.
pub async fn count_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<usize>, Error> {
    let transactions = state.store.load()?;

    Ok(Json(transactions.len()))
}
