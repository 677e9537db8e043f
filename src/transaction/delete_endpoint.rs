use axum::{
    Json,
    extract::{Path, State},
};

use crate::{Error, app_state::TransactionState, transaction::Confirmation};

/// A route handler for deleting transactions by ID, requires credentials.
///
/// Every record with the matching `transaction_id` is removed, not just the
/// first. This deliberately differs from the get and update routes, which
/// operate on the first match only. Success is reported even when nothing
/// matched.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Confirmation>, Error> {
    state.store.mutate(|transactions| {
        transactions.retain(|transaction| transaction.transaction_id != transaction_id)
    })?;

    Ok(Json(Confirmation::new("Transaction deleted successfully")))
}
