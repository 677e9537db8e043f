use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    app_state::TransactionState,
    transaction::{Confirmation, Transaction},
};

/// A route handler for replacing a transaction, requires credentials.
///
/// The first record whose `transaction_id` matches the path parameter is
/// replaced wholesale with the request body; there is no field-level merge,
/// and the body's own `transaction_id` is stored as-is even if it differs
/// from the path.
///
/// The collection is written back before a missing record is reported, so a
/// no-op update still rewrites the file.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
    Json(replacement): Json<Transaction>,
) -> Result<Json<Confirmation>, Error> {
    let outcome = state.store.mutate(|transactions| {
        match transactions
            .iter_mut()
            .find(|transaction| transaction.transaction_id == transaction_id)
        {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    })?;
    outcome?;

    Ok(Json(Confirmation::new("Transaction updated successfully")))
}
