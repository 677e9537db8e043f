//! Implements the structs that hold the state of the REST server.

use axum::extract::FromRef;

use crate::{auth::Credentials, store::CsvTransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding the payment transactions.
    pub store: CsvTransactionStore,

    /// The credential pair privileged requests are checked against.
    pub credentials: Credentials,
}

impl AppState {
    /// Create a new [AppState] from the transaction store and the configured
    /// credentials.
    pub fn new(store: CsvTransactionStore, credentials: Credentials) -> Self {
        Self { store, credentials }
    }
}

/// The state needed by the transaction route handlers.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store holding the payment transactions.
    pub store: CsvTransactionStore,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}
