//! The transaction data model and the route handlers operating on it.

mod core;
mod count_endpoint;
mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod list_endpoint;
mod minmax_endpoint;
mod update_endpoint;

pub use self::core::Transaction;
pub(crate) use count_endpoint::count_transactions_endpoint;
pub(crate) use create_endpoint::create_transaction_endpoint;
pub(crate) use delete_endpoint::delete_transaction_endpoint;
pub(crate) use get_endpoint::get_transaction_endpoint;
pub(crate) use list_endpoint::get_transactions_endpoint;
pub(crate) use minmax_endpoint::{get_max_transaction_endpoint, get_min_transaction_endpoint};
pub(crate) use update_endpoint::update_transaction_endpoint;

use serde::{Deserialize, Serialize};

/// The JSON body confirming that a mutation was applied.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    /// A short human-readable description of what was done.
    pub message: String,
}

impl Confirmation {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
