#![allow(missing_docs)]
//! Shared fixtures for the endpoint and store tests.

use axum::http::{HeaderMap, HeaderValue, header};
use axum_extra::headers::{Authorization, HeaderMapExt};
use axum_test::TestServer;
use tempfile::TempDir;
use time::macros::date;

use crate::{AppState, Credentials, CsvTransactionStore, Transaction, build_router};

pub(crate) const TEST_USERNAME: &str = "admin";
pub(crate) const TEST_PASSWORD: &str = "correct horse battery staple";

/// Build the `Authorization: Basic` header value for a username/password pair.
pub(crate) fn basic_auth_header(username: &str, password: &str) -> HeaderValue {
    let mut headers = HeaderMap::new();
    headers.typed_insert(Authorization::basic(username, password));

    headers
        .remove(header::AUTHORIZATION)
        .expect("Could not build basic auth header.")
}

/// Create a store backed by a fresh temporary file seeded with `records`.
///
/// The [TempDir] must be kept alive for as long as the store is used.
pub(crate) fn seed_store(records: &[Transaction]) -> (TempDir, CsvTransactionStore) {
    let directory = tempfile::tempdir().expect("Could not create temp dir.");
    let store = CsvTransactionStore::new(directory.path().join("transactions.csv"));
    store.save(records).expect("Could not seed store.");

    (directory, store)
}

/// Create an [AppState] over a seeded temporary store with the test credentials.
pub(crate) fn seed_state(records: &[Transaction]) -> (TempDir, AppState) {
    let (directory, store) = seed_store(records);
    let state = AppState::new(store, Credentials::new(TEST_USERNAME, TEST_PASSWORD));

    (directory, state)
}

/// Create a [TestServer] running the full app router over a seeded store.
pub(crate) fn seed_server(records: &[Transaction]) -> (TempDir, TestServer) {
    let (directory, state) = seed_state(records);
    let server = TestServer::new(build_router(state));

    (directory, server)
}

/// Three transactions with distinct IDs and amounts, in a fixed order.
pub(crate) fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            transaction_id: "T1".to_owned(),
            customer_id: "C1".to_owned(),
            payment_amount: 120.5,
            payment_date: date!(2024 - 01 - 15),
            payment_status: "Paid".to_owned(),
        },
        Transaction {
            transaction_id: "T2".to_owned(),
            customer_id: "C2".to_owned(),
            payment_amount: 13.37,
            payment_date: date!(2024 - 02 - 29),
            payment_status: "Pending".to_owned(),
        },
        Transaction {
            transaction_id: "T3".to_owned(),
            customer_id: "C1".to_owned(),
            payment_amount: 560.0,
            payment_date: date!(2024 - 03 - 02),
            payment_status: "Refunded".to_owned(),
        },
    ]
}
