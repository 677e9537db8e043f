//! Application router configuration with public and credential-gated route
//! definitions.

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{
    AppState,
    auth::auth_guard,
    endpoints,
    transaction::{
        count_transactions_endpoint, create_transaction_endpoint, delete_transaction_endpoint,
        get_max_transaction_endpoint, get_min_transaction_endpoint, get_transaction_endpoint,
        get_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The count, create, update and delete routes sit behind the basic-auth
/// guard; the remaining read routes are public. The literal `count`, `max`
/// and `min` routes coexist with the `{transaction_id}` route because axum
/// prefers literal segments over path parameters.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route(endpoints::TRANSACTIONS, get(get_transactions_endpoint))
        .route(endpoints::TRANSACTION_MAX, get(get_max_transaction_endpoint))
        .route(endpoints::TRANSACTION_MIN, get(get_min_transaction_endpoint))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint));

    let credentialed_routes = Router::new()
        .route(
            endpoints::TRANSACTION_COUNT,
            get(count_transactions_endpoint),
        )
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(endpoints::TRANSACTION, put(update_transaction_endpoint))
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    public_routes.merge(credentialed_routes).with_state(state)
}
