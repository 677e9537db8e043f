//! Basic-auth credential checking and the middleware gating privileged routes.

use std::fmt;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use sha2::{Digest, Sha512};

use crate::{AppState, Error};

/// The username/password pair that privileged operations are checked against.
///
/// The pair is injected at construction (the server binary reads it from the
/// environment) rather than baked in as constants, so tests can run with
/// their own credentials. There is no session or token: every privileged
/// call must resupply the pair.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a credential pair from the configured username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a supplied username/password pair against the configured one.
    ///
    /// Never fails; a mismatch simply returns `false` and the caller decides
    /// how to reject the request.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        // Comparing fixed-size digests instead of the raw strings keeps the
        // check constant-time in the length and content of the supplied
        // values. The single `&` avoids short-circuiting on the username.
        digests_match(&self.username, username) & digests_match(&self.password, password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

fn digests_match(expected: &str, supplied: &str) -> bool {
    Sha512::digest(expected) == Sha512::digest(supplied)
}

/// The state needed for the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthState {
    /// The credential pair privileged requests are checked against.
    pub credentials: Credentials,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            credentials: state.credentials.clone(),
        }
    }
}

/// Middleware function that checks the `Authorization: Basic` header against
/// the configured credentials.
///
/// The request runs normally when the pair matches. A missing header or a
/// mismatch yields a 401 response with a `WWW-Authenticate` challenge before
/// the inner handler, and therefore the store, is ever reached.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();

    let header =
        match TypedHeader::<Authorization<Basic>>::from_request_parts(&mut parts, &state).await {
            Ok(TypedHeader(Authorization(basic))) => basic,
            Err(_) => {
                tracing::debug!("Rejecting request to {} with no basic auth header.", parts.uri);
                return Error::InvalidCredentials.into_response();
            }
        };

    if !state.credentials.matches(header.username(), header.password()) {
        tracing::debug!("Rejecting request to {} with wrong credentials.", parts.uri);
        return Error::InvalidCredentials.into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}
