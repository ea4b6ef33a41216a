//! HTTP basic authentication middleware.
//!
//! Credentials are encoded once, up front, into the exact `Authorization`
//! header value a client must send. A request is let through only when its
//! header matches one of them; the matching user name is then available to
//! handlers as an [`AuthUser`] extension.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Challenge sent back with every 401.
pub const AUTH_CHALLENGE: &str = "Basic realm=\"Authorization Required\"";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountsError {
    #[error("account entry `{0}` is not of the form user:password")]
    Malformed(String),

    #[error("user name must not be empty")]
    EmptyUser,
}

/// User name to password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accounts(BTreeMap<String, String>);

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), AccountsError> {
        let user = user.into();
        if user.is_empty() {
            return Err(AccountsError::EmptyUser);
        }
        self.0.insert(user, password.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(user, password)| (user.as_str(), password.as_str()))
    }
}

/// Parses `user:password` pairs separated by commas, e.g. `test1:test11,test2:test22`.
impl FromStr for Accounts {
    type Err = AccountsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut accounts = Accounts::new();
        for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let (user, password) = entry
                .split_once(':')
                .ok_or_else(|| AccountsError::Malformed(entry.to_owned()))?;
            accounts.insert(user, password)?;
        }
        Ok(accounts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

#[derive(Clone)]
pub struct BasicAuth {
    credentials: Arc<Vec<Credential>>,
}

struct Credential {
    header_value: String,
    user: String,
}

impl BasicAuth {
    pub fn new(accounts: &Accounts) -> Self {
        let credentials = accounts
            .iter()
            .map(|(user, password)| Credential {
                header_value: authorization_header(user, password),
                user: user.to_owned(),
            })
            .collect();
        Self {
            credentials: Arc::new(credentials),
        }
    }

    /// Returns the user whose encoded credentials equal `header_value`.
    pub fn search_credential(&self, header_value: &str) -> Option<&str> {
        if header_value.is_empty() {
            return None;
        }
        self.credentials
            .iter()
            .find(|credential| {
                constant_time_eq(credential.header_value.as_bytes(), header_value.as_bytes())
            })
            .map(|credential| credential.user.as_str())
    }
}

pub fn authorization_header(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub async fn require_basic_auth(
    State(auth): State<BasicAuth>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| auth.search_credential(value))
        .map(str::to_owned);

    match user {
        Some(user) => {
            request.extensions_mut().insert(AuthUser(user));
            next.run(request).await
        }
        None => {
            tracing::debug!(path = %request.uri().path(), "basic auth rejected");
            (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, AUTH_CHALLENGE)],
            )
                .into_response()
        }
    }
}
