//! Session login

use reqwest::header::SET_COOKIE;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::NodeClient;
use crate::error::{ClientError, Result};

/// Cookie material returned by a successful login
///
/// Only valid for the node that issued it and only for the current run.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    cookie: String,
}

impl SessionToken {
    /// Builds a token from raw `Set-Cookie` header values
    ///
    /// Each value is reduced to its `name=value` pair; attributes such as
    /// `Path` or `HttpOnly` are dropped. Returns `None` when nothing usable
    /// is left.
    pub fn from_set_cookie<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pairs: Vec<&str> = values
            .into_iter()
            .filter_map(|value| value.split(';').next())
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .collect();

        if pairs.is_empty() {
            return None;
        }

        Some(Self {
            cookie: pairs.join("; "),
        })
    }

    /// Value for the `Cookie` request header
    pub fn cookie_header(&self) -> &str {
        &self.cookie
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

#[derive(Serialize)]
struct SessionRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl NodeClient {
    // =============================================================================
    // Authentication
    // =============================================================================

    /// Exchange credentials for a session cookie
    ///
    /// # Arguments
    /// * `email` - Node account email (the registry's `username`)
    /// * `password` - Node account password
    ///
    /// # Returns
    /// The session token to pass to [`NodeClient::fetch_jobs`]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken> {
        let url = format!("{}/sessions", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SessionRequest { email, password })
            .send()
            .await?;

        let response = self.check_status(response).await?;

        let token = SessionToken::from_set_cookie(
            response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        )
        .ok_or(ClientError::MissingSession)?;

        debug!(url = %url, "Session established");
        Ok(token)
    }
}
