//! Node domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A remote node exposing the session + query API
///
/// Loaded once at startup from the node registry file. Names are expected to
/// be unique but nothing enforces it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for NodeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDescriptor")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
