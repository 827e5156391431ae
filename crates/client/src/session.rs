// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The operator's session context.
//!
//! The session holds the one bearer credential the remote service
//! expects. It is threaded explicitly into every remote call; core
//! logic never reads credentials from ambient process-wide state.

/// An authenticated operator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The bearer credential issued at login.
    token: String,
}

impl Session {
    /// Creates a session from a bearer credential.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self { token }
    }

    /// Returns the raw bearer credential.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        &self.token
    }

    /// Returns the `Authorization` header value for remote calls.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
