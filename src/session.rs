//! Session context carrying the bearer credential.
//!
//! DESIGN
//! ======
//! The session is an explicit value handed to the screen at construction
//! instead of ambient process-wide storage. Login and logout mutate it;
//! every network operation asks it for a credential first. Presence of a
//! token is a best-effort gate only, the server remains the authority.

use std::fmt;

/// Holds the bearer token for the current login, if any.
#[derive(Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A logged-out session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session from an optional token. Blank tokens count as absent.
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        let mut session = Self::anonymous();
        if let Some(token) = token {
            session.login(token);
        }
        session
    }

    /// Store `token` as given. A blank token logs the session out.
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = if token.trim().is_empty() { None } else { Some(token) };
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The bearer token, or `None` when no one is logged in.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

// Tokens never reach logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
