//! Session context
//!
//! The bearer credential and last-known identity are held in an explicit
//! [`Session`] value owned by the client, with a clear establish/clear
//! lifecycle. Nothing is kept in ambient process state: an operation either
//! receives a session or refuses to run.

use shared::client::UserInfo;

/// An established authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer credential attached to every request
    pub token: String,
    /// Identity record returned at login
    pub user: UserInfo,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
