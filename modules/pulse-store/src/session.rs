use std::collections::HashSet;

use pulse_common::{EventId, PulseError, User};
use tracing::info;
use uuid::Uuid;

/// Domain appended to fabricated login emails.
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "example.com";

/// The single user session: who is logged in, and which events that session
/// has registered for or authored.
///
/// The membership sets belong to the session rather than to a user id, so
/// they outlive logout and carry over to whoever logs in next.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    registered: HashSet<EventId>,
    authored: HashSet<EventId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Any non-empty username/password pair is accepted. The email is
    /// derived from the lower-cased username.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&User, PulseError> {
        if username.is_empty() || password.is_empty() {
            return Err(PulseError::InvalidCredentials);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@{PLACEHOLDER_EMAIL_DOMAIN}", username.to_lowercase()),
            phone: None,
        };
        info!(username = %user.username, user_id = %user.id, "User logged in");
        Ok(&*self.user.insert(user))
    }

    /// Username, email and password are required; an empty phone is stored
    /// as absent. The supplied email is kept verbatim.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<&User, PulseError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(PulseError::RegistrationFailed);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        };
        info!(username = %user.username, user_id = %user.id, "User registered");
        Ok(&*self.user.insert(user))
    }

    /// Clears the current user. Membership sets are left untouched.
    pub fn logout(&mut self) -> Option<User> {
        let previous = self.user.take();
        if let Some(user) = &previous {
            info!(username = %user.username, "User logged out");
        }
        previous
    }

    pub fn is_registered(&self, id: EventId) -> bool {
        self.registered.contains(&id)
    }

    pub fn is_authored(&self, id: EventId) -> bool {
        self.authored.contains(&id)
    }

    /// Returns `false` when `id` was already registered.
    pub fn mark_registered(&mut self, id: EventId) -> bool {
        self.registered.insert(id)
    }

    pub fn mark_authored(&mut self, id: EventId) {
        self.authored.insert(id);
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }
}
