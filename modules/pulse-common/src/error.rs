use thiserror::Error;

use crate::types::EventId;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Registration failed: username, email and password are required")]
    RegistrationFailed,

    #[error("Login required")]
    AuthRequired,

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Registration is not open for event {0}")]
    RegistrationClosed(EventId),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
