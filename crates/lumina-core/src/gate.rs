//! The admin access gate.
//!
//! One shared password, compared in memory. A successful check is followed
//! by a `LOGIN` dispatch; the gate itself holds no session. This keeps the
//! original template's behavior and is not an access-control mechanism: no
//! hashing, no expiry, no attempt counting.

use subtle::ConstantTimeEq;

use crate::error::GateError;

/// Password used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone)]
pub struct AccessGate {
    password: String,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl AccessGate {
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Compare `attempt` against the configured password.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidPassword`] on mismatch.
    pub fn check(&self, attempt: &str) -> Result<(), GateError> {
        if bool::from(self.password.as_bytes().ct_eq(attempt.as_bytes())) {
            Ok(())
        } else {
            Err(GateError::InvalidPassword)
        }
    }
}
