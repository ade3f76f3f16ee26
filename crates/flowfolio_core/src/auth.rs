//! Admin session gate.
//!
//! # Responsibility
//! - Guard the admin surface behind a login and a persisted session flag.
//!
//! # Invariants
//! - Credentials are a deliberately trivial placeholder; hardening is out of
//!   scope for this gate.
//! - The catalog service has no awareness of authentication and stays
//!   callable by any caller that reaches it.

use crate::store::{SlotStore, StoreResult};
use log::info;

const ADMIN_USERNAME: &str = "bin5518";
const ADMIN_PASSWORD: &str = "1234";

/// Slot key holding the admin session flag.
pub const SESSION_SLOT_KEY: &str = "adminAuthenticated";

/// Login gate persisting its session flag next to the catalog blob.
pub struct AdminGate<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> AdminGate<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Checks credentials and, on success, persists the session flag.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<bool> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            info!("event=admin_login module=auth status=denied");
            return Ok(false);
        }

        self.slots.write(SESSION_SLOT_KEY, "true")?;
        info!("event=admin_login module=auth status=ok");
        Ok(true)
    }

    /// Clears the session flag. Idempotent.
    pub fn logout(&self) -> StoreResult<()> {
        self.slots.clear(SESSION_SLOT_KEY)?;
        info!("event=admin_logout module=auth status=ok");
        Ok(())
    }

    /// Returns whether an admin session flag is currently persisted.
    pub fn is_authenticated(&self) -> StoreResult<bool> {
        Ok(self.slots.read(SESSION_SLOT_KEY)?.as_deref() == Some("true"))
    }
}
