//! Inspector registry — owner-gated access control.
//!
//! The owner is fixed at construction; there is no transfer operation and
//! no inspector removal in scope. The allow-list grows only through
//! owner-invoked authorization. No ledger behavior consults the list: it is
//! an access-control primitive for future gated operations.

use std::collections::HashSet;

use sealedbook_types::{Address, Result, SealedbookError};
use tracing::{info, warn};

/// Owner identity plus the inspector allow-list.
#[derive(Debug)]
pub struct InspectorRegistry {
    owner: Address,
    inspectors: HashSet<Address>,
}

impl InspectorRegistry {
    /// A registry owned by `owner`, with an empty allow-list.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            inspectors: HashSet::new(),
        }
    }

    /// The identity permitted to authorize inspectors.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Grant inspector privileges to `inspector`.
    ///
    /// Idempotent: authorizing an already-present identity is a no-op
    /// success.
    ///
    /// # Errors
    /// Returns [`SealedbookError::Unauthorized`] if `caller` is not the
    /// owner. The allow-list is left untouched.
    pub fn authorize_inspector(&mut self, caller: Address, inspector: Address) -> Result<()> {
        if caller != self.owner {
            warn!(
                caller = %caller.short(),
                inspector = %inspector.short(),
                "authorize_inspector rejected: caller is not the owner"
            );
            return Err(SealedbookError::Unauthorized { caller });
        }

        self.inspectors.insert(inspector);
        info!(inspector = %inspector.short(), "inspector authorized");
        Ok(())
    }

    /// Whether `identity` holds inspector privileges. Pure lookup; unknown
    /// identities are false.
    #[must_use]
    pub fn is_authorized_inspector(&self, identity: &Address) -> bool {
        self.inspectors.contains(identity)
    }

    /// Number of authorized inspectors.
    #[must_use]
    pub fn inspector_count(&self) -> usize {
        self.inspectors.len()
    }
}
