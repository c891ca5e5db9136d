//! Commitment ledger — the commit/reveal state machine.
//!
//! Per digest: `absent → (commit) → pending → (matching reveal) → revealed`.
//! `revealed` is terminal; nothing transitions back to absent and no record
//! is ever deleted in scope.
//!
//! Duplicate commits are rejected rather than overwritten: resetting
//! `commit_height` would destroy the provenance the record exists to keep.
//! A reveal of an already-revealed commitment re-executes the match and
//! succeeds again, matching the reference deployment.

use std::collections::HashMap;

use sealedbook_codec::order_digest;
use sealedbook_types::{
    BlockHeight, CommitDigest, Commitment, Order, Result, SealedbookError,
};
use tracing::{info, warn};

/// Keyed store of commitment records.
///
/// The digest is both the key and a field of the stored record, so a reveal
/// whose recomputed digest finds no record and a reveal whose digest
/// mismatches a record are structurally the same failure.
#[derive(Debug, Default)]
pub struct CommitmentLedger {
    commitments: HashMap<CommitDigest, Commitment>,
}

impl CommitmentLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commitment for `digest` at the host-supplied `height`.
    ///
    /// # Errors
    /// Returns [`SealedbookError::DuplicateCommit`] if a commitment for
    /// this digest already exists. The stored record is left untouched.
    pub fn commit(&mut self, digest: CommitDigest, height: BlockHeight) -> Result<()> {
        if self.commitments.contains_key(&digest) {
            warn!(digest = %digest.short(), "duplicate commit rejected");
            return Err(SealedbookError::DuplicateCommit(digest));
        }

        self.commitments.insert(digest, Commitment::new(digest, height));
        info!(digest = %digest.short(), %height, "commitment recorded");
        Ok(())
    }

    /// Disclose an order's plaintext fields against a prior commitment.
    ///
    /// Recomputes the digest from the supplied fields and looks it up. On a
    /// match the record's `revealed` flag is set and the digest returned.
    /// A second matching reveal succeeds again; the flag stays true.
    ///
    /// # Errors
    /// Returns [`SealedbookError::RevealDoesNotMatch`] if the recomputed
    /// digest matches no stored commitment. No state is mutated and no
    /// record is created on failure.
    pub fn reveal(&mut self, order: &Order) -> Result<CommitDigest> {
        let digest = order_digest(order);

        let Some(record) = self.commitments.get_mut(&digest) else {
            warn!(
                digest = %digest.short(),
                ticker = %order.ticker_symbol,
                "reveal does not match any stored commitment"
            );
            return Err(SealedbookError::RevealDoesNotMatch { digest });
        };

        record.revealed = true;
        info!(
            digest = %digest.short(),
            ticker = %order.ticker_symbol,
            height = %record.commit_height,
            "commitment revealed"
        );
        Ok(digest)
    }

    /// Look up a commitment record by digest. Read-only.
    #[must_use]
    pub fn get(&self, digest: &CommitDigest) -> Option<&Commitment> {
        self.commitments.get(digest)
    }

    /// Number of commitments recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commitments.len()
    }

    /// Whether the ledger holds no commitments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commitments.is_empty()
    }

    /// Number of commitments whose plaintext has been disclosed.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.commitments.values().filter(|c| c.revealed).count()
    }
}
