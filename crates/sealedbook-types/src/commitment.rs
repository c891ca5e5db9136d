//! The commitment record stored by the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BlockHeight, CommitDigest};

/// One stored commitment: a digest whose plaintext order has not yet been
/// disclosed, or has been (once `revealed` flips).
///
/// The digest is both the ledger key and a field of the record itself.
/// `revealed` transitions false→true exactly once and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub digest: CommitDigest,
    pub revealed: bool,
    /// Sequence number supplied by the host's height source at commit time.
    pub commit_height: BlockHeight,
    /// Wall-clock provenance, recorded alongside the height.
    pub committed_at: DateTime<Utc>,
}

impl Commitment {
    /// A fresh, unrevealed commitment for `digest` at `height`.
    #[must_use]
    pub fn new(digest: CommitDigest, height: BlockHeight) -> Self {
        Self {
            digest,
            revealed: false,
            commit_height: height,
            committed_at: Utc::now(),
        }
    }

    /// Whether the plaintext behind this commitment is still confidential.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.revealed
    }
}
