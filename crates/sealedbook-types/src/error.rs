//! Error types for the Sealedbook commit-reveal ledger.
//!
//! All errors use the `SB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Commitment ledger errors
//! - 2xx: Access control errors
//!
//! Every failure is terminal for the triggering call: no partial mutation
//! is left behind and the engine performs no internal retries.

use thiserror::Error;

use crate::{Address, CommitDigest};

/// Central error enum for all Sealedbook operations.
#[derive(Debug, Error)]
pub enum SealedbookError {
    // =================================================================
    // Commitment Ledger Errors (1xx)
    // =================================================================
    /// The recomputed digest of a reveal matches no stored commitment.
    #[error("SB_ERR_100: Reveal does not match any stored commitment: {digest}")]
    RevealDoesNotMatch { digest: CommitDigest },

    /// A commitment with this digest already exists.
    #[error("SB_ERR_101: Duplicate commit for digest {0}")]
    DuplicateCommit(CommitDigest),

    // =================================================================
    // Access Control Errors (2xx)
    // =================================================================
    /// The caller lacks owner privilege for a privileged operation.
    #[error("SB_ERR_200: Unauthorized: caller {caller} is not the owner")]
    Unauthorized { caller: Address },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SealedbookError>;
