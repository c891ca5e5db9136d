//! Keccak-256 digest derivation over the canonical order encoding.

use sealedbook_types::{CommitDigest, Order};
use sha3::{Digest, Keccak256};

use crate::abi::encode_order;

/// Compute the commitment digest for an order.
///
/// Keccak-256 over [`encode_order`]. Deterministic: two independently
/// constructed identical orders always produce the same digest, and any
/// single-field difference changes it with overwhelming probability.
#[must_use]
pub fn order_digest(order: &Order) -> CommitDigest {
    let mut hasher = Keccak256::new();
    hasher.update(encode_order(order));
    let result = hasher.finalize();

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    CommitDigest(digest)
}

/// Verify that an order hashes to the expected digest.
///
/// Recomputes the digest from the plaintext fields and compares.
#[must_use]
pub fn verify_order_digest(order: &Order, expected: &CommitDigest) -> bool {
    order_digest(order) == *expected
}
