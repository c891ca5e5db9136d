//! System-wide constants for the Sealedbook commit-reveal ledger.

/// Width of a commitment digest in bytes (Keccak-256 output).
pub const DIGEST_BYTES: usize = 32;

/// Width of an address-like identity in bytes.
pub const ADDRESS_BYTES: usize = 20;

/// Width of one word in the canonical tuple encoding.
pub const ABI_WORD_BYTES: usize = 32;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Sealedbook";
