//! # sealedbook-codec
//!
//! **Canonical encoder/hasher for Sealedbook orders.**
//!
//! Maps an [`Order`](sealedbook_types::Order) to a deterministic byte
//! sequence and then to its 32-byte Keccak-256 digest. Both sides of the
//! protocol depend on this crate: the commit-side caller derives the digest
//! it submits, and the ledger re-derives it inside `reveal`. The two must
//! agree bit-for-bit, so the encoding here reproduces the positional
//! ABI-style tuple layout of the original deployment exactly:
//!
//! - tuple order: {ticker_symbol, side-name, account_type-name, quantity,
//!   price, time_in_force, direction-ordinal}
//! - strings are length-tagged and zero-padded to 32-byte words, reached
//!   through head offsets; integers are 32-byte big-endian words
//!
//! Pure functions only — no state, no side effects, no error paths for
//! well-formed input.

pub mod abi;
pub mod digest;

pub use abi::{TupleEncoder, encode_order};
pub use digest::{order_digest, verify_order_digest};
