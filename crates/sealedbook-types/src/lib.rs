//! # sealedbook-types
//!
//! Shared types and errors for the **Sealedbook** commit-reveal ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`CommitDigest`], [`Address`], [`BlockHeight`]
//! - **Order model**: [`Order`], [`OrderSide`], [`AccountType`], [`Direction`]
//! - **Commitment record**: [`Commitment`]
//! - **Errors**: [`SealedbookError`] with `SB_ERR_` prefix codes
//! - **Constants**: digest/address widths and engine metadata

pub mod commitment;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;

// Re-export all primary types at crate root for ergonomic imports:
//   use sealedbook_types::{Order, CommitDigest, Commitment, ...};

pub use commitment::*;
pub use error::*;
pub use ids::*;
pub use order::*;

// Constants are accessed via `sealedbook_types::constants::FOO`
// (not re-exported to avoid name collisions).
