//! # sealedbook-ledger
//!
//! **Commit-reveal ledger and access-control registry for Sealedbook.**
//!
//! ## Architecture
//!
//! Two independent components share no state and may be locked separately
//! by a concurrent host:
//!
//! 1. **CommitmentLedger**: keyed store of commitment records; owns
//!    `commit` and `reveal` and the reveal-matching state machine
//! 2. **InspectorRegistry**: owner identity plus the inspector allow-list
//!
//! ## Commit-reveal flow
//!
//! ```text
//! caller → order_digest(order) → CommitmentLedger.commit(digest, height)
//!        ... later ...
//! caller → CommitmentLedger.reveal(&order)  // re-derives and matches
//! ```
//!
//! Every operation executes atomically with respect to every other: both
//! components take `&mut self` for mutations, so a host serializes access
//! with its own locking. Caller identity and the height source are passed
//! in explicitly — nothing is read from ambient state.

pub mod ledger;
pub mod registry;

pub use ledger::CommitmentLedger;
pub use registry::InspectorRegistry;
