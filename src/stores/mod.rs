//! Storage layer for the teller backend. Provides storage for:
//! - Account records keyed by card number and PIN ([`AccountsStore`])
//! - Per-account transaction ledgers ([`LedgersStore`])
//!
//! The two stores are kept in lockstep by the [`Teller`](crate::Teller):
//! every key present in one has exactly one entry in the other.
//!
//! Current implementation is optimized for synchronous, direct memory
//! access.

mod accounts;
mod ledgers;

pub use accounts::{Account, AccountKey, AccountsStore};
pub use ledgers::LedgersStore;
