//! Persistent per-user state.
//!
//! The only state Nanny keeps is the consent ledger: a flat, append-only
//! list of package names whose advisory the user has accepted.

pub mod ledger;

pub use ledger::{default_ledger_path, ConsentLedger, LEDGER_FILE_NAME};
