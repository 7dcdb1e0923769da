//! Eykar Registration Ledger
//!
//! The bookkeeping around the coordinate core: hands out registration
//! indices in order, places each participant on the spawn spiral, stores the
//! encoded location word, and answers distance queries between participants.
//!
//! # Example
//!
//! ```
//! use eykar_ledger::{Ledger, LedgerConfig};
//!
//! let mut ledger = Ledger::new(LedgerConfig::default()).unwrap();
//! ledger.register("alice").unwrap();
//! ledger.register("bob").unwrap();
//!
//! // Default pitch 3: alice at (0, 0), bob at (3, 3)
//! assert_eq!(ledger.distance_between("alice", "bob").unwrap(), 4);
//! ```

mod config;
mod error;
mod ledger;

pub use config::{LedgerConfig, DEFAULT_PITCH};
pub use error::{Error, Result};
pub use ledger::{Ledger, Registration};
