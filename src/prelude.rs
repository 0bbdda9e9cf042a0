// prelude.rs - Convenient re-exports for the harness API.
//
//! # Prelude
//!
//! ```
//! use rexcheck::prelude::*;
//!
//! let corpus = Corpus::from_bytes(b"it ran\n".to_vec()).unwrap();
//! let mut harness = Harness::new(&corpus, std::io::sink());
//! assert!(harness.run_forward("ran", false, 1).unwrap());
//! ```

pub use crate::corpus::Corpus;
pub use crate::engine::{
    BackwardRegex, BackwardSearch, ForwardRegex, ForwardSearch, SearchOutcome,
};
pub use crate::error::HarnessError;
pub use crate::harness::{default_suite, Harness, Outcome, PatternSpec};
