//! # Rexcheck
//!
//! A conformance harness that drives a regular-expression engine over a
//! fixed text corpus and checks that hand-picked patterns produce expected
//! match counts under four modes: forward scan, forward case-insensitive,
//! backward scan, backward case-insensitive.
//!
//! Matches are counted at line granularity: after a hit, the scan skips
//! past the line containing it, so several occurrences on one line count
//! once. Every hit's full line is logged so a human can diagnose a count
//! mismatch.
//!
//! ## Quick Start
//!
//! ```rust
//! use rexcheck::prelude::*;
//!
//! let corpus = Corpus::from_bytes(b"one match here\nnothing\n".to_vec()).unwrap();
//! let mut out = Vec::new();
//! let mut harness = Harness::new(&corpus, &mut out);
//! let outcome = harness.run_suite(&[PatternSpec::new("match", 1, 1)]).unwrap();
//! assert!(outcome.passed());
//! ```
//!
//! The bundled binary runs the golden suite from [`harness::default_suite`]
//! against a corpus file given on the command line:
//!
//! ```text
//! rexcheck testdata/corpus.txt
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`corpus`] | Corpus loading, 0-terminated buffers, UTF-8 conversion |
//! | [`encodings`] | ISO-8859-1 to UTF-8 conversion |
//! | [`engine`] | Engine capability traits and `regex`-backed adapters |
//! | [`line`] | Line boundary extraction around a match |
//! | [`harness`] | Forward/backward iterators, expectation checking, suite |
//! | [`error`] | Harness error type |

pub mod corpus;
pub mod encodings;
pub mod engine;
pub mod error;
pub mod harness;
pub mod line;
pub mod prelude;
