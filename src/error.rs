// error.rs - Error type for the conformance harness.
//
// Everything here is in the fatal class: a broken test environment or a
// malformed corpus, never a property under test. "No match" and count
// mismatches are ordinary results, not errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for corpus loading, pattern compilation and scanning.
#[derive(Debug)]
pub enum HarnessError {
    /// The corpus file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The Latin-1 to UTF-8 conversion did not consume the entire corpus.
    IncompleteConversion { consumed: usize, total: usize },
    /// The engine rejected a pattern.
    Compile { pattern: String, message: String },
    /// The engine signaled an internal error during a search.
    Engine { message: String },
    /// Writing a log line to the output failed.
    Output(io::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            HarnessError::IncompleteConversion { consumed, total } => write!(
                f,
                "cannot convert corpus: {} of {} bytes consumed",
                consumed, total
            ),
            HarnessError::Compile { pattern, message } => {
                write!(f, "cannot compile expression \"{}\": {}", pattern, message)
            }
            HarnessError::Engine { message } => {
                write!(f, "internal error in search: {}", message)
            }
            HarnessError::Output(source) => write!(f, "cannot write output: {}", source),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io { source, .. } | HarnessError::Output(source) => Some(source),
            _ => None,
        }
    }
}
