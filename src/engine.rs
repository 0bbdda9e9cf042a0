// engine.rs - Regex engine capability interfaces and their adapters.
//
// The harness consumes the engine through two narrow capabilities: a
// forward "first match at or after" search and a backward "last match at or
// before" search. Each is a separate trait with its own compiled object, so
// a backing engine with distinct entry points (or distinct dialects) per
// direction plugs in without any global mode switch. The default adapters
// drive `regex::bytes` with Unicode mode off, since the corpus is raw
// Latin-1 rather than UTF-8.

use regex::bytes::{Regex, RegexBuilder};

use crate::error::HarnessError;

/// Result of a single engine search.
///
/// `NoMatch` is the normal loop-termination signal; `EngineError` is always
/// fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A match at byte range `[start, end)` within the searched buffer.
    Matched { start: usize, end: usize },
    /// No further matches.
    NoMatch,
    /// Internal engine failure, distinct from "no match".
    EngineError(String),
}

/// Forward search capability: first match in a buffer, left to right.
pub trait ForwardSearch {
    fn search(&self, hay: &[u8]) -> SearchOutcome;
}

/// Backward search capability: rightmost match whose start is at or before
/// `limit`. The match itself may extend past `limit`.
pub trait BackwardSearch {
    fn search_backward(&self, hay: &[u8], limit: usize) -> SearchOutcome;
}

/// Rewrite negated character classes so they exclude `\n`.
///
/// Gives `[^...]` the POSIX "hat lists do not match newline" behavior that
/// the rest of the flag set (multiline anchors, `.` stopping at newlines)
/// already has in the backing engine.
fn hat_lists_not_newline(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(&next) = chars.peek() {
                    out.push(next);
                    chars.next();
                }
            }
            '[' => {
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                    out.push_str("\\n");
                }
            }
            _ => {}
        }
    }
    out
}

fn compile(pattern: &str, icase: bool) -> Result<Regex, HarnessError> {
    RegexBuilder::new(&hat_lists_not_newline(pattern))
        .unicode(false)
        .multi_line(true)
        .case_insensitive(icase)
        .build()
        .map_err(|e| HarnessError::Compile {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// Forward-search adapter over a compiled `regex::bytes` pattern.
#[derive(Debug)]
pub struct ForwardRegex {
    re: Regex,
}

impl ForwardRegex {
    /// Compile `pattern` for forward scanning, optionally case-insensitive.
    pub fn compile(pattern: &str, icase: bool) -> Result<ForwardRegex, HarnessError> {
        Ok(ForwardRegex {
            re: compile(pattern, icase)?,
        })
    }
}

impl ForwardSearch for ForwardRegex {
    fn search(&self, hay: &[u8]) -> SearchOutcome {
        match self.re.find(hay) {
            Some(m) => SearchOutcome::Matched {
                start: m.start(),
                end: m.end(),
            },
            None => SearchOutcome::NoMatch,
        }
    }
}

/// Backward-search adapter over a compiled `regex::bytes` pattern.
///
/// The backing engine only searches forward, so the adapter enumerates
/// successive match start positions and keeps the last one at or before the
/// limit. Observationally this equals trying each start position from the
/// limit downward and returning the first that begins a match.
#[derive(Debug)]
pub struct BackwardRegex {
    re: Regex,
}

impl BackwardRegex {
    /// Compile `pattern` for backward scanning, optionally case-insensitive.
    pub fn compile(pattern: &str, icase: bool) -> Result<BackwardRegex, HarnessError> {
        Ok(BackwardRegex {
            re: compile(pattern, icase)?,
        })
    }
}

impl BackwardSearch for BackwardRegex {
    fn search_backward(&self, hay: &[u8], limit: usize) -> SearchOutcome {
        let mut best = None;
        let mut at = 0;
        while at <= limit && at <= hay.len() {
            match self.re.find_at(hay, at) {
                Some(m) if m.start() <= limit => {
                    best = Some((m.start(), m.end()));
                    at = m.start() + 1;
                }
                _ => break,
            }
        }
        match best {
            Some((start, end)) => SearchOutcome::Matched { start, end },
            None => SearchOutcome::NoMatch,
        }
    }
}
