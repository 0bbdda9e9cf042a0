// line.rs - Line boundary extraction around a match offset.

use std::ops::Range;

use memchr::{memchr, memrchr};

/// Half-open byte range of the line containing offset `at`.
///
/// `start` is 0 or one past the nearest preceding `\n`; `end` is the next
/// `\n` at or after `at`, or `buf.len()`. Pure function; valid for any
/// `at <= buf.len()`.
pub fn line_bounds(buf: &[u8], at: usize) -> Range<usize> {
    debug_assert!(at <= buf.len());
    let start = match memrchr(b'\n', &buf[..at]) {
        Some(nl) => nl + 1,
        None => 0,
    };
    let end = match memchr(b'\n', &buf[at..]) {
        Some(nl) => at + nl,
        None => buf.len(),
    };
    start..end
}
