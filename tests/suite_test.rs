// suite_test.rs - Golden counts and output format over the bundled corpus.

use std::io;

use rexcheck::corpus::Corpus;
use rexcheck::engine::{BackwardRegex, ForwardRegex};
use rexcheck::harness::{default_suite, Harness, PatternSpec};

const CORPUS: &[u8] = include_bytes!("../testdata/corpus.txt");

fn corpus() -> Corpus {
    Corpus::from_bytes(CORPUS.to_vec()).unwrap()
}

/// Assert all four observed counts for one pattern.
fn counts(pattern: &str, fwd: usize, fwd_icase: usize, bwd: usize, bwd_icase: usize) {
    let corpus = corpus();
    let mut harness = Harness::new(&corpus, io::sink());

    let observed = harness
        .scan_forward(&ForwardRegex::compile(pattern, false).unwrap())
        .unwrap();
    assert_eq!(observed, fwd, "forward count for {:?}", pattern);

    let observed = harness
        .scan_forward(&ForwardRegex::compile(pattern, true).unwrap())
        .unwrap();
    assert_eq!(observed, fwd_icase, "forward icase count for {:?}", pattern);

    let observed = harness
        .scan_backward(&BackwardRegex::compile(pattern, false).unwrap())
        .unwrap();
    assert_eq!(observed, bwd, "backward count for {:?}", pattern);

    let observed = harness
        .scan_backward(&BackwardRegex::compile(pattern, true).unwrap())
        .unwrap();
    assert_eq!(observed, bwd_icase, "backward icase count for {:?}", pattern);
}

#[test]
fn latin1_class_counts() {
    counts(r"[\xc5\xc4\xd6\xe5\xe4\xf6]", 2, 2, 2, 2);
}

#[test]
fn g_dot_ran_counts() {
    counts("G.ran", 2, 6, 2, 6);
}

#[test]
fn g_interval_ran_counts() {
    counts("G.{1}ran", 2, 6, 2, 6);
}

#[test]
fn g_star_ran_counts() {
    // Case folding turns 3 line hits into 44: every line with a 'g' before
    // a later "ran" now qualifies.
    counts("G.*ran", 3, 44, 3, 44);
}

#[test]
fn absent_class_counts_zero_without_error() {
    counts(r"[\xde\xfe]", 0, 0, 0, 0);
}

#[test]
fn uddeborg_counts() {
    counts("Uddeborg", 2, 2, 2, 2);
}

#[test]
fn dot_uddeborg_counts() {
    counts(".Uddeborg", 2, 2, 2, 2);
}

#[test]
fn default_suite_passes_on_bundled_corpus() {
    let corpus = corpus();
    let mut harness = Harness::new(&corpus, io::sink());
    let outcome = harness.run_suite(&default_suite()).unwrap();
    assert!(outcome.passed(), "failures: {}", outcome.failures);
    assert_eq!(outcome.checks, 4 * default_suite().len());
}

#[test]
fn rerunning_the_suite_is_idempotent() {
    let corpus = corpus();

    let mut first = Vec::new();
    let outcome1 = Harness::new(&corpus, &mut first)
        .run_suite(&default_suite())
        .unwrap();

    let mut second = Vec::new();
    let outcome2 = Harness::new(&corpus, &mut second)
        .run_suite(&default_suite())
        .unwrap();

    assert_eq!(outcome1, outcome2);
    assert_eq!(first, second);
}

#[test]
fn match_log_shows_full_lines() {
    let corpus = corpus();
    let mut out = Vec::new();
    let mut harness = Harness::new(&corpus, &mut out);
    harness
        .test_pattern(&PatternSpec::new("Uddeborg", 2, 2))
        .unwrap();
    drop(harness);

    // Raw Latin-1 bytes in the log, full line per match, forward order
    // first and backward order after.
    let forward_first: &[u8] =
        b"match 1: \"2001-03-06  G\xf6ran Uddeborg  <goeran@uddeborg.pp.se>\"\n";
    let backward_first: &[u8] =
        b"match 1: \"2001-02-21  G\xf6ran Uddeborg  <goeran@uddeborg.pp.se>\"\n";
    let pos_fwd = find(&out, forward_first).expect("forward match line missing");
    let pos_bwd = find(&out, backward_first).expect("backward match line missing");
    assert!(pos_fwd < pos_bwd);
}

#[test]
fn headers_precede_each_mode() {
    let corpus = corpus();
    let mut out = Vec::new();
    let mut harness = Harness::new(&corpus, &mut out);
    harness
        .test_pattern(&PatternSpec::new("G.*ran", 3, 44))
        .unwrap();
    drop(harness);

    for header in [
        &b"\nTest \"G.*ran\"\n"[..],
        &b"\nTest \"G.*ran\", case insensitive\n"[..],
        &b"\nTest \"G.*ran\" backwards\n"[..],
        &b"\nTest \"G.*ran\" backwards, case insensitive\n"[..],
    ] {
        assert!(find(&out, header).is_some(), "missing header");
    }
}

fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}
