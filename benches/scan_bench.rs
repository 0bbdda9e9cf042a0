// Criterion benchmark suite for the forward and backward corpus scans.
//
// Run: cargo bench
// Specific group: cargo bench -- forward_scan
// HTML report: target/criterion/report/index.html

use std::io;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rexcheck::corpus::Corpus;
use rexcheck::engine::{BackwardRegex, ForwardRegex};
use rexcheck::harness::Harness;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn synthetic_corpus(lines: usize) -> Corpus {
    let mut text = Vec::new();
    for i in 0..lines {
        if i % 50 == 0 {
            text.extend_from_slice(b"2001-03-06  G\xf6ran Uddeborg  <goeran@uddeborg.pp.se>\n");
        } else {
            text.extend_from_slice(b"\t* posix/regex.c (regexec): keep the interval in range.\n");
        }
    }
    Corpus::from_bytes(text).unwrap()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_forward_scan(c: &mut Criterion) {
    let corpus = synthetic_corpus(2000);
    let mut group = c.benchmark_group("forward_scan");
    for (name, pattern) in [("literal", "Uddeborg"), ("greedy", "G.*ran")] {
        let re = ForwardRegex::compile(pattern, false).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut harness = Harness::new(black_box(&corpus), io::sink());
                harness.scan_forward(&re).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_backward_scan(c: &mut Criterion) {
    let corpus = synthetic_corpus(2000);
    let mut group = c.benchmark_group("backward_scan");
    for (name, pattern) in [("literal", "Uddeborg"), ("greedy", "G.*ran")] {
        let re = BackwardRegex::compile(pattern, false).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut harness = Harness::new(black_box(&corpus), io::sink());
                harness.scan_backward(&re).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward_scan, bench_backward_scan);
criterion_main!(benches);
