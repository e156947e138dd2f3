// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sounding_search::bisect::binary_search;
use std::hint::black_box;

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");

    for &n in &[1_000usize, 100_000, 1_000_000] {
        // Even values only, so odd probes always miss.
        let values: Vec<i64> = (0..n as i64).map(|v| v * 2).collect();
        let present = (n as i64 / 2) * 2;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("hit", n), &values, |b, values| {
            b.iter(|| binary_search(black_box(values), black_box(present)))
        });
        group.bench_with_input(BenchmarkId::new("miss", n), &values, |b, values| {
            b.iter(|| binary_search(black_box(values), black_box(present + 1)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binary_search);
criterion_main!(benches);
