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

use capstan_collections::policy::CompactionPolicy;
use capstan_collections::queue::VecQueue;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SEED: u64 = 0x00C0_FFEE;

fn random_values(count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count).map(|_| rng.gen()).collect()
}

/// Fill the queue with `count` elements, then drain it completely.
fn fill_then_drain(values: &[u64], policy: CompactionPolicy) -> u64 {
    let mut queue = VecQueue::with_policy(policy);
    for &value in values {
        queue.enqueue(value);
    }

    let mut checksum = 0u64;
    while let Some(value) = queue.dequeue() {
        checksum = checksum.wrapping_add(value);
    }
    checksum
}

/// Keep a backlog of `backlog` elements while pumping `values` through the
/// queue one in, one out. This is the steady-state pattern that exercises
/// the compaction policy hardest: the head keeps advancing while the tail
/// keeps the storage long.
fn steady_state_churn(values: &[u64], backlog: usize, policy: CompactionPolicy) -> u64 {
    let mut queue = VecQueue::with_policy(policy);
    let (prefill, stream) = values.split_at(backlog.min(values.len()));
    for &value in prefill {
        queue.enqueue(value);
    }

    let mut checksum = 0u64;
    for &value in stream {
        queue.enqueue(value);
        if let Some(front) = queue.dequeue() {
            checksum = checksum.wrapping_add(front);
        }
    }
    while let Some(front) = queue.dequeue() {
        checksum = checksum.wrapping_add(front);
    }
    checksum
}

fn bench_fill_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_then_drain");
    for &count in &[64usize, 1024, 16_384] {
        let values = random_values(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &values, |b, values| {
            b.iter(|| fill_then_drain(black_box(values), CompactionPolicy::default()));
        });
    }
    group.finish();
}

fn bench_steady_state_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state_churn");
    let values = random_values(65_536);
    let backlog = 256;
    group.throughput(Throughput::Elements(values.len() as u64));

    for (name, policy) in [
        ("default", CompactionPolicy::default()),
        ("never", CompactionPolicy::never()),
        ("eager", CompactionPolicy::eager()),
    ] {
        group.bench_with_input(BenchmarkId::new("policy", name), &values, |b, values| {
            b.iter(|| steady_state_churn(black_box(values), backlog, policy));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill_then_drain, bench_steady_state_churn);
criterion_main!(benches);
