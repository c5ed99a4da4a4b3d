// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_api::build_snapshot;
use canopy_layout::{LayoutConfig, TreeLayoutRenderer, TreeNode, TreeSnapshot};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Perfect tree of the given height, keys `1..2^(h+1)`.
fn perfect(height: u32) -> TreeSnapshot {
    fn build(lo: i64, hi: i64) -> Option<TreeNode> {
        if lo > hi {
            return None;
        }
        let mid = lo + (hi - lo) / 2;
        let mut node = TreeNode::leaf(mid);
        node.left = build(lo, mid - 1).map(Box::new);
        node.right = build(mid + 1, hi).map(Box::new);
        Some(node)
    }
    let n = (1_i64 << (height + 1)) - 1;
    TreeSnapshot::from_root(build(1, n))
}

fn chain(len: i64) -> TreeSnapshot {
    let values: Vec<i64> = (0..len).collect();
    build_snapshot(&values)
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn random(count: usize, seed: u64) -> TreeSnapshot {
    let mut rng = Rng(seed);
    let values: Vec<i64> = (0..count)
        .map(|_| (rng.next_u64() % 1_000_000) as i64)
        .collect();
    build_snapshot(&values)
}

fn bench_perfect(c: &mut Criterion) {
    let mut group = c.benchmark_group("perfect");
    let renderer = TreeLayoutRenderer::new(LayoutConfig::default());
    for h in [4_u32, 8, 12] {
        let snap = perfect(h);
        group.throughput(Throughput::Elements(snap.node_count as u64));
        group.bench_function(format!("position_h{h}"), |b| {
            b.iter(|| black_box(renderer.position(black_box(&snap), 1024.0).map(|l| l.len())));
        });
        group.bench_function(format!("scene_h{h}"), |b| {
            b.iter(|| black_box(renderer.layout(black_box(&snap), 1024.0)));
        });
    }
    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    let renderer = TreeLayoutRenderer::new(LayoutConfig::default().with_decay(0.8));
    for len in [64_i64, 256] {
        let snap = chain(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(format!("scene_len{len}"), |b| {
            b.iter(|| black_box(renderer.layout(black_box(&snap), 1024.0)));
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    let renderer = TreeLayoutRenderer::new(LayoutConfig::default());
    let snap = random(2_000, 0x9e37_79b9_7f4a_7c15);
    group.throughput(Throughput::Elements(snap.node_count as u64));
    group.bench_function("scene_2000", |b| {
        b.iter(|| black_box(renderer.layout(black_box(&snap), 1024.0)));
    });
    group.finish();
}

criterion_group!(benches, bench_perfect, bench_chain, bench_random);
criterion_main!(benches);
