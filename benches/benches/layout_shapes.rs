// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use branchwork_layout::{Diagram, LayoutConfig, Node, NodeId, layout};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Root with `n` direct children.
fn wide(n: u32) -> Vec<Node> {
    let root = NodeId::new(1);
    let mut out = vec![Node::root(root)];
    out.extend((2..n + 2).map(|i| Node::child(NodeId::new(i), root)));
    out
}

/// A single chain of `n` nodes.
fn deep(n: u32) -> Vec<Node> {
    let mut out = vec![Node::root(NodeId::new(1))];
    out.extend((2..=n).map(|i| Node::child(NodeId::new(i), NodeId::new(i - 1))));
    out
}

/// Complete binary tree with `n` nodes.
fn binary(n: u32) -> Vec<Node> {
    let mut out = vec![Node::root(NodeId::new(1))];
    out.extend((2..=n).map(|i| Node::child(NodeId::new(i), NodeId::new(i / 2))));
    out
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

/// Random growth: each new node picks an existing parent.
fn random(n: u32, seed: u64) -> Vec<Node> {
    let mut rng = Rng(seed);
    let mut out = vec![Node::root(NodeId::new(1))];
    for i in 2..=n {
        let parent = (rng.next_u64() % u64::from(i - 1)) as u32 + 1;
        out.push(Node::child(NodeId::new(i), NodeId::new(parent)));
    }
    out
}

fn bench_layout(c: &mut Criterion) {
    let cfg = LayoutConfig::default();
    let mut group = c.benchmark_group("layout");
    for &n in &[64_u32, 512, 2048] {
        group.throughput(Throughput::Elements(u64::from(n)));
        for (name, nodes) in [
            ("wide", wide(n)),
            ("deep", deep(n)),
            ("binary", binary(n)),
            ("random", random(n, 0x5eed_1234_abcd_0001)),
        ] {
            group.bench_function(format!("{name}/{n}"), |b| {
                b.iter(|| black_box(layout(black_box(&nodes), &cfg)));
            });
        }
    }
    group.finish();
}

fn bench_edit_cycle(c: &mut Criterion) {
    // One add, one relayout, one delete, one relayout: the per-tap cost.
    c.bench_function("diagram/edit_cycle/512", |b| {
        b.iter_batched(
            || Diagram::from_nodes(random(512, 7), LayoutConfig::default()),
            |mut d| {
                if let Some(id) = d.add_child(NodeId::new(17)) {
                    black_box(d.layout().nodes().len());
                    d.delete_subtree(id);
                }
                black_box(d.layout().nodes().len());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_layout, bench_edit_cycle);
criterion_main!(benches);
