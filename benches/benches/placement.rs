// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_placement::{Anchor, Constraints, Overflow, place};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors scattered over (and slightly past) a 1920x1080 viewport.
fn gen_anchors(count: usize, beside: bool) -> Vec<Anchor> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * 2100.0 - 90.0;
            let y = rng.next_f64() * 1260.0 - 90.0;
            if beside {
                Anchor::Beside(Rect::new(x, y, x + 180.0, y + 28.0))
            } else {
                Anchor::Point(Point::new(x, y))
            }
        })
        .collect()
}

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("place");
    let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let size = Size::new(220.0, 340.0);
    for (name, overflow) in [("shift", Overflow::Shift), ("flip", Overflow::Flip)] {
        let constraints = Constraints::new(viewport).with_margin(5.0).with_overflow(overflow);
        for beside in [false, true] {
            let anchors = gen_anchors(4096, beside);
            let kind = if beside { "beside" } else { "point" };
            group.throughput(Throughput::Elements(anchors.len() as u64));
            group.bench_function(format!("{name}_{kind}"), |b| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for &anchor in &anchors {
                        let p = place(anchor, size, &constraints);
                        acc += p.x + p.y;
                    }
                    black_box(acc)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
