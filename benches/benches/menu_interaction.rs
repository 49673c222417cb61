// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_context_menu::{ContextMenu, LayoutSnapshot, MenuItem, MenuOptions, TriggerEvent};

const W: f64 = 200.0;
const ROW: f64 = 28.0;

/// `width` items per level; the last item of each level opens the next one.
fn gen_tree(depth: usize, width: usize) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = (0..width - 1)
        .map(|i| MenuItem::action(format!("item{i}"), || {}))
        .collect();
    if depth > 0 {
        items.push(MenuItem::submenu("next", gen_tree(depth - 1, width)));
    } else {
        items.push(MenuItem::action("last", || {}));
    }
    items
}

fn draw(menu: &ContextMenu, m: &mut LayoutSnapshot) {
    m.truncate(menu.panels().len());
    for p in menu.panels() {
        let rows = vec![ROW; p.items().len()];
        m.set_rows(p.depth(), p.origin(), W, &rows);
    }
}

fn frame(menu: &mut ContextMenu, m: &mut LayoutSnapshot) {
    draw(menu, m);
    menu.layout(&*m);
    draw(menu, m);
}

fn bench_open_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_chain");
    for &depth in &[2usize, 6, 12] {
        let mut menu = ContextMenu::new();
        let id = menu
            .register(gen_tree(depth, 10), MenuOptions::new())
            .expect("default options are valid");
        group.bench_function(format!("open_to_depth_{depth}_and_dismiss"), |b| {
            b.iter_batched(
                || LayoutSnapshot::new(Rect::new(0.0, 0.0, 1920.0, 1080.0)),
                |mut m| {
                    menu.show(id, &TriggerEvent::context_menu(Point::new(40.0, 40.0)));
                    frame(&mut menu, &mut m);
                    for d in 0..depth {
                        menu.hover_item(d, 9, &m, Duration::ZERO);
                        frame(&mut menu, &mut m);
                    }
                    black_box(menu.panels().len());
                    menu.pointer_down(Point::new(1900.0, 1060.0));
                    black_box(menu.take_events().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_sweep");
    let mut menu = ContextMenu::new();
    let id = menu
        .register(gen_tree(4, 16), MenuOptions::new())
        .expect("default options are valid");
    let mut m = LayoutSnapshot::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    menu.show(id, &TriggerEvent::context_menu(Point::new(40.0, 40.0)));
    frame(&mut menu, &mut m);
    group.bench_function("root_rows_with_hover_intent", |b| {
        let mut now = Duration::ZERO;
        b.iter(|| {
            for step in 0..64 {
                now += Duration::from_millis(8);
                let y = 40.0 + (step % 16) as f64 * ROW + ROW / 2.0;
                black_box(menu.pointer_move(Point::new(100.0, y), &m, now));
                menu.tick(now);
            }
            frame(&mut menu, &mut m);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_open_chain, bench_pointer_sweep);
criterion_main!(benches);
