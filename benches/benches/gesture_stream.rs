// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use branchwork_gesture::{GestureEvent, ZoomPan};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

fn bench_stream(c: &mut Criterion) {
    // One frame: a pan update, a pinch update, and a transform read.
    c.bench_function("zoom_pan/frame", |b| {
        let mut view = ZoomPan::new(Size::new(2000.0, 2000.0));
        let mut t = 0.0_f64;
        b.iter(|| {
            t += 1.0;
            view.on_pan(GestureEvent::Update(Vec2::new(t, -t)));
            view.on_pinch(GestureEvent::Update(1.0 + (t % 10.0) * 0.01));
            black_box(view.to_viewport(black_box(Point::new(120.0, 120.0))))
        });
    });
}

criterion_group!(benches, bench_stream);
criterion_main!(benches);
