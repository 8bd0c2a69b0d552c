// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use sylva_drag::recording::RecordingHost;
use sylva_drag::{DragController, DragTarget};
use sylva_view::ViewState;

fn bench_pointer_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/move_to");

    for target in [
        DragTarget::TreePanel,
        DragTarget::MinimapRect,
        DragTarget::AlignedPanel,
        DragTarget::SplitHandle,
    ] {
        group.bench_function(format!("{target:?}"), |b| {
            let mut view = ViewState::default();
            view.minimap.visible = true;
            let mut host = RecordingHost::new(1_200.0);
            let mut drag = DragController::new();
            drag.begin(&mut host, Point::ZERO, target);

            let mut x = 0.0;
            b.iter(|| {
                x += 1.0;
                drag.move_to(&mut view, &mut host, Point::new(x % 300.0, x % 70.0));
                host.clear_calls();
                black_box(&view);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pointer_moves);
criterion_main!(benches);
