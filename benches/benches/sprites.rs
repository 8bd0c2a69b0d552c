// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use sylva_sprites::region::FixedRegion;
use sylva_sprites::{
    AtlasData, Culling, RendererConfig, SpriteRenderer, StaticAtlas, SurfaceHosts, SurfaceKind,
};
use sylva_view::ViewState;

const PANEL_WIDTH: f64 = 1_600.0;

fn renderer(culling: Culling) -> SpriteRenderer {
    let source = StaticAtlas::new("nt", AtlasData::grid("ACGTN-", Size::new(32.0, 32.0), 6));
    let mut tree = FixedRegion::visible(Size::new(PANEL_WIDTH, 900.0));
    let hosts = SurfaceHosts {
        tree: &mut tree,
        aligned: None,
    };
    let config = RendererConfig {
        culling,
        ..RendererConfig::default()
    };
    pollster::block_on(SpriteRenderer::init(config, hosts, &source)).unwrap()
}

fn sequence(len: usize) -> String {
    "ACGT-N".chars().cycle().take(len).collect()
}

fn bench_draw_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprites/draw_sequence");
    let view = ViewState::default().with_array_padding(0.1);

    // Cells are 4 pixels wide, so a 100k alignment overflows the panel 250 times.
    for len in [1_000usize, 10_000, 100_000] {
        let seq = sequence(len);
        let bx = Rect::new(-200.0, 0.0, -200.0 + 4.0 * len as f64, 12.0);
        group.throughput(Throughput::Elements(len as u64));

        for (name, culling) in [
            ("unculled", Culling::Unculled),
            ("visible_window", Culling::VisibleWindow),
        ] {
            let renderer = renderer(culling);
            group.bench_with_input(BenchmarkId::new(name, len), &seq, |b, seq| {
                b.iter(|| {
                    let row = renderer
                        .draw_sequence(&view, seq, bx, PANEL_WIDTH)
                        .unwrap();
                    black_box(row);
                });
            });
        }
    }

    group.finish();
}

fn bench_redraw_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprites/redraw_cycle");
    let view = ViewState::default();

    // One clear plus one row per visible tree leaf, as a redraw does.
    for rows in [50usize, 500] {
        let seq = sequence(400);
        let mut renderer = renderer(Culling::VisibleWindow);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            b.iter(|| {
                renderer.clear();
                for i in 0..rows {
                    let y = 14.0 * i as f64;
                    let bx = Rect::new(0.0, y, 2_400.0, y + 12.0);
                    let row = renderer.draw_sequence(&view, &seq, bx, PANEL_WIDTH).unwrap();
                    renderer.attach(SurfaceKind::Tree, row).unwrap();
                }
                black_box(renderer.surface(SurfaceKind::Tree).map(|s| s.bindings().live()));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_draw_sequence, bench_redraw_cycle);
criterion_main!(benches);
