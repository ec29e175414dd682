use core_layout::options::*;
use core_layout::{Container, Label, Sizeable, View};
use core_theme::Palette;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

fn nested(depth: usize) -> Container {
    let mut c = Container::new(
        Label::new("lorem ipsum dolor sit amet\nconsectetur adipiscing elit"),
        vec![with_border_all(), with_padding_all(1)],
    );
    for _ in 1..depth {
        c = Container::new(
            c,
            vec![
                with_border_all(),
                with_rounded_border(),
                with_padding_horizontal(1),
                with_theme(Arc::new(Palette::opencode())),
            ],
        );
    }
    c
}

fn bench_set_size(c: &mut Criterion) {
    let mut container = nested(8);
    c.bench_function("set_size_depth_8", |b| {
        b.iter(|| {
            container.set_size(black_box(160), black_box(48));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut container = nested(4);
    container.set_size(120, 40);
    c.bench_function("render_depth_4_120x40", |b| {
        b.iter(|| black_box(container.view()))
    });
}

criterion_group!(benches, bench_set_size, bench_render);
criterion_main!(benches);
