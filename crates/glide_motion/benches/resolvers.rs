//! Cost of resolving springs and stagger sequences

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glide_motion::{
    create_stagger_sequence, resolve_spring_physics, SpringPreset, StaggerDirection,
    StaggerOptions,
};

fn bench_spring(c: &mut Criterion) {
    c.bench_function("resolve_spring_presets", |b| {
        b.iter(|| {
            for preset in SpringPreset::ALL {
                black_box(resolve_spring_physics(black_box(preset)));
            }
        })
    });
}

fn bench_stagger(c: &mut Criterion) {
    let options = StaggerOptions::new(1000).with_direction(StaggerDirection::CenterOut);
    c.bench_function("stagger_1000_center_out", |b| {
        b.iter(|| create_stagger_sequence(black_box(&options)))
    });
}

criterion_group!(benches, bench_spring, bench_stagger);
criterion_main!(benches);
