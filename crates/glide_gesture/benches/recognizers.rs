//! Throughput of the recognizers over a synthetic event stream

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glide_core::PointerLikeEvent;
use glide_gesture::{DragOptions, DragRecognizer, PinchOptions, PinchRecognizer};

fn move_stream(id: i32, len: usize) -> Vec<PointerLikeEvent> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 8.0;
            PointerLikeEvent::new(t.sin() * 100.0, t.cos() * 100.0)
                .with_pointer_id(id)
                .with_time_stamp(t)
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let moves = move_stream(0, 1000);
    c.bench_function("drag_1000_moves", |b| {
        b.iter(|| {
            let mut drag = DragRecognizer::new(DragOptions::default());
            drag.on_pointer_down(&PointerLikeEvent::new(0.0, 0.0).with_time_stamp(0.0));
            for event in &moves {
                black_box(drag.on_pointer_move(event));
            }
            drag.on_pointer_up(&PointerLikeEvent::new(0.0, 0.0).with_time_stamp(8000.0))
        })
    });
}

fn bench_pinch(c: &mut Criterion) {
    let moves = move_stream(2, 1000);
    c.bench_function("pinch_1000_moves", |b| {
        b.iter(|| {
            let mut pinch = PinchRecognizer::new(PinchOptions::default());
            pinch.on_pointer_down(
                &PointerLikeEvent::new(0.0, 0.0)
                    .with_pointer_id(1)
                    .with_time_stamp(0.0),
            );
            pinch.on_pointer_down(
                &PointerLikeEvent::new(50.0, 0.0)
                    .with_pointer_id(2)
                    .with_time_stamp(0.0),
            );
            for event in &moves {
                black_box(pinch.on_pointer_move(event));
            }
            pinch.get_state()
        })
    });
}

criterion_group!(benches, bench_drag, bench_pinch);
criterion_main!(benches);
