//! Gesture Replay Demo
//!
//! Feeds a scripted pointer sequence through the drag, swipe, and pinch
//! recognizers and prints every emitted signal.
//!
//! Run with: RUST_LOG=debug cargo run -p glide_gesture --example replay

use glide_core::PointerLikeEvent;
use glide_gesture::{GestureConfig, GestureSignal, PointerPhase};

const CONFIG: &str = r#"
[drag]
threshold = 4.0

[swipe]
distanceThreshold = 48.0

[pinch]
minScale = 0.5
maxScale = 3.0
"#;

fn main() -> Result<(), glide_core::ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GestureConfig::from_toml_str(CONFIG)?;
    let mut drag = config.drag_recognizer().on_end(|p| {
        println!("drag ended with delta ({}, {})", p.state.delta.x, p.state.delta.y)
    });
    let mut swipe = config.swipe_recognizer().on_swipe(|p| {
        if let Some(result) = p.swipe {
            println!("swipe {:?} at {:.2} px/ms", result.direction, result.velocity);
        }
    });
    let mut pinch = config
        .pinch_recognizer()
        .on_move(|p| println!("pinch scale {:.2}", p.state.scale));

    let ev = |id: i32, x: f64, y: f64, t: f64| {
        PointerLikeEvent::new(x, y).with_pointer_id(id).with_time_stamp(t)
    };
    let script = [
        (PointerPhase::Down, ev(1, 100.0, 200.0, 0.0)),
        (PointerPhase::Move, ev(1, 140.0, 202.0, 16.0)),
        (PointerPhase::Down, ev(2, 300.0, 200.0, 20.0)),
        (PointerPhase::Move, ev(2, 380.0, 200.0, 32.0)),
        (PointerPhase::Move, ev(1, 60.0, 205.0, 48.0)),
        (PointerPhase::Up, ev(2, 380.0, 200.0, 64.0)),
        (PointerPhase::Up, ev(1, 20.0, 205.0, 80.0)),
    ];

    for (phase, event) in &script {
        for signal in drag.apply(*phase, event) {
            println!("drag  {:?}", signal.kind());
        }
        for signal in swipe.apply(*phase, event) {
            println!("swipe {:?}", signal.kind());
        }
        for signal in pinch.apply(*phase, event) {
            println!("pinch {:?}", signal.kind());
        }
    }

    Ok(())
}
