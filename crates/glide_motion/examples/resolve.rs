//! Motion Resolution Demo
//!
//! Loads a motion config and prints the resolved spring, a stagger sequence,
//! and a view transition together with their adapter transitions.
//!
//! Run with: RUST_LOG=debug cargo run -p glide_motion --example resolve

use glide_motion::{
    create_stagger_sequence, resolve_child_transition, spring_transition, stagger_transition,
    view_transition_transitions, MotionConfig, ViewTransitionPresetName,
};

const CONFIG: &str = r#"
durationScale = 1.5
spring = "bouncy"

[stagger]
direction = "center-out"
stepMs = 30.0
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = MotionConfig::from_toml_str(CONFIG)?;

    let spring = config.resolve_spring();
    println!(
        "spring: zeta {:.3}, settles in {} ms, easing {}",
        spring.damping_ratio,
        spring.settling_duration_ms,
        spring.css_easing()
    );
    println!("  adapter: {}", spring_transition(config.spring).to_json()?);

    let stagger = config.stagger_options(7);
    let sequence = create_stagger_sequence(&stagger);
    println!("stagger delays: {:?}", sequence.delays);
    println!("  order: {:?}", sequence.order);
    println!("  adapter: {}", stagger_transition(&stagger).to_json()?);

    let options = config.view_transition_options();
    for index in 0..3 {
        let resolved = resolve_child_transition(ViewTransitionPresetName::GlassLift, index, &options);
        println!("glassLift child {index}: {}", serde_json::to_string(&resolved.enter)?);
        let transitions = view_transition_transitions(&resolved);
        println!("  adapter enter: {}", transitions.enter.to_json()?);
    }

    Ok(())
}
