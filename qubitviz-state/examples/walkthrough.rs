//! Button-press walkthrough
//!
//! Drives a visualizer session through the same sequence a user would click:
//! H, Z, H, X, Y, then a phase rotation, printing what the display shows
//! after each step.
//!
//! Run with: cargo run --example walkthrough -p qubitviz-state
//! Set RUST_LOG=trace to see each gate application.

use qubitviz_state::{BlochVector, Visualizer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Single-Qubit Visualizer Walkthrough ===\n");

    let mut viz = Visualizer::default();
    print_step("start", &viz);

    for selection in ["h", "z", "h", "x", "y", "phase:0.25"] {
        viz.apply_named(selection)?;
        print_step(selection, &viz);
    }

    println!("{}", BlochVector::from_state(viz.state()).describe());
    println!("Snapshot JSON:\n{}", viz.snapshot().to_json()?);

    Ok(())
}

fn print_step(label: &str, viz: &Visualizer) {
    let snap = viz.snapshot();
    println!("[{}]", label);
    println!("  state:         {}", snap.state_text);
    println!(
        "  probabilities: {:.1}% / {:.1}%",
        snap.probability_percent[0], snap.probability_percent[1]
    );
    println!("  bloch (θ φ):   {}", snap.bloch_text);
    println!(
        "  pointer:       ({:.3}, {:.3}, {:.3})\n",
        snap.pointer[0], snap.pointer[1], snap.pointer[2]
    );
}
