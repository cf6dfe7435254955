//! Hover Button
//!
//! This example wires a button-like element through idle, hover and pressed
//! states, with handlers that drive the transitions themselves.
//!
//! Key concepts:
//! - States bundle attributes, handlers and hooks
//! - Handlers are replaced on every transition, never merged
//! - Hooks run around the attribute change
//!
//! Run with: cargo run --example hover_button

use stateful::core::{EventKind, StateDefinition};
use stateful::engine::{Element, Stateful, TransitionOptions};
use stateful::render::{MemoryRenderer, Timeline};

fn main() {
    println!("=== Hover Button Example ===\n");

    let timeline = Timeline::new();
    let button = Element::new(MemoryRenderer::new(&timeline));

    let to_hover = button.clone();
    let to_idle = button.clone();
    let to_pressed = button.clone();

    button
        .add_state(
            "idle",
            StateDefinition::new()
                .attr("fill", "#cccccc")
                .handler(EventKind::MouseOver, move |_| {
                    let _ = to_hover.state("hover", TransitionOptions::default());
                }),
        )
        .add_state(
            "hover",
            StateDefinition::new()
                .attr("fill", "#ff8800")
                .handler(EventKind::MouseOut, move |_| {
                    let _ = to_idle.state("idle", TransitionOptions::default());
                })
                .handler(EventKind::MouseDown, move |_| {
                    let _ = to_pressed.state("pressed", TransitionOptions::default());
                }),
        )
        .add_state(
            "pressed",
            StateDefinition::new()
                .attr("fill", "#aa4400")
                .before(|| println!("  (about to press)"))
                .after(|| println!("  (pressed)")),
        );

    button
        .state("idle", TransitionOptions::default())
        .expect("idle is registered");
    report(&button);

    for event in [EventKind::MouseOver, EventKind::MouseDown, EventKind::MouseOut] {
        let handled = button.fire(event);
        println!("fired {event}: handled = {handled}");
        report(&button);
    }

    println!("\n=== Example Complete ===");
}

fn report(button: &Element<MemoryRenderer>) {
    println!(
        "state: {:?}, fill: {:?}, bound: {:?}",
        button.current_state(),
        button.attribute("fill"),
        button.renderer().slots().bound()
    );
}
