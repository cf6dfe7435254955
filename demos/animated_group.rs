//! Animated Group
//!
//! This example loads state styling from a JSON sheet, installs it on a group
//! of markers, and animates the whole group while one member opts out.
//!
//! Key concepts:
//! - State sheets keep styling declarative
//! - Groups fan out to members that have the state
//! - Animated transitions finish when the renderer's timeline does
//!
//! Run with: cargo run --example animated_group

use stateful::engine::{Element, Group, Stateful, TransitionOptions};
use stateful::render::{MemoryRenderer, Timeline};
use stateful::sheet::StateSheet;
use std::time::Duration;

const MARKERS: &str = r#"{
    "small": { "attrs": { "r": 4, "opacity": 0.5 } },
    "large": { "attrs": { "r": 12, "opacity": 1.0 } }
}"#;

fn main() {
    println!("=== Animated Group Example ===\n");

    let sheet = StateSheet::from_json(MARKERS).expect("sheet is valid JSON");
    let timeline = Timeline::new();
    let markers: Vec<_> = (0..3)
        .map(|_| Element::new(MemoryRenderer::new(&timeline)))
        .collect();
    let legend = Element::new(MemoryRenderer::new(&timeline));

    let group = Group::new();
    for marker in &markers {
        sheet.install(marker).expect("sheet validates");
        group.push(marker.clone());
    }
    group.push(legend.clone());

    group
        .state(
            "large",
            TransitionOptions::new()
                .time(Duration::from_millis(400))
                .after(|| println!("  marker finished growing")),
        )
        .expect("group transitions never fail on unregistered members");

    println!("group state: {:?}", group.current_state());
    println!("pending tweens: {}", timeline.pending());

    timeline.advance(Duration::from_millis(200));
    println!("after 200ms, first marker state: {:?}", markers[0].current_state());

    let finished = timeline.finish();
    println!("finished {finished} tweens at {:?}", timeline.now());

    for (index, marker) in markers.iter().enumerate() {
        println!(
            "marker {index}: state {:?}, r = {:?}",
            marker.current_state(),
            marker.attribute("r")
        );
    }
    println!("legend state: {:?}", legend.current_state());

    println!("\n=== Example Complete ===");
}
