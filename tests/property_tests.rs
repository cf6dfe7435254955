//! Property-based tests for registries, transitions and group fan-out.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use stateful::core::{AttrMap, AttrValue, StateDefinition, StateNotFound};
use stateful::engine::{Element, Group, Stateful, TransitionOptions};
use stateful::render::{MemoryRenderer, Timeline};
use std::collections::BTreeSet;

fn element(timeline: &Timeline) -> Element<MemoryRenderer> {
    Element::new(MemoryRenderer::new(timeline))
}

prop_compose! {
    fn arbitrary_attrs()(
        pairs in prop::collection::btree_map("[a-z-]{1,10}", any::<i64>(), 0..6)
    ) -> AttrMap {
        pairs.into_iter().map(|(k, v)| (k, AttrValue::from(v))).collect()
    }
}

proptest! {
    #[test]
    fn registration_round_trips(name in "[a-z]{1,12}", attrs in arbitrary_attrs()) {
        let timeline = Timeline::new();
        let rect = element(&timeline);
        let definition = StateDefinition::new().attrs(attrs).after(|| {});

        rect.add_state(&name, definition.clone());

        prop_assert_eq!(rect.get_state(&name), Ok(definition));
        prop_assert!(rect.has_state(&name));
    }

    #[test]
    fn unknown_names_fail_lookup(
        registered in prop::collection::btree_set("[a-z]{1,6}", 0..8),
        query in "[a-z]{1,6}",
    ) {
        prop_assume!(!registered.contains(&query));
        let timeline = Timeline::new();
        let rect = element(&timeline);
        for name in &registered {
            rect.add_empty_state(name);
        }

        prop_assert_eq!(rect.get_state(&query), Err(StateNotFound::new(query.clone())));
        prop_assert!(!rect.has_state(&query));
        prop_assert!(rect.state(&query, TransitionOptions::default()).is_err());
    }

    #[test]
    fn add_state_and_state_chain(names in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let timeline = Timeline::new();
        let rect = element(&timeline);

        for name in &names {
            let returned = rect.add_empty_state(name);
            prop_assert!(std::ptr::eq(returned, &rect));
        }
        for name in &names {
            let returned = rect.state(name, TransitionOptions::default()).unwrap();
            prop_assert!(std::ptr::eq(returned, &rect));
        }
    }

    #[test]
    fn current_state_is_the_last_entered(path in prop::collection::vec(0..4usize, 0..12)) {
        let names = ["idle", "hover", "pressed", "disabled"];
        let timeline = Timeline::new();
        let rect = element(&timeline);
        let group = Group::new();
        for name in names {
            rect.add_empty_state(name);
        }

        for &step in &path {
            rect.state(names[step], TransitionOptions::default()).unwrap();
            group.state(names[step], TransitionOptions::default()).unwrap();
        }

        let expected = path.last().map(|&step| names[step].to_string());
        prop_assert_eq!(rect.current_state(), expected.clone());
        prop_assert_eq!(group.current_state(), expected);
    }

    #[test]
    fn group_fans_out_to_registered_members_only(
        registered in prop::collection::vec(any::<bool>(), 0..10),
        register_on_group in any::<bool>(),
    ) {
        let timeline = Timeline::new();
        let group = Group::new();
        let members: Vec<_> = registered
            .iter()
            .map(|&has| {
                let member = element(&timeline);
                member.add_empty_state("other");
                if has {
                    member.add_state("test", StateDefinition::new().attr("x", 1));
                }
                group.push(member.clone());
                member
            })
            .collect();
        if register_on_group {
            group.add_empty_state("test");
        }

        group.state("test", TransitionOptions::default()).unwrap();

        for (member, &has) in members.iter().zip(&registered) {
            let expected = has.then(|| "test".to_string());
            prop_assert_eq!(member.current_state(), expected);
            prop_assert_eq!(member.attribute("x").is_some(), has);
        }
        prop_assert_eq!(group.current_state(), Some("test".to_string()));
    }

    #[test]
    fn animated_durations_reach_the_renderer(millis in 1..10_000u64) {
        let timeline = Timeline::new();
        let rect = element(&timeline);
        rect.add_empty_state("test");

        rect.state("test", TransitionOptions::new().time(std::time::Duration::from_millis(millis)))
            .unwrap();

        prop_assert_eq!(timeline.scheduled(), vec![std::time::Duration::from_millis(millis)]);
        prop_assert_eq!(rect.current_state(), None);
        timeline.finish();
        prop_assert_eq!(rect.current_state(), Some("test".to_string()));
    }

    #[test]
    fn names_lists_every_registration(names in prop::collection::btree_set("[a-z]{1,8}", 0..10)) {
        let timeline = Timeline::new();
        let rect = element(&timeline);
        for name in &names {
            rect.add_empty_state(name);
        }

        let listed: BTreeSet<String> = rect.state_names().into_iter().collect();
        prop_assert_eq!(listed, names);
    }
}
