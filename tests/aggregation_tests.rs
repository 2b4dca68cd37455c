//! Integration tests for map aggregation and flattening.

use indexmap::IndexMap;
use review_map::{
    aggregate, FlatIndex, ItemStatus, NodeId, RawTestItem, RawTestMap, RawTestPart,
    RawTestSection, ReviewMapError,
};

/// Helper to create a test item
fn make_item(id: &str, score: f64, max_score: f64, informational: bool, skipped: bool) -> RawTestItem {
    RawTestItem {
        id: NodeId::from(id),
        label: id.to_uppercase(),
        position: 0,
        score,
        max_score,
        informational,
        skipped,
    }
}

/// Helper to build a map from (part, section, items) triples
fn make_map(layout: Vec<(&str, Vec<(&str, Vec<RawTestItem>)>)>) -> RawTestMap {
    let mut map = RawTestMap::new();
    for (pi, (part_id, sections)) in layout.into_iter().enumerate() {
        let mut part = RawTestPart {
            id: NodeId::from(part_id),
            label: part_id.to_uppercase(),
            position: pi,
            sections: IndexMap::new(),
        };
        for (si, (section_id, items)) in sections.into_iter().enumerate() {
            let mut section = RawTestSection {
                id: NodeId::from(section_id),
                label: section_id.to_uppercase(),
                position: si,
                items: IndexMap::new(),
            };
            for item in items {
                section.add_item(item);
            }
            part.add_section(section);
        }
        map.add_part(part);
    }
    map
}

#[test]
fn test_rollup_invariant_holds_at_every_level() {
    let raw = make_map(vec![
        (
            "p1",
            vec![
                ("s1", vec![make_item("a", 2.0, 2.0, false, false)]),
                ("s2", vec![make_item("b", 1.0, 3.0, false, false)]),
            ],
        ),
        (
            "p2",
            vec![("s3", vec![make_item("c", 0.0, 5.0, false, true)])],
        ),
    ]);

    let map = aggregate(&raw).expect("valid map");

    for part in map.parts.values() {
        let section_score: f64 = part.sections.values().map(|s| s.stats.score).sum();
        let section_max: f64 = part.sections.values().map(|s| s.stats.max_score).sum();
        assert_eq!(part.stats.score, section_score);
        assert_eq!(part.stats.max_score, section_max);
    }

    let part_score: f64 = map.parts.values().map(|p| p.stats.score).sum();
    assert_eq!(map.stats.score, part_score);
    assert_eq!(map.stats.score, 3.0);
    assert_eq!(map.stats.max_score, 10.0);
}

#[test]
fn test_two_item_reference_scenario() {
    // Item A correct 2/2, item B skipped 0/2 -> root 2/4 = 50%
    let raw = make_map(vec![(
        "p1",
        vec![(
            "s1",
            vec![
                make_item("a", 2.0, 2.0, false, false),
                make_item("b", 0.0, 2.0, false, true),
            ],
        )],
    )]);

    let map = aggregate(&raw).expect("valid map");
    assert_eq!(map.stats.score, 2.0);
    assert_eq!(map.stats.max_score, 4.0);
    assert_eq!(map.stats.percentage(), 50);

    let section = &map.parts[&NodeId::from("p1")].sections[&NodeId::from("s1")];
    assert_eq!(section.items[&NodeId::from("a")].status, ItemStatus::Correct);
    assert_eq!(section.items[&NodeId::from("b")].status, ItemStatus::Skipped);
}

#[test]
fn test_unscored_root_displays_zero_percent() {
    let raw = make_map(vec![(
        "p1",
        vec![("s1", vec![make_item("a", 0.0, 0.0, false, false)])],
    )]);

    let map = aggregate(&raw).expect("valid map");
    assert_eq!(map.stats.percentage_label(), "0%");
}

#[test]
fn test_flatten_round_trip() {
    let raw = make_map(vec![
        (
            "p1",
            vec![
                (
                    "s1",
                    vec![
                        make_item("a", 1.0, 1.0, false, false),
                        make_item("b", 0.0, 1.0, false, false),
                    ],
                ),
                ("s2", vec![make_item("c", 1.0, 2.0, false, false)]),
            ],
        ),
        (
            "p2",
            vec![("s3", vec![make_item("d", 0.0, 0.0, true, false)])],
        ),
    ]);

    let map = aggregate(&raw).expect("valid map");
    let index = FlatIndex::build(&map).expect("unique ids");

    assert_eq!(index.len(), map.item_count());
    for (i, id) in index.order().iter().enumerate() {
        assert_eq!(
            index.get(id).expect("ordered item").position,
            i,
            "order[{i}] must resolve to position {i}"
        );
    }
    assert_eq!(
        index.order().iter().map(|id| id.value()).collect::<Vec<_>>(),
        vec!["a", "b", "c", "d"]
    );
}

#[test]
fn test_duplicate_id_across_sections_fails_fast() {
    let raw = make_map(vec![(
        "p1",
        vec![
            ("s1", vec![make_item("dup", 1.0, 1.0, false, false)]),
            ("s2", vec![make_item("dup", 0.0, 1.0, false, false)]),
        ],
    )]);

    let map = aggregate(&raw).expect("aggregation does not check ids");
    let err = FlatIndex::build(&map).expect_err("duplicate id must abort flattening");
    assert!(
        matches!(err, ReviewMapError::DuplicateId { ref id, .. } if id == "dup"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_structure_errors_abort_without_partial_tree() {
    // Part with no sections
    let raw = make_map(vec![("p1", vec![])]);
    assert!(matches!(
        aggregate(&raw),
        Err(ReviewMapError::Structure { .. })
    ));

    // Section with no items
    let raw = make_map(vec![("p1", vec![("s1", vec![])])]);
    assert!(matches!(
        aggregate(&raw),
        Err(ReviewMapError::Structure { .. })
    ));
}
