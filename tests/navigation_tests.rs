//! Integration tests for the jump table and navigator.

use indexmap::IndexMap;
use review_map::{
    aggregate, Direction, FlatIndex, JumpTable, Navigator, NodeId, RawTestItem, RawTestMap,
    RawTestPart, RawTestSection, ReviewMapError,
};

/// Build a flat index over `n` items in one section
fn make_index(n: usize) -> FlatIndex {
    let mut section = RawTestSection {
        id: NodeId::from("s1"),
        label: "S1".to_string(),
        position: 0,
        items: IndexMap::new(),
    };
    for i in 0..n {
        section.add_item(RawTestItem {
            id: NodeId::from(format!("i{i}").as_str()),
            label: format!("I{i}"),
            position: i,
            score: 0.0,
            max_score: 1.0,
            informational: false,
            skipped: false,
        });
    }
    let mut part = RawTestPart {
        id: NodeId::from("p1"),
        label: "P1".to_string(),
        position: 0,
        sections: IndexMap::new(),
    };
    part.add_section(section);
    let mut map = RawTestMap::new();
    map.add_part(part);

    let aggregated = aggregate(&map).expect("valid map");
    FlatIndex::build(&aggregated).expect("unique ids")
}

#[test]
fn test_jump_table_one_entry_per_position() {
    let index = make_index(4);
    let table = JumpTable::build(&index);

    assert_eq!(table.len(), 4);
    for (i, entry) in table.entries().iter().enumerate() {
        assert_eq!(entry.position, i);
        assert!(!entry.is_hole());
        assert_eq!(entry.part, Some(NodeId::from("p1")));
        assert_eq!(entry.section, Some(NodeId::from("s1")));
    }
}

#[test]
fn test_holes_preserve_absolute_numbering() {
    let index = make_index(5);
    let table = JumpTable::build_filtered(&index, |item| item.position % 2 == 0);

    assert_eq!(table.len(), 5, "filtered positions leave gaps, not removals");
    assert!(table.get(1).expect("entry").is_hole());
    assert!(table.get(3).expect("entry").is_hole());
    assert_eq!(
        table.get(2).expect("entry").item,
        Some(NodeId::from("i2")),
        "non-hole entries keep their original position"
    );
}

#[test]
fn test_hole_skipping_reference_scenario() {
    // Holes at positions {1, 3}: next from 0 lands on 2, next from 2 on 4
    let index = make_index(5);
    let table =
        JumpTable::build_filtered(&index, |item| item.position != 1 && item.position != 3);
    let mut nav = Navigator::new(table);

    assert_eq!(nav.navigate(Direction::Next).expect("ctx").position, 2);
    assert_eq!(nav.navigate(Direction::Next).expect("ctx").position, 4);
    assert_eq!(nav.navigate(Direction::Previous).expect("ctx").position, 2);
    assert_eq!(nav.navigate(Direction::Previous).expect("ctx").position, 0);
}

#[test]
fn test_boundaries_are_no_ops() {
    let mut nav = Navigator::new(JumpTable::build(&make_index(2)));

    let start = nav.current_context().expect("ctx");
    assert_eq!(start.position, 0);

    // previous at the first item returns the same context unchanged
    let context = nav.navigate(Direction::Previous).expect("ctx");
    assert_eq!(context, start);

    nav.navigate(Direction::Next).expect("ctx");
    let last = nav.current_context().expect("ctx");

    // next at the last item returns the same context unchanged
    let context = nav.navigate(Direction::Next).expect("ctx");
    assert_eq!(context, last);
}

#[test]
fn test_direct_jump_by_position_and_id() {
    let mut nav = Navigator::new(JumpTable::build(&make_index(4)));

    let context = nav.jump_to_position(3).expect("ctx");
    assert_eq!(context.item, NodeId::from("i3"));

    let context = nav.jump_to_item(&NodeId::from("i1")).expect("ctx");
    assert_eq!(context.position, 1);
    assert_eq!(nav.position(), 1);
}

#[test]
fn test_jump_to_hole_clamps_to_nearest_visible() {
    let index = make_index(5);
    let table =
        JumpTable::build_filtered(&index, |item| item.position != 2 && item.position != 3);
    let mut nav = Navigator::new(table);

    // 2 is a hole: nearest visible is 1 (lower position wins over 4)
    assert_eq!(nav.jump_to_position(2).expect("ctx").position, 1);
    // 3 is a hole: 4 is nearer than 1
    assert_eq!(nav.jump_to_position(3).expect("ctx").position, 4);
}

#[test]
fn test_no_navigable_positions_is_an_error() {
    let index = make_index(3);
    let table = JumpTable::build_filtered(&index, |_| false);
    let mut nav = Navigator::new(table);

    let err = nav.jump_to_position(0).expect_err("all holes");
    assert!(matches!(err, ReviewMapError::Navigation { .. }));
    assert!(nav.current_context().is_err());
}

#[test]
fn test_single_item_map() {
    let mut nav = Navigator::new(JumpTable::build(&make_index(1)));

    assert!(!nav.has_next());
    assert!(!nav.has_previous());
    assert_eq!(nav.navigate(Direction::Next).expect("ctx").position, 0);
    assert_eq!(nav.navigate(Direction::Previous).expect("ctx").position, 0);
}
