//! Tests for the hierarchy builder

use rstest::rstest;

use rsmenu::domain::{build_forest, DomainError, Entry};

/// Helper to create a flat entry row
fn entry(id: u64, parent: u64) -> Entry {
    let mut e = Entry::new(id, parent, format!("Item {id}"), format!("/item-{id}"));
    e.position = id as u32;
    e
}

#[test]
fn given_flat_rows_when_building_then_nests_children() {
    // Arrange
    let rows = vec![entry(1, 0), entry(2, 1), entry(3, 1), entry(4, 2)];

    // Act
    let forest = build_forest(rows).unwrap();

    // Assert
    assert!(forest.orphans.is_empty());
    assert_eq!(forest.roots.len(), 1);
    let root = &forest.roots[0];
    assert_eq!(root.id, 1);
    let child_ids: Vec<u64> = root.children.iter().map(|c| c.id).collect();
    assert_eq!(child_ids, vec![2, 3]);
    assert_eq!(root.children[0].children[0].id, 4);
}

#[test]
fn given_child_before_parent_when_building_then_still_attaches() {
    // Same rows as above, reversed input order
    let rows = vec![entry(4, 2), entry(3, 1), entry(2, 1), entry(1, 0)];

    let forest = build_forest(rows).unwrap();

    assert!(forest.orphans.is_empty());
    assert_eq!(forest.roots.len(), 1);
    let root = &forest.roots[0];
    let child_ids: Vec<u64> = root.children.iter().map(|c| c.id).collect();
    assert_eq!(child_ids, vec![3, 2]);
    let grandchild_ids: Vec<u64> = root
        .children
        .iter()
        .flat_map(|c| c.children.iter().map(|g| g.id))
        .collect();
    assert_eq!(grandchild_ids, vec![4]);
}

#[rstest]
#[case::in_order(vec![(1, 0), (2, 1), (3, 2)])]
#[case::reversed(vec![(3, 2), (2, 1), (1, 0)])]
#[case::interleaved(vec![(2, 1), (1, 0), (3, 2)])]
fn given_any_input_order_when_building_then_same_chain(#[case] rows: Vec<(u64, u64)>) {
    let entries: Vec<Entry> = rows.into_iter().map(|(id, parent)| entry(id, parent)).collect();

    let forest = build_forest(entries).unwrap();

    assert!(forest.orphans.is_empty());
    assert_eq!(forest.roots.len(), 1);
    assert_eq!(forest.roots[0].id, 1);
    assert_eq!(forest.roots[0].children[0].children[0].id, 3);
}

#[test]
fn given_only_roots_when_building_then_preserves_input_order() {
    let rows = vec![entry(3, 0), entry(1, 0), entry(2, 0)];

    let forest = build_forest(rows).unwrap();

    let root_ids: Vec<u64> = forest.roots.iter().map(|r| r.id).collect();
    assert_eq!(root_ids, vec![3, 1, 2]);
    assert!(forest.orphans.is_empty());
}

#[test]
fn given_unresolvable_parent_when_building_then_reports_orphan() {
    let rows = vec![entry(1, 0), entry(2, 99)];

    let forest = build_forest(rows).unwrap();

    assert_eq!(forest.roots.len(), 1);
    assert_eq!(forest.roots[0].id, 1);
    assert_eq!(forest.orphans.len(), 1);
    assert_eq!(forest.orphans[0].id, 2);
}

#[test]
fn given_self_referencing_entry_when_building_then_terminates_with_orphan() {
    let rows = vec![entry(1, 0), entry(5, 5)];

    let forest = build_forest(rows).unwrap();

    assert_eq!(forest.roots.len(), 1);
    let orphan_ids: Vec<u64> = forest.orphans.iter().map(|o| o.id).collect();
    assert_eq!(orphan_ids, vec![5]);
}

#[test]
fn given_mutual_cycle_when_building_then_both_orphaned() {
    let rows = vec![entry(1, 2), entry(2, 1), entry(3, 0)];

    let forest = build_forest(rows).unwrap();

    assert_eq!(forest.roots.len(), 1);
    assert_eq!(forest.roots[0].id, 3);
    let orphan_ids: Vec<u64> = forest.orphans.iter().map(|o| o.id).collect();
    assert_eq!(orphan_ids, vec![1, 2]);
}

#[test]
fn given_duplicate_ids_when_building_then_errors() {
    let rows = vec![entry(1, 0), entry(7, 1), entry(7, 1)];

    let err = build_forest(rows).unwrap_err();

    assert!(matches!(err, DomainError::DuplicateEntry(7)));
}

#[test]
fn given_deep_chain_when_building_then_nests_fully() {
    // 1 <- 2 <- 3 <- ... <- 50
    let rows: Vec<Entry> = (1..=50).map(|id| entry(id, id - 1)).collect();

    let forest = build_forest(rows).unwrap();

    assert!(forest.orphans.is_empty());
    assert_eq!(forest.roots.len(), 1);
    let mut depth = 0;
    let mut cursor = &forest.roots[0];
    loop {
        depth += 1;
        match cursor.children.first() {
            Some(child) => cursor = child,
            None => break,
        }
    }
    assert_eq!(depth, 50);
}

#[test]
fn given_empty_input_when_building_then_empty_forest() {
    let forest = build_forest(Vec::new()).unwrap();

    assert!(forest.is_empty());
    assert!(forest.roots.is_empty());
    assert!(forest.orphans.is_empty());
}

#[test]
fn given_same_rows_twice_when_building_then_results_agree() {
    let rows = vec![entry(1, 0), entry(2, 1), entry(3, 2), entry(4, 0)];

    let first = build_forest(rows.clone()).unwrap();
    let second = build_forest(rows).unwrap();

    assert_eq!(first.roots, second.roots);
    assert_eq!(first.orphans, second.orphans);
}
