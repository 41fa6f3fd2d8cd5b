use hearth::hierarchy::{display_name, flatten, flatten_locations};
use hearth::parser::{parse_locations, LocationRecord};
use hearth::utils::{HierarchyError, ValidationPolicy};
use pretty_assertions::assert_eq;
use serde_json::json;

fn loc(id: &str, name: &str, parent_id: Option<&str>) -> LocationRecord {
    LocationRecord::new(id, name, parent_id)
}

fn original_names(locations: &[hearth::parser::FlattenedLocation]) -> Vec<&str> {
    locations.iter().map(|l| l.original_name.as_str()).collect()
}

#[test]
fn test_flatten_garage_example() {
    let raw = json!([
        { "id": 1, "name": "Garage" },
        { "id": 2, "name": "Shelf", "parent_id": 1 },
        { "id": 3, "name": "Box", "parent_id": 2 },
        { "id": 4, "name": "Attic" }
    ]);
    let locations = parse_locations(&raw, &ValidationPolicy::default()).unwrap();

    let flattened = flatten(&locations).unwrap();

    assert_eq!(original_names(&flattened), vec!["Attic", "Garage", "Shelf", "Box"]);
    assert_eq!(
        flattened.iter().map(|l| l.level).collect::<Vec<_>>(),
        vec![0, 0, 1, 2]
    );
    assert_eq!(flattened[0].name, "Attic");
    assert_eq!(flattened[2].name, "\u{a0}\u{a0}↳ Shelf");
    assert_eq!(flattened[3].name, "\u{a0}\u{a0}\u{a0}\u{a0}↳ Box");
    assert_eq!(flattened[3].parent_id.as_deref(), Some("2"));
}

#[test]
fn test_flatten_empty() {
    assert!(flatten(&[]).unwrap().is_empty());
}

#[test]
fn test_descendants_before_next_sibling() {
    let locations = vec![
        loc("k", "Kitchen", None),
        loc("p", "Pantry", Some("k")),
        loc("c", "Cupboard", Some("k")),
        loc("s", "Spices", Some("c")),
        loc("b", "Bedroom", None),
        loc("w", "Wardrobe", Some("b")),
    ];

    let flattened = flatten(&locations).unwrap();

    assert_eq!(
        original_names(&flattened),
        vec!["Bedroom", "Wardrobe", "Kitchen", "Cupboard", "Spices", "Pantry"]
    );
}

#[test]
fn test_child_level_is_parent_plus_one() {
    let locations = vec![
        loc("1", "House", None),
        loc("2", "Floor 1", Some("1")),
        loc("3", "Room A", Some("2")),
        loc("4", "Room B", Some("2")),
        loc("5", "Closet", Some("4")),
        loc("6", "Shed", None),
    ];

    let flattened = flatten(&locations).unwrap();
    assert_eq!(flattened.len(), locations.len());

    for entry in &flattened {
        match &entry.parent_id {
            None => assert_eq!(entry.level, 0),
            Some(parent_id) => {
                let parent = flattened.iter().find(|p| &p.id == parent_id).unwrap();
                assert_eq!(entry.level, parent.level + 1);
            }
        }
    }
}

#[test]
fn test_siblings_sorted_by_collation() {
    let locations = vec![
        loc("root", "Casa", None),
        loc("1", "bodega", Some("root")),
        loc("2", "Baño", Some("root")),
        loc("3", "Armario", Some("root")),
    ];

    let flattened = flatten(&locations).unwrap();

    assert_eq!(
        original_names(&flattened),
        vec!["Casa", "Armario", "Baño", "bodega"]
    );
}

#[test]
fn test_orphans_dropped_when_lenient() {
    let locations = vec![
        loc("1", "Garage", None),
        loc("2", "Lost Shelf", Some("missing")),
        loc("3", "Lost Box", Some("2")),
    ];

    let flattened = flatten(&locations).unwrap();

    assert_eq!(original_names(&flattened), vec!["Garage"]);
}

#[test]
fn test_orphans_rejected_when_strict() {
    let locations = vec![
        loc("1", "Garage", None),
        loc("3", "Lost Box", Some("2")),
        loc("2", "Lost Shelf", Some("missing")),
    ];
    let policy = ValidationPolicy {
        reject_orphans: true,
        ..Default::default()
    };

    let err = flatten_locations(&locations, &policy).unwrap_err();

    assert_eq!(
        err,
        HierarchyError::Orphan {
            id: "2".to_string(),
            parent_id: "missing".to_string(),
        }
    );
}

#[test]
fn test_cycle_rejected() {
    let locations = vec![
        loc("1", "Garage", None),
        loc("2", "Left", Some("3")),
        loc("3", "Right", Some("2")),
    ];

    let err = flatten(&locations).unwrap_err();

    assert_eq!(
        err,
        HierarchyError::Cycle(vec!["2".to_string(), "3".to_string(), "2".to_string()])
    );
    assert!(err.to_string().contains("2 -> 3 -> 2"));
}

#[test]
fn test_self_parent_is_a_cycle() {
    let locations = vec![loc("1", "Loop", Some("1"))];

    let err = flatten(&locations).unwrap_err();

    assert_eq!(
        err,
        HierarchyError::Cycle(vec!["1".to_string(), "1".to_string()])
    );
}

#[test]
fn test_duplicate_ids_rejected() {
    let locations = vec![loc("1", "Garage", None), loc("1", "Shelf", Some("1"))];

    let err = flatten(&locations).unwrap_err();

    assert_eq!(err, HierarchyError::DuplicateId("1".to_string()));
}

#[test]
fn test_extra_columns_preserved() {
    let raw = json!([
        { "id": "a", "name": "Garage", "household_id": "h1", "description": null }
    ]);
    let locations = parse_locations(&raw, &ValidationPolicy::default()).unwrap();

    let flattened = flatten(&locations).unwrap();

    assert_eq!(flattened[0].extra.get("household_id"), Some(&json!("h1")));
    assert!(flattened[0].extra.contains_key("description"));
}

#[test]
fn test_display_name() {
    assert_eq!(display_name("Attic", 0), "Attic");
    assert_eq!(display_name("Shelf", 1), "\u{a0}\u{a0}↳ Shelf");
    assert_eq!(
        display_name("Box", 3),
        format!("{}↳ Box", "\u{a0}".repeat(6))
    );
}
