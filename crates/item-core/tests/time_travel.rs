use item_core::{ItemRegistry, RegistryError, UpsertOutcome};

#[test]
fn mutations_are_recorded_in_order() {
    let registry = ItemRegistry::new();
    registry.create_item("One").expect("create");
    registry.update_item(1, "Uno").expect("update");
    registry.delete_item(1);

    let events = registry.list_events(None, None);
    let ids: Vec<u64> = events.iter().map(|e| e.id).collect();
    let types: Vec<&str> = events.iter().map(|e| e.kind.type_name()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(types, vec!["item_created", "item_updated", "item_deleted"]);
}

#[test]
fn reads_at_event_id_return_historical_state() {
    let registry = ItemRegistry::new();
    registry.create_item("One").unwrap(); // event 1
    registry.update_item(1, "Uno").unwrap(); // event 2

    let at_1 = registry.get_item(1, Some(1)).expect("item at 1");
    assert_eq!((at_1.id, at_1.name.as_str()), (1, "One"));
    let at_2 = registry.get_item(1, Some(2)).expect("item at 2");
    assert_eq!(at_2.name, "Uno");

    registry.delete_item(1); // event 3
    assert_eq!(registry.get_item(1, Some(3)), Err(RegistryError::NotFound { item_id: 1 }));
    assert_eq!(registry.list_items(Some(1)).len(), 1);
    assert!(registry.list_items(Some(0)).is_empty());
    // Un `at` mayor que el último id equivale al estado completo del log
    assert!(registry.list_items(Some(100)).is_empty());
}

#[test]
fn duplicate_create_leaves_single_item() {
    let registry = ItemRegistry::new();
    registry.create_item("Unique").unwrap();
    let err = registry.create_item("Unique").unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));
    assert!(err.to_string().to_lowercase().starts_with("name already exists"));
    assert_eq!(registry.list_items(None).len(), 1);
}

#[test]
fn upsert_on_empty_registry_creates_with_given_id() {
    let registry = ItemRegistry::new();
    let (item, outcome) = registry.update_item(5, "Created via update").unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(item.id, 5);
    assert_eq!(item.name, "Created via update");
    let next = registry.create_item("After upsert").unwrap();
    assert!(next.id >= 6);
}

#[test]
fn names_are_trimmed_once() {
    let registry = ItemRegistry::new();
    let item = registry.create_item("  Widget  ").unwrap();
    assert_eq!(item.name, "Widget");
    let (item, _) = registry.update_item(1, "   Trimmed  Name   ").unwrap();
    assert_eq!(item.name, "Trimmed  Name");
    assert_eq!(registry.get_item(1, None).unwrap().name, "Trimmed  Name");
}

#[test]
fn list_keeps_first_insertion_order_after_updates() {
    let registry = ItemRegistry::new();
    registry.create_item("First").unwrap();
    registry.create_item("Second").unwrap();
    registry.update_item(1, "First again").unwrap();
    let names: Vec<String> = registry.list_items(None).into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["First again", "Second"]);
    let replayed: Vec<String> = registry.list_items(registry.last_event_id())
                                        .into_iter()
                                        .map(|i| i.name)
                                        .collect();
    assert_eq!(replayed, names);
}

#[test]
fn history_includes_resets_on_request() {
    let registry = ItemRegistry::new();
    registry.create_item("One").unwrap();
    registry.update_item(1, "Uno").unwrap();
    registry.delete_item(1);
    registry.reset(true);
    registry.create_item("Other").unwrap();

    let plain: Vec<&str> = registry.item_history(1, false, None)
                                   .iter()
                                   .map(|e| e.kind.type_name())
                                   .collect();
    // El item creado tras el reset reutiliza el id 1
    assert_eq!(plain, vec!["item_created", "item_updated", "item_deleted", "item_created"]);

    let with_resets: Vec<u64> = registry.item_history(1, true, None).iter().map(|e| e.id).collect();
    assert_eq!(with_resets, vec![1, 2, 3, 4, 5]);

    let tail: Vec<u64> = registry.item_history(1, true, Some(2)).iter().map(|e| e.id).collect();
    assert_eq!(tail, vec![4, 5]);
}

#[test]
fn list_events_pages_forward() {
    let registry = ItemRegistry::new();
    for name in ["aaa", "bbb", "ccc", "ddd"] {
        registry.create_item(name).unwrap();
    }
    let page: Vec<u64> = registry.list_events(Some(1), Some(2)).iter().map(|e| e.id).collect();
    assert_eq!(page, vec![2, 3]);
    let rest: Vec<u64> = registry.list_events(Some(3), Some(10)).iter().map(|e| e.id).collect();
    assert_eq!(rest, vec![4]);
}
