//! Integration tests for the engine's activity log

use noteboard::{
    board::GetBoard,
    card::{AddCard, EditCard, RemoveCard},
    item::UpdateItem,
    BoardConfig, BoardEngine, ColumnIndex, MemoryStore,
};

#[test_log::test]
fn test_activity_logging_end_to_end() {
    let mut engine = BoardEngine::open(MemoryStore::new(), &BoardConfig::default());

    // Changes are logged
    engine.process(&AddCard::new(ColumnIndex::Todo, "First card")).unwrap();
    engine.process(&EditCard::new(1u64).with_title("Renamed")).unwrap();
    engine.process(&UpdateItem::check(1u64, 0)).unwrap();

    // Reads and no-ops are not
    engine.process(&GetBoard).unwrap();
    engine.process(&RemoveCard::new(99u64)).unwrap();
    engine.process(&UpdateItem::check(1u64, 0)).unwrap();

    let entries: Vec<_> = engine.activity().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].op, "update item"); // Newest first
    assert_eq!(entries[1].op, "edit card");
    assert_eq!(entries[2].op, "add card"); // Oldest last

    assert_eq!(entries[2].input["title"], "First card");
    assert_eq!(entries[2].output["id"], 1);
    assert_eq!(entries[1].output["card"]["title"], "Renamed");
    assert!(entries.iter().all(|entry| !entry.is_failure()));

    assert!(entries[0].timestamp >= entries[2].timestamp);
    assert_ne!(entries[0].id, entries[2].id);
}

#[test_log::test]
fn test_rejections_are_logged_with_the_error() {
    let mut engine = BoardEngine::open(MemoryStore::new(), &BoardConfig::default());
    let _ = engine.process(&AddCard::new(ColumnIndex::Todo, "   "));

    let entry = engine.activity().next().unwrap();
    assert!(entry.is_failure());
    assert_eq!(entry.output["error"], "missing required field: title");
    assert_eq!(engine.board().card_count(), 0);
}
