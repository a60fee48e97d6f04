extern crate todos;

use chrono::DateTime;
use chrono::Utc;
use serde_json::json;
use todos::api_model::CreateItem;
use todos::api_model::Item;
use todos::api_model::UpdateItem;
use todos::file_store::ItemStore;
use todos::file_store::MemoryStore;
use todos::internal_api::*;
use warp::http::status::StatusCode;

fn create_body(title: &str, description: &str) -> CreateItem {
    serde_json::from_value(json!({ "title": title, "description": description }))
        .expect("Failed to deserialize CreateItem")
}

fn update_body(json: serde_json::Value) -> UpdateItem {
    serde_json::from_value(json).expect("Failed to deserialize UpdateItem")
}

fn item_at(id: &str, created_at: &str) -> Item {
    Item {
        id: id.to_string(),
        title: format!("item {}", id),
        description: "".to_string(),
        completed: false,
        created_at: DateTime::parse_from_rfc3339(created_at)
            .expect("Failed to parse test timestamp")
            .with_timezone(&Utc),
    }
}

#[test]
fn test_create_then_list_round_trip() {
    let store = MemoryStore::new();

    let created = create_item(&store, create_body("Buy milk", "2%")).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.description, "2%");
    assert_eq!(created.completed, false);

    let listed = list_items(&store).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[test]
fn test_create_defaults_description_to_empty() {
    let store = MemoryStore::new();

    let create: CreateItem = serde_json::from_value(json!({ "title": "Water plants" })).unwrap();
    let created = create_item(&store, create).unwrap();

    assert_eq!(created.description, "");
}

#[test]
fn test_create_rejects_empty_title() {
    let store = MemoryStore::new();

    let result = create_item(&store, create_body("", "nothing to do"));
    let err = result.unwrap_err();

    assert_eq!(err.code, StatusCode::BAD_REQUEST);
    assert_eq!(list_items(&store).unwrap().len(), 0);
}

#[test]
fn test_create_rejects_whitespace_title() {
    let store = MemoryStore::new();

    let result = create_item(&store, create_body("   ", ""));

    assert_eq!(result.unwrap_err().code, StatusCode::BAD_REQUEST);
}

#[test]
fn test_sequential_creates_all_persist_with_unique_ids() {
    let store = MemoryStore::new();

    for i in 0..5 {
        create_item(&store, create_body(&format!("task {}", i), "")).unwrap();
    }

    let items = list_items(&store).unwrap();
    assert_eq!(items.len(), 5);
    let mut ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5, "ids must be unique across the collection");
}

#[test]
fn test_list_sorts_newest_first() {
    let store = MemoryStore::new();
    store
        .save(&[
            item_at("a", "2021-01-01T00:00:00Z"),
            item_at("c", "2021-03-01T00:00:00Z"),
            item_at("b", "2021-02-01T00:00:00Z"),
        ])
        .unwrap();

    let items = list_items(&store).unwrap();

    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[test]
fn test_update_merges_partial_fields() {
    let store = MemoryStore::new();
    let created = create_item(&store, create_body("Buy milk", "2%")).unwrap();

    let updated = update_item(&store, &created.id, update_body(json!({ "completed": true }))).unwrap();

    assert_eq!(updated.completed, true);
    assert_eq!(updated.title, "Buy milk");
    assert_eq!(updated.description, "2%");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn test_update_is_idempotent() {
    let store = MemoryStore::new();
    let created = create_item(&store, create_body("Buy milk", "2%")).unwrap();

    update_item(&store, &created.id, update_body(json!({ "completed": true }))).unwrap();
    let second = update_item(&store, &created.id, update_body(json!({ "completed": true }))).unwrap();

    assert_eq!(second.completed, true);
    assert_eq!(second.title, "Buy milk");
    assert_eq!(second.description, "2%");
}

#[test]
fn test_update_ignores_id_and_created_at_fields() {
    let store = MemoryStore::new();
    let created = create_item(&store, create_body("Buy milk", "")).unwrap();

    let updated = update_item(
        &store,
        &created.id,
        update_body(json!({
            "id": "forged",
            "createdAt": "1970-01-01T00:00:00Z",
            "title": "Buy oat milk"
        })),
    )
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "Buy oat milk");
}

#[test]
fn test_update_unknown_id_is_not_found_and_writes_nothing() {
    let store = MemoryStore::new();
    let created = create_item(&store, create_body("Buy milk", "2%")).unwrap();

    let result = update_item(&store, "no-such-id", update_body(json!({ "completed": true })));

    assert_eq!(result.unwrap_err().code, StatusCode::NOT_FOUND);
    let items = list_items(&store).unwrap();
    assert_eq!(items, vec![created]);
}

#[test]
fn test_delete_removes_the_item() {
    let store = MemoryStore::new();
    let keep = create_item(&store, create_body("keep", "")).unwrap();
    let remove = create_item(&store, create_body("remove", "")).unwrap();

    let confirmation = delete_item(&store, &remove.id).unwrap();

    assert_eq!(confirmation, json!({ "message": "Item deleted" }));
    let items = list_items(&store).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, keep.id);
}

#[test]
fn test_delete_unknown_id_is_not_found_and_collection_unchanged() {
    let store = MemoryStore::new();
    create_item(&store, create_body("Buy milk", "")).unwrap();

    let result = delete_item(&store, "no-such-id");

    assert_eq!(result.unwrap_err().code, StatusCode::NOT_FOUND);
    assert_eq!(list_items(&store).unwrap().len(), 1);
}

#[test]
fn test_update_rejects_non_boolean_completed() {
    let result: Result<UpdateItem, _> =
        serde_json::from_value(json!({ "completed": "yes" }));

    assert!(result.is_err(), "completed must be a JSON boolean");
}
