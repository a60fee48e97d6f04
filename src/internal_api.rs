use crate::api_model::CreateItem;
use crate::api_model::Item;
use crate::api_model::UpdateItem;
use crate::error::Error;
use crate::error::Result;
use crate::file_store::ItemStore;
use chrono::Utc;
use log::debug;
use serde_json::Value;
use warp::http::status::StatusCode;

/// Get project version as seen by Cargo.
pub fn get_project_version() -> &'static str {
    debug!("Returning API version...");
    env!("CARGO_PKG_VERSION")
}

/// Return all items, newest first.
/// Read failures are already masked as an empty collection by the store,
/// so the only items a client sees are the ones that parsed.
pub fn list_items(store: &dyn ItemStore) -> Result<Vec<Item>> {
    let mut items = store.load();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(items)
}

/// Create a new item with a fresh id and the current timestamp.
/// `completed` always starts out `false`.
/// Return the created item so the client can pick up the generated fields.
pub fn create_item(store: &dyn ItemStore, create: CreateItem) -> Result<Item> {
    debug!("Creating item {:?}", create);
    if create.title.trim().is_empty() {
        return Err(Error {
            code: StatusCode::BAD_REQUEST,
            msg: "Property title must not be empty".to_string(),
        });
    }
    let mut items = store.load();
    let item = Item {
        id: new_item_id(),
        title: create.title,
        description: create.description,
        completed: false,
        created_at: Utc::now(),
    };
    items.push(item.clone());
    store.save(&items).map_err(write_error)?;
    Ok(item)
}

/// Merge the supplied fields into the item with the given `id`.
/// Fields absent from `update` are left untouched, `id` and `createdAt`
/// can never be changed this way.
/// Return the updated item, or 404 (without writing) if the id is unknown.
pub fn update_item(store: &dyn ItemStore, id: &str, update: UpdateItem) -> Result<Item> {
    debug!("Updating item {} with {:?}", id, update);
    let mut items = store.load();
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| not_found(id))?;
    if let Some(title) = update.title {
        item.title = title;
    }
    if let Some(description) = update.description {
        item.description = description;
    }
    if let Some(completed) = update.completed {
        item.completed = completed;
    }
    let item = item.clone();
    store.save(&items).map_err(write_error)?;
    Ok(item)
}

/// Remove the item with the given `id`.
/// Return a confirmation message, or 404 (without writing) if no item matched.
pub fn delete_item(store: &dyn ItemStore, id: &str) -> Result<Value> {
    debug!("Deleting item {}", id);
    let mut items = store.load();
    let len_before = items.len();
    items.retain(|item| item.id != id);
    if items.len() == len_before {
        return Err(not_found(id));
    }
    store.save(&items).map_err(write_error)?;
    Ok(serde_json::json!({ "message": "Item deleted" }))
}

fn new_item_id() -> String {
    hex::encode(rand::random::<[u8; 8]>())
}

fn not_found(id: &str) -> Error {
    Error {
        code: StatusCode::NOT_FOUND,
        msg: format!("Item with id {} not found", id),
    }
}

// The HTTP contract reports failed writes during mutations as 400.
fn write_error(err: Error) -> Error {
    Error {
        code: StatusCode::BAD_REQUEST,
        msg: err.msg,
    }
}
