use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// The task entity persisted by the server.
/// `id` and `createdAt` are assigned at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque unique string.
    /// Can be an arbitrary string, don't rely on it being hex.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /items`. A missing `title` is rejected during
/// deserialization already, an empty one by `internal_api::create_item`.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `PATCH /items/:id`. Any subset of the mutable fields;
/// fields absent from the request are left untouched.
/// Unknown fields (including `id` and `createdAt`) are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
