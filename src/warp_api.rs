use crate::error::Result;
use crate::file_store::ItemStore;
use crate::internal_api;
use bytes::Bytes;
use log::info;
use log::warn;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use warp::http::header::HeaderMap;
use warp::http::header::HeaderValue;
use warp::http::status::StatusCode;
use warp::Filter;
use warp::Reply;

/// Start web framework with specified APIs.
pub async fn run_server(port: u16, store: Arc<dyn ItemStore>) {
    let package_name = env!("CARGO_PKG_NAME").to_uppercase();
    info!("Starting {} HTTP server on port {}", package_name, port);

    // Liveness check for clients.
    let running = warp::path::end().and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({ "message": "Item API is running" }))
    });

    // Get version of cargo project.
    let version = warp::path("version")
        .and(warp::path::end())
        .and(warp::get())
        .map(internal_api::get_project_version);

    let mut headers = HeaderMap::new();
    warn!("Access-Control-Allow-Origin is set to *, restrict it before exposing the server to a public network");
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    let headers = warp::reply::with::headers(headers);

    // GET API for all items.
    // Return an array of all items, sorted by creation time, newest first.
    // Return an empty array if no items exist.
    let store_ref = store.clone();
    let list_items = warp::path("items")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || {
            let result = internal_api::list_items(store_ref.as_ref());
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(warp::reply::with_status(err.msg, err.code)),
            };
            boxed
        });

    // POST API for a single item.
    // Input: json with "title" (required) and "description" (optional).
    // Return the created item with its generated id and timestamp, status 201.
    let store_ref = store.clone();
    let create_item = warp::path("items")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .map(move |body: Bytes| {
            let result = body_to_json(&body)
                .and_then(|create| internal_api::create_item(store_ref.as_ref(), create));
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::with_status(
                    warp::reply::json(&result),
                    StatusCode::CREATED,
                )),
                Err(err) => Box::new(warp::reply::with_status(err.msg, err.code)),
            };
            boxed
        });

    // PATCH (partially update) a single item.
    // Input:
    //      - id of the item to be updated
    //      - json with any subset of title/description/completed
    // See `internal_api::update_item` for more details.
    let store_ref = store.clone();
    let update_item = warp::path!("items" / String)
        .and(warp::path::end())
        .and(warp::patch())
        .and(warp::body::bytes())
        .map(move |id: String, body: Bytes| {
            let result = body_to_json(&body)
                .and_then(|update| internal_api::update_item(store_ref.as_ref(), &id, update));
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(warp::reply::with_status(err.msg, err.code)),
            };
            boxed
        });

    // DELETE a single item.
    let store_ref = store.clone();
    let delete_item = warp::path!("items" / String)
        .and(warp::path::end())
        .and(warp::delete())
        .map(move |id: String| {
            let result = internal_api::delete_item(store_ref.as_ref(), &id);
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(warp::reply::with_status(err.msg, err.code)),
            };
            boxed
        });

    // Specify APIs.
    // Specify address and port number to listen to.
    warp::serve(
        running
            .with(&headers)
            .or(version.with(&headers))
            .or(list_items.with(&headers))
            .or(create_item.with(&headers))
            .or(update_item.with(&headers))
            .or(delete_item.with(&headers)),
    )
    .run(([0, 0, 0, 0], port))
    .await;
}

/// Deserialize a request body, reporting the path to the offending
/// field in the error message.
fn body_to_json<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let result = serde_path_to_error::deserialize(&mut deserializer)?;
    Ok(result)
}
