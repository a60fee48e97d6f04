// Constants used in the project. These are "convention over configuration" for now.

/// Default location of the JSON document that holds the full item collection.
pub const DATA_FILE: &str = "./data/items.json";
