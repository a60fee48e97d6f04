// Fake simple library interface to allow integration tests to work

pub mod api_model;
pub mod command_line_interface;
pub mod constants;
pub mod error;
pub mod file_store;
pub mod internal_api;
pub mod warp_api;
