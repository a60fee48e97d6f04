mod api_model;
mod command_line_interface;
mod constants;
mod error;
mod file_store;
mod internal_api;
mod warp_api;

use chrono::Utc;
use env_logger::Env;
use file_store::FileStore;
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli_options = command_line_interface::PARSED.clone();
    let store = Arc::new(FileStore::new(&cli_options.data_file));

    // Start web framework
    warp_api::run_server(cli_options.port, store).await;
}
