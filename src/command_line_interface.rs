use crate::constants;
use lazy_static::lazy_static;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt, Debug, Clone)]
#[structopt(
    name = "Todos, a file-backed task list server.",
    setting = AppSettings::DeriveDisplayOrder,
    setting = AppSettings::UnifiedHelpMessage,
)]
pub struct CliOptions {
    /// Port to listen to.
    #[structopt(short, long, default_value = "3000", env = "PORT")]
    pub port: u16,

    /// File where the item collection is persisted as a single JSON document.
    ///
    /// The containing directory is created on the first write if it does
    /// not exist yet. A missing or unreadable file is treated as an empty
    /// collection.
    #[structopt(
        short = "f",
        long,
        name = "DATA_FILE",
        default_value = constants::DATA_FILE,
        env = "DATA_FILE"
    )]
    pub data_file: String,
}

lazy_static! {
    pub static ref PARSED: CliOptions = CliOptions::from_args();
}
