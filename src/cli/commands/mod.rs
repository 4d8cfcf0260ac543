pub mod add;
pub mod bst;
pub mod config;
pub mod init;
pub mod leaderboard;
pub mod locations;
pub mod pokemon;
pub mod recent;
pub mod serve;
pub mod stats;
pub mod streaks;

use crate::bst::BstTable;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RunStore;
use serde::Serialize;

/// Open the configured run log, creating or upgrading it if needed.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RunStore> {
    RunStore::open(cfg.log_path())
}

pub(crate) fn load_bst(cfg: &Config) -> AppResult<BstTable> {
    BstTable::load(cfg.bst_path().as_deref())
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
