use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RunStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the run log, created with its header or upgraded with the Notes column
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.log.clone(), cli.test)?;

    let store = RunStore::open(cfg.log_path())?;
    let rows = store.read_all()?;

    success(format!(
        "Run log:     {} ({} runs)",
        store.path().display(),
        rows.len()
    ));
    success("mainsboard initialization completed!");
    Ok(())
}
