use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{missing_keys, run_config_migration};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            if path.exists() {
                info(format!("Configuration file: {}\n", path.display()));
                ConfigLogic::print(&path)?;
            } else {
                info("No configuration file yet, effective defaults:\n");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!("{} does not exist (run `mainsboard init`)", path.display()));
            } else {
                let missing = missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `mainsboard config --migrate` to add them with default values.");
                }
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            run_config_migration()?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited successfully using '{}'", used));
        }
    }

    Ok(())
}
