use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = std::fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// and then to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let mut candidates = Vec::new();
        if let Some(ed) = editor {
            candidates.push(ed.clone());
        }
        candidates.push(default_editor);

        for ed in candidates {
            match Command::new(&ed).arg(path).status() {
                Ok(s) if s.success() => return Ok(ed),
                Ok(s) => tracing::warn!(editor = %ed, status = %s, "Editor exited with failure"),
                Err(e) => tracing::warn!(editor = %ed, error = %e, "Editor not available"),
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with any editor",
            path.display()
        )))
    }
}
