#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mainsboard::models::LogRow;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The binary, with HOME pointed at `home` so no real config is touched.
pub fn mb(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("mainsboard");
    cmd.env("HOME", home.path())
        .env("APPDATA", home.path())
        .env_remove("RUST_LOG");
    cmd
}

pub fn temp_home() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Path of a run log inside the temp dir (not created).
pub fn log_path(dir: &TempDir, name: &str) -> String {
    let mut path: PathBuf = dir.path().to_path_buf();
    path.push(format!("{name}.csv"));
    path.to_string_lossy().to_string()
}

/// Write a run log with the given body under the standard header.
pub fn write_log(path: &Path, rows: &[(&str, &str, &str, &str)]) {
    let mut content = String::from("Pokemon,Location,Date,Notes\n");
    for (p, l, d, n) in rows {
        content.push_str(&format!("{p},{l},{d},{n}\n"));
    }
    fs::write(path, content).expect("write run log");
}

/// Build an in-memory log; sequence follows slice order.
pub fn rows(data: &[(&str, &str, &str)]) -> Vec<LogRow> {
    data.iter()
        .enumerate()
        .map(|(i, (p, l, d))| LogRow::new(i, *p, *l, *d, ""))
        .collect()
}

pub fn ymd(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
