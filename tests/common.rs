#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

/// envwatch binary with an isolated (missing) config file and no API key.
pub fn ewt(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("envwatch");
    cmd.args(["--config", &config_path(name)])
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// Config path used by `ewt(name)`. Missing unless a test writes it.
pub fn config_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_envwatch.conf", name));
    path.to_string_lossy().to_string()
}

/// Same path as `ewt(name)` uses, with any previous file removed.
pub fn temp_config(name: &str) -> String {
    let p = config_path(name);
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_envwatch_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A fixed "now" so seeded timestamps are predictable.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|d| d.and_hms_opt(12, 30, 45))
        .expect("valid date")
}
