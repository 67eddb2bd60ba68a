use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ewt, temp_config};

#[test]
fn test_status_of_seeded_session() {
    ewt("status_seeded")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Latest situation"))
        .stdout(contains("35.0 µg/m³ (-1.0)"))
        .stdout(contains("Good"))
        .stdout(contains("230 mg/L ("))
        .stdout(contains("Moderately hard"));
}

#[test]
fn test_add_unhealthy_reading() {
    ewt("add_unhealthy")
        .args([
            "add", "--pm25", "90", "--hardness", "320", "--temp", "30", "--ph", "7.1",
        ])
        .assert()
        .success()
        .stdout(contains("Reading saved!"))
        .stdout(contains("90.0 µg/m³ (+55.0)"))
        .stdout(contains("Unhealthy"))
        .stdout(contains("Very hard"));
}

#[test]
fn test_add_uses_form_defaults_and_custom_location() {
    ewt("add_defaults")
        .args(["add", "--location", "Chiang Mai"])
        .assert()
        .success()
        .stdout(contains("Chiang Mai"))
        .stdout(contains("45.0 µg/m³ (+10.0)"))
        .stdout(contains("268 mg/L"));
}

#[test]
fn test_add_rejects_out_of_range_values() {
    ewt("add_out_of_range")
        .args(["add", "--pm25", "600"])
        .assert()
        .failure()
        .stderr(contains("Invalid reading"))
        .stderr(contains("pm25"));

    ewt("add_negative_ph")
        .args(["add", "--ph=-1"])
        .assert()
        .failure()
        .stderr(contains("ph"));
}

#[test]
fn test_list_sessions_all() {
    ewt("list_all")
        .arg("list")
        .assert()
        .success()
        .stdout(contains("recorded_at"))
        .stdout(contains("Bangkok"))
        .stdout(contains("Unhealthy"))
        .stdout(contains("24 readings in session"));
}

#[test]
fn test_list_last_n() {
    ewt("list_last")
        .args(["list", "--last", "2"])
        .assert()
        .success()
        .stdout(contains("\n23 "))
        .stdout(contains("\n24 "))
        .stdout(contains("\n22 ").not());
}

#[test]
fn test_forecast_without_api_key_fails_early() {
    ewt("forecast_no_key")
        .arg("forecast")
        .assert()
        .failure()
        .stderr(contains("GEMINI_API_KEY"));
}

#[test]
fn test_ask_without_api_key_fails_early() {
    ewt("ask_no_key")
        .args(["ask", "will", "it", "rain?"])
        .assert()
        .failure()
        .stderr(contains("API key not found"));
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    let cfg = temp_config("init_test_mode");

    ewt("init_test_mode")
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));

    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_init_writes_default_config_once() {
    let cfg = temp_config("init_writes");

    ewt("init_writes")
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("Configuration written"));

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("default_location: Bangkok"));
    assert!(content.contains("model: gemini-1.5-flash"));

    ewt("init_writes")
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    fs::remove_file(&cfg).ok();
}

#[test]
fn test_config_print_and_custom_location() {
    let cfg = temp_config("config_custom");
    fs::write(&cfg, "default_location: Phuket\nadvice_language: English\n").unwrap();

    ewt("config_custom")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_location: Phuket"))
        .stdout(contains("api_key_env: GEMINI_API_KEY"));

    ewt("config_custom")
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("Phuket"));

    fs::remove_file(&cfg).ok();
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = temp_config("config_invalid");
    fs::write(&cfg, "request_timeout_secs: [not, a, number]\n").unwrap();

    ewt("config_invalid")
        .args(["status"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));

    fs::remove_file(&cfg).ok();
}
