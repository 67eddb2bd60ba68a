use predicates::str::contains;

mod common;
use common::{ewt, temp_out};
use envwatch::cli::shell::{ShellAction, ShellLine, split_line};
use clap::Parser;

#[test]
fn split_line_handles_quotes_and_escapes() {
    assert_eq!(
        split_line("add --pm25 90 --location \"Chiang Mai\"").unwrap(),
        ["add", "--pm25", "90", "--location", "Chiang Mai"]
    );
    assert_eq!(
        split_line("ask 'is it safe?'  now").unwrap(),
        ["ask", "is it safe?", "now"]
    );
    assert_eq!(split_line(r"location Nong\ Khai").unwrap(), ["location", "Nong Khai"]);
    assert_eq!(split_line("   ").unwrap(), Vec::<String>::new());
    assert_eq!(split_line("ask \"\"").unwrap(), ["ask", ""]);
    assert!(split_line("ask \"unterminated").is_err());
}

#[test]
fn shell_line_parses_commands() {
    let line = ShellLine::try_parse_from(["add", "--pm25", "80", "--ph", "7"]).unwrap();
    match line.action {
        ShellAction::Add(args) => {
            assert_eq!(args.pm25, 80.0);
            assert_eq!(args.ph, 7.0);
            assert_eq!(args.hardness, 268.0);
            assert_eq!(args.location, None);
        }
        other => panic!("unexpected {other:?}"),
    }

    assert!(matches!(
        ShellLine::try_parse_from(["exit"]).unwrap().action,
        ShellAction::Quit
    ));
    assert!(ShellLine::try_parse_from(["bogus"]).is_err());
}

#[test]
fn shell_keeps_readings_for_the_whole_session() {
    let out = temp_out("shell_session", "csv");
    let script = format!(
        "add --pm25 80\n\
         add --pm25 60 --location \"Chiang Mai\"\n\
         status\n\
         export --file {out}\n\
         log\n\
         quit\n"
    );

    ewt("shell_session")
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("60.0 µg/m³ (-20.0)"))
        .stdout(contains("Moderate"))
        .stdout(contains("CSV export completed"))
        .stdout(contains("Session closed (26 readings discarded)"));

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 27);
    assert!(content.contains("Chiang Mai,60.0"));
}

#[test]
fn shell_reports_errors_and_continues() {
    ewt("shell_errors")
        .arg("shell")
        .write_stdin("add --pm25 900\nforecast\nnonsense\nstatus\n")
        .assert()
        .success()
        .stderr(contains("Invalid reading"))
        .stderr(contains("API key not found"))
        .stdout(contains("Latest situation"));
}

#[test]
fn shell_location_changes_default_for_new_readings() {
    ewt("shell_location")
        .arg("shell")
        .write_stdin("location Hat Yai\nadd --pm25 20\nquit\n")
        .assert()
        .success()
        .stdout(contains("Location: Hat Yai"))
        .stdout(contains("Hat Yai @"));
}
