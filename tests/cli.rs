#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("brigade-cli").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn init_import_generate_coverage_end_to_end() {
    let dir = tempdir().unwrap();

    cmd_in(dir.path())
        .args(["init-settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings written"));

    let csv = dir.path().join("employees.csv");
    std::fs::write(
        &csv,
        "name,email,phone,position,availability\n\
         Sarah,sarah@example.com,555-1234,Server,monday 11:00-19:00;tuesday 11:00-19:00\n\
         Mike,mike@example.com,555-5678,Bartender,monday 16:00-04:00\n",
    )
    .unwrap();

    cmd_in(dir.path())
        .args(["import-employees", "--csv", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 employee(s) imported"));

    // 2025-03-03 est un lundi
    cmd_in(dir.path())
        .args(["generate", "--date", "2025-03-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 shift(s) generated"));

    // sous-staffé par rapport au paramétrage de repli → critical, code 1
    cmd_in(dir.path())
        .args(["coverage", "--date", "2025-03-03"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("status: critical"));

    cmd_in(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sarah"))
        .stdout(predicate::str::contains("Mike"));
}

#[test]
fn regeneration_replaces_the_previous_auto_generated_batch() {
    let dir = tempdir().unwrap();

    cmd_in(dir.path()).args(["init-settings"]).assert().success();

    let csv = dir.path().join("employees.csv");
    std::fs::write(
        &csv,
        "name,email,phone,position,availability\n\
         Sarah,,,Server,monday 11:00-19:00\n",
    )
    .unwrap();
    cmd_in(dir.path())
        .args(["import-employees", "--csv", csv.to_str().unwrap()])
        .assert()
        .success();

    for _ in 0..2 {
        cmd_in(dir.path())
            .args(["generate", "--date", "2025-03-03"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 shift(s) generated"));
    }

    let out_csv = dir.path().join("shifts.csv");
    cmd_in(dir.path())
        .args(["list", "--out-csv", out_csv.to_str().unwrap()])
        .assert()
        .success();
    let exported = std::fs::read_to_string(&out_csv).unwrap();
    // un seul service survit aux deux générations
    assert_eq!(exported.lines().count(), 2);
}

#[test]
fn generate_on_closed_day_produces_nothing() {
    let dir = tempdir().unwrap();

    cmd_in(dir.path()).args(["init-settings"]).assert().success();

    let settings_path = dir.path().join("settings.json");
    let raw = std::fs::read_to_string(&settings_path).unwrap();
    let mut settings: serde_json::Value = serde_json::from_str(&raw).unwrap();
    settings["openingHours"]["sunday"]["closed"] = serde_json::Value::Bool(true);
    std::fs::write(&settings_path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

    let csv = dir.path().join("employees.csv");
    std::fs::write(
        &csv,
        "name,email,phone,position,availability\n\
         Rachel,,,Host,sunday 11:00-02:00\n",
    )
    .unwrap();
    cmd_in(dir.path())
        .args(["import-employees", "--csv", csv.to_str().unwrap()])
        .assert()
        .success();

    // 2025-03-09 est un dimanche
    cmd_in(dir.path())
        .args(["generate", "--date", "2025-03-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 shift(s) generated"));

    cmd_in(dir.path())
        .args(["coverage", "--date", "2025-03-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: closed"));
}
