//! Integration tests for the `raniclean` binary.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use common::Site;
use predicates::prelude::*;

/// An endpoint nothing listens on.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/api/v1.0/email/send";

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help() {
    Site::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("visit"))
        .stdout(predicate::str::contains("switch"));
}

#[test]
fn test_version() {
    Site::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command() {
    Site::new().cmd().arg("unknown-command").assert().failure().code(2);
}

#[test]
fn test_first_visit_saves_locale() {
    let site = Site::new();

    site.cmd()
        .args(["visit", "/en/services"])
        .assert()
        .success()
        .stdout("/en/services\n")
        .stderr(predicate::str::contains("Saved en as the preferred language"));

    site.cmd()
        .args(["storage", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preferred locale: en"))
        .stdout(predicate::str::contains("state:            idle"));
}

#[test]
fn test_saved_preference_redirects() {
    let site = Site::new();
    site.cmd().args(["visit", "/de"]).assert().success();

    site.cmd()
        .args(["visit", "/en/services"])
        .assert()
        .success()
        .stdout("/de/services\n")
        .stderr(predicate::str::contains("Redirecting to /de/services"));
}

#[test]
fn test_switch_scenario() {
    let site = Site::new();

    site.cmd()
        .args(["switch", "/en/about"])
        .assert()
        .success()
        .stdout("/de/about\n")
        .stderr(predicate::str::contains("Switching from en to de: /de/about"))
        .stderr(predicate::str::contains("Language switch to de confirmed"));

    site.cmd()
        .args(["storage", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preferred locale: de"))
        .stdout(predicate::str::contains("state:            idle"));

    // Reloading the German page changes nothing
    site.cmd()
        .args(["visit", "/de/about"])
        .assert()
        .success()
        .stdout("/de/about\n")
        .stderr(predicate::str::contains("already shown in the preferred language"));
}

#[test]
fn test_switch_without_follow_leaves_marker() {
    let site = Site::new();
    site.cmd().args(["visit", "/de/contact"]).assert().success();

    site.cmd()
        .args(["switch", "/de/contact", "--no-follow", "--tab", "t1"])
        .assert()
        .success()
        .stdout("/en/contact\n");

    site.cmd()
        .args(["storage", "show", "--tab", "t1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("state:            switch requested"));

    // Another tab has no marker but sees the new preference
    site.cmd()
        .args(["storage", "show", "--tab", "t2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preferred locale: en"))
        .stdout(predicate::str::contains("state:            idle"));

    site.cmd()
        .args(["visit", "/en/contact", "--tab", "t1"])
        .assert()
        .success()
        .stdout("/en/contact\n")
        .stderr(predicate::str::contains("Language switch to en confirmed"));

    site.cmd()
        .args(["storage", "show", "--tab", "t1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("state:            idle"));
}

#[test]
fn test_visit_json_output() {
    let site = Site::new();
    site.cmd().args(["visit", "/de"]).assert().success();

    let output = site
        .cmd()
        .args(["--output", "json", "visit", "/en/imprint?print=1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["outcome"], "redirected");
    assert_eq!(json["from"], "en");
    assert_eq!(json["to"], "de");
    assert_eq!(json["path"], "/de/imprint?print=1");
    assert_eq!(json["tab"], "main");
}

#[test]
fn test_invalid_path_rejected() {
    Site::new()
        .cmd()
        .args(["visit", "/fr/services"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid page path"));
}

#[test]
fn test_invalid_tab_rejected() {
    Site::new().cmd().args(["visit", "/en", "--tab", "../x"]).assert().failure().code(2);
}

#[test]
fn test_unknown_page_warns_but_runs() {
    Site::new()
        .cmd()
        .args(["visit", "/en/pricing"])
        .assert()
        .success()
        .stderr(predicate::str::contains("There is no page at /en/pricing"));
}

#[test]
fn test_pages_in_german() {
    Site::new()
        .cmd()
        .args(["pages", "--locale", "de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leistungen"))
        .stdout(predicate::str::contains("/de/services"))
        .stdout(predicate::str::contains("Impressum"))
        .stdout(predicate::str::contains("Jetzt buchen: /de/contact"));
}

#[test]
fn test_pages_follow_display_locale() {
    Site::new()
        .cmd()
        .env("RANICLEAN_LOCALE", "de_DE.UTF-8")
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Startseite"));
}

#[test]
fn test_contact_validation_messages() {
    Site::new()
        .cmd()
        .args([
            "contact", "--name", "A", "--email", "nope", "--service", "", "--message", "kurz",
            "--locale", "de",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Der Name muss mindestens 2 Zeichen lang sein."))
        .stderr(predicate::str::contains("Bitte geben Sie eine gültige E-Mail-Adresse ein."))
        .stderr(predicate::str::contains("Bitte wählen Sie eine Leistung aus."))
        .stderr(predicate::str::contains("Die Nachricht muss mindestens 10 Zeichen lang sein."));
}

#[test]
fn test_contact_dry_run() {
    let output = Site::new()
        .cmd()
        .args([
            "--output",
            "json",
            "contact",
            "--name",
            "Anna",
            "--email",
            "anna@example.de",
            "--service",
            "deep",
            "--message",
            "Grundreinigung nach dem Umzug.",
            "--locale",
            "de",
            "--dry-run",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["from_name"], "Anna");
    assert_eq!(json["phone"], "Nicht angegeben");
    assert_eq!(json["service_type"], "deep");
}

#[test]
fn test_contact_failure_keeps_draft() {
    let site = Site::new();

    site.cmd()
        .env("RANICLEAN_EMAILJS_ENDPOINT", DEAD_ENDPOINT)
        .args([
            "contact",
            "--name",
            "Tom",
            "--email",
            "tom@example.com",
            "--phone",
            "+49 30 1234567",
            "--service",
            "office",
            "--message",
            "Office cleaning twice a week.",
        ])
        .assert()
        .failure()
        .code(11)
        .stderr(predicate::str::contains("Something went wrong while sending your message"))
        .stderr(predicate::str::contains("raniclean contact --retry"));

    assert!(site.state_dir().join("contact-draft.json").exists());

    site.cmd()
        .args(["storage", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contact draft:    yes"));

    // The draft still holds every field
    let output = site
        .cmd()
        .args(["--output", "json", "contact", "--retry", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["from_email"], "tom@example.com");
    assert_eq!(json["phone"], "+49 30 1234567");

    // Retrying against the same dead relay keeps it
    site.cmd()
        .env("RANICLEAN_EMAILJS_ENDPOINT", DEAD_ENDPOINT)
        .args(["contact", "--retry"])
        .assert()
        .failure()
        .code(11);
    assert!(site.state_dir().join("contact-draft.json").exists());
}

#[test]
fn test_contact_retry_without_draft() {
    Site::new()
        .cmd()
        .args(["contact", "--retry"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no saved contact request"));
}

#[test]
fn test_config_file_endpoint_is_used() {
    let site = Site::new();
    site.write_config(&format!("emailjs:\n  endpoint: {DEAD_ENDPOINT}\n  timeout_secs: 3\n"));

    site.cmd()
        .args([
            "contact",
            "--name",
            "Tom",
            "--email",
            "tom@example.com",
            "--service",
            "home",
            "--message",
            "Flat cleaning on Fridays.",
        ])
        .assert()
        .failure()
        .code(11);
}

#[test]
fn test_storage_clear_all() {
    let site = Site::new();
    site.cmd().args(["switch", "/en", "--no-follow"]).assert().success();

    site.cmd()
        .args(["storage", "clear", "--all"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Stored site data cleared."));

    site.cmd()
        .args(["storage", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preferred locale: -"))
        .stdout(predicate::str::contains("state:            idle"));
}

#[test]
fn test_storage_clear_all_removes_corrupt_file() {
    let site = Site::new();
    std::fs::create_dir_all(site.state_dir()).unwrap();
    let durable = site.state_dir().join("local-storage.json");
    std::fs::write(&durable, "not json").unwrap();

    site.cmd()
        .args(["storage", "clear", "--all"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Stored site data cleared."));

    assert!(!durable.exists());
}

#[test]
fn test_visit_recovers_from_corrupt_storage() {
    let site = Site::new();
    std::fs::create_dir_all(site.state_dir()).unwrap();
    let durable = site.state_dir().join("local-storage.json");
    std::fs::write(&durable, "not json").unwrap();

    site.cmd()
        .args(["visit", "/en/about"])
        .assert()
        .success()
        .stdout("/en/about\n")
        .stderr(predicate::str::contains("Saved en as the preferred language"));

    let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&durable).unwrap()).unwrap();
    assert_eq!(saved["raniclean-locale"], "en");
}

#[test]
fn test_completion() {
    Site::new()
        .cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("raniclean"));
}

#[cfg(test)]
mod library_tests {
    use raniclean_site::locale::Locale;
    use raniclean_site::navigation::{LanguageSwitcher, LocalePersist, MountOutcome, Router, SimulatedRouter};
    use raniclean_site::storage::{FileStore, SiteStorage, TabState};
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_survives_between_page_loads() {
        let dir = TempDir::new().unwrap();
        let open = || {
            SiteStorage::new(
                FileStore::new(dir.path().join("local.json")),
                FileStore::new(dir.path().join("session.json")),
            )
        };

        let mut router = SimulatedRouter::open("/en/services").unwrap();
        LanguageSwitcher.toggle(&mut router, &mut open());

        // New process, same files
        let mut storage = open();
        assert_eq!(storage.tab_state(), TabState::SwitchRequested);
        let outcome = LocalePersist::new().on_mount(&mut router, &mut storage);

        assert_eq!(outcome, MountOutcome::SwitchConfirmed { locale: Locale::De });
        assert_eq!(open().tab_state(), TabState::Idle);
        assert_eq!(router.pathname(), "/de/services");
    }
}
