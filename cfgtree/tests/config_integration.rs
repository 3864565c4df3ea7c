//! Integration tests for the configuration store.
//!
//! These tests exercise the full open → mutate → teardown → reopen cycle
//! against real files, including the tolerance of broken or foreign files
//! on load and of unwritable destinations on teardown.
//!
//! Fixtures under `tests/fixtures/configs` are always copied into a
//! temporary directory first, since dropping a [`Config`] rewrites its file.
//!
//! Tests that modify environment variables are marked with `#[serial]`.

use cfgtree::config::CONFIG_ENV;
use cfgtree::{default_path, Config, Entry, Error, Rgb, State};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Helper to get path to test fixtures.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(name)
}

/// Copies a fixture into `dir` and returns the copy's path.
fn fixture_copy(dir: &Path, name: &str) -> PathBuf {
    let target = dir.join(name);
    fs::copy(fixture_path(name), &target).unwrap();
    target
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_editor_settings_scenario() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.xml");

    {
        let mut config = Config::open(&path);
        assert!(config.is_empty());
        config.entry("editor").entry("tabwidth").set_value("4");
        config
            .entry("editor")
            .entry("colors")
            .entry("cursor")
            .set_value("00ff00");
    }

    let mut config = Config::open(&path);
    assert_eq!(
        config.lookup("editor.tabwidth").and_then(Entry::value),
        Some("4")
    );
    assert_eq!(
        config.lookup("editor.colors.cursor").and_then(Entry::value),
        Some("00ff00")
    );
    assert!(config.entry("editor").has_entry("tabwidth"));
    assert!(config.entry("editor").has_entry("colors"));
}

#[test]
fn test_round_trip_preserves_tree() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.xml");

    let expected = {
        let mut config = Config::open(&path);
        config.entry_path("session.host").set_value("example.org");
        config.entry_path("session.port").set_value(6523);
        config.entry_path("session.user.name").set_value("ada & co <dev>");
        config.entry_path("session.user.color").set_value(Rgb::new(65535, 0, 0));
        config.entry_path("appearance.toolbar");
        config.entry("appearance").set_value("default");
        config.root().clone()
    };

    let config = Config::open(&path);
    assert_eq!(config.root(), &expected);
    assert_eq!(
        config
            .lookup("session.user.color")
            .and_then(Entry::parse_value::<Rgb>),
        Some(Rgb::new(65535, 0, 0))
    );
    assert!(config.lookup("appearance.toolbar").unwrap().is_empty());
}

#[test]
fn test_repeated_cycles_are_stable() {
    let temp = TempDir::new().unwrap();
    let path = fixture_copy(temp.path(), "valid.xml");

    drop(Config::open(&path));
    let first = fs::read_to_string(&path).unwrap();
    drop(Config::open(&path));
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Load Tolerance
// ============================================================================

#[test]
fn test_load_valid_fixture() {
    let temp = TempDir::new().unwrap();
    let config = Config::open(fixture_copy(temp.path(), "valid.xml"));

    assert_eq!(config.len(), 2);
    let session = config.child("session").unwrap();
    assert_eq!(session.child("port").unwrap().value_or(0_u16), 6523);
    assert_eq!(session.value(), None);
}

#[test]
fn test_load_commented_fixture() {
    let temp = TempDir::new().unwrap();
    let config = Config::open(fixture_copy(temp.path(), "commented.xml"));

    let editor = config.child("editor").unwrap();
    assert_eq!(editor.len(), 3);
    assert_eq!(editor.child("tabwidth").unwrap().value_or(0_u32), 8);
    assert_eq!(editor.child("wrap").unwrap().value(), None);
    assert_eq!(editor.child("font").unwrap().value(), Some("Monospace 10"));
}

#[test]
fn test_load_tolerates_bad_files() {
    let temp = TempDir::new().unwrap();

    for name in ["empty.xml", "garbage.xml", "truncated.xml", "foreign.xml"] {
        let path = fixture_copy(temp.path(), name);
        let mut config = Config::open(&path);
        assert!(config.is_empty(), "{name} should load as empty");

        config.entry("probe").set_value("ok");
        config.close().unwrap();

        // The replacement file is a proper store
        let reopened = Config::open(&path);
        assert_eq!(reopened.lookup("probe").and_then(Entry::value), Some("ok"));
    }
}

#[test]
fn test_load_nonexistent_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("never").join("created.xml");

    let config = Config::open(&path);
    assert!(config.is_empty());
    assert_eq!(config.path(), path.as_path());
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_teardown_creates_missing_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deep").join("er").join("config.xml");

    {
        let mut config = Config::open(&path);
        config.entry("a").set_value("1");
    }

    assert!(path.is_file());
}

#[test]
fn test_teardown_failure_does_not_panic() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    fs::write(&blocker, "occupied").unwrap();

    {
        let mut config = Config::open(blocker.join("config.xml"));
        config.entry("lost").set_value("value");
    }

    assert_eq!(fs::read_to_string(&blocker).unwrap(), "occupied");
}

#[test]
fn test_close_reports_path_failure() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    fs::write(&blocker, "occupied").unwrap();

    let config = Config::open(blocker.join("nested").join("config.xml"));
    match config.close() {
        Err(Error::PathCreationFailed { path, .. }) => assert_eq!(path, blocker),
        other => panic!("expected path creation failure, got {other:?}"),
    }
}

#[test]
fn test_state_after_persist() {
    let temp = TempDir::new().unwrap();
    let config = Config::open(temp.path().join("config.xml"));
    assert_eq!(config.state(), State::Loaded);
    config.persist().unwrap();
    assert_eq!(config.state(), State::Loaded);
}

// ============================================================================
// Default Location
// ============================================================================

#[test]
#[serial]
fn test_default_path_from_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.xml");
    let _guard = EnvGuard::new(CONFIG_ENV, path.to_str().unwrap());

    assert_eq!(default_path().unwrap(), path);
    let config = Config::open_default().unwrap();
    assert_eq!(config.path(), path.as_path());
}

#[test]
#[serial]
fn test_default_path_under_home() {
    let _guard = EnvGuard::remove(CONFIG_ENV);

    if let Ok(path) = default_path() {
        assert!(path.ends_with(Path::new(".cfgtree").join("config.xml")));
    }
}
