//! Integration tests for folio-config.
//!
//! Exercises the full loading pipeline: discovery, parse and merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use folio_config::{CONFIG_FILENAME, Config, ConfigError, ConfigWarning, is_global_config};

/// Temporary directory tree for a test.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a config file into a directory relative to the root.
    fn write_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        let path = self.create_dir(rel_dir).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Loads config from `cwd`, ignoring a global config on the test machine.
fn load_local(cwd: &Path) -> Config {
    let files: Vec<PathBuf> = folio_config::discover_config_files(cwd)
        .into_iter()
        .filter(|p| !is_global_config(p))
        .collect();
    Config::load_from_files(&files).unwrap()
}

#[test]
fn test_no_config_gives_defaults() {
    let env = TestEnv::new();
    let config = load_local(env.path());

    assert!(config.config_root.is_none());
    assert_eq!(config.search.word_padding, 2);
    assert_eq!(config.search.result_cap(), None);
    assert_eq!(config.files.fullsize_dir, "fullsize");
}

#[test]
fn test_single_config() {
    let env = TestEnv::new();
    env.write_config(
        "",
        r#"
[search]
max_results = 20
timeout_ms = 750
highlight_open = "<mark>"
highlight_close = "</mark>"

[files]
raster_patterns = "*.tif"
"#,
    );

    let config = load_local(env.path());
    assert_eq!(config.search.result_cap(), Some(20));
    assert_eq!(config.search.timeout(), Some(Duration::from_millis(750)));
    assert_eq!(config.search.highlight_open, "<mark>");
    assert_eq!(config.files.raster_patterns, vec!["*.tif"]);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
}

#[test]
fn test_nested_configs_merge_closest_first() {
    let env = TestEnv::new();
    env.write_config("", "[search]\nword_padding = 5\nmax_results = 100\n");
    env.write_config("collection", "[search]\nword_padding = 1\n");
    let cwd = env.create_dir("collection/book-7/files");

    let config = load_local(&cwd);
    assert_eq!(config.search.word_padding, 1);
    assert_eq!(config.search.max_results, 100);
    assert_eq!(
        config.config_root.as_deref(),
        Some(env.path().join("collection").as_path())
    );
}

#[test]
fn test_root_config_shields_parents() {
    let env = TestEnv::new();
    env.write_config("", "[search]\nmax_results = 3\n");
    env.write_config("collection", "root = true\n[files]\nfullsize_dir = \"web\"\n");
    let cwd = env.create_dir("collection/book");

    let config = Config::load(&cwd).unwrap();
    assert_eq!(config.search.max_results, 0);
    assert_eq!(config.files.fullsize_dir, "web");
}

#[test]
fn test_invalid_toml_is_reported_with_path() {
    let env = TestEnv::new();
    let path = env.write_config("", "[search\nmax_results = 1\n");

    let err = Config::load_from_files(&[path.clone()]).unwrap_err();
    match err {
        ConfigError::ParseToml { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseToml, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_read_error() {
    let env = TestEnv::new();
    let err = Config::load_from_files(&[env.path().join("absent.toml")]).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().starts_with("failed to read config file"));
}

#[test]
fn test_validate_loaded_config() {
    let env = TestEnv::new();
    env.write_config(
        "",
        "[search]\nhighlight_close = \"\"\n[files]\nraster_patterns = []\n",
    );

    let warnings = load_local(env.path()).validate();
    assert_eq!(
        warnings,
        vec![
            ConfigWarning::EmptyHighlightMarker {
                setting: "highlight_close"
            },
            ConfigWarning::NoRasterPatterns,
        ]
    );
}

#[test]
fn test_effective_settings_round_trip_through_file() {
    let env = TestEnv::new();
    env.write_config("", "[search]\nword_padding = 7\n");
    let config = load_local(env.path());

    let dumped = env.write_config("copy", &config.settings_to_toml());
    let reloaded = Config::load_from_files(&[dumped]).unwrap();
    assert_eq!(reloaded.search, config.search);
    assert_eq!(reloaded.files, config.files);
}
