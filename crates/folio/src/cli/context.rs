//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};

use folio_config::Config;
use folio_leaves::{FilesDir, Item, RasterPatterns, scan_item};
use folio_search::SearchParams;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, for commands that must work with a broken config.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        Ok(Self {
            cwd: current_dir_or_failure()?,
            config: Config::default(),
        })
    }

    /// Opens an item directory using the configured tier names.
    pub fn files_dir(&self, item: &Path) -> FilesDir {
        let files = &self.config.files;
        FilesDir::new(self.cwd.join(item)).with_dirs(
            &files.original_dir,
            &files.fullsize_dir,
            &files.thumbnail_dir,
        )
    }

    /// Compiles the configured raster patterns.
    pub fn raster_patterns(&self) -> Result<RasterPatterns, ExitCode> {
        RasterPatterns::new(&self.config.files.raster_patterns).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Lists an item's files.
    pub fn scan(&self, store: &FilesDir) -> Result<Item, ExitCode> {
        scan_item(store).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Builds search params from config, with command-line overrides.
    pub fn search_params(&self, max_results: Option<usize>, timeout_ms: Option<u64>) -> SearchParams {
        let search = &self.config.search;
        let mut params = SearchParams::new()
            .with_word_padding(search.word_padding)
            .with_markers(&search.highlight_open, &search.highlight_close);
        params.max_results = match max_results {
            Some(0) => None,
            Some(n) => Some(n),
            None => search.result_cap(),
        };
        params.timeout = match timeout_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => search.timeout(),
        };
        params
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
