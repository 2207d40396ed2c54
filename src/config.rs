use anyhow::{Context, Result};
use std::path::PathBuf;

const DATA_DIR_VAR: &str = "POCKETBUDGET_DATA_DIR";
const EXPORT_DIR_VAR: &str = "POCKETBUDGET_EXPORT_DIR";
const CURRENCY_VAR: &str = "POCKETBUDGET_CURRENCY";
const LOG_VAR: &str = "POCKETBUDGET_LOG";

pub(crate) const DEFAULT_CURRENCY: &str = "CHF";
pub(crate) const DEFAULT_LOG_FILTER: &str = "pocketbudget=info";
pub(crate) const LOG_FILE_NAME: &str = "pocketbudget.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Holds the ledger store and the log file.
    pub(crate) data_dir: PathBuf,
    /// Where CSV and PNG exports are written unless a command names a directory.
    pub(crate) export_dir: PathBuf,
    /// Display label only; amounts are currency-agnostic.
    pub(crate) currency: String,
    pub(crate) log_filter: String,
}

/// Platform locations the config falls back to.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlatformDirs {
    pub(crate) data: Option<PathBuf>,
    pub(crate) download: Option<PathBuf>,
    pub(crate) home: Option<PathBuf>,
}

impl PlatformDirs {
    pub(crate) fn detect() -> Self {
        let data = directories::ProjectDirs::from("com", "pocketbudget", "pocketbudget")
            .map(|p| p.data_dir().to_path_buf());
        let user = directories::UserDirs::new();
        Self {
            data,
            download: user
                .as_ref()
                .and_then(|u| u.download_dir().map(|d| d.to_path_buf())),
            home: user.as_ref().map(|u| u.home_dir().to_path_buf()),
        }
    }
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let config = Self::resolve(|key| std::env::var(key).ok(), &PlatformDirs::detect())?;
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                config.data_dir.display()
            )
        })?;
        Ok(config)
    }

    /// Pure resolution from a variable lookup, so it can be tested without touching the
    /// process environment.
    pub(crate) fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        dirs: &PlatformDirs,
    ) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = match var(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(expand_home(&dir, dirs)),
            None => dirs
                .data
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory; set {DATA_DIR_VAR}"))?,
        };

        let export_dir = var(EXPORT_DIR_VAR)
            .map(|dir| PathBuf::from(expand_home(&dir, dirs)))
            .or_else(|| dirs.download.clone())
            .or_else(|| dirs.home.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            data_dir,
            export_dir,
            currency: var(CURRENCY_VAR)
                .map(|c| c.trim().to_string())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            log_filter: var(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// Expand a leading `~/` against the home directory.
pub(crate) fn expand_home(path: &str, dirs: &PlatformDirs) -> String {
    match (path.strip_prefix("~/"), &dirs.home) {
        (Some(rest), Some(home)) => home.join(rest).to_string_lossy().into_owned(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
