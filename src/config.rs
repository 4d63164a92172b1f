use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_CURRENCY: &str = "NOK";
pub(crate) const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub log_filter: String,
    pub currency: String,
}

impl Config {
    /// Load `.env` if present, then read `BUDGETFLOW_*` from the environment.
    pub(crate) fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = default_data_dir()?;
        Ok(Self::from_lookup(|name| std::env::var(name).ok(), &data_dir))
    }

    /// Build a config from a variable lookup, defaulting paths into `data_dir`.
    pub(crate) fn from_lookup<F>(lookup: F, data_dir: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let db_path = non_empty("BUDGETFLOW_DB")
            .map(|p| PathBuf::from(expand_home(&p)))
            .unwrap_or_else(|| data_dir.join("budgetflow.db"));
        let log_path = non_empty("BUDGETFLOW_LOG_FILE")
            .map(|p| PathBuf::from(expand_home(&p)))
            .unwrap_or_else(|| data_dir.join("budgetflow.log"));
        let log_filter =
            non_empty("BUDGETFLOW_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let currency = non_empty("BUDGETFLOW_CURRENCY")
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Self {
            db_path,
            log_path,
            log_filter,
            currency,
        }
    }

    /// Create the parent directories of the database and log files.
    pub(crate) fn ensure_dirs(&self) -> Result<()> {
        for path in [&self.db_path, &self.log_path] {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create data directory: {}", dir.display())
                })?;
            }
        }
        Ok(())
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgetflow", "budgetflow")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub(crate) fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
