//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_assets::Bucket;
use shop_db::Db;
use shop_observability::LogLevel;
use shop_service::ShopService;

use crate::config::ShopConfig;
use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (ShopConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, ShopConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory that relative store paths are resolved against: the config
    /// file's directory, or the working directory without one.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| self.resolve_path(&p.to_string_lossy()))
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the configured table snapshot and bucket.
    pub fn open_stores(&self) -> Result<Stores> {
        let base = self.base_dir();
        let db_path = base.join(&self.config.store.path);
        let bucket_root = base.join(&self.config.assets.root);

        self.output
            .debug(&format!("Opening store: {}", db_path.display()));
        let db = Db::open(&db_path)
            .with_context(|| format!("Failed to open store: {}", db_path.display()))?;

        self.output
            .debug(&format!("Opening bucket: {}", bucket_root.display()));
        let bucket = Bucket::open(&bucket_root)
            .with_context(|| format!("Failed to open bucket: {}", bucket_root.display()))?;

        Ok(Stores { db, bucket })
    }
}

/// Opened backing stores.
pub struct Stores {
    pub db: Db,
    pub bucket: Bucket,
}

impl Stores {
    /// A service over these stores.
    pub fn service(&self, ctx: &Context) -> Result<ShopService<'_>> {
        let mut config = ctx.config.service_config()?;
        if ctx.output.is_verbose() {
            config = config.with_log_level(LogLevel::Debug);
        }
        Ok(ShopService::new(&self.db, &self.db, &self.bucket, config))
    }
}
