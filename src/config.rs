//! Project configuration management.
//!
//! Handles loading, parsing, and validating the `tour.toml` configuration file.
//! Every field has a default, so the file itself is optional.
//!
//! ```toml
//! [build]
//! examples = "examples"
//! manifest = "tour.conf"
//! site = "website"
//! docs = "docs/examples"
//! thumbnails = "assets"
//! data = "examples.js"
//! link_prefix = "docs/examples"
//! code_lang = "py"
//! warn_orphans = true
//! ```

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default values for serde deserialization
pub mod config_defaults {
    pub fn r#true() -> bool {
        true
    }

    pub mod build {
        use std::path::PathBuf;

        pub fn root() -> Option<PathBuf> {
            None
        }
        pub fn examples() -> PathBuf {
            "examples".into()
        }
        pub fn manifest() -> PathBuf {
            "tour.conf".into()
        }
        pub fn site() -> PathBuf {
            "website".into()
        }
        pub fn docs() -> PathBuf {
            "docs/examples".into()
        }
        pub fn thumbnails() -> String {
            "assets".into()
        }
        pub fn data() -> PathBuf {
            "examples.js".into()
        }
        pub fn link_prefix() -> String {
            "docs/examples".into()
        }
        pub fn code_lang() -> String {
            "py".into()
        }
    }
}

/// `[build]` section in tour.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root, all other paths are relative to it
    #[serde(default = "config_defaults::build::root", skip_serializing_if = "Option::is_none")]
    #[educe(Default = config_defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory holding the example files
    #[serde(default = "config_defaults::build::examples")]
    #[educe(Default = config_defaults::build::examples())]
    pub examples: PathBuf,

    /// Manifest file name inside `examples`
    #[serde(default = "config_defaults::build::manifest")]
    #[educe(Default = config_defaults::build::manifest())]
    pub manifest: PathBuf,

    /// Site directory the pages are written into
    #[serde(default = "config_defaults::build::site")]
    #[educe(Default = config_defaults::build::site())]
    pub site: PathBuf,

    /// Markdown output directory (relative to `site`)
    #[serde(default = "config_defaults::build::docs")]
    #[educe(Default = config_defaults::build::docs())]
    pub docs: PathBuf,

    /// Thumbnail directory (relative to `docs`), e.g.: "assets"
    #[serde(default = "config_defaults::build::thumbnails")]
    #[educe(Default = config_defaults::build::thumbnails())]
    pub thumbnails: String,

    /// Page list data file (relative to `site`)
    #[serde(default = "config_defaults::build::data")]
    #[educe(Default = config_defaults::build::data())]
    pub data: PathBuf,

    /// Site path the example pages are served under
    #[serde(default = "config_defaults::build::link_prefix")]
    #[educe(Default = config_defaults::build::link_prefix())]
    pub link_prefix: String,

    /// Language tag of the code blocks, e.g.: "py", "rust"
    #[serde(default = "config_defaults::build::code_lang")]
    #[educe(Default = config_defaults::build::code_lang())]
    pub code_lang: String,

    /// Warn about example files the manifest doesn't list
    #[serde(default = "config_defaults::r#true")]
    #[educe(Default = true)]
    pub warn_orphans: bool,
}

/// Root configuration structure representing tour.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Manifest file path
    pub fn manifest_path(&self) -> PathBuf {
        self.build.examples.join(&self.build.manifest)
    }

    /// Markdown output directory
    pub fn docs_dir(&self) -> PathBuf {
        self.build.site.join(&self.build.docs)
    }

    /// Directory checked for `{slug}.png` thumbnails
    pub fn thumbnail_dir(&self) -> PathBuf {
        self.docs_dir().join(&self.build.thumbnails)
    }

    /// Page list data file path
    pub fn data_path(&self) -> PathBuf {
        self.build.site.join(&self.build.data)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.examples, cli.examples.as_ref());
        Self::update_option(&mut self.build.site, cli.site.as_ref());

        let mut root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        match &cli.command {
            Commands::Init { name: Some(name) } => root = root.join(name),
            Commands::Build { code_lang } => {
                Self::update_option(&mut self.build.code_lang, code_lang.as_ref());
            }
            _ => {}
        }

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve `examples` and `site` against `root`.
    ///
    /// `~` is expanded; absolute paths are kept as they are.
    pub fn update_path_with_root(&mut self, root: &Path) {
        let root = expand_tilde(root);
        self.build.examples = root.join(expand_tilde(&self.build.examples));
        self.build.site = root.join(expand_tilde(&self.build.site));
        self.set_root(&root);
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        let lang = &self.build.code_lang;
        if lang.is_empty() || lang.contains(|c: char| c.is_whitespace() || c == '`') {
            bail!(ConfigError::Validation(format!(
                "[build.code_lang] `{lang}` must be a single word"
            )));
        }

        let prefix = &self.build.link_prefix;
        if prefix.starts_with('/') || prefix.ends_with('/') {
            bail!(ConfigError::Validation(
                "[build.link_prefix] must not start or end with `/`".into()
            ));
        }

        if self.build.thumbnails.is_empty() {
            bail!(ConfigError::Validation("[build.thumbnails] must not be empty".into()));
        }

        if !cli.is_init() && !self.build.examples.is_dir() {
            bail!(ConfigError::Validation(format!(
                "examples directory `{}` not found",
                self.build.examples.display()
            )));
        }

        Ok(())
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}
