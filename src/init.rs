//! Project initialization module.
//!
//! Creates an examples directory with a starter manifest and example, plus a
//! default `tour.toml`.

use crate::{config::SiteConfig, log, utils::fs::write_file};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

const STARTER_EXAMPLE: &str = "hello_world.py";

const STARTER_MANIFEST: &str = "\
# One example filename per line, in display order.
# Lines starting with `#` are ignored.
hello_world.py
";

const STARTER_SOURCE: &str = "\
# Hello World
# A first example. Everything above the separator is the page header.
# basics
# ---
print('Hello, world!')
";

/// Create a new project at the configured root
pub fn new_project(config: &SiteConfig, config_name: &Path) -> Result<()> {
    let root = config.get_root();
    let config_path = root.join(config_name);
    if config_path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            config_path.display()
        );
    }

    let examples = &config.build.examples;
    if examples.join(&config.build.manifest).exists() {
        bail!(
            "Manifest already exists in `{}`. Try `tourgen init <NAME>` instead.",
            examples.display()
        );
    }

    fs::create_dir_all(config.thumbnail_dir())
        .with_context(|| format!("Failed to create {}", config.thumbnail_dir().display()))?;
    write_file(&config.manifest_path(), STARTER_MANIFEST)?;
    write_file(&examples.join(STARTER_EXAMPLE), STARTER_SOURCE)?;
    init_default_config(&config_path)?;

    log!("init"; "created project in {}", root.display());
    Ok(())
}

/// Write default configuration file
fn init_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    write_file(path, &content)?;
    Ok(())
}
