//! Tour building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_tour()          manifest → parse every example (all or nothing)
//!     │
//!     ├── find_orphans()       example files the manifest doesn't list
//!     │
//!     ├── render_page() ×N     docs/{slug}.md + thumbnail check
//!     │
//!     ├── render_index()       docs/index.md
//!     ├── render_toc()         docs/all.md
//!     ├── render_tag_index()   docs/examples-tags.md
//!     │
//!     └── render_site_data()   examples.js
//! ```
//!
//! Every example is parsed before the first file is written, so a malformed
//! or missing example leaves the output untouched.

use crate::{
    config::SiteConfig,
    error::TourError,
    example::{Example, load_example},
    generator::{
        INDEX_PAGE, RenderContext, TAGS_PAGE, TOC_PAGE, data::render_site_data,
        gallery::render_index, page::render_page, tags::KeywordIndex, tags::render_tag_index,
        toc::render_toc,
    },
    log,
    manifest::Manifest,
    utils::fs::{list_files, thumbnail_exists, write_file},
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// What a run produced and what it warned about.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Files written, in write order
    pub written: Vec<PathBuf>,
    /// Slugs of examples without a thumbnail image
    pub missing_thumbnails: Vec<String>,
    /// Example files the manifest doesn't list
    pub orphans: Vec<String>,
}

/// Parse every example the manifest lists, in manifest order.
pub fn load_tour(config: &SiteConfig) -> Result<(Manifest, Vec<Example>), TourError> {
    let manifest = Manifest::load(&config.manifest_path())?;
    let examples = manifest
        .entries()
        .iter()
        .map(|filename| load_example(&config.build.examples, filename))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((manifest, examples))
}

/// Build every page of the tour.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let (manifest, examples) = load_tour(config)?;
    if manifest.is_empty() {
        log!("warn"; "{} lists no examples", config.manifest_path().display());
    } else {
        log!("build"; "loaded {} examples", manifest.len());
    }

    let mut report = BuildReport {
        orphans: find_orphans(config, &manifest),
        ..BuildReport::default()
    };

    let ctx = RenderContext::from_config(config);
    let docs = config.docs_dir();
    let thumbnails = config.thumbnail_dir();

    for example in &examples {
        let path = docs.join(format!("{}.md", example.slug()));
        write_file(&path, &render_page(example, &ctx))?;
        log!("page"; "{} -> {}.md", example.name(), example.slug());
        report.written.push(path);

        if !check_thumbnail(&thumbnails, example) {
            report.missing_thumbnails.push(example.slug().to_owned());
        }
    }

    let index = KeywordIndex::from_examples(&examples);
    if index.is_empty() && !examples.is_empty() {
        log!("warn"; "no example carries keywords, {TAGS_PAGE}.md will be empty");
    }
    let overview = [
        (INDEX_PAGE, render_index(&examples, &ctx)),
        (TOC_PAGE, render_toc(&examples, &ctx)),
        (TAGS_PAGE, render_tag_index(&index, &ctx)),
    ];
    for (name, text) in overview {
        let path = docs.join(format!("{name}.md"));
        write_file(&path, &text)?;
        report.written.push(path);
    }

    let data_path = config.data_path();
    let data = render_site_data(&examples, &data_path)
        .with_context(|| format!("Failed to serialize page list for {}", data_path.display()))?;
    write_file(&data_path, &data)?;
    report.written.push(data_path);

    log!(
        "build";
        "wrote {} pages, {} tags to {}",
        examples.len(),
        index.len(),
        docs.display()
    );
    Ok(report)
}

/// Parse every example and report warnings without writing.
pub fn check_site(config: &SiteConfig) -> Result<BuildReport> {
    let (manifest, examples) = load_tour(config)?;

    let mut report = BuildReport {
        orphans: find_orphans(config, &manifest),
        ..BuildReport::default()
    };

    let thumbnails = config.thumbnail_dir();
    for example in &examples {
        if !check_thumbnail(&thumbnails, example) {
            report.missing_thumbnails.push(example.slug().to_owned());
        }
    }

    let warnings = report.missing_thumbnails.len() + report.orphans.len();
    log!("check"; "{} examples ok, {} warnings", examples.len(), warnings);
    Ok(report)
}

/// Warn if the example has no thumbnail. Returns whether it has one.
fn check_thumbnail(dir: &Path, example: &Example) -> bool {
    let exists = thumbnail_exists(dir, example.slug());
    if !exists {
        log!("warn"; "{}", missing_thumbnail_warning(example.slug()));
    }
    exists
}

fn missing_thumbnail_warning(slug: &str) -> String {
    format!("no thumbnail found for example \"{slug}\"")
}

/// Files next to the manifest that it doesn't list.
fn find_orphans(config: &SiteConfig, manifest: &Manifest) -> Vec<String> {
    if !config.build.warn_orphans {
        return Vec::new();
    }

    let manifest_name = config.build.manifest.to_string_lossy();
    let orphans: Vec<String> = list_files(&config.build.examples)
        .into_iter()
        .filter(|name| *name != manifest_name && !manifest.contains(name))
        .collect();

    for name in &orphans {
        log!("warn"; "`{}` is not listed in {}", name, manifest_name);
    }
    orphans
}
