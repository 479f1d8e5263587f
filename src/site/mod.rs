//! Guide site building.
//!
//! Walks the source tree, converts every guide into a full page under the
//! output root and writes the `index.json` manifest. A guide that cannot
//! be read or written is logged and reported; it never stops the others.

pub mod config;
pub mod error;
pub mod manifest;
pub mod policy;
pub mod scanner;
pub mod template;

pub use config::{CliSettings, ConfigError, SiteConfig};
pub use error::SiteError;
pub use manifest::{GuideEntry, GuideIndex};
pub use policy::{DisabledPolicy, GuideStatus};
pub use scanner::SourceDoc;

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::Local;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::metadata::DocumentMeta;
use crate::{Options, render_document};

/// A guide that could not be built.
#[derive(Debug)]
pub struct Failure {
    /// Source file.
    pub path: PathBuf,
    pub error: SiteError,
}

/// Outcome of a site build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output files written, relative to the output root.
    pub converted: Vec<PathBuf>,
    pub failed: Vec<Failure>,
    /// Manifest location, when one was written.
    pub index_path: Option<PathBuf>,
}

impl BuildReport {
    /// Whether there were guides and none of them could be built.
    pub fn all_failed(&self) -> bool {
        self.converted.is_empty() && !self.failed.is_empty()
    }
}

/// Build the whole site described by `config`.
///
/// # Errors
///
/// Returns `SiteError::SourceMissing` if the source directory doesn't
/// exist, or an I/O or JSON error if the manifest cannot be written.
/// Failures of individual guides are collected in the report instead.
pub fn build(config: &SiteConfig) -> Result<BuildReport, SiteError> {
    if !config.source_dir.is_dir() {
        return Err(SiteError::SourceMissing(config.source_dir.clone()));
    }

    let docs = scanner::scan(&config.source_dir);
    info!(
        source = %config.source_dir.display(),
        output = %config.output_dir.display(),
        guides = docs.len(),
        "Building guides"
    );

    let policy = DisabledPolicy::new(config.disabled.iter().cloned());
    let options = Options {
        heading_ids: config.heading_ids,
        ..Options::default()
    };

    let results: Vec<_> = docs
        .par_iter()
        .map(|doc| build_guide(doc, config, &policy, &options))
        .collect();

    let mut report = BuildReport::default();
    let mut entries = Vec::with_capacity(results.len());
    for (doc, result) in docs.iter().zip(results) {
        match result {
            Ok(entry) => {
                report.converted.push(doc.output_relative());
                entries.push(entry);
            }
            Err(error) => {
                warn!(path = %doc.path.display(), %error, "Failed to convert guide");
                report.failed.push(Failure {
                    path: doc.path.clone(),
                    error,
                });
            }
        }
    }

    if !entries.is_empty() {
        let index_path = config.index_path();
        GuideIndex::new(entries, Local::now()).write(&index_path)?;
        info!(path = %index_path.display(), "Generated guide index");
        report.index_path = Some(index_path);
    }

    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "Build complete"
    );
    Ok(report)
}

/// Convert one guide, write its page and return its manifest entry.
fn build_guide(
    doc: &SourceDoc,
    config: &SiteConfig,
    policy: &DisabledPolicy,
    options: &Options,
) -> Result<GuideEntry, SiteError> {
    let source = fs::read_to_string(&doc.path).map_err(SiteError::io(&doc.path))?;
    let modified = fs::metadata(&doc.path)
        .and_then(|m| m.modified())
        .map_err(SiteError::io(&doc.path))?;

    let stem = doc.stem();
    let status = policy.status(&stem);
    let (html, meta) = match policy.placeholder(&stem) {
        Some(placeholder) => (
            placeholder.to_owned(),
            DocumentMeta::from_source(&stem, &source),
        ),
        None => {
            let rendered = render_document(&stem, &source, options);
            (rendered.html, rendered.meta)
        }
    };

    let output_relative = doc.output_relative();
    let page = template::render_page(&template::PageData {
        title: &meta.title,
        site_name: &config.site_name,
        output_relative: &output_relative,
        content: &html,
    });

    let output_path = config.output_dir.join(&output_relative);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }
    fs::write(&output_path, page).map_err(SiteError::io(&output_path))?;
    debug!(
        source = %doc.path.display(),
        output = %output_path.display(),
        ?status,
        "Converted guide"
    );

    Ok(GuideEntry {
        filename: output_relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: url_path(&output_relative),
        last_modified: manifest::format_system_time(modified),
        disabled: status == GuideStatus::ComingSoon,
        status,
        title: meta.title,
        description: meta.description,
        slug: meta.slug,
    })
}

/// `/`-joined path regardless of platform separator.
fn url_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
