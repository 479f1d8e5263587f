//! Source tree scanning.

use std::fs;
use std::path::{Path, PathBuf};

/// A markdown file found under the source directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceDoc {
    /// Path relative to the source directory.
    pub relative: PathBuf,
    /// Full path to the file.
    pub path: PathBuf,
}

impl SourceDoc {
    /// File stem, used as the guide slug.
    pub fn stem(&self) -> String {
        self.relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Output path relative to the output root: same tree, `.html` extension.
    pub fn output_relative(&self) -> PathBuf {
        self.relative.with_extension("html")
    }
}

/// Collect every `*.md` file below `source_dir`, sorted by relative path.
///
/// Hidden files and directories are skipped. Returns an empty Vec if the
/// directory doesn't exist.
pub fn scan(source_dir: &Path) -> Vec<SourceDoc> {
    let mut docs = Vec::new();
    scan_directory(source_dir, Path::new(""), &mut docs);
    docs.sort();
    docs
}

fn scan_directory(dir_path: &Path, relative: &Path, docs: &mut Vec<SourceDoc>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let child = relative.join(&name);
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            scan_directory(&path, &child, docs);
        } else if path.extension().is_some_and(|e| e == "md") {
            docs.push(SourceDoc {
                relative: child,
                path,
            });
        }
    }
}
