//! Writing rendered documents to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::renderer::DEFAULT_NAME;

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

fn separator_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s/\\]+").expect("valid separator pattern"))
}

/// File-name slug for a display name: whitespace runs become `_`, then
/// lowercase. Path separators are treated like whitespace.
pub fn slugify(name: &str) -> String {
    separator_run().replace_all(name, "_").to_lowercase()
}

/// Download name for a profile's exported page, e.g. `ada_lovelace_webpage.html`.
pub fn export_file_name(name: &str) -> String {
    let name = if name.is_empty() { DEFAULT_NAME } else { name };
    format!("{}_webpage.html", slugify(name))
}

/// Write an exported document into `dir`, creating it if needed.
pub fn write_export(dir: &Path, name: &str, html: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(name));

    fs::create_dir_all(dir).map_err(|e| ExportError::Write {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;
    fs::write(&path, html).map_err(|e| ExportError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(bytes = html.len(), "Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn slugifies_whitespace_runs() {
        assert_eq!(slugify("Ada  Lovelace"), "ada_lovelace");
        assert_eq!(slugify("Grace\tB. Hopper"), "grace_b._hopper");
    }

    #[test]
    fn slug_has_no_path_separators() {
        assert_eq!(slugify("../etc/passwd"), ".._etc_passwd");
    }

    #[test]
    fn empty_name_uses_default() {
        assert_eq!(export_file_name(""), "anonymous_webpage.html");
        assert_eq!(export_file_name("Ada"), "ada_webpage.html");
    }

    #[test]
    fn writes_into_new_directory() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let path = write_export(&out, "Ada Lovelace", "<html></html>").unwrap();

        assert_eq!(path, out.join("ada_lovelace_webpage.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }
}
