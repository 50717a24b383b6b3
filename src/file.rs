// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::ExportFormat;
use crate::config::consts::DEFAULT_EXPORT_FILE;
use crate::csv::to_export_string;
use crate::record::Record;

/// Write the filtered table to `out` (file path, or directory hint that
/// gets the default filename). Returns the final path written to.
pub fn write_export(
    out: &Path,
    records: &[Record],
    format: ExportFormat,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = resolve_out_path(out, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(records, format.delim());
    fs::write(&path, contents)?;
    Ok(path)
}

/// Directory hints (trailing separator, or an existing directory) get
/// `jobs.<ext>` appended; explicit file paths are used as given.
pub fn resolve_out_path(
    out: &Path,
    format: ExportFormat,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = PathBuf::from(normalize_separators(out.to_string_lossy().as_ref()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(join!(DEFAULT_EXPORT_FILE, ".", format.ext())))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
