use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use glob::Pattern;

/// Lists the file entries of `dir`, sorted by name.
///
/// The framework directory is flat, so there is no recursion: subdirectories
/// are skipped and unreadable entries are logged and skipped.
pub fn scan_framework_dir(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Could not read framework directory {:?}", dir))?;

    let mut names = Vec::new();
    for entry_result in entries {
        match entry_result {
            Ok(entry) => {
                if entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                    names.push(entry.file_name().to_string_lossy().into_owned());
                }
            }
            Err(e) => {
                tracing::warn!("Could not process entry in {:?}: {:?}", dir, e);
            }
        }
    }

    names.sort();
    Ok(names)
}

/// Keeps only names matching at least one pattern; no patterns keeps
/// everything.
pub fn filter_names(
    names: Vec<String>,
    patterns: &[String],
) -> Result<Vec<String>> {
    if patterns.is_empty() {
        return Ok(names);
    }

    let mut compiled = Vec::with_capacity(patterns.len());
    for p in patterns {
        let pattern =
            Pattern::new(p).map_err(|e| anyhow!("Invalid --only pattern {}: {:?}", p, e))?;
        compiled.push(pattern);
    }

    Ok(names
        .into_iter()
        .filter(|n| compiled.iter().any(|p| p.matches(n)))
        .collect())
}

/// Reads a bulk replacement list: one path per line, blank lines and `#`
/// comments skipped.
pub fn read_paths_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read paths file {:?}", path))?;

    let mut paths = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        paths.push(line.to_string());
    }
    Ok(paths)
}
