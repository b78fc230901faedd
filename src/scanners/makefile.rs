use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::errors::ScanError;
use crate::core::MakefileRecord;

static TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([^:\s]+):").unwrap());
static VARIABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(\w+)\s*=").unwrap());
static INCLUDE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^include\s+(.+)$").unwrap());

/// Is this filename one the Makefile scanner should handle?
pub fn is_makefile(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower == "makefile" || lower == "gnumakefile" || lower.ends_with(".mk")
}

/// Single-purpose regex extract of targets, variable assignments, and
/// `include` lines. No expansion, no rule semantics.
pub fn scan_makefile(path: &Path) -> Result<MakefileRecord, ScanError> {
    let bytes = fs::read(path).map_err(|e| ScanError::unreadable(path, e))?;
    let metadata = fs::metadata(path).map_err(|e| ScanError::unreadable(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let last_modified: DateTime<Utc> = metadata
        .modified()
        .map(DateTime::from)
        .unwrap_or_else(|_| Utc::now());

    Ok(MakefileRecord {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        size: metadata.len(),
        last_modified,
        targets: capture_all(&TARGET, &content),
        variables: capture_all(&VARIABLE, &content),
        includes: capture_all(&INCLUDE_LINE, &content),
    })
}

fn capture_all(pattern: &Regex, content: &str) -> Vec<String> {
    pattern
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}
