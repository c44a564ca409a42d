//! Source scanning: walks a directory tree and pulls out every tagged
//! template body (``t`...` ``) from files with the configured extension.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use walkdir::WalkDir;

/// Matches ``t`<body>` `` where the body starts with a letter or digit and
/// contains no backtick or line break. The leading-character guard rejects
/// empty bodies and templates that start with a placeholder.
static TAGGED_TEMPLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"t`([\p{L}\p{N}][^`\r\n]*)`").unwrap());

/// Result of scanning a directory tree.
pub struct ScanResult {
    /// Deduplicated raw occurrences in first-seen order.
    pub occurrences: Vec<String>,
    pub files_scanned: usize,
}

pub struct Extractor {
    extension: String,
}

impl Extractor {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Scan all matching files under `root`.
    ///
    /// The walk is sorted by file name so extraction order (and therefore
    /// the order of newly appended dictionary keys) is deterministic. A
    /// missing root directory or an unreadable file aborts the scan.
    pub fn scan_dir(&self, root: &Path) -> Result<ScanResult> {
        if !root.is_dir() {
            bail!("Scan directory does not exist: {}", root.display());
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut occurrences: Vec<String> = Vec::new();
        let mut files_scanned = 0;

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let matches_extension = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if !matches_extension {
                continue;
            }

            files_scanned += 1;
            for occurrence in self.scan_file(entry.path())? {
                if seen.insert(occurrence.clone()) {
                    occurrences.push(occurrence);
                }
            }
        }

        Ok(ScanResult {
            occurrences,
            files_scanned,
        })
    }

    /// Extract every tagged template body from one file, in document order.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        Ok(TAGGED_TEMPLATE_REGEX
            .captures_iter(&content)
            .map(|caps| caps[1].to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_extracts_tagged_templates() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "page.tsx",
            "const a = t`Hello ${name}`;\nconst b = t`Save changes`;\n",
        );

        let result = Extractor::new("tsx").scan_dir(dir.path()).unwrap();
        assert_eq!(result.occurrences, ["Hello ${name}", "Save changes"]);
        assert_eq!(result.files_scanned, 1);
    }

    #[test]
    fn test_deduplicates_across_files() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a.tsx", "t`Sign out`\nt`Sign out`\n");
        write_file(dir.path(), "b.tsx", "t`Sign out`\nt`Sign in`\n");

        let result = Extractor::new("tsx").scan_dir(dir.path()).unwrap();
        assert_eq!(result.occurrences, ["Sign out", "Sign in"]);
    }

    #[test]
    fn test_walk_is_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "z/late.tsx", "t`from z`");
        write_file(dir.path(), "a/early.tsx", "t`from a`");

        let result = Extractor::new("tsx").scan_dir(dir.path()).unwrap();
        assert_eq!(result.occurrences, ["from a", "from z"]);
    }

    #[test]
    fn test_ignores_other_extensions() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "page.tsx", "t`kept`");
        write_file(dir.path(), "notes.md", "t`skipped`");
        write_file(dir.path(), "util.ts", "t`skipped too`");

        let result = Extractor::new("tsx").scan_dir(dir.path()).unwrap();
        assert_eq!(result.occurrences, ["kept"]);
        assert_eq!(result.files_scanned, 1);
    }

    #[test]
    fn test_body_must_start_with_letter_or_digit() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "page.tsx",
            "t``\nt`${only.placeholder}`\nt` leading space`\nt`7 days`\nt`Привет`\n",
        );

        let result = Extractor::new("tsx").scan_dir(dir.path()).unwrap();
        assert_eq!(result.occurrences, ["7 days", "Привет"]);
    }

    #[test]
    fn test_body_cannot_span_lines() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "page.tsx", "t`first\nsecond`\nt`ok`\n");

        let result = Extractor::new("tsx").scan_dir(dir.path()).unwrap();
        assert_eq!(result.occurrences, ["ok"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = Extractor::new("tsx").scan_dir(&missing);
        assert!(result.is_err());
    }

    #[test]
    fn test_placeholders_inside_body_are_kept_verbatim() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "page.tsx",
            "t`Hello ${user.name}, you have ${count} items`",
        );

        let result = Extractor::new("tsx").scan_dir(dir.path()).unwrap();
        assert_eq!(
            result.occurrences,
            ["Hello ${user.name}, you have ${count} items"]
        );
    }
}
