//! Source selection and file I/O.

use crate::error::{Error, Result};
use glob::MatchOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "*.sh";

/// Split a comma separated list of file names, dropping empty items.
pub fn parse_exclusions(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// List the regular files in `dir` whose name matches `pattern`, minus the
/// `excluded` base names, in sorted order. The order is also the merge order.
///
/// Hidden files only match a pattern that starts with a literal dot.
///
/// # Errors
///
/// [`Error::Pattern`] for an invalid pattern, [`Error::NoFiles`] when nothing
/// is left to process.
pub fn select_sources(dir: &Path, pattern: &str, excluded: &[String]) -> Result<Vec<PathBuf>> {
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let matches = glob::glob_with(&full_pattern, options).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files: Vec<PathBuf> = matches
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| !is_excluded(p, excluded))
        .collect();
    // Sort for deterministic output
    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(Error::NoFiles {
            pattern: pattern.to_string(),
            dir: dir.to_path_buf(),
        });
    }
    Ok(files)
}

fn is_excluded(path: &Path, excluded: &[String]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| excluded.iter().any(|e| e == name))
}

/// Read a whole source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the rendered document to `path`.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn exclusions_from_list() {
        assert_eq!(parse_exclusions(Some("cfg.sh,main.sh")), ["cfg.sh", "main.sh"]);
        assert_eq!(parse_exclusions(Some("a.sh,,")), ["a.sh"]);
        assert!(parse_exclusions(Some("")).is_empty());
        assert!(parse_exclusions(None).is_empty());
    }

    #[test]
    fn selects_sorted_matching_files() {
        let dir = TempDir::new().unwrap();
        for name in ["b.sh", "a.sh", "c.txt", ".hidden.sh"] {
            touch(&dir, name);
        }
        fs::create_dir(dir.path().join("sub.sh")).unwrap();

        let files = select_sources(dir.path(), DEFAULT_PATTERN, &[]).unwrap();
        assert_eq!(names(&files), ["a.sh", "b.sh"]);
    }

    #[test]
    fn excluded_names_are_skipped() {
        let dir = TempDir::new().unwrap();
        for name in ["cfg.sh", "lib.sh", "main.sh"] {
            touch(&dir, name);
        }

        let excluded = parse_exclusions(Some("cfg.sh,main.sh"));
        let files = select_sources(dir.path(), DEFAULT_PATTERN, &excluded).unwrap();
        assert_eq!(names(&files), ["lib.sh"]);
    }

    #[test]
    fn custom_pattern() {
        let dir = TempDir::new().unwrap();
        for name in ["str_trim.sh", "main.sh", "x.bash"] {
            touch(&dir, name);
        }

        let files = select_sources(dir.path(), "*_*.sh", &[]).unwrap();
        assert_eq!(names(&files), ["str_trim.sh"]);
    }

    #[test]
    fn no_files_is_an_error() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "notes.txt");

        let err = select_sources(dir.path(), DEFAULT_PATTERN, &[]).unwrap_err();
        assert!(matches!(err, Error::NoFiles { ref pattern, .. } if pattern == "*.sh"));
        assert!(err.to_string().starts_with("No \"*.sh\" files found in "));
    }

    #[test]
    fn everything_excluded_is_an_error() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "only.sh");

        let err = select_sources(dir.path(), DEFAULT_PATTERN, &["only.sh".to_string()]).unwrap_err();
        assert!(matches!(err, Error::NoFiles { .. }));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = select_sources(dir.path(), "[*.sh", &[]).unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }

    #[test]
    fn read_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.sh");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("missing.sh"));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/api.md");
        assert!(matches!(write_document(&path, "x"), Err(Error::Write { .. })));
    }
}
