//! Sentence file discovery.

use layered_annotation::{AnnotationConfig, AnnotationError, AnnotationResult};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Pattern used when none is given: every file name containing a dot.
pub const DEFAULT_PATTERN: &str = "*.*";

/// Translates a glob-style file name pattern (`*` and `?`) into an anchored regex.
fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');
    Regex::new(&source)
}

/// Files directly inside `dir` whose names match `pattern`, sorted by name.
///
/// Hidden files and subdirectories are never returned. Without a pattern,
/// [`DEFAULT_PATTERN`] is used and only names ending in one of the
/// configured sentence suffixes are kept.
pub fn sentence_files(
    dir: &Path,
    pattern: Option<&str>,
    config: &AnnotationConfig,
) -> AnnotationResult<Vec<PathBuf>> {
    let matcher = glob_to_regex(pattern.unwrap_or(DEFAULT_PATTERN))
        .map_err(|e| AnnotationError::load(dir, e))?;

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| AnnotationError::load(dir, e))? {
        let entry = entry.map_err(|e| AnnotationError::load(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !matcher.is_match(&name) {
            continue;
        }
        if pattern.is_none() && !config.is_sentence_file(&path) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}
