//! Loading configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::codec::WordCodec;
use crate::errors::{AnnotationError, AnnotationResult};
use crate::layers::Language;

/// Settings shared by sentence and corpus loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Language of words whose encoding has no language segment.
    pub default_language: Language,
    /// File name suffixes that mark sentence files.
    pub sentence_suffixes: Vec<String>,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            sentence_suffixes: [".train", ".test", ".dev", ".txt"]
                .iter()
                .map(|suffix| suffix.to_string())
                .collect(),
        }
    }
}

impl AnnotationConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> AnnotationResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| AnnotationError::config(path, e))?;
        toml::from_str(&content).map_err(|e| AnnotationError::config(path, e))
    }

    /// Word codec using the configured default language.
    pub fn codec(&self) -> WordCodec {
        WordCodec::new(self.default_language)
    }

    /// Whether the file name ends with one of the sentence suffixes.
    pub fn is_sentence_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| {
                self.sentence_suffixes
                    .iter()
                    .any(|suffix| name.ends_with(suffix.as_str()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnnotationConfig::load(&dir.path().join("annotation.toml")).unwrap();
        assert_eq!(config, AnnotationConfig::default());
        assert_eq!(config.codec().default_language, Language::Turkish);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotation.toml");
        fs::write(&path, "default_language = \"english\"\n").unwrap();
        let config = AnnotationConfig::load(&path).unwrap();
        assert_eq!(config.default_language, Language::English);
        assert_eq!(config.sentence_suffixes.len(), 4);
    }

    #[test]
    fn unparsable_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotation.toml");
        fs::write(&path, "default_language = \"klingon\"\n").unwrap();
        let error = AnnotationConfig::load(&path).unwrap_err();
        assert!(matches!(error, AnnotationError::Config { .. }));
    }

    #[test]
    fn sentence_files_by_suffix() {
        let config = AnnotationConfig::default();
        assert!(config.is_sentence_file(Path::new("corpus/0001.dev")));
        assert!(config.is_sentence_file(Path::new("0001.train")));
        assert!(!config.is_sentence_file(Path::new("0001.json")));
        assert!(!config.is_sentence_file(Path::new("corpus")));
    }
}
