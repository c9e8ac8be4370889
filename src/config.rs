//! Editor configuration.
//!
//! Defaults match the shipped web IDE; a host can override them by handing
//! over a JSON object at session start.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid editor configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Language id the tokenizer and completion provider register under.
    pub language_id: String,
    /// Theme id the host applies for the style tags.
    pub theme: String,
    /// Fixed file name of the export-on-save artifact.
    pub download_file_name: String,
    /// Marker prepended to each line by the comment command.
    pub comment_prefix: String,
    /// Style class of the whole-line error decoration.
    pub error_class_name: String,
    /// Style class of the error margin glyph.
    pub error_glyph_class_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            language_id: "ram".to_owned(),
            theme: "ram-theme".to_owned(),
            download_file_name: "project.ram".to_owned(),
            comment_prefix: "#".to_owned(),
            error_class_name: "error-line-highlight".to_owned(),
            error_glyph_class_name: "error-glyph".to_owned(),
        }
    }
}

impl EditorConfig {
    /// Parse a host-supplied JSON override. Missing fields take defaults;
    /// unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
