//! Loader for movement tuning files.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{TUNING_SCHEMA_VERSION, TuningFile, TuningFormat};
use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from an in-memory document. `file` is only used in error messages.
pub fn parse_tuning(
    file: &str,
    contents: &str,
    format: TuningFormat,
) -> Result<MovementTuning, ContentLoadError> {
    let parsed: TuningFile = match format {
        TuningFormat::Ron => ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?,
        TuningFormat::Json => serde_json::from_str(contents).map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?,
    };

    if parsed.schema_version != TUNING_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                parsed.schema_version, TUNING_SCHEMA_VERSION
            ),
        });
    }

    Ok(parsed.movement)
}

/// Load movement tuning from a `.ron` or `.json` file.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let file_name = path.display().to_string();

    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(TuningFormat::from_extension)
        .ok_or_else(|| ContentLoadError {
            file: file_name.clone(),
            message: "Unknown file extension (expected .ron or .json)".to_string(),
        })?;

    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&file_name, &contents, format)
}
