//! Data definitions for movement content files.
//!
//! These structs mirror assets/data/movement.ron (or a JSON file of the same
//! shape) and are used for deserialization.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Schema version this build understands.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    pub movement: MovementTuning,
}

impl TuningFile {
    pub fn new(movement: MovementTuning) -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            movement,
        }
    }
}

/// Serialization format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningFormat {
    Ron,
    Json,
}

impl TuningFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "ron" => Some(TuningFormat::Ron),
            "json" => Some(TuningFormat::Json),
            _ => None,
        }
    }
}
