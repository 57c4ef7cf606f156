//! Content domain: data-driven movement tuning loaded at startup.

mod data;
mod loader;
mod validation;

pub use data::{TUNING_SCHEMA_VERSION, TuningFile, TuningFormat};
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::movement::MovementTuning;

/// Where the movement tuning is read from.
#[derive(Resource, Debug, Clone)]
pub struct TuningSource {
    pub path: PathBuf,
}

impl Default for TuningSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/data/movement.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningSource>()
            .init_resource::<MovementTuning>()
            .add_systems(PreStartup, load_movement_tuning);
    }
}

/// Load and validate the tuning at `path`, replacing `tuning` only if both succeed.
/// Returns whether the tuning was replaced.
pub fn refresh_tuning(path: &Path, tuning: &mut MovementTuning) -> bool {
    let loaded = match load_tuning(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}", e);
            return false;
        }
    };

    let errors = validate_tuning(&loaded);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid tuning in {}: {}", path.display(), e);
        }
        return false;
    }

    *tuning = loaded;
    true
}

fn load_movement_tuning(source: Res<TuningSource>, mut tuning: ResMut<MovementTuning>) {
    if refresh_tuning(&source.path, &mut tuning) {
        info!(
            "Loaded movement tuning from {}: {:?}",
            source.path.display(),
            *tuning
        );
    } else {
        warn!(
            "Using default movement tuning (could not load {})",
            source.path.display()
        );
    }
}
