use std::{
    fs, io,
    path::{Path, PathBuf},
};

use dirs::preference_dir;
use ron::{extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{gameboard::algorithms::GeneratorKind, solvers::SolverKind};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON write error: {0}")]
    RonWrite(#[from] ron::Error),
    #[error("cells_per_side must be at least 1")]
    InvalidSize,
}

fn default_cells_per_side() -> usize {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_cells_per_side")]
    pub cells_per_side: usize,
    #[serde(default)]
    pub generator: GeneratorKind,
    #[serde(default)]
    pub solver: SolverKind,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            cells_per_side: default_cells_per_side(),
            generator: GeneratorKind::default(),
            solver: SolverKind::default(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridmaze")
            .join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = Self::options().from_str(text)?;
        settings.validate()
    }

    /// Reads the settings file. A missing file is not an error, the defaults are used.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings at {:?}, using defaults", path);
                Self::from_ron(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = Self::options().to_string_pretty(self, PrettyConfig::default())?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Overwrites the file at `path` with the commented default settings.
    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }

    /// Rejects values no grid can be built from.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if self.cells_per_side == 0 {
            return Err(SettingsError::InvalidSize);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gridmaze-test-{}-{}", std::process::id(), name))
            .join("settings.ron")
    }

    #[test]
    fn bundled_defaults_parse() {
        assert_eq!(Settings::from_ron(DEFAULT_SETTINGS).unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let settings = Settings::from_ron("(solver: Bfs, seed: 7)").unwrap();
        assert_eq!(settings.solver, SolverKind::Bfs);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.cells_per_side, 20);
        assert_eq!(settings.generator, GeneratorKind::DepthFirstSearch);
    }

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(
            Settings::from_ron("(cells_per_side: 0)"),
            Err(SettingsError::InvalidSize)
        ));
        assert!(matches!(
            Settings::from_ron("(cells_per_side: \"big\")"),
            Err(SettingsError::Ron(_))
        ));
    }

    #[test]
    fn unknown_kinds_fail_to_parse() {
        assert!(matches!(
            Settings::from_ron("(generator: Prim)"),
            Err(SettingsError::Ron(_))
        ));
        assert!(matches!(
            Settings::from_ron("(solver: \"dijkstra\")"),
            Err(SettingsError::Ron(_))
        ));
    }

    #[test]
    fn validate_checks_overlaid_values() {
        let settings = Settings {
            cells_per_side: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidSize)));
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_path("missing");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("save");
        let settings = Settings {
            cells_per_side: 3,
            generator: GeneratorKind::Kruskal,
            solver: SolverKind::Bfs,
            seed: Some(99),
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);

        Settings::reset_config(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
