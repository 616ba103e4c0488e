//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet placement and size.
    pub planet: PlanetConfig,
    /// Cell grid settings.
    pub grid: GridConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Planet placement in world space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Surface radius in world units.
    pub radius: f64,
    /// Center position in world space.
    pub center: [f64; 3],
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            center: [0.0, 0.0, 0.0],
        }
    }
}

/// Nearest-cell lookup selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GridLookup {
    /// Pick by cell count.
    #[default]
    Auto,
    /// Always scan every cell.
    LinearScan,
    /// Always use the latitude-band index.
    LatitudeBands,
}

impl std::str::FromStr for GridLookup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "auto" => Ok(Self::Auto),
            "linear" | "linearscan" => Ok(Self::LinearScan),
            "bands" | "latitudebands" => Ok(Self::LatitudeBands),
            other => Err(format!(
                "unknown lookup `{other}` (expected auto, linear or bands)"
            )),
        }
    }
}

/// Cell grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells on the sphere.
    pub cell_count: u32,
    /// Nearest-cell lookup strategy.
    pub lookup: GridLookup,
    /// Seed for cell population.
    pub seed: u64,
    /// Relative weights of the marker kinds placed on cells.
    pub marker_weights: Vec<f64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_count: 500,
            lookup: GridLookup::Auto,
            seed: 0,
            marker_weights: vec![0.7, 0.2, 0.1],
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.planet.radius;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "planet.radius",
                reason: format!("must be positive and finite, got {radius}"),
            });
        }
        if self.planet.center.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "planet.center",
                reason: format!("must be finite, got {:?}", self.planet.center),
            });
        }
        if let Some(w) = self
            .grid
            .marker_weights
            .iter()
            .find(|w| !w.is_finite() || **w < 0.0)
        {
            return Err(ConfigError::Invalid {
                field: "grid.marker_weights",
                reason: format!("weights must be finite and non-negative, got {w}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("radius: 5.0"));
        assert!(ron_str.contains("cell_count: 500"));
        assert!(ron_str.contains("lookup: Auto"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.grid.lookup = GridLookup::LatitudeBands;
        config.planet.center = [1.0, -2.0, 3.5];
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(planet: (radius: 12.0))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.planet.radius, 12.0);
        assert_eq!(config.planet.center, [0.0, 0.0, 0.0]);
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.grid.cell_count = 4096;
        config.grid.seed = 99;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.planet.radius = 8.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.planet.radius), Some(8.0));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let mut config = Config::default();
        config.planet.radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "planet.radius",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let mut config = Config::default();
        config.grid.marker_weights = vec![1.0, -0.5];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "grid.marker_weights",
                ..
            })
        ));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_lookup_from_str() {
        assert_eq!("auto".parse(), Ok(GridLookup::Auto));
        assert_eq!("Linear-Scan".parse(), Ok(GridLookup::LinearScan));
        assert_eq!("bands".parse(), Ok(GridLookup::LatitudeBands));
        assert!("kd-tree".parse::<GridLookup>().is_err());
    }
}
