use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::state::Cell;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of tiles along each side of the square grid
    pub tile_count: u32,
    /// Cell the single-segment snake spawns on
    pub spawn: Cell,
    /// Speed at the start of every run; ticks per second
    pub base_speed: u32,
    /// Score awarded per food eaten
    pub food_reward: u32,
    /// Speed goes up each time the score crosses a multiple of this
    pub speed_threshold: u32,
    /// Speed added per threshold crossed
    pub speed_increment: u32,
    /// Fixed RNG seed for food placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            spawn: Cell::new(10, 10),
            base_speed: 7,
            food_reward: 10,
            speed_threshold: 50,
            speed_increment: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(tile_count: u32) -> Self {
        let mut config = Self::default();
        config.set_tile_count(tile_count);
        config
    }

    /// Resize the grid. A spawn that no longer fits moves to the centre.
    pub fn set_tile_count(&mut self, tile_count: u32) {
        self.tile_count = tile_count;
        if !self.contains(self.spawn) {
            let centre = (tile_count / 2) as i32;
            self.spawn = Cell::new(centre, centre);
        }
    }

    /// Same defaults with a fixed food seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse a (possibly partial) TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_count == 0 {
            return Err(ConfigError::Invalid("tile_count must be positive".into()));
        }
        if !self.contains(self.spawn) {
            return Err(ConfigError::Invalid(format!(
                "spawn ({}, {}) lies outside a {}x{} grid",
                self.spawn.x, self.spawn.y, self.tile_count, self.tile_count
            )));
        }
        if self.tile_count < 2 {
            return Err(ConfigError::Invalid(
                "grid needs room for both the snake and the food".into(),
            ));
        }
        if self.base_speed == 0 {
            return Err(ConfigError::Invalid("base_speed must be positive".into()));
        }
        if self.food_reward == 0 {
            return Err(ConfigError::Invalid("food_reward must be positive".into()));
        }
        if self.speed_threshold == 0 {
            return Err(ConfigError::Invalid(
                "speed_threshold must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Check if a cell is within `[0, tile_count)` on both axes
    pub fn contains(&self, cell: Cell) -> bool {
        let max = self.tile_count as i64;
        let (x, y) = (cell.x as i64, cell.y as i64);
        (0..max).contains(&x) && (0..max).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tile_count, 20);
        assert_eq!(config.spawn, Cell::new(10, 10));
        assert_eq!(config.base_speed, 7);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.speed_threshold, 50);
        assert_eq!(config.speed_increment, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15);
        assert_eq!(config.tile_count, 15);
        assert_eq!(config.base_speed, 7);
        assert_eq!(config.spawn, Cell::new(10, 10));
    }

    #[test]
    fn test_small_grid_recenters_spawn() {
        let config = GameConfig::new(8);
        assert_eq!(config.spawn, Cell::new(4, 4));
        assert!(config.validate().is_ok());

        // Odd sizes round down to the middle tile
        assert_eq!(GameConfig::new(5).spawn, Cell::new(2, 2));
    }

    #[test]
    fn test_set_tile_count_keeps_fitting_spawn() {
        let mut config = GameConfig {
            spawn: Cell::new(3, 4),
            ..Default::default()
        };
        config.set_tile_count(6);
        assert_eq!(config.spawn, Cell::new(3, 4));

        config.set_tile_count(4);
        assert_eq!(config.spawn, Cell::new(2, 2));
    }

    #[test]
    fn test_bounds() {
        let config = GameConfig::default();
        assert!(config.contains(Cell::new(0, 0)));
        assert!(config.contains(Cell::new(19, 19)));
        assert!(!config.contains(Cell::new(-1, 0)));
        assert!(!config.contains(Cell::new(20, 0)));
        assert!(!config.contains(Cell::new(0, 20)));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("tile_count = 30\nbase_speed = 9\n").unwrap();
        assert_eq!(config.tile_count, 30);
        assert_eq!(config.base_speed, 9);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_toml_spawn_table() {
        let config = GameConfig::from_toml_str("seed = 42\n[spawn]\nx = 3\ny = 4\n").unwrap();
        assert_eq!(config.spawn, Cell::new(3, 4));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_rejects_spawn_outside_grid() {
        let err = GameConfig::from_toml_str("tile_count = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_values() {
        for doc in ["base_speed = 0", "food_reward = 0", "speed_threshold = 0", "tile_count = 0"] {
            let err = GameConfig::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{doc} accepted");
        }
    }

    #[test]
    fn test_rejects_single_tile_grid() {
        let config = GameConfig {
            tile_count: 1,
            spawn: Cell::new(0, 0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_toml_str("tile_count = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tile_count = 25").unwrap();
        writeln!(file, "speed_threshold = 30").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.tile_count, 25);
        assert_eq!(config.speed_threshold, 30);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
