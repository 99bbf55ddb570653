//! Game configuration loader.

use std::path::Path;

use bingo_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.max_goal_draws < GameConfig::CELL_COUNT as u32 {
            anyhow::bail!(
                "max_goal_draws must be at least {}, got {}",
                GameConfig::CELL_COUNT,
                config.max_goal_draws
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_config("blackout = true\n");
        let config = ConfigLoader::load(file.path()).unwrap();

        assert!(config.blackout);
        assert!(config.group_teams);
        assert_eq!(config.max_goal_draws, GameConfig::DEFAULT_MAX_GOAL_DRAWS);
    }

    #[test]
    fn draw_cap_below_board_size_is_rejected() {
        let file = write_config("max_goal_draws = 10\n");
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("max_goal_draws"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
