//! Solver settings, read from an optional TOML file.
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Command line flags are applied on top by the binary.
//!
//! ```toml
//! [search]
//! strategy = "queue"
//!
//! [render]
//! image = "maze.png"
//! cell_size = 64
//! cell_border = 1
//! show_solution = true
//! show_explored = false
//! ```

use std::{fs, path::Path, path::PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{frontier::Strategy, render::ImageOptions};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Where to write the image; no image is written when unset.
    pub image: Option<PathBuf>,
    #[serde(flatten)]
    pub options: ImageOptions,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, anyhow::Error> {
        let config: Self = toml::from_str(text).context("parsing config")?;
        config
            .render
            .options
            .validate()
            .context("invalid [render] settings")?;

        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;

        let config = Self::from_toml(&text).with_context(|| format!("in {}", path.display()))?;
        debug!("loaded config from {}: {:?}", path.display(), config);

        Ok(config)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.search.strategy, Strategy::Queue);
        assert_eq!(config.render.image, None);
        assert_eq!(config.render.options, ImageOptions::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [search]
            strategy = "stack"

            [render]
            image = "out/maze.png"
            cell_size = 16
            show_explored = true
            "#,
        )
        .unwrap();

        assert_eq!(config.search.strategy, Strategy::Stack);
        assert_eq!(config.render.image, Some(PathBuf::from("out/maze.png")));
        assert_eq!(config.render.options.cell_size, 16);
        assert_eq!(config.render.options.cell_border, 1);
        assert!(config.render.options.show_solution);
        assert!(config.render.options.show_explored);
    }

    #[test]
    fn test_strategy_aliases() {
        let config = Config::from_toml("[search]\nstrategy = \"dfs\"").unwrap();
        assert_eq!(config.search.strategy, Strategy::Stack);

        assert!(Config::from_toml("[search]\nstrategy = \"astar\"").is_err());
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        for value in ["0", "1025", "66100000"] {
            let err = Config::from_toml(&format!("[render]\ncell_size = {}", value)).unwrap_err();
            assert!(format!("{:#}", err).contains("cell_size"));
        }

        let config = Config::from_toml("[render]\ncell_size = 1024").unwrap();
        assert_eq!(config.render.options.cell_size, 1024);
    }
}
