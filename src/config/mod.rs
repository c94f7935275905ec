// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application settings
//!
//! Settings are layered, highest priority first:
//!
//! 1. Environment variables with the `RECIPE_CATALOG__` prefix
//!    (e.g. `RECIPE_CATALOG__INGREDIENT_COLUMNS=4`)
//! 2. A TOML file: the path given on the command line, or
//!    `recipe-catalog.toml` in the working directory if present
//! 3. Built-in defaults
//!
//! # Example
//!
//! ```toml
//! ingredient_columns = 3
//! confirm_destructive = true
//! extra_ingredients = ["Saffron", "Sumac"]
//! log_level = "debug"
//! ```

mod error;

pub use error::ConfigError;

use ::config::{Config, Environment, File, FileFormat};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override settings
pub const ENV_PREFIX: &str = "RECIPE_CATALOG";

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "recipe-catalog";

/// User-tunable behaviour of the catalog front end
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Columns used when laying out the ingredient picker
    pub ingredient_columns: usize,

    /// Ask before deleting one or all recipes
    pub confirm_destructive: bool,

    /// Ingredients appended after the built-in list at startup
    pub extra_ingredients: Vec<String>,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ingredient_columns: 3,
            confirm_destructive: true,
            extra_ingredients: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from an optional file plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if `path` is given but missing,
    /// `ConfigError::Load` if a source can't be parsed and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => {
                let path = expand_path(path)?;
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                debug!("Loading settings from {}", path.display());
                builder.add_source(File::from(path).format(FileFormat::Toml))
            }
            None => builder.add_source(
                File::with_name(DEFAULT_SETTINGS_FILE)
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ingredient_columns == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ingredient_columns",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Expands a leading `~` in a user-supplied path
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.display().to_string()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

#[cfg(test)]
mod tests;
