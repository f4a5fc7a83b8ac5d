//! Generator options and their layered loading.
//!
//! Options are assembled with figment from three layers, later layers
//! winning:
//!
//! 1. built-in defaults ([`GeneratorOptions::default`]);
//! 2. an optional TOML file;
//! 3. environment variables prefixed with `OBSERVABLE_GEN_`, where `__`
//!    separates nested keys (`OBSERVABLE_GEN_NAMES__OBSERVABLE_OBJECT`).

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::model::FeatureLevel;

mod names;

pub use names::{KnownNames, ReservedNames};

/// Options shared by every run of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Lowest feature level for which properties are generated.
    ///
    /// An unquoted environment value such as `7.10` reaches the options as
    /// the decimal number 7.1; quote it (`"7.10"`) to keep a two-digit minor.
    pub min_feature_level: FeatureLevel,
    /// Evaluate independent candidates on the rayon pool. Only honoured when
    /// the crate is built with the `parallel` feature.
    pub parallel: bool,
    /// Fully qualified names the rules look for.
    pub names: KnownNames,
    /// Property names and types that may not be generated.
    pub reserved: ReservedNames,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            min_feature_level: FeatureLevel::new(8, 0),
            parallel: false,
            names: KnownNames::default(),
            reserved: ReservedNames::default(),
        }
    }
}

impl GeneratorOptions {
    /// Prefix for environment variable overrides.
    pub const ENV_PREFIX: &'static str = "OBSERVABLE_GEN_";

    /// Builds the layered figment without extracting it.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
    }

    /// Loads options from defaults, `config_file` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingConfigFile`] when `config_file` does
    /// not exist and [`GeneratorError::Config`] when a layer holds values of
    /// the wrong shape.
    pub fn load(config_file: Option<&Path>) -> Result<Self, GeneratorError> {
        if let Some(path) = config_file
            && !path.is_file()
        {
            return Err(GeneratorError::MissingConfigFile {
                path: path.to_path_buf(),
            });
        }
        let options: Self = Self::figment(config_file)
            .extract()
            .map_err(GeneratorError::config)?;
        tracing::debug!(
            min_feature_level = %options.min_feature_level,
            parallel = options.parallel,
            "loaded generator options"
        );
        Ok(options)
    }
}
