use crate::{
    algorithm::{ExclusionPolicy, WeightingPolicy},
    model::RouletteError,
};
use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// prefix for environment variables overriding file values, e.g.
/// `ROULETTE_MIN_MINUTES=20`.
pub const ENV_PREFIX: &str = "ROULETTE";

/// game rules for a roulette spin
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RouletteConfig {
    /// candidates closer than this many minutes are never drawn
    pub min_minutes: f64,
    pub weighting_policy: WeightingPolicy,
    pub exclusion_policy: ExclusionPolicy,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            min_minutes: 0.0,
            weighting_policy: WeightingPolicy::default(),
            exclusion_policy: ExclusionPolicy::default(),
        }
    }
}

impl RouletteConfig {
    /// reads a .toml or .json configuration file, then applies any
    /// `ROULETTE_`-prefixed environment overrides.
    pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<RouletteConfig, RouletteError> {
        RouletteConfig::load(Some(filepath.as_ref()), None)
    }

    /// defaults with any `ROULETTE_`-prefixed environment overrides applied.
    pub fn from_env() -> Result<RouletteConfig, RouletteError> {
        RouletteConfig::load(None, None)
    }

    /// builds the configuration from an optional file plus the environment.
    /// `env_vars` stands in for the process environment when given.
    fn load(
        filepath: Option<&Path>,
        env_vars: Option<Map<String, String>>,
    ) -> Result<RouletteConfig, RouletteError> {
        let mut builder = Config::builder();
        let origin = match filepath {
            None => String::from("environment"),
            Some(path) => {
                let f = path.display().to_string();
                let format = match path.extension().and_then(|e| e.to_str()) {
                    Some("toml") => FileFormat::Toml,
                    Some("json") => FileFormat::Json,
                    _ => {
                        return Err(RouletteError::ConfigurationError(format!(
                            "unsupported file type: {f}"
                        )))
                    }
                };
                builder = builder.add_source(File::new(&f, format));
                f
            }
        };
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env_vars),
            )
            .build()
            .map_err(|e| RouletteError::ConfigReadError {
                msg: format!("failed reading '{origin}'"),
                source: e,
            })?;
        let conf = config
            .try_deserialize::<RouletteConfig>()
            .map_err(|e| RouletteError::ConfigReadError {
                msg: format!("failed decoding '{origin}'"),
                source: e,
            })?;
        conf.validate()?;
        log::info!(
            "loaded roulette configuration from {origin}: min_minutes={}, weighting '{}', exclusion '{}'",
            conf.min_minutes,
            conf.weighting_policy,
            conf.exclusion_policy
        );
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), RouletteError> {
        if self.min_minutes.is_nan() {
            return Err(RouletteError::ConfigurationError(String::from(
                "min_minutes must be a number",
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for RouletteConfig {
    type Error = RouletteError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        RouletteConfig::from_file(f)
    }
}
