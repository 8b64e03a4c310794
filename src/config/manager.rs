use super::{
    genetic::GeneticConfig,
    partition::PartitionConfig,
    solver::SolverConfig,
    traits::ConfigSection,
};
use crate::error::TrianglePathError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix of environment variables that override file settings,
/// e.g. `TRIPATH__GENETIC__SEED=7`.
pub const ENV_PREFIX: &str = "TRIPATH";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub solver: SolverConfig,
    pub genetic: GeneticConfig,
    pub partition: PartitionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), TrianglePathError> {
        self.solver.validate()?;
        self.genetic.validate()?;
        self.partition.validate()?;
        Ok(())
    }

    /// Layered load: defaults, then the optional TOML file, then
    /// `TRIPATH__<SECTION>__<FIELD>` environment variables.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, TrianglePathError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| TrianglePathError::Configuration(format!("Failed to load config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| TrianglePathError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!(
            "Loaded config: {} = {:?}, {} = {:?}, {} = {:?}",
            SolverConfig::section_name(),
            config.solver,
            GeneticConfig::section_name(),
            config.genetic,
            PartitionConfig::section_name(),
            config.partition
        );
        Ok(config)
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn with_config(config: AppConfig) -> Result<Self, TrianglePathError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TrianglePathError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TrianglePathError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| TrianglePathError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.write()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TrianglePathError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| TrianglePathError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| TrianglePathError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, TrianglePathError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| TrianglePathError::Configuration("Config lock poisoned".to_string()))
    }

    /// Applies `f` and keeps the result only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), TrianglePathError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write()?;
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, TrianglePathError> {
        self.config
            .write()
            .map_err(|_| TrianglePathError::Configuration("Config lock poisoned".to_string()))
    }
}
