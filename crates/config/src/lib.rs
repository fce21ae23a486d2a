//! Manages application configuration by loading settings from standard locations.
//!
//! This crate provides a unified configuration object (`Config`) that aggregates
//! settings from files and environment variables, making them accessible
//! globally via a lazily initialized static reference (`CONFIG`).
//!
//! Layers are applied in order, later ones overriding earlier ones:
//! 1. built-in defaults,
//! 2. `rdfnorm.toml` in the user's configuration directory,
//! 3. the file named by `RDFNORM_CONFIG`, if set,
//! 4. `RDFNORM_`-prefixed environment variables, with `__` separating nested
//!    keys (e.g. `RDFNORM_VOCAB__NAMESPACE`).

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use etcetera::BaseStrategy;
use figment::providers::{Env, Format, Toml};
use figment::{Figment, Metadata, Provider};
use serde::{Deserialize, Serialize};

/// The default configuration values
const DEFAULT_TOML_CONFIG: &str = include_str!("./rdfnorm.default.toml");
/// The namespace recognized when nothing else is configured.
const DEFAULT_NAMESPACE: &str = "http://www.mozilla.org/2004/em-rdf#";
/// Names an additional configuration file to layer in.
const CONFIG_ENV: &str = "RDFNORM_CONFIG";
const ENV_PREFIX: &str = "RDFNORM_";

//================================================================================================
// Statics
//================================================================================================

/// Provides a lazily instantiated static reference to the application `Config`.
///
/// This static variable ensures that configuration is parsed only once from
/// canonical locations and then made immutably available throughout the
/// application's lifecycle.
pub static CONFIG: LazyLock<Config> = LazyLock::new(load_config);

//================================================================================================
// Types
//================================================================================================

/// Settings for property recognition.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabConfig {
    /// Predicates under this namespace are rendered as properties.
    pub namespace: String,
}

/// Represents the application's primary configuration structure.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Property recognition settings.
    #[serde(default)]
    pub vocab: VocabConfig,
    /// Default value substitutions, keyed by local property name.
    #[serde(default)]
    pub rewrite: BTreeMap<String, String>,
}

//================================================================================================
// Impls
//================================================================================================

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.into(),
        }
    }
}

impl Config {
    /// Constructs a `Figment` instance for configuration loading.
    ///
    /// This method builds a configuration provider by layering default settings,
    /// user-specific configuration files, and environment variables.
    pub fn figment() -> Figment {
        let mut fig = Figment::from(Config::default()).merge(Toml::string(DEFAULT_TOML_CONFIG));

        if let Ok(c) = etcetera::choose_base_strategy() {
            let config = c.config_dir().join("rdfnorm.toml");
            fig = fig.admerge(Toml::file(config));
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            fig = fig.admerge(Toml::file(path));
        }

        fig.admerge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

impl Provider for Config {
    fn metadata(&self) -> figment::Metadata {
        Metadata::named("rdfnorm defaults")
    }

    fn data(
        &self,
    ) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        figment::providers::Serialized::defaults(self).data()
    }
}

//================================================================================================
// Functions
//================================================================================================

/// Loads the application configuration using the default `Figment` provider.
///
/// This function is used to initialize the `CONFIG` static variable.
fn load_config() -> Config {
    Config::figment().extract().unwrap_or_else(|e| {
        tracing::error!(error = %e, "problem loading config from default sources, falling back to defaults");
        Config::default()
    })
}
