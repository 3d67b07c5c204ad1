//! Configuration for the harvest tool.
//!
//! Settings come from an optional TOML file overlaid with
//! `PUBMED_HARVEST`-prefixed environment variables. The only settings
//! today are the NCBI contact values.
//!
//! # Configuration File Format
//!
//! ```toml
//! [contact]
//! email = "curator@example.org"
//! api_key = "your-ncbi-api-key"
//! ```
//!
//! # Environment Overrides
//!
//! Nested keys use a double-underscore separator:
//!
//! ```text
//! PUBMED_HARVEST_CONTACT__EMAIL=curator@example.org
//! PUBMED_HARVEST_CONTACT__API_KEY=your-ncbi-api-key
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::eutils::Contact;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// NCBI contact details sent with every E-utilities request
    #[serde(default)]
    pub contact: Contact,
}

/// Load configuration from a file, overlaying environment variables
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(
            config::Environment::with_prefix("PUBMED_HARVEST")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

/// Locate the default config file, if one exists
pub fn find_config_file() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("pubmed-harvest").join("config.toml"))
        .filter(|path| path.exists())
}
