pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "screening-offers")]
#[command(about = "Compose the ticket offers of a screening event")]
pub struct CliConfig {
    /// Screening event id
    #[arg(long)]
    pub event_id: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog JSON file, overrides `catalog.path`
    #[arg(long)]
    pub catalog: Option<String>,

    /// Write offers to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, help = "Pretty-print the offers JSON")]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and applies command line overrides.
    pub fn settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            settings.catalog.path = Some(catalog.clone());
        }
        if let Some(output) = &self.output {
            settings.output.path = Some(output.clone());
        }
        if self.pretty {
            settings.output.pretty = Some(true);
        }
        if self.json_logs {
            settings.logging.format = Some("json".to_string());
        }

        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("event_id", &self.event_id)
    }
}
