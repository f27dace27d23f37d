pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::Locale;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

/// Command line options. Flags given here override the TOML file.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "rxcheck")]
#[command(about = "Web front end for checking drug-drug interactions via RxNav")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub bind_address: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// RxNav REST base URL
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Timeout for each upstream request
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Language of the pages and messages (en, pt-br)
    #[arg(long)]
    pub locale: Option<Locale>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file (or defaults) and applies the flags on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(bind_address) = &self.bind_address {
            config.server.bind_address = bind_address.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(api_base_url) = &self.api_base_url {
            config.rxnav.base_url = api_base_url.clone();
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.rxnav.timeout_seconds = timeout_seconds;
        }
        if let Some(locale) = self.locale {
            config.ui.locale = locale;
        }
        if let Some(title) = &self.title {
            config.ui.title = Some(title.clone());
        }

        Ok(config)
    }
}
