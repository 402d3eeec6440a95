use crate::config::toml_config::FormConfig;
use crate::core::Gender;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "genderize-form")]
#[command(about = "Validate a name, predict its gender and keep your own answer")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "genderize-form.toml")]
    pub config: String,

    /// Override the prediction endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the saved answers file
    #[arg(long)]
    pub store_path: Option<String>,

    /// genderize.io API key
    #[arg(long, env = "GENDERIZE_API_KEY")]
    pub api_key: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the saved answer and the predicted gender for a name
    Submit { name: String },
    /// Save a gender for a name
    Save {
        name: String,
        #[arg(long, value_enum)]
        gender: GenderArg,
    },
    /// Forget the saved gender for a name
    Clear { name: String },
    /// Interactive form on stdin
    Session,
}

impl CliConfig {
    /// Loads the TOML file and applies command line overrides on top.
    pub fn resolve(&self) -> Result<FormConfig> {
        let mut config = FormConfig::load_or_default(&self.config)?;

        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(path) = &self.store_path {
            config.store.path = path.clone();
        }
        if let Some(key) = &self.api_key {
            config.api.api_key = Some(key.clone());
        }

        Ok(config)
    }
}
