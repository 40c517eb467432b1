use crate::config::toml_config::DemoConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "trigon")]
#[command(about = "Triangle metrics, rotation and JSON round-trip demo")]
pub struct CliConfig {
    /// Where the rotated triangle is written before being read back
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML file overriding the sample triangle and rotations
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with command-line overrides. A missing
    /// `--config` falls back to the built-in sample.
    pub fn resolve(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                DemoConfig::from_file(path)?
            }
            None => DemoConfig::default(),
        };

        if let Some(output) = &self.output {
            tracing::debug!("Output path overridden to {}", output);
            config.output.path = output.clone();
        }

        Ok(config)
    }
}
