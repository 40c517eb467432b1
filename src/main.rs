use anyhow::Context;
use clap::Parser;
use trigon::utils::{logger, validation::Validate};
use trigon::{CliConfig, DemoRunner, JsonFileStore};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting trigon");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.resolve().context("failed to load configuration")?;
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e).context("invalid configuration");
    }

    let output_path = config.output_path().to_string();
    let store = JsonFileStore::new(&output_path);
    let runner = DemoRunner::new(config, store);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner
        .run(&mut out)
        .with_context(|| format!("triangle demo failed (output file: {})", output_path))?;

    tracing::info!("Triangle saved to {}", output_path);
    Ok(())
}
