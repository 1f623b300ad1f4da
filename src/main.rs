use anyhow::Context;
use bitpay_model::utils::{logger, validation::Validate};
use bitpay_model::{render_payload, CliConfig, TomlConfig};
use clap::Parser;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let settings = match &config.config {
        Some(path) => {
            let settings = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config from {}", path))?;
            settings.validate()?;
            settings
        }
        None => TomlConfig::default(),
    };

    let input = if config.input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&config.input)
            .with_context(|| format!("failed to read {}", config.input))?
    };

    let pretty = config.pretty || settings.pretty();
    match render_payload(config.kind, &input, &settings.defaults, pretty) {
        Ok(body) => {
            println!("{}", body);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to render {:?} payload: {}", config.kind, e);
            Err(e.into())
        }
    }
}
