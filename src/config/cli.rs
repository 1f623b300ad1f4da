use crate::app::RecordKind;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bitpay-model")]
#[command(about = "Render the request body a BitPay record would be sent as")]
pub struct CliConfig {
    #[arg(long, value_enum)]
    pub kind: RecordKind,

    #[arg(long, default_value = "-", help = "Wire JSON document, '-' for stdin")]
    pub input: String,

    #[arg(long, help = "TOML file with output options and field defaults")]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print the payload")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.input != "-" {
            validation::validate_path("input", &self.input)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_arguments() {
        let config = CliConfig::try_parse_from([
            "bitpay-model",
            "--kind",
            "miner-fees",
            "--input",
            "fees.json",
            "--pretty",
        ])
        .unwrap();

        assert_eq!(config.kind, RecordKind::MinerFees);
        assert_eq!(config.input, "fees.json");
        assert!(config.pretty);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_kind_is_required() {
        assert!(CliConfig::try_parse_from(["bitpay-model"]).is_err());
    }
}
