use crate::domain::currency::Currency;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
}

/// Values filled into a payout or invoice when the input leaves them unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub currency: Option<String>,
    pub ledger_currency: Option<String>,
    pub notification_url: Option<String>,
    pub notification_email: Option<String>,
    pub redirect_url: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModelError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ModelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NOTIFY_URL})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let defaults = &self.defaults;

        if let Some(code) = &defaults.currency {
            validation::validate_currency_code("defaults.currency", code)?;
        }
        if let Some(code) = &defaults.ledger_currency {
            validation::validate_currency_code("defaults.ledger_currency", code)?;
        }
        if let Some(url) = &defaults.notification_url {
            validation::validate_url("defaults.notification_url", url)?;
        }
        if let Some(url) = &defaults.redirect_url {
            validation::validate_url("defaults.redirect_url", url)?;
        }
        if let Some(email) = &defaults.notification_email {
            validation::validate_email("defaults.notification_email", email)?;
        }

        Ok(())
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(false)
    }

    pub fn default_currency(&self) -> Option<Currency> {
        self.defaults.currency.as_deref().and_then(|c| c.parse().ok())
    }

    pub fn default_ledger_currency(&self) -> Option<Currency> {
        self.defaults
            .ledger_currency
            .as_deref()
            .and_then(|c| c.parse().ok())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[output]
pretty = true

[defaults]
currency = "USD"
ledger_currency = "EUR"
notification_url = "https://merchant.example.com/ipn"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.pretty());
        assert_eq!(config.default_currency(), Some(Currency::Usd));
        assert_eq!(config.default_ledger_currency(), Some(Currency::Eur));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(!config.pretty());
        assert!(config.default_currency().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BITPAY_MODEL_TEST_IPN", "https://ipn.example.com/hook");

        let toml_content = r#"
[defaults]
notification_url = "${BITPAY_MODEL_TEST_IPN}"
redirect_url = "${BITPAY_MODEL_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.defaults.notification_url.as_deref(),
            Some("https://ipn.example.com/hook")
        );
        assert_eq!(
            config.defaults.redirect_url.as_deref(),
            Some("${BITPAY_MODEL_TEST_UNSET_VAR}")
        );

        std::env::remove_var("BITPAY_MODEL_TEST_IPN");
    }

    #[test]
    fn test_config_validation() {
        let bad_currency = TomlConfig::from_toml_str("[defaults]\ncurrency = \"usd\"\n").unwrap();
        assert!(bad_currency.validate().is_err());

        let bad_url =
            TomlConfig::from_toml_str("[defaults]\nnotification_url = \"ftp://x.example\"\n")
                .unwrap();
        assert!(bad_url.validate().is_err());

        let bad_email =
            TomlConfig::from_toml_str("[defaults]\nnotification_email = \"nobody\"\n").unwrap();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[defaults\ncurrency = 1").unwrap_err();
        assert!(matches!(err, ModelError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[defaults]
currency = "GBP"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_currency(), Some(Currency::Gbp));
    }
}
