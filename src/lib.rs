pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{render_payload, RecordKind};
pub use config::toml_config::TomlConfig;
pub use crate::core::{hydration::hydrate, projection::project};
pub use domain::currency::Currency;
pub use domain::invoice::Invoice;
pub use domain::miner_fees::{MinerFees, MinerFeesItem};
pub use domain::model::{Element, FieldDescriptor, FieldKind, FieldValue};
pub use domain::payout::{ExchangeRates, Payout, PayoutStatus, PayoutTransaction};
pub use domain::ports::WireRecord;
pub use domain::shopper::Shopper;
pub use domain::universal_codes::UniversalCodes;
pub use utils::error::{ModelError, Result};
