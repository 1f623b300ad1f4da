use crate::config::toml_config::DefaultsConfig;
use crate::domain::invoice::Invoice;
use crate::domain::miner_fees::MinerFees;
use crate::domain::payout::Payout;
use crate::domain::ports::WireRecord;
use crate::domain::shopper::Shopper;
use crate::domain::universal_codes::UniversalCodes;
use crate::utils::error::{ModelError, Result};
use serde_json::{Map, Value};

/// Record types a payload can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RecordKind {
    Payout,
    Invoice,
    MinerFees,
    Shopper,
    UniversalCodes,
}

/// Decodes `input` as a wire document of `kind`, fills unset fields from
/// `defaults` and renders the request body the record would be sent as.
pub fn render_payload(
    kind: RecordKind,
    input: &str,
    defaults: &DefaultsConfig,
    pretty: bool,
) -> Result<String> {
    let map = match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => map,
        other => return Err(ModelError::unexpected("object", &other)),
    };
    tracing::debug!(?kind, keys = map.len(), "decoding wire document");

    let projected = match kind {
        RecordKind::Payout => {
            let mut payout = Payout::from_wire(&map)?;
            apply_payout_defaults(&mut payout, defaults)?;
            payout.to_wire()
        }
        RecordKind::Invoice => {
            let mut invoice = Invoice::from_wire(&map)?;
            apply_invoice_defaults(&mut invoice, defaults)?;
            invoice.to_wire()
        }
        RecordKind::MinerFees => reproject::<MinerFees>(&map)?,
        RecordKind::Shopper => reproject::<Shopper>(&map)?,
        RecordKind::UniversalCodes => reproject::<UniversalCodes>(&map)?,
    };

    let dropped = map.len().saturating_sub(projected.len());
    tracing::info!(?kind, fields = projected.len(), dropped, "payload rendered");

    let body = Value::Object(projected);
    Ok(if pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    })
}

fn reproject<R: WireRecord>(map: &Map<String, Value>) -> Result<Map<String, Value>> {
    Ok(R::from_wire(map)?.to_wire())
}

pub fn apply_payout_defaults(payout: &mut Payout, defaults: &DefaultsConfig) -> Result<()> {
    if let (None, Some(code)) = (payout.currency(), &defaults.currency) {
        payout.set_currency(code)?;
    }
    if let (None, Some(code)) = (payout.ledger_currency(), &defaults.ledger_currency) {
        payout.set_ledger_currency(code)?;
    }
    if let (None, Some(url)) = (payout.notification_url(), &defaults.notification_url) {
        payout.set_notification_url(url.as_str());
    }
    if let (None, Some(email)) = (payout.notification_email(), &defaults.notification_email) {
        payout.set_notification_email(email.as_str());
    }
    if let (None, Some(url)) = (payout.redirect_url(), &defaults.redirect_url) {
        payout.set_redirect_url(url.as_str());
    }
    Ok(())
}

pub fn apply_invoice_defaults(invoice: &mut Invoice, defaults: &DefaultsConfig) -> Result<()> {
    if let (None, Some(code)) = (invoice.currency(), &defaults.currency) {
        invoice.set_currency(code)?;
    }
    if let (None, Some(url)) = (invoice.notification_url(), &defaults.notification_url) {
        invoice.set_notification_url(url.as_str());
    }
    if let (None, Some(email)) = (invoice.notification_email(), &defaults.notification_email) {
        invoice.set_notification_email(email.as_str());
    }
    if let (None, Some(url)) = (invoice.redirect_url(), &defaults.redirect_url) {
        invoice.set_redirect_url(url.as_str());
    }
    Ok(())
}
