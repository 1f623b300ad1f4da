use crate::core::hydration::{decode, hydrate_elements};
use crate::domain::currency::Currency;
use crate::domain::model::{Element, FieldDescriptor, FieldKind, FieldValue};
use crate::domain::ports::WireRecord;
use crate::utils::error::{ModelError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Payout request status as transmitted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    /// Initial status when the payout batch is created.
    New,
    /// Enough funds were available at the daily cutoff.
    Funded,
    /// The cryptocurrency transactions were broadcast.
    Processing,
    /// The transactions reached their target confirmations.
    Complete,
    /// Cancelled by the merchant while still `new`.
    Cancelled,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::New => "new",
            PayoutStatus::Funded => "funded",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Complete => "complete",
            PayoutStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutStatus {
    type Err = ModelError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "new" => Ok(PayoutStatus::New),
            "funded" => Ok(PayoutStatus::Funded),
            "processing" => Ok(PayoutStatus::Processing),
            "complete" => Ok(PayoutStatus::Complete),
            "cancelled" => Ok(PayoutStatus::Cancelled),
            other => Err(ModelError::unexpected(
                "payout status token",
                &Value::String(other.to_string()),
            )),
        }
    }
}

/// Cryptocurrency transaction details for an executed payout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayoutTransaction {
    txid: Option<String>,
    amount: Option<f64>,
    date: Option<String>,
}

type T = FieldDescriptor<PayoutTransaction>;

static TRANSACTION_FIELDS: &[T] = &[
    field!(T, text "txid" => txid),
    field!(T, number "amount" => amount),
    field!(T, text "date" => date),
];

impl PayoutTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    text_accessors!(txid / set_txid, date / set_date);
    value_accessors!(amount / set_amount: f64);
}

impl WireRecord for PayoutTransaction {
    const KIND: &'static str = "payout_transaction";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        TRANSACTION_FIELDS
    }
}

/// Exchange rates keyed by source currency, then target currency.
pub type ExchangeRates = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payout {
    token: Option<String>,
    amount: Option<f64>,
    currency: Option<Currency>,
    effective_date: Option<String>,
    ledger_currency: Option<Currency>,
    reference: Option<String>,
    notification_url: Option<String>,
    notification_email: Option<String>,
    redirect_url: Option<String>,
    account: Option<String>,
    email: Option<String>,
    recipient_id: Option<String>,
    shopper_id: Option<String>,
    label: Option<String>,
    support_phone: Option<String>,
    message: Option<String>,
    percent_fee: Option<f64>,
    fee: Option<f64>,
    deposit_total: Option<f64>,
    rate: Option<f64>,
    btc: Option<f64>,
    date_executed: Option<String>,
    id: Option<String>,
    status: Option<String>,
    request_date: Option<String>,
    exchange_rates: ExchangeRates,
    transactions: Vec<Element<PayoutTransaction>>,
}

type F = FieldDescriptor<Payout>;

static FIELDS: &[F] = &[
    field!(F, text "token" => token),
    field!(F, number "amount" => amount),
    field!(F, currency "currency" => currency),
    field!(F, text "effectiveDate" => effective_date),
    field!(F, currency "ledgerCurrency" => ledger_currency),
    field!(F, text "reference" => reference),
    field!(F, text "notificationUrl" => notification_url).on_wire("notificationURL"),
    field!(F, text "notificationEmail" => notification_email),
    field!(F, text "redirectUrl" => redirect_url),
    field!(F, text "account" => account),
    field!(F, text "email" => email),
    field!(F, text "recipientId" => recipient_id),
    field!(F, text "shopperId" => shopper_id),
    field!(F, text "label" => label),
    field!(F, text "supportPhone" => support_phone),
    field!(F, text "message" => message),
    field!(F, number "percentFee" => percent_fee),
    field!(F, number "fee" => fee),
    field!(F, number "depositTotal" => deposit_total),
    field!(F, number "rate" => rate),
    field!(F, number "btc" => btc),
    field!(F, text "dateExecuted" => date_executed),
    field!(F, text "id" => id),
    field!(F, text "status" => status),
    field!(F, text "requestDate" => request_date),
    F::new(
        "exchangeRates",
        "exchangeRates",
        FieldKind::Mapping,
        |p| FieldValue::mapping(&p.exchange_rates),
        |p, v| {
            p.exchange_rates = decode::mapping(v)?;
            Ok(())
        },
    ),
    F::collection(
        "transactions",
        |p| FieldValue::collection(&p.transactions),
        |p, v| {
            p.transactions = hydrate_elements(v)?;
            Ok(())
        },
    ),
];

impl Payout {
    /// A payout request for `amount` in `currency`, recorded on the
    /// `ledger_currency` ledger.
    pub fn new(amount: f64, currency: Currency, ledger_currency: Currency) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency),
            ledger_currency: Some(ledger_currency),
            ..Self::default()
        }
    }

    value_accessors!(
        amount / set_amount: f64,
        percent_fee / set_percent_fee: f64,
        fee / set_fee: f64,
        deposit_total / set_deposit_total: f64,
        rate / set_rate: f64,
        btc / set_btc: f64,
    );

    text_accessors!(
        token / set_token,
        effective_date / set_effective_date,
        reference / set_reference,
        notification_url / set_notification_url,
        notification_email / set_notification_email,
        redirect_url / set_redirect_url,
        account / set_account,
        email / set_email,
        recipient_id / set_recipient_id,
        shopper_id / set_shopper_id,
        label / set_label,
        support_phone / set_support_phone,
        message / set_message,
        date_executed / set_date_executed,
        id / set_id,
        status / set_status,
        request_date / set_request_date,
    );

    /// Rounds the amount to `precision` decimal places. An amount that cannot
    /// be scaled without overflowing is left as it is.
    pub fn format_amount(&mut self, precision: u32) {
        if let Some(amount) = self.amount {
            let exponent = i32::try_from(precision).unwrap_or(i32::MAX);
            let factor = 10f64.powi(exponent);
            let scaled = amount * factor;
            if !factor.is_finite() || !scaled.is_finite() {
                return;
            }
            self.amount = Some(scaled.round() / factor);
        }
    }

    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Sets the batch currency from its ISO code. Unknown codes are rejected
    /// and the current value is kept.
    pub fn set_currency(&mut self, code: &str) -> Result<()> {
        self.currency = Some(parse_currency("currency", code)?);
        Ok(())
    }

    pub fn set_currency_code(&mut self, currency: Currency) {
        self.currency = Some(currency);
    }

    pub fn ledger_currency(&self) -> Option<Currency> {
        self.ledger_currency
    }

    /// Sets the ledger the payout is recorded on. Unknown codes are rejected
    /// and the current value is kept.
    pub fn set_ledger_currency(&mut self, code: &str) -> Result<()> {
        self.ledger_currency = Some(parse_currency("ledgerCurrency", code)?);
        Ok(())
    }

    pub fn set_ledger_currency_code(&mut self, currency: Currency) {
        self.ledger_currency = Some(currency);
    }

    /// Typed view of the status token. The raw token is what goes on the wire.
    pub fn status_kind(&self) -> Option<PayoutStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn set_status_kind(&mut self, status: PayoutStatus) {
        self.status = Some(status.as_str().to_string());
    }

    pub fn effective_date_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.effective_date.as_deref())
    }

    pub fn date_executed_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.date_executed.as_deref())
    }

    pub fn request_date_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.request_date.as_deref())
    }

    pub fn exchange_rates(&self) -> &ExchangeRates {
        &self.exchange_rates
    }

    pub fn set_exchange_rates(&mut self, rates: ExchangeRates) {
        self.exchange_rates = rates;
    }

    pub fn transactions(&self) -> &[Element<PayoutTransaction>] {
        &self.transactions
    }

    pub fn set_transactions(&mut self, transactions: Vec<Element<PayoutTransaction>>) {
        self.transactions = transactions;
    }

    pub fn add_transaction(&mut self, transaction: PayoutTransaction) {
        self.transactions.push(Element::Record(transaction));
    }
}

impl WireRecord for Payout {
    const KIND: &'static str = "payout";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        FIELDS
    }
}

pub(crate) fn parse_currency(field: &str, code: &str) -> Result<Currency> {
    code.parse().inspect_err(|_| {
        tracing::warn!(field, code, "rejected unknown currency code");
    })
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
