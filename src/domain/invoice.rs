use crate::core::hydration::{decode, hydrate_value};
use crate::domain::currency::Currency;
use crate::domain::miner_fees::MinerFees;
use crate::domain::model::{FieldDescriptor, FieldKind, FieldValue};
use crate::domain::payout::{parse_currency, ExchangeRates};
use crate::domain::ports::WireRecord;
use crate::domain::shopper::Shopper;
use crate::domain::universal_codes::UniversalCodes;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invoice {
    currency: Option<Currency>,
    guid: Option<String>,
    token: Option<String>,
    price: Option<f64>,
    pos_data: Option<String>,
    notification_url: Option<String>,
    transaction_speed: Option<String>,
    full_notifications: Option<bool>,
    notification_email: Option<String>,
    redirect_url: Option<String>,
    close_url: Option<String>,
    order_id: Option<String>,
    item_desc: Option<String>,
    item_code: Option<String>,
    physical: Option<bool>,
    payment_currencies: Vec<String>,
    acceptance_window: Option<i64>,
    auto_redirect: Option<bool>,
    id: Option<String>,
    url: Option<String>,
    status: Option<String>,
    invoice_time: Option<i64>,
    expiration_time: Option<i64>,
    current_time: Option<i64>,
    low_fee_detected: Option<bool>,
    amount_paid: Option<f64>,
    target_confirmations: Option<i64>,
    shopper: Shopper,
    universal_codes: UniversalCodes,
    miner_fees: MinerFees,
    exchange_rates: ExchangeRates,
}

type F = FieldDescriptor<Invoice>;

static FIELDS: &[F] = &[
    field!(F, currency "currency" => currency),
    field!(F, text "guid" => guid),
    field!(F, text "token" => token),
    field!(F, number "price" => price),
    field!(F, text "posData" => pos_data),
    field!(F, text "notificationUrl" => notification_url).on_wire("notificationURL"),
    field!(F, text "transactionSpeed" => transaction_speed),
    field!(F, flag "fullNotifications" => full_notifications),
    field!(F, text "notificationEmail" => notification_email),
    field!(F, text "redirectUrl" => redirect_url).on_wire("redirectURL"),
    field!(F, text "closeUrl" => close_url).on_wire("closeURL"),
    field!(F, text "orderId" => order_id),
    field!(F, text "itemDesc" => item_desc),
    field!(F, text "itemCode" => item_code),
    field!(F, flag "physical" => physical),
    F::collection(
        "paymentCurrencies",
        |i| FieldValue::strings(&i.payment_currencies),
        |i, v| {
            i.payment_currencies = decode::strings(v)?;
            Ok(())
        },
    ),
    field!(F, integer "acceptanceWindow" => acceptance_window),
    field!(F, flag "autoRedirect" => auto_redirect),
    field!(F, text "id" => id),
    field!(F, text "url" => url),
    field!(F, text "status" => status),
    field!(F, integer "invoiceTime" => invoice_time),
    field!(F, integer "expirationTime" => expiration_time),
    field!(F, integer "currentTime" => current_time),
    field!(F, flag "lowFeeDetected" => low_fee_detected),
    field!(F, number "amountPaid" => amount_paid),
    field!(F, integer "targetConfirmations" => target_confirmations),
    F::record(
        "shopper",
        |i| FieldValue::record(&i.shopper),
        |i, v| {
            i.shopper = hydrate_value(v)?;
            Ok(())
        },
    ),
    F::record(
        "universalCodes",
        |i| FieldValue::record(&i.universal_codes),
        |i, v| {
            i.universal_codes = hydrate_value(v)?;
            Ok(())
        },
    ),
    F::record(
        "minerFees",
        |i| FieldValue::record(&i.miner_fees),
        |i, v| {
            i.miner_fees = hydrate_value(v)?;
            Ok(())
        },
    ),
    F::new(
        "exchangeRates",
        "exchangeRates",
        FieldKind::Mapping,
        |i| FieldValue::mapping(&i.exchange_rates),
        |i, v| {
            i.exchange_rates = decode::mapping(v)?;
            Ok(())
        },
    ),
];

impl Invoice {
    pub fn new(price: f64, currency: Currency) -> Self {
        Self {
            price: Some(price),
            currency: Some(currency),
            ..Self::default()
        }
    }

    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Sets the pricing currency from its ISO code. Unknown codes are rejected
    /// and the current value is kept.
    pub fn set_currency(&mut self, code: &str) -> Result<()> {
        self.currency = Some(parse_currency("currency", code)?);
        Ok(())
    }

    pub fn set_currency_code(&mut self, currency: Currency) {
        self.currency = Some(currency);
    }

    text_accessors!(
        guid / set_guid,
        token / set_token,
        pos_data / set_pos_data,
        notification_url / set_notification_url,
        transaction_speed / set_transaction_speed,
        notification_email / set_notification_email,
        redirect_url / set_redirect_url,
        close_url / set_close_url,
        order_id / set_order_id,
        item_desc / set_item_desc,
        item_code / set_item_code,
        id / set_id,
        url / set_url,
        status / set_status,
    );

    value_accessors!(
        price / set_price: f64,
        full_notifications / set_full_notifications: bool,
        physical / set_physical: bool,
        acceptance_window / set_acceptance_window: i64,
        auto_redirect / set_auto_redirect: bool,
        invoice_time / set_invoice_time: i64,
        expiration_time / set_expiration_time: i64,
        current_time / set_current_time: i64,
        low_fee_detected / set_low_fee_detected: bool,
        amount_paid / set_amount_paid: f64,
        target_confirmations / set_target_confirmations: i64,
    );

    pub fn payment_currencies(&self) -> &[String] {
        &self.payment_currencies
    }

    /// Restricts which currencies the shopper may pay with.
    pub fn set_payment_currencies(&mut self, currencies: &[Currency]) {
        self.payment_currencies = currencies.iter().map(|c| c.code().to_string()).collect();
    }

    pub fn invoice_time_utc(&self) -> Option<DateTime<Utc>> {
        self.invoice_time.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    pub fn expiration_time_utc(&self) -> Option<DateTime<Utc>> {
        self.expiration_time.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    pub fn shopper(&self) -> &Shopper {
        &self.shopper
    }

    pub fn shopper_mut(&mut self) -> &mut Shopper {
        &mut self.shopper
    }

    pub fn set_shopper(&mut self, shopper: Shopper) {
        self.shopper = shopper;
    }

    pub fn universal_codes(&self) -> &UniversalCodes {
        &self.universal_codes
    }

    pub fn set_universal_codes(&mut self, codes: UniversalCodes) {
        self.universal_codes = codes;
    }

    pub fn miner_fees(&self) -> &MinerFees {
        &self.miner_fees
    }

    pub fn miner_fees_mut(&mut self) -> &mut MinerFees {
        &mut self.miner_fees
    }

    pub fn set_miner_fees(&mut self, fees: MinerFees) {
        self.miner_fees = fees;
    }

    pub fn exchange_rates(&self) -> &ExchangeRates {
        &self.exchange_rates
    }

    pub fn set_exchange_rates(&mut self, rates: ExchangeRates) {
        self.exchange_rates = rates;
    }
}

impl WireRecord for Invoice {
    const KIND: &'static str = "invoice";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        FIELDS
    }
}
