use crate::core::hydration::hydrate_value;
use crate::domain::currency::Currency;
use crate::domain::model::{FieldDescriptor, FieldValue};
use crate::domain::ports::WireRecord;

/// Network cost for one currency: fee rate, total fee and its fiat value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinerFeesItem {
    satoshis_per_byte: Option<f64>,
    total_fee: Option<i64>,
    fiat_amount: Option<f64>,
}

type I = FieldDescriptor<MinerFeesItem>;

static ITEM_FIELDS: &[I] = &[
    field!(I, number "satoshisPerByte" => satoshis_per_byte),
    field!(I, integer "totalFee" => total_fee),
    field!(I, number "fiatAmount" => fiat_amount),
];

impl MinerFeesItem {
    pub fn new() -> Self {
        Self::default()
    }

    value_accessors!(
        satoshis_per_byte / set_satoshis_per_byte: f64,
        total_fee / set_total_fee: i64,
        fiat_amount / set_fiat_amount: f64,
    );
}

impl WireRecord for MinerFeesItem {
    const KIND: &'static str = "miner_fees_item";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        ITEM_FIELDS
    }
}

/// Fees the purchaser pays to cover the UTXO sweep cost of an invoice, keyed
/// by currency. Shown as "Network Cost" on the invoice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinerFees {
    btc: MinerFeesItem,
    bch: MinerFeesItem,
    eth: MinerFeesItem,
    usdc: MinerFeesItem,
    gusd: MinerFeesItem,
    pax: MinerFeesItem,
    busd: MinerFeesItem,
    xrp: MinerFeesItem,
    doge: MinerFeesItem,
    ltc: MinerFeesItem,
}

macro_rules! item_field {
    ($name:literal => $field:ident) => {
        F::record(
            $name,
            |r| FieldValue::record(&r.$field),
            |r, v| {
                r.$field = hydrate_value(v)?;
                Ok(())
            },
        )
    };
}

type F = FieldDescriptor<MinerFees>;

static FIELDS: &[F] = &[
    item_field!("btc" => btc),
    item_field!("bch" => bch),
    item_field!("eth" => eth),
    item_field!("usdc" => usdc),
    item_field!("gusd" => gusd),
    item_field!("pax" => pax),
    item_field!("busd" => busd),
    item_field!("xrp" => xrp),
    item_field!("doge" => doge),
    item_field!("ltc" => ltc),
];

impl MinerFees {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currencies that carry a fee item, in wire order.
    pub const CURRENCIES: [Currency; 10] = [
        Currency::Btc,
        Currency::Bch,
        Currency::Eth,
        Currency::Usdc,
        Currency::Gusd,
        Currency::Pax,
        Currency::Busd,
        Currency::Xrp,
        Currency::Doge,
        Currency::Ltc,
    ];

    pub fn item(&self, currency: Currency) -> Option<&MinerFeesItem> {
        match currency {
            Currency::Btc => Some(&self.btc),
            Currency::Bch => Some(&self.bch),
            Currency::Eth => Some(&self.eth),
            Currency::Usdc => Some(&self.usdc),
            Currency::Gusd => Some(&self.gusd),
            Currency::Pax => Some(&self.pax),
            Currency::Busd => Some(&self.busd),
            Currency::Xrp => Some(&self.xrp),
            Currency::Doge => Some(&self.doge),
            Currency::Ltc => Some(&self.ltc),
            _ => None,
        }
    }

    pub fn item_mut(&mut self, currency: Currency) -> Option<&mut MinerFeesItem> {
        match currency {
            Currency::Btc => Some(&mut self.btc),
            Currency::Bch => Some(&mut self.bch),
            Currency::Eth => Some(&mut self.eth),
            Currency::Usdc => Some(&mut self.usdc),
            Currency::Gusd => Some(&mut self.gusd),
            Currency::Pax => Some(&mut self.pax),
            Currency::Busd => Some(&mut self.busd),
            Currency::Xrp => Some(&mut self.xrp),
            Currency::Doge => Some(&mut self.doge),
            Currency::Ltc => Some(&mut self.ltc),
            _ => None,
        }
    }

    pub fn btc(&self) -> &MinerFeesItem {
        &self.btc
    }

    pub fn set_btc(&mut self, item: MinerFeesItem) {
        self.btc = item;
    }

    pub fn bch(&self) -> &MinerFeesItem {
        &self.bch
    }

    pub fn set_bch(&mut self, item: MinerFeesItem) {
        self.bch = item;
    }

    pub fn eth(&self) -> &MinerFeesItem {
        &self.eth
    }

    pub fn set_eth(&mut self, item: MinerFeesItem) {
        self.eth = item;
    }

    pub fn usdc(&self) -> &MinerFeesItem {
        &self.usdc
    }

    pub fn set_usdc(&mut self, item: MinerFeesItem) {
        self.usdc = item;
    }

    pub fn gusd(&self) -> &MinerFeesItem {
        &self.gusd
    }

    pub fn set_gusd(&mut self, item: MinerFeesItem) {
        self.gusd = item;
    }

    pub fn pax(&self) -> &MinerFeesItem {
        &self.pax
    }

    pub fn set_pax(&mut self, item: MinerFeesItem) {
        self.pax = item;
    }

    pub fn busd(&self) -> &MinerFeesItem {
        &self.busd
    }

    pub fn set_busd(&mut self, item: MinerFeesItem) {
        self.busd = item;
    }

    pub fn xrp(&self) -> &MinerFeesItem {
        &self.xrp
    }

    pub fn set_xrp(&mut self, item: MinerFeesItem) {
        self.xrp = item;
    }

    pub fn doge(&self) -> &MinerFeesItem {
        &self.doge
    }

    pub fn set_doge(&mut self, item: MinerFeesItem) {
        self.doge = item;
    }

    pub fn ltc(&self) -> &MinerFeesItem {
        &self.ltc
    }

    pub fn set_ltc(&mut self, item: MinerFeesItem) {
        self.ltc = item;
    }
}

impl WireRecord for MinerFees {
    const KIND: &'static str = "miner_fees";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_item_lookup_covers_wire_currencies() {
        let mut fees = MinerFees::new();
        for currency in MinerFees::CURRENCIES {
            assert!(fees.item(currency).is_some());
            assert!(fees.item_mut(currency).is_some());
        }
        assert!(fees.item(Currency::Usd).is_none());
    }

    #[test]
    fn test_item_mut_writes_through() {
        let mut fees = MinerFees::new();
        if let Some(item) = fees.item_mut(Currency::Eth) {
            item.set_total_fee(42);
        }
        assert_eq!(fees.eth().total_fee(), Some(42));
        assert_eq!(
            Value::Object(fees.to_wire()),
            json!({"eth": {"totalFee": 42}})
        );
    }

    #[test]
    fn test_item_with_zero_values_is_dropped() {
        let mut item = MinerFeesItem::new();
        item.set_satoshis_per_byte(0.0);
        item.set_total_fee(0);

        let mut fees = MinerFees::new();
        fees.set_ltc(item);
        assert!(fees.to_wire().is_empty());
    }
}
