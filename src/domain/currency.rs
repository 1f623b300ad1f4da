use crate::utils::error::ModelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! currencies {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// Currency codes accepted by the API: ISO 4217 fiat plus the crypto
        /// assets invoices and payouts can settle in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Currency {
            $($variant),+
        }

        impl Currency {
            pub const ALL: &'static [Currency] = &[$(Currency::$variant),+];

            pub fn code(&self) -> &'static str {
                match self {
                    $(Currency::$variant => $code),+
                }
            }
        }

        impl FromStr for Currency {
            type Err = ModelError;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $($code => Ok(Currency::$variant),)+
                    _ => Err(ModelError::InvalidCurrency { code: code.to_string() }),
                }
            }
        }
    };
}

currencies! {
    // crypto
    Btc => "BTC",
    Bch => "BCH",
    Eth => "ETH",
    Usdc => "USDC",
    Gusd => "GUSD",
    Pax => "PAX",
    Busd => "BUSD",
    Xrp => "XRP",
    Doge => "DOGE",
    Ltc => "LTC",
    Dai => "DAI",
    Wbtc => "WBTC",
    Shib => "SHIB",
    Ape => "APE",
    Euroc => "EUROC",
    Matic => "MATIC",

    // fiat
    Aed => "AED",
    Ars => "ARS",
    Aud => "AUD",
    Bgn => "BGN",
    Brl => "BRL",
    Cad => "CAD",
    Chf => "CHF",
    Clp => "CLP",
    Cny => "CNY",
    Cop => "COP",
    Czk => "CZK",
    Dkk => "DKK",
    Egp => "EGP",
    Eur => "EUR",
    Gbp => "GBP",
    Ghs => "GHS",
    Hkd => "HKD",
    Huf => "HUF",
    Idr => "IDR",
    Ils => "ILS",
    Inr => "INR",
    Isk => "ISK",
    Jpy => "JPY",
    Kes => "KES",
    Krw => "KRW",
    Kwd => "KWD",
    Mxn => "MXN",
    Myr => "MYR",
    Ngn => "NGN",
    Nok => "NOK",
    Nzd => "NZD",
    Pen => "PEN",
    Php => "PHP",
    Pkr => "PKR",
    Pln => "PLN",
    Qar => "QAR",
    Ron => "RON",
    Rub => "RUB",
    Sar => "SAR",
    Sek => "SEK",
    Sgd => "SGD",
    Thb => "THB",
    Try => "TRY",
    Twd => "TWD",
    Uah => "UAH",
    Usd => "USD",
    Uyu => "UYU",
    Vnd => "VND",
    Zar => "ZAR",
}

impl Currency {
    /// Membership check on the raw code. Codes are case-sensitive.
    pub fn is_valid(code: &str) -> bool {
        code.parse::<Currency>().is_ok()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
