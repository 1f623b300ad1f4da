use crate::domain::model::FieldDescriptor;
use crate::domain::ports::WireRecord;

/// Wallet-specific URLs for the payment protocol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniversalCodes {
    payment_string: Option<String>,
    verification_link: Option<String>,
}

type F = FieldDescriptor<UniversalCodes>;

static FIELDS: &[F] = &[
    field!(F, text "paymentString" => payment_string),
    field!(F, text "verificationLink" => verification_link),
];

impl UniversalCodes {
    pub fn new() -> Self {
        Self::default()
    }

    text_accessors!(
        // defaults to the BitPay URL when no wallet is selected
        payment_string / set_payment_string,
        // only present when a BitPay ID is required
        verification_link / set_verification_link,
    );
}

impl WireRecord for UniversalCodes {
    const KIND: &'static str = "universal_codes";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        FIELDS
    }
}
