use crate::domain::model::FieldDescriptor;
use crate::domain::ports::WireRecord;

/// Present on an invoice when the shopper signs in with their BitPay ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shopper {
    user: Option<String>,
}

type F = FieldDescriptor<Shopper>;

static FIELDS: &[F] = &[field!(F, text "user" => user)];

impl Shopper {
    pub fn new() -> Self {
        Self::default()
    }

    text_accessors!(user / set_user);
}

impl WireRecord for Shopper {
    const KIND: &'static str = "shopper";

    fn fields() -> &'static [FieldDescriptor<Self>] {
        FIELDS
    }
}
