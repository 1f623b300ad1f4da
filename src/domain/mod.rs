// Domain layer: wire records, their field tables and the record port.

/// Getter/setter pairs for optional text fields.
macro_rules! text_accessors {
    ($($field:ident / $setter:ident),+ $(,)?) => {
        $(
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            pub fn $setter(&mut self, value: impl Into<String>) {
                self.$field = Some(value.into());
            }
        )+
    };
}

/// Getter/setter pairs for optional `Copy` fields.
macro_rules! value_accessors {
    ($($field:ident / $setter:ident : $ty:ty),+ $(,)?) => {
        $(
            pub fn $field(&self) -> Option<$ty> {
                self.$field
            }

            pub fn $setter(&mut self, value: $ty) {
                self.$field = Some(value);
            }
        )+
    };
}

/// One scalar row of a field table: `field!(Table, kind "wireName" => rust_field)`.
macro_rules! field {
    ($table:ty, text $name:literal => $field:ident) => {
        <$table>::scalar(
            $name,
            |r| $crate::domain::model::FieldValue::string(r.$field.as_deref()),
            |r, v| {
                r.$field = $crate::core::hydration::decode::string(v)?;
                Ok(())
            },
        )
    };
    ($table:ty, number $name:literal => $field:ident) => {
        <$table>::scalar(
            $name,
            |r| $crate::domain::model::FieldValue::number(r.$field),
            |r, v| {
                r.$field = $crate::core::hydration::decode::number(v)?;
                Ok(())
            },
        )
    };
    ($table:ty, integer $name:literal => $field:ident) => {
        <$table>::scalar(
            $name,
            |r| $crate::domain::model::FieldValue::integer(r.$field),
            |r, v| {
                r.$field = $crate::core::hydration::decode::integer(v)?;
                Ok(())
            },
        )
    };
    ($table:ty, flag $name:literal => $field:ident) => {
        <$table>::scalar(
            $name,
            |r| $crate::domain::model::FieldValue::flag(r.$field),
            |r, v| {
                r.$field = $crate::core::hydration::decode::flag(v)?;
                Ok(())
            },
        )
    };
    ($table:ty, currency $name:literal => $field:ident) => {
        <$table>::scalar(
            $name,
            |r| $crate::domain::model::FieldValue::currency(r.$field),
            |r, v| {
                r.$field = $crate::core::hydration::decode::currency(v)?;
                Ok(())
            },
        )
    };
}

pub mod currency;
pub mod invoice;
pub mod miner_fees;
pub mod model;
pub mod payout;
pub mod ports;
pub mod shopper;
pub mod universal_codes;
