pub mod hydration;
pub mod projection;

pub use crate::domain::model::{Element, FieldDescriptor, FieldKind, FieldValue};
pub use crate::domain::ports::WireRecord;
pub use crate::utils::error::Result;
