pub mod preview;

pub use preview::{render_payload, RecordKind};
