//! Prowlarr API model types.

mod application;
mod field;
mod indexer;
mod system_status;

pub use application::*;
pub use field::{Field, FieldValue};
pub use indexer::*;
pub use system_status::*;
