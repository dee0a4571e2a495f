//! Entity structs for Anatomy Explorer domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! persisted session snapshot can be round-tripped and schema-checked.

mod identity;
mod subscription;

pub use identity::{Identity, display_name_from_email};
pub use subscription::Subscription;
