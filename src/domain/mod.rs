// Domain types and value objects
mod asset;
mod language;

pub(crate) use asset::find_profile;

pub use asset::{AssetProfile, Trend};
pub use language::Language;
