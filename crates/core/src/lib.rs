//! Epicenter extraction, coordinate normalization, and map URL building
//! for earthquake bulletin text.

pub mod error;
pub mod extract;
pub mod maps;
pub mod normalize;
pub mod types;

pub use error::{Error, Result};
pub use extract::{detect, extract};
pub use maps::lookup_url;
pub use normalize::normalize;
pub use types::{BulletinFormat, Extraction};
