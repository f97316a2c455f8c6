#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[macro_use]
mod macros;

pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod types;

// ============================================================================
// Public API
// ============================================================================

// Record contract
pub use record::{Extension, FieldDescriptor, FieldKind, Record};

// Records
pub use types::{
    FeatureData, GetFeatureInfoHackResult, GetFeaturesParams, GetLegacyGenomeParams,
    LegacyGenomeSelector, Region, flag_enabled,
};

// Encoding
pub use codec::{Codec, from_json, to_json};
pub use config::{CodecConfig, CollisionPolicy};
pub use error::{CodecError, CodecResult};
