//! Freelancer API model types.
//!
//! One canonical type per concept. Fixed-field models keep unrecognized
//! response fields in a flattened `extra` map so nothing the API returns
//! is lost; declared fields that are unset are omitted on serialization
//! while `extra` entries are always emitted.

mod bid;
mod contest;
mod job;
mod message;
mod milestone;
mod project;
mod thread;
mod user;

pub use bid::*;
pub use contest::*;
pub use job::*;
pub use message::*;
pub use milestone::*;
pub use project::*;
pub use thread::*;
pub use user::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiFailure;

/// Decode an unwrapped `result` payload into a model type.
pub(crate) fn from_result<T: DeserializeOwned>(
    result: Value,
) -> core::result::Result<T, ApiFailure> {
    serde_json::from_value(result).map_err(ApiFailure::decode)
}
