//! Trait definitions for Freelancer API operations.
//!
//! Each entity type implements the traits its endpoints support,
//! encapsulating API differences in the implementations. Irregular
//! operations (bid placement, form-encoded thread creation, raw
//! passthrough reads) are free functions in the model modules instead.

mod create;
mod delete;
mod get;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use update::Update;
