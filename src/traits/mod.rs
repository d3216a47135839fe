//! Trait definitions for Prowlarr operations.
//!
//! Each resource type implements the traits for the verbs its endpoints
//! support. Implementations are one-line bindings onto the generic helpers in
//! [`resource`], which own the path templates and precondition checks.

mod create;
mod delete;
mod get;
mod list;
pub(crate) mod resource;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub use resource::Resource;
pub use update::Update;
