//! HTTP handlers for the Rodnia REST API.
//!
//! Handlers are organized by domain:
//! - `health`: liveness probe
//! - `members`: member CRUD
//! - `relationships`: relationship creation, listing, deletion
//! - `paths`: exhaustive kinship path search
//! - `helpers`: shared parsing, validation, and error mapping

pub mod health;
pub mod helpers;
pub mod members;
pub mod paths;
pub mod relationships;

pub use health::health_check;
pub use members::{create_member, delete_member, get_member, list_members, update_member};
pub use paths::find_paths;
pub use relationships::{create_relationship, delete_relationship, list_relationships};
