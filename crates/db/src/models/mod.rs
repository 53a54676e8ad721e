//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod budget;
pub mod expense;
pub mod location;
pub mod project;
pub mod schedule;
pub mod script;
pub mod shot_list;
pub mod storyboard;
