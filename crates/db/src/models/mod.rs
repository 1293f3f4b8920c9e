//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod annotation_link;
pub mod audio;
pub mod hotspot;
pub mod picbook;
pub mod stats;
pub mod video;
