//! Domain core for the edumedia annotation editors.
//!
//! Holds the typed error taxonomy, the asset catalog and backing-store
//! contracts, and the in-memory working sets behind the video timeline
//! editor and the picbook hotspot editor. No database driver lives here;
//! `edumedia-db` provides the PostgreSQL implementations of the contracts.

pub mod annotation;
pub mod catalog;
pub mod error;
pub mod hotspot;
pub mod session;
pub mod timeline;
pub mod types;
