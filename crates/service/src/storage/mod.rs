//! Storage abstractions for service layer
//!
//! Reusable file-backed stores for data small enough to keep in memory and
//! persist as a single JSON document.

pub mod json_map_store;
