//! Shared types and the domain error taxonomy used by every layer
//! above the persistence crate.

pub mod error;
pub mod types;
