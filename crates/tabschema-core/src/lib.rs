//! Immutable, recursively nested table-column schemas.
//!
//! - [`schema::Field`] is the immutable column value; [`types::FieldType`]
//!   nests further fields under its `Record` variant.
//! - [`builder::FieldBuilder`] stages attributes and validates on `build()`.
//! - [`wire`] converts trees to and from the flat `TableFieldSchema` message
//!   handed to transport/persistence layers. Byte encoding is left to them.
//!
//! Everything here is synchronous, in-memory, and free of global state.

pub mod builder;
pub mod config;
pub mod error;
pub mod prelude;
pub mod schema;
pub mod types;
pub mod wire;

pub use prelude::*;
