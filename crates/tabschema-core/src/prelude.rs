//! Convenient re-exports for downstream crates.

pub use crate::builder::FieldBuilder;
pub use crate::config::CodecConfig;
pub use crate::error::{Error, Result};
pub use crate::schema::{Field, Schema};
pub use crate::types::{FieldType, Mode, TypeKind};
pub use crate::wire::{from_wire, from_wire_with, to_wire, TableFieldSchema, TableSchema};
