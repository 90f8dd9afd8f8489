//! Logical schema values. Pure data; no I/O here.
//!
//! A `Field` is immutable once built. Use [`Field::to_builder`] to derive a
//! modified copy. Serde goes through the wire form in [`crate::wire`], so any
//! serde format an outer layer picks sees the same shape as the RPC payload.

use serde::{Deserialize, Serialize};

use crate::builder::FieldBuilder;
use crate::error::Result;
use crate::types::{FieldType, Mode};
use crate::wire::{self, TableFieldSchema, TableSchema};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TableFieldSchema", into = "TableFieldSchema")]
pub struct Field {
    pub(crate) name: String,
    pub(crate) field_type: FieldType,
    pub(crate) mode: Option<Mode>,
    pub(crate) description: Option<String>,
}

impl Field {
    /// Start a builder. Fails if `name` is empty.
    pub fn builder(name: impl Into<String>, field_type: FieldType) -> Result<FieldBuilder> {
        FieldBuilder::new(name, field_type)
    }

    /// A field with no mode and no description.
    pub fn of(name: impl Into<String>, field_type: FieldType) -> Result<Field> {
        Field::builder(name, field_type)?.build()
    }

    /// A `RECORD` field over `fields`, with no mode and no description.
    pub fn record_of(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Result<Field> {
        Field::of(name, FieldType::record(fields))
    }

    /// Builder pre-populated with every attribute of `self`.
    pub fn to_builder(&self) -> FieldBuilder {
        FieldBuilder::from(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sub-fields when this is a `RECORD`; `None` for scalar types.
    pub fn fields(&self) -> Option<&[Field]> {
        self.field_type.fields()
    }

    pub fn to_wire(&self) -> TableFieldSchema {
        wire::to_wire(self)
    }

    pub fn from_wire(msg: &TableFieldSchema) -> Result<Field> {
        wire::from_wire(msg)
    }
}

/// Ordered list of top-level columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn field(&self, idx: usize) -> Option<&Field> {
        self.fields.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.index_of(name).and_then(|idx| self.field(idx))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn to_wire(&self) -> TableSchema {
        wire::schema_to_wire(self)
    }

    pub fn from_wire(msg: &TableSchema) -> Result<Schema> {
        wire::schema_from_wire(msg)
    }
}

impl FromIterator<Field> for Schema {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Schema::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
