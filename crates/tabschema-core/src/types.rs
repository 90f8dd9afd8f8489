//! Column type and mode tags.
//!
//! `FieldType` is the only recursive piece of the model: its `Record` variant
//! owns the nested sub-schema. Scalar variants carry no payload, so recursion
//! always bottoms out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::Field;

/// Nullability/cardinality of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Nullable,
    Required,
    Repeated,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Nullable, Mode::Required, Mode::Repeated];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Nullable => "NULLABLE",
            Mode::Required => "REQUIRED",
            Mode::Repeated => "REPEATED",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::MalformedWireData(format!("unrecognized mode '{s}'")))
    }
}

/// Payload-free tag for every `FieldType` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeKind {
    Bytes,
    String,
    Integer,
    Float,
    Numeric,
    Boolean,
    Timestamp,
    Date,
    Time,
    Datetime,
    Geography,
    Record,
}

impl TypeKind {
    pub const ALL: [TypeKind; 12] = [
        TypeKind::Bytes,
        TypeKind::String,
        TypeKind::Integer,
        TypeKind::Float,
        TypeKind::Numeric,
        TypeKind::Boolean,
        TypeKind::Timestamp,
        TypeKind::Date,
        TypeKind::Time,
        TypeKind::Datetime,
        TypeKind::Geography,
        TypeKind::Record,
    ];

    /// Canonical wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Bytes => "BYTES",
            TypeKind::String => "STRING",
            TypeKind::Integer => "INTEGER",
            TypeKind::Float => "FLOAT",
            TypeKind::Numeric => "NUMERIC",
            TypeKind::Boolean => "BOOLEAN",
            TypeKind::Timestamp => "TIMESTAMP",
            TypeKind::Date => "DATE",
            TypeKind::Time => "TIME",
            TypeKind::Datetime => "DATETIME",
            TypeKind::Geography => "GEOGRAPHY",
            TypeKind::Record => "RECORD",
        }
    }

    /// Parse a wire tag. Canonical tags always match; the standard-SQL
    /// spellings (`INT64`, `FLOAT64`, `BOOL`, `STRUCT`) only when
    /// `accept_aliases` is set.
    pub fn parse_tag(tag: &str, accept_aliases: bool) -> Option<TypeKind> {
        if let Some(kind) = TypeKind::ALL.into_iter().find(|k| k.as_str() == tag) {
            return Some(kind);
        }
        if !accept_aliases {
            return None;
        }
        match tag {
            "INT64" => Some(TypeKind::Integer),
            "FLOAT64" => Some(TypeKind::Float),
            "BOOL" => Some(TypeKind::Boolean),
            "STRUCT" => Some(TypeKind::Record),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, TypeKind::Record)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data kind of a column. `Record` owns its ordered sub-fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bytes,
    String,
    Integer,
    Float,
    Numeric,
    Boolean,
    Timestamp,
    Date,
    Time,
    Datetime,
    Geography,
    Record(Vec<Field>),
}

impl FieldType {
    pub fn bytes() -> Self {
        FieldType::Bytes
    }

    pub fn string() -> Self {
        FieldType::String
    }

    pub fn integer() -> Self {
        FieldType::Integer
    }

    pub fn float() -> Self {
        FieldType::Float
    }

    pub fn numeric() -> Self {
        FieldType::Numeric
    }

    pub fn boolean() -> Self {
        FieldType::Boolean
    }

    pub fn timestamp() -> Self {
        FieldType::Timestamp
    }

    pub fn date() -> Self {
        FieldType::Date
    }

    pub fn time() -> Self {
        FieldType::Time
    }

    pub fn datetime() -> Self {
        FieldType::Datetime
    }

    pub fn geography() -> Self {
        FieldType::Geography
    }

    /// A record over `fields`, in order. An empty sequence is allowed.
    pub fn record(fields: impl IntoIterator<Item = Field>) -> Self {
        FieldType::Record(fields.into_iter().collect())
    }

    /// Like [`FieldType::record`], but the sub-field list may be missing,
    /// which is rejected: a record must declare its sub-fields up front.
    pub fn try_record(fields: Option<Vec<Field>>) -> Result<Self> {
        fields.map(FieldType::Record).ok_or_else(|| {
            Error::InvalidSchema("RECORD type requires a sub-field list".to_string())
        })
    }

    /// Assemble a type from its tag and an optional sub-field list.
    ///
    /// `RECORD` requires `Some(..)`; every scalar kind requires `None`.
    pub fn from_parts(kind: TypeKind, fields: Option<Vec<Field>>) -> Result<Self> {
        if !kind.is_record() && fields.is_some() {
            return Err(Error::InvalidSchema(format!(
                "{kind} type cannot carry sub-fields"
            )));
        }
        Ok(match kind {
            TypeKind::Bytes => FieldType::Bytes,
            TypeKind::String => FieldType::String,
            TypeKind::Integer => FieldType::Integer,
            TypeKind::Float => FieldType::Float,
            TypeKind::Numeric => FieldType::Numeric,
            TypeKind::Boolean => FieldType::Boolean,
            TypeKind::Timestamp => FieldType::Timestamp,
            TypeKind::Date => FieldType::Date,
            TypeKind::Time => FieldType::Time,
            TypeKind::Datetime => FieldType::Datetime,
            TypeKind::Geography => FieldType::Geography,
            TypeKind::Record => FieldType::try_record(fields)?,
        })
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            FieldType::Bytes => TypeKind::Bytes,
            FieldType::String => TypeKind::String,
            FieldType::Integer => TypeKind::Integer,
            FieldType::Float => TypeKind::Float,
            FieldType::Numeric => TypeKind::Numeric,
            FieldType::Boolean => TypeKind::Boolean,
            FieldType::Timestamp => TypeKind::Timestamp,
            FieldType::Date => TypeKind::Date,
            FieldType::Time => TypeKind::Time,
            FieldType::Datetime => TypeKind::Datetime,
            FieldType::Geography => TypeKind::Geography,
            FieldType::Record(_) => TypeKind::Record,
        }
    }

    /// Sub-fields of a record, in declaration order.
    ///
    /// Returns `None` for every scalar kind. An empty record returns
    /// `Some(&[])`, never `None`.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            FieldType::Record(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, FieldType::Record(_))
    }

    /// Nesting depth: 1 for scalars and empty records.
    pub fn depth(&self) -> usize {
        match self {
            FieldType::Record(fields) => {
                1 + fields
                    .iter()
                    .map(|f| f.field_type().depth())
                    .max()
                    .unwrap_or(0)
            }
            _ => 1,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Record(fields) => {
                write!(f, "RECORD<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", field.name(), field.field_type())?;
                }
                write!(f, ">")
            }
            other => f.write_str(other.kind().as_str()),
        }
    }
}
