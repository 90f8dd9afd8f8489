//! Flat wire messages and the codec between them and [`Field`] trees.
//!
//! The messages mirror the `TableFieldSchema`/`TableSchema` JSON resources:
//! every attribute is optional on the wire, absent values are skipped on
//! output, and a RECORD carries its children inline under `fields`.
//!
//! Encoding is total. Decoding validates everything and either returns a
//! complete tree or an error naming the dotted path of the offending field.
//! A RECORD whose `fields` list is missing decodes as an empty record, since
//! the JSON API drops empty lists.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::schema::{Field, Schema};
use crate::types::{FieldType, Mode, TypeKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFieldSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Present only for RECORD types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TableFieldSchema>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TableFieldSchema>>,
}

/// Encode a field tree. RECORD types always emit `fields`, even when empty.
pub fn to_wire(field: &Field) -> TableFieldSchema {
    TableFieldSchema {
        name: Some(field.name().to_string()),
        field_type: Some(field.field_type().kind().as_str().to_string()),
        mode: field.mode().map(|m| m.as_str().to_string()),
        description: field.description().map(str::to_string),
        fields: field.fields().map(|fs| fs.iter().map(to_wire).collect()),
    }
}

/// Decode with [`CodecConfig::default`].
pub fn from_wire(msg: &TableFieldSchema) -> Result<Field> {
    from_wire_with(msg, &CodecConfig::default())
}

pub fn from_wire_with(msg: &TableFieldSchema, cfg: &CodecConfig) -> Result<Field> {
    match decode_field(msg, cfg, "", 1) {
        Ok(field) => Ok(field),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %e, "rejected wire field");
            Err(e)
        }
    }
}

pub fn schema_to_wire(schema: &Schema) -> TableSchema {
    TableSchema {
        fields: Some(schema.iter().map(to_wire).collect()),
    }
}

/// Absent `fields` decodes to an empty schema; the API omits empty lists.
pub fn schema_from_wire(msg: &TableSchema) -> Result<Schema> {
    schema_from_wire_with(msg, &CodecConfig::default())
}

pub fn schema_from_wire_with(msg: &TableSchema, cfg: &CodecConfig) -> Result<Schema> {
    let Some(children) = msg.fields.as_deref() else {
        return Ok(Schema::default());
    };
    children
        .iter()
        .map(|c| from_wire_with(c, cfg))
        .collect::<Result<Vec<_>>>()
        .map(Schema::new)
}

fn malformed(path: &str, reason: impl fmt::Display) -> Error {
    if path.is_empty() {
        Error::MalformedWireData(reason.to_string())
    } else {
        Error::MalformedWireData(format!("field '{path}': {reason}"))
    }
}

fn decode_field(
    msg: &TableFieldSchema,
    cfg: &CodecConfig,
    parent: &str,
    depth: usize,
) -> Result<Field> {
    let name = match msg.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(malformed(parent, "missing field name")),
    };
    let path = if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    };

    if depth > cfg.max_depth {
        return Err(malformed(
            &path,
            format!("nesting exceeds maximum depth {}", cfg.max_depth),
        ));
    }

    let tag = msg
        .field_type
        .as_deref()
        .ok_or_else(|| malformed(&path, "missing type"))?;
    let kind = TypeKind::parse_tag(tag, cfg.accept_type_aliases)
        .ok_or_else(|| malformed(&path, format!("unrecognized type '{tag}'")))?;

    let mode = match msg.mode.as_deref() {
        Some(m) => Some(
            m.parse::<Mode>()
                .map_err(|_| malformed(&path, format!("unrecognized mode '{m}'")))?,
        ),
        None => None,
    };

    let children = match (msg.fields.as_deref(), kind.is_record()) {
        (Some(children), true) => Some(
            children
                .iter()
                .map(|c| decode_field(c, cfg, &path, depth + 1))
                .collect::<Result<Vec<_>>>()?,
        ),
        (None, true) => Some(Vec::new()),
        (Some(_), false) => {
            return Err(malformed(&path, format!("{kind} type cannot carry sub-fields")))
        }
        (None, false) => None,
    };

    let field_type =
        FieldType::from_parts(kind, children).map_err(|e| malformed(&path, e))?;
    let field = Field::builder(name, field_type)
        .map_err(|e| malformed(&path, e))?
        .set_mode(mode)
        .set_description_opt(msg.description.clone())
        .build()
        .map_err(|e| malformed(&path, e))?;

    #[cfg(feature = "tracing")]
    tracing::trace!(path = %path, kind = %kind, depth, "decoded field");

    Ok(field)
}

impl From<&Field> for TableFieldSchema {
    fn from(field: &Field) -> Self {
        to_wire(field)
    }
}

impl From<Field> for TableFieldSchema {
    fn from(field: Field) -> Self {
        to_wire(&field)
    }
}

impl TryFrom<TableFieldSchema> for Field {
    type Error = Error;

    fn try_from(msg: TableFieldSchema) -> Result<Self> {
        from_wire(&msg)
    }
}

impl TryFrom<&TableFieldSchema> for Field {
    type Error = Error;

    fn try_from(msg: &TableFieldSchema) -> Result<Self> {
        from_wire(msg)
    }
}

impl From<&Schema> for TableSchema {
    fn from(schema: &Schema) -> Self {
        schema_to_wire(schema)
    }
}

impl TryFrom<TableSchema> for Schema {
    type Error = Error;

    fn try_from(msg: TableSchema) -> Result<Self> {
        schema_from_wire(&msg)
    }
}
