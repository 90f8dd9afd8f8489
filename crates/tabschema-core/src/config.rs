//! Decode policy for the wire codec that outer layers can serialize/deserialize.

use serde::{Deserialize, Serialize};

/// Deepest nesting BigQuery accepts for RECORD columns. Not applied unless a
/// caller opts in through `max_depth`.
pub const BIGQUERY_MAX_DEPTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum nesting depth accepted by the decoder. A scalar field has depth 1.
    /// Unbounded by default, so anything the builder produces also decodes.
    pub max_depth: usize,

    /// Accept standard-SQL type spellings (`INT64`, `FLOAT64`, `BOOL`, `STRUCT`)
    /// on decode. Encoding always emits canonical tags.
    pub accept_type_aliases: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            accept_type_aliases: true,
        }
    }
}

impl CodecConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `TABSCHEMA_MAX_DEPTH`: maximum decode nesting depth
    /// - `TABSCHEMA_ACCEPT_TYPE_ALIASES`: `true`/`false`/`1`/`0`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CodecConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("TABSCHEMA_MAX_DEPTH") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.max_depth = v;
            }
        }

        if let Some(s) = lookup("TABSCHEMA_ACCEPT_TYPE_ALIASES") {
            if let Some(v) = parse_flag(&s) {
                cfg.accept_type_aliases = v;
            }
        }

        cfg
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
