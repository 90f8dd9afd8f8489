//! Table-column schema model: immutable nested `Field`s, a staging builder,
//! and the wire codec. See [`tabschema_core`] for the individual modules.

pub use tabschema_core::*;
