//! Mutable staging for [`Field`].
//!
//! Setters take and return the builder by value so calls chain. Nothing is
//! validated until `build()`, which copies the staged attributes into a fresh
//! immutable `Field` and leaves the builder untouched.

use crate::error::{Error, Result};
use crate::schema::Field;
use crate::types::{FieldType, Mode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuilder {
    name: Option<String>,
    field_type: Option<FieldType>,
    mode: Option<Mode>,
    description: Option<String>,
}

impl FieldBuilder {
    /// Fails if `name` is empty.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidSchema("field name must not be empty".to_string()));
        }
        Ok(Self {
            name: Some(name),
            field_type: Some(field_type),
            mode: None,
            description: None,
        })
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Accepts a `Mode` or an `Option<Mode>`; `None` clears it.
    pub fn set_mode(mut self, mode: impl Into<Option<Mode>>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Sets the description. Use [`FieldBuilder::set_description_opt`] to pass
    /// an `Option`, or [`FieldBuilder::clear_description`] to unset it.
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `None` clears the description.
    pub fn set_description_opt(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn clear_description(self) -> Self {
        self.set_description_opt(None)
    }

    pub fn build(&self) -> Result<Field> {
        let name = match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            Some(_) => {
                return Err(Error::InvalidSchema("field name must not be empty".to_string()))
            }
            None => return Err(Error::InvalidSchema("field name was never set".to_string())),
        };
        let field_type = self.field_type.clone().ok_or_else(|| {
            Error::InvalidSchema(format!("type of field '{name}' was never set"))
        })?;
        Ok(Field {
            name,
            field_type,
            mode: self.mode,
            description: self.description.clone(),
        })
    }
}

impl From<&Field> for FieldBuilder {
    fn from(field: &Field) -> Self {
        Self {
            name: Some(field.name.clone()),
            field_type: Some(field.field_type.clone()),
            mode: field.mode,
            description: field.description.clone(),
        }
    }
}

impl From<Field> for FieldBuilder {
    fn from(field: Field) -> Self {
        Self {
            name: Some(field.name),
            field_type: Some(field.field_type),
            mode: field.mode,
            description: field.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_requires_name_and_type() {
        let err = FieldBuilder::default().build().unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(_)));

        let err = FieldBuilder::default().set_name("x").build().unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(ref m) if m.contains("'x'")));

        let field = FieldBuilder::default()
            .set_name("x")
            .set_type(FieldType::float())
            .build()
            .unwrap();
        assert_eq!(field.name(), "x");
        assert_eq!(field.mode(), None);
        assert_eq!(field.description(), None);
    }

    #[test]
    fn test_set_name_empty_fails_at_build() {
        let builder = FieldBuilder::new("ok", FieldType::string()).unwrap().set_name("");
        assert!(matches!(builder.build(), Err(Error::InvalidSchema(_))));
    }

    #[test]
    fn test_set_mode_none_clears() {
        let field = FieldBuilder::new("m", FieldType::string())
            .unwrap()
            .set_mode(Mode::Repeated)
            .set_mode(None)
            .build()
            .unwrap();
        assert_eq!(field.mode(), None);
    }

    #[test]
    fn test_clear_description() {
        let field = FieldBuilder::new("d", FieldType::string())
            .unwrap()
            .set_description("text")
            .clear_description()
            .build()
            .unwrap();
        assert_eq!(field.description(), None);
    }

    #[test]
    fn test_set_description_opt() {
        let builder = FieldBuilder::new("d", FieldType::string())
            .unwrap()
            .set_description_opt(Some("text".to_string()));
        assert_eq!(builder.build().unwrap().description(), Some("text"));

        let field = builder.set_description_opt(None).build().unwrap();
        assert_eq!(field.description(), None);
    }

    #[test]
    fn test_repeated_build_is_independent() {
        let builder = FieldBuilder::new("r", FieldType::integer())
            .unwrap()
            .set_mode(Mode::Required);
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);

        let third = builder.set_description("later").build().unwrap();
        assert_eq!(first.description(), None);
        assert_eq!(third.description(), Some("later"));
    }

    #[test]
    fn test_owned_conversion_matches_borrowed() {
        let field = FieldBuilder::new("o", FieldType::bytes())
            .unwrap()
            .set_description("blob")
            .build()
            .unwrap();
        assert_eq!(FieldBuilder::from(&field), FieldBuilder::from(field.clone()));
        assert_eq!(FieldBuilder::from(field.clone()).build().unwrap(), field);
    }
}
