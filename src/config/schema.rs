//! Field descriptors and the schema they form.
//!
//! A [`ConfigSchema`] enumerates the fields a record is expected to
//! carry, in declaration order, each with a declared [`TypeTag`]. The
//! schema is built once (typically cached in a `OnceLock`) and never
//! mutated afterwards; coercion reads it, the loader iterates it.

/// The declared type of a configuration field.
///
/// Optionality is not a tag: it lives on the [`FieldDescriptor`], so
/// every tag here names a concrete value shape. `Union` members must
/// themselves be concrete; [`SchemaBuilder`] flattens nested unions
/// when the schema is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    String,
    StringList,
    Union(Vec<TypeTag>),
}

impl TypeTag {
    pub fn is_union(&self) -> bool {
        matches!(self, TypeTag::Union(_))
    }

    /// Flattens nested unions into a single member list, preserving
    /// declaration order and keeping the first occurrence of a
    /// duplicate member.
    fn flatten(self) -> TypeTag {
        match self {
            TypeTag::Union(members) => {
                let mut flat = Vec::with_capacity(members.len());
                for member in members {
                    match member.flatten() {
                        TypeTag::Union(inner) => {
                            for tag in inner {
                                if !flat.contains(&tag) {
                                    flat.push(tag);
                                }
                            }
                        }
                        tag => {
                            if !flat.contains(&tag) {
                                flat.push(tag);
                            }
                        }
                    }
                }
                TypeTag::Union(flat)
            }
            tag => tag,
        }
    }
}

/// One expected field: its exact-match key, declared type, and
/// whether absence (or an empty string) is tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub tag: TypeTag,
    pub optional: bool,
}

/// An ordered, immutable set of field descriptors.
///
/// Order matches declaration order, which makes fail-fast error
/// reporting deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSchema {
    fields: Vec<FieldDescriptor>,
}

impl ConfigSchema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for a [`ConfigSchema`].
///
/// ## Example
///
/// ```
/// use envrec::config::{ConfigSchema, TypeTag};
///
/// let schema = ConfigSchema::builder()
///     .required("PROD", TypeTag::Bool)
///     .required("PORT", TypeTag::Int)
///     .optional("SMTP_HOST", TypeTag::String)
///     .build();
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct SchemaBuilder {
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    /// Declares a field that must be present in the environment.
    pub fn required(self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.push(name.into(), tag, false)
    }

    /// Declares a field that may be absent (or set to the empty
    /// string), in which case its value is the absent marker.
    pub fn optional(self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.push(name.into(), tag, true)
    }

    fn push(mut self, name: String, tag: TypeTag, optional: bool) -> Self {
        assert!(!name.is_empty(), "field name must not be empty");
        assert!(
            !self.fields.iter().any(|f| f.name == name),
            "duplicate field name: {name:?}"
        );
        self.fields.push(FieldDescriptor {
            name,
            tag: tag.flatten(),
            optional,
        });
        self
    }

    pub fn build(self) -> ConfigSchema {
        ConfigSchema {
            fields: self.fields,
        }
    }
}
