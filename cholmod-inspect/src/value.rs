//! Self-describing value model
//!
//! Host adapters normally implement [`TypedValue`] over their native
//! value objects. For embedders without one (tests, offline triage over
//! a snapshot), [`OwnedValue`] is a small concrete value graph: scalars,
//! pointers, tagged structs, and the reference/typedef wrappers a
//! debugger would hand out.

use cholmod_inspect_core::{InspectError, Result, TypedValue};
use hashbrown::HashMap;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Int(i64),
    Address(u64),
    Struct {
        tag: String,
        fields: HashMap<String, OwnedValue>,
    },
    Reference(Box<OwnedValue>),
    Alias {
        name: String,
        inner: Box<OwnedValue>,
    },
}

/// A concrete typed value owned by the embedder
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedValue {
    node: Node,
}

impl OwnedValue {
    /// A signed integer scalar
    pub fn int(value: i64) -> Self {
        Self {
            node: Node::Int(value),
        }
    }

    /// A pointer holding `addr`
    pub fn address(addr: u64) -> Self {
        Self {
            node: Node::Address(addr),
        }
    }

    /// An empty struct with the given type tag
    pub fn structure(tag: &str) -> Self {
        Self {
            node: Node::Struct {
                tag: tag.to_owned(),
                fields: HashMap::new(),
            },
        }
    }

    /// Add a named field to a struct value (builder style)
    ///
    /// Panics when called on a non-struct value; that is a fixture bug,
    /// not a runtime condition.
    pub fn with_field(mut self, name: &str, value: OwnedValue) -> Self {
        match &mut self.node {
            Node::Struct { fields, .. } => {
                fields.insert(name.to_owned(), value);
            }
            _ => panic!("with_field on a non-struct value"),
        }
        self
    }

    /// A reference wrapper around `inner`
    pub fn reference(inner: OwnedValue) -> Self {
        Self {
            node: Node::Reference(Box::new(inner)),
        }
    }

    /// A typedef alias named `name` around `inner`
    pub fn alias(name: &str, inner: OwnedValue) -> Self {
        Self {
            node: Node::Alias {
                name: name.to_owned(),
                inner: Box::new(inner),
            },
        }
    }

    /// Typedef name if this value is an alias wrapper
    pub fn alias_name(&self) -> Option<&str> {
        match &self.node {
            Node::Alias { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl TypedValue for OwnedValue {
    fn strip_wrappers(&self) -> Result<Self> {
        let mut current = self;
        loop {
            match &current.node {
                Node::Reference(inner) => current = inner,
                Node::Alias { inner, .. } => current = inner,
                _ => return Ok(current.clone()),
            }
        }
    }

    fn type_tag(&self) -> Option<&str> {
        match &self.node {
            Node::Struct { tag, .. } => Some(tag),
            _ => None,
        }
    }

    fn field(&self, name: &str) -> Result<Self> {
        match &self.node {
            Node::Struct { fields, .. } => {
                fields.get(name).cloned().ok_or(InspectError::MissingField)
            }
            _ => Err(InspectError::TypeMismatch),
        }
    }

    fn as_int(&self) -> Result<i64> {
        match &self.node {
            Node::Int(value) => Ok(*value),
            _ => Err(InspectError::TypeMismatch),
        }
    }

    fn as_address(&self) -> Result<u64> {
        match &self.node {
            Node::Address(addr) => Ok(*addr),
            _ => Err(InspectError::TypeMismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_fields() {
        let value = OwnedValue::structure("cholmod_sparse")
            .with_field("nrow", OwnedValue::int(4))
            .with_field("p", OwnedValue::address(0x2000));

        assert_eq!(value.type_tag(), Some("cholmod_sparse"));
        assert_eq!(value.field("nrow").unwrap().as_int(), Ok(4));
        assert_eq!(value.field("p").unwrap().as_address(), Ok(0x2000));
        assert_eq!(value.field("ncol"), Err(InspectError::MissingField));
    }

    #[test]
    fn test_strip_wrappers_chain() {
        let inner = OwnedValue::structure("cholmod_sparse");
        let wrapped = OwnedValue::reference(OwnedValue::alias("SparseView", inner));

        assert_eq!(wrapped.type_tag(), None);
        assert_eq!(wrapped.alias_name(), None);
        let stripped = wrapped.strip_wrappers().unwrap();
        assert_eq!(stripped.type_tag(), Some("cholmod_sparse"));
    }

    #[test]
    fn test_strip_wrappers_on_plain_value() {
        let value = OwnedValue::int(9);
        assert_eq!(value.strip_wrappers().unwrap().as_int(), Ok(9));
    }

    #[test]
    fn test_kind_mismatch() {
        assert_eq!(OwnedValue::int(1).as_address(), Err(InspectError::TypeMismatch));
        assert_eq!(
            OwnedValue::address(0x10).field("x"),
            Err(InspectError::TypeMismatch)
        );
    }
}
