use im::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime type identity for [`Value::Object`] values.
///
/// Tags form a single-inheritance chain so instance checks can accept
/// subtypes.
///
/// # Examples
///
/// ```rust
/// use attest::value::TypeTag;
/// let animal = TypeTag::new("Animal");
/// let dog = TypeTag::subtype_of("Dog", animal);
/// assert!(dog.is_a("Animal"));
/// assert!(!dog.is_a("Cat"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTag {
    name: String,
    parent: Option<Box<TypeTag>>,
}

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }

    pub fn subtype_of(name: impl Into<String>, parent: TypeTag) -> Self {
        Self {
            name: name.into(),
            parent: Some(Box::new(parent)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when this tag names `type_name` or inherits from it.
    pub fn is_a(&self, type_name: &str) -> bool {
        if self.name == type_name {
            return true;
        }
        match &self.parent {
            Some(parent) => parent.is_a(type_name),
            None => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A typed object: a type tag plus named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    tag: TypeTag,
    fields: HashMap<String, Value>,
}

impl Object {
    pub fn new(tag: TypeTag) -> Self {
        Self {
            tag,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }
}

/// A value handed to an assertion.
///
/// Assertions operate on this closed set of shapes so that canonical
/// display conversion and type matching are total functions over explicit
/// cases rather than runtime type probing.
///
/// # Examples
///
/// ```rust
/// use attest::value::Value;
/// let n = Value::Number(3.14);
/// assert_eq!(n.type_name(), "Number");
/// let absent = Value::default();
/// assert!(absent.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Absent,
    Number(f64),
    Text(String),
    Boolean(bool),
    Sequence(Vec<Value>),
    Mapping(HashMap<String, Value>),
    Object(Object),
}

impl Value {
    /// Returns the type name of the value. Objects report their tag name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attest::value::Value;
    /// assert_eq!(Value::Boolean(true).type_name(), "Boolean");
    /// ```
    pub fn type_name(&self) -> &str {
        match self {
            Value::Absent => "Absent",
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Boolean(_) => "Boolean",
            Value::Sequence(_) => "Sequence",
            Value::Mapping(_) => "Mapping",
            Value::Object(object) => object.tag.name(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// True for the collection shapes: sequences and mappings.
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True when this value's runtime type is `tag` or a subtype of it.
    /// Builtin shapes match by exact type name; objects walk their tag's
    /// inheritance chain.
    pub fn instance_of(&self, tag: &TypeTag) -> bool {
        match self {
            Value::Object(object) => object.tag.is_a(tag.name()),
            other => other.type_name() == tag.name(),
        }
    }

    fn fmt_sequence(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
        write!(f, "Sequence(")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }

    // Keys are sorted so equal mappings always render identically.
    fn fmt_fields(f: &mut fmt::Formatter<'_>, map: &HashMap<String, Value>) -> fmt::Result {
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();
        write!(f, "{{")?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, map[*key])?;
        }
        write!(f, "}}")
    }
}

/// Canonical display conversion used in all failure messages.
///
/// Total and deterministic: text and numbers render as-is, booleans as
/// `true`/`false`, collections as a tagged dump, objects as their type
/// name plus fields, absent as `absent`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "absent"),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Sequence(items) => Self::fmt_sequence(f, items),
            Value::Mapping(map) => {
                write!(f, "Mapping")?;
                Self::fmt_fields(f, map)
            }
            Value::Object(object) => {
                write!(f, "{}", object.tag.name())?;
                if object.fields.is_empty() {
                    Ok(())
                } else {
                    write!(f, " ")?;
                    Self::fmt_fields(f, &object.fields)
                }
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Mapping(map)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}
