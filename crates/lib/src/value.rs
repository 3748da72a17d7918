//! Value types stored in a collection.
//!
//! This module provides the [`Value`] enum, the closed set of types an
//! [`OrderedMap`] can hold. Values are either leaf values (null, booleans,
//! numbers, text) or branch values (nested maps and lists). It also provides
//! [`Comparison`], which selects between strict and loose equality for
//! value searches.

use std::fmt;

use indexmap::IndexMap;

use crate::{Collection, CollectionError, OrderedMap};

/// Values that can be stored in a collection.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - The absent value, also returned by indexer lookups of missing keys
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 strings
///
/// ## Branch Values
/// - [`Value::Map`] - Nested ordered maps
/// - [`Value::List`] - Ordered sequences
///
/// # Equality
///
/// `==` is strict: both the variant and the contents must match, so `Int(1)`
/// differs from `Float(1.0)` and `Int(0)` differs from `Bool(false)` and
/// `Text("")`. Coercive comparison is available through [`Value::loose_eq`].
///
/// ```
/// # use collection::Value;
/// assert!(Value::from(0) != Value::from(false));
/// assert!(Value::from(0).loose_eq(&Value::from(false)));
///
/// // Direct comparison with primitives
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::from(42) == 42);
/// assert!(!(Value::from("42") == 42));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    // Leaf values
    /// Null/absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),

    // Branch values
    /// Nested ordered map
    Map(OrderedMap),
    /// Ordered sequence of values
    List(Vec<Value>),
}

/// Selects the equality used when searching a collection by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Type and value must both match
    #[default]
    Strict,
    /// Values are coerced before comparing, see [`Value::loose_eq`]
    Loose,
}

impl Comparison {
    /// Compares two values under this comparison mode.
    pub fn matches(self, left: &Value, right: &Value) -> bool {
        match self {
            Comparison::Strict => left == right,
            Comparison::Loose => left.loose_eq(right),
        }
    }
}

impl Value {
    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (map or list)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Map(_) => "map",
            Value::List(_) => "list",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float` values.
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns whether the value counts as "true" when coerced to a boolean.
    ///
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"` and empty maps and lists are
    /// falsy. Everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Text(s) => !(s.is_empty() || s == "0"),
            Value::Map(map) => !map.is_empty(),
            Value::List(items) => !items.is_empty(),
        }
    }

    /// Compares two values with type coercion.
    ///
    /// - a boolean on either side compares truthiness
    /// - null equals the empty string, and otherwise any falsy value
    /// - integers and floats compare numerically
    /// - a number and a numeric string compare numerically; a number and any
    ///   other string compare as text
    /// - two numeric strings compare numerically, other strings byte-wise
    /// - maps need the same keys with loosely equal values, in any order
    /// - lists compare element-wise
    ///
    /// ```
    /// # use collection::Value;
    /// assert!(Value::from(1).loose_eq(&Value::from("1")));
    /// assert!(Value::from("1.0").loose_eq(&Value::from("1")));
    /// assert!(Value::Null.loose_eq(&Value::from("")));
    /// assert!(!Value::from(0).loose_eq(&Value::from("abc")));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(_), _) | (_, Value::Bool(_)) => self.is_truthy() == other.is_truthy(),
            (Value::Null, Value::Null) => true,
            (Value::Null, Value::Text(s)) | (Value::Text(s), Value::Null) => s.is_empty(),
            (Value::Null, _) | (_, Value::Null) => !self.is_truthy() && !other.is_truthy(),
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_number() == other.as_number()
            }
            (Value::Int(_) | Value::Float(_), Value::Text(s)) => number_loose_eq_text(self, s),
            (Value::Text(s), Value::Int(_) | Value::Float(_)) => number_loose_eq_text(other, s),
            (Value::Text(a), Value::Text(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (Value::Map(a), Value::Map(b)) => a.loose_eq(b),
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            _ => false,
        }
    }

    /// Returns true if branch values nest more than `limit` levels below this value.
    pub(crate) fn exceeds_depth(&self, limit: usize) -> bool {
        match self {
            Value::Map(map) => map.exceeds_depth(limit),
            Value::List(items) => children_exceed_depth(items, limit),
            _ => false,
        }
    }
}

/// Depth check over the children of a branch value. Leaves never count as a level.
pub(crate) fn children_exceed_depth<'a>(
    children: impl IntoIterator<Item = &'a Value>,
    limit: usize,
) -> bool {
    children
        .into_iter()
        .any(|child| child.is_branch() && (limit == 0 || child.exceeds_depth(limit - 1)))
}

/// Parses text the way a numeric string is recognised: optional surrounding
/// whitespace around a decimal or exponent literal.
fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let plausible = !trimmed.is_empty()
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !plausible {
        return None;
    }
    trimmed.parse().ok()
}

fn number_loose_eq_text(number: &Value, text: &str) -> bool {
    if let (Value::Int(n), Ok(parsed)) = (number, text.trim().parse::<i64>()) {
        return *n == parsed;
    }
    match parse_numeric(text) {
        Some(parsed) => number.as_number() == Some(parsed),
        None => number.to_string() == text,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Map(map) => write!(f, "{map}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<OrderedMap> for Value {
    fn from(value: OrderedMap) -> Self {
        Value::Map(value)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Value::Map(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => items.into(),
            serde_json::Value::Object(object) => {
                Value::Map(object.into_iter().collect::<OrderedMap>())
            }
        }
    }
}

// TryFrom implementations for typed extraction
impl TryFrom<&Value> for bool {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl TryFrom<&Value> for i64 {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| mismatch("int", value))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl TryFrom<&Value> for String {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| mismatch("text", value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = CollectionError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| mismatch("text", value))
    }
}

impl TryFrom<&Value> for OrderedMap {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_map().cloned().ok_or_else(|| mismatch("map", value))
    }
}

fn mismatch(expected: &str, value: &Value) -> CollectionError {
    CollectionError::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

// PartialEq implementations for comparing Value with primitives (strict)
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_float() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
