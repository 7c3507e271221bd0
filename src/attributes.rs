//! HTML attribute bag with class accumulation
//!
//! Attributes are stored in insertion order so that rendered markup is
//! deterministic. The `class` attribute is special-cased throughout: merging
//! two bags concatenates their classes instead of overwriting, and
//! [`Attributes::set_class`] accepts a string, a list of strings, or nothing.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::html;

/// Scalar value of a single HTML attribute.
///
/// Rendering rules:
/// - `Null` and `Bool(false)` omit the attribute entirely
/// - `Bool(true)` and the empty string render the bare attribute name
///   (`checked`, `value`)
/// - everything else renders as `name="escaped value"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
}

impl AttrValue {
	/// Stringify the value for comparisons and class handling.
	///
	/// Booleans become `"1"`/`"0"` so that a checkbox configured with value
	/// `"1"` matches a boolean model value. `Null` has no text.
	///
	/// # Examples
	///
	/// ```
	/// use formweave::AttrValue;
	///
	/// assert_eq!(AttrValue::Bool(true).as_text(), Some("1".to_string()));
	/// assert_eq!(AttrValue::Int(42).as_text(), Some("42".to_string()));
	/// assert_eq!(AttrValue::Null.as_text(), None);
	/// ```
	pub fn as_text(&self) -> Option<String> {
		match self {
			Self::Null => None,
			Self::Bool(value) => Some(if *value { "1" } else { "0" }.to_string()),
			Self::Int(value) => Some(value.to_string()),
			Self::Float(value) => Some(value.to_string()),
			Self::String(value) => Some(value.clone()),
		}
	}

	fn write_html(&self, name: &str, out: &mut String) {
		match self {
			Self::Null | Self::Bool(false) => {}
			Self::Bool(true) => {
				out.push(' ');
				out.push_str(name);
			}
			Self::String(value) if value.is_empty() => {
				out.push(' ');
				out.push_str(name);
			}
			other => {
				// `other` is never Null/Bool(false) here, as_text is Some
				let text = other.as_text().unwrap_or_default();
				out.push(' ');
				out.push_str(name);
				out.push_str("=\"");
				out.push_str(&html::escape(&text));
				out.push('"');
			}
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Int(value as i64)
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl<T> From<Option<T>> for AttrValue
where
	T: Into<AttrValue>,
{
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Self::Null)
	}
}

/// CSS class specification: nothing, a single class string, or an ordered
/// list of classes joined with single spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
	None,
	One(String),
	Many(Vec<String>),
}

impl ClassValue {
	/// Joined class text, or `None` when the class should be removed.
	pub fn as_text(&self) -> Option<String> {
		match self {
			Self::None => None,
			Self::One(value) => Some(value.clone()),
			Self::Many(values) => Some(values.join(" ")),
		}
	}
}

impl From<&str> for ClassValue {
	fn from(value: &str) -> Self {
		Self::One(value.to_string())
	}
}

impl From<String> for ClassValue {
	fn from(value: String) -> Self {
		Self::One(value)
	}
}

impl From<Vec<String>> for ClassValue {
	fn from(values: Vec<String>) -> Self {
		Self::Many(values)
	}
}

impl From<Vec<&str>> for ClassValue {
	fn from(values: Vec<&str>) -> Self {
		Self::Many(values.into_iter().map(String::from).collect())
	}
}

impl<T> From<Option<T>> for ClassValue
where
	T: Into<ClassValue>,
{
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Self::None)
	}
}

/// Insertion-ordered bag of HTML attributes.
///
/// Replacing an existing attribute keeps its original position, so computed
/// attributes (`type`, `id`, `name`, ...) stay where the widget put them even
/// when user configuration overrides their values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
	entries: Vec<(String, AttrValue)>,
}

impl Attributes {
	/// Create an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of attributes in the bag.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the bag holds no attributes.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Set an attribute, replacing any existing value in place.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Builder-style [`insert`](Self::insert).
	///
	/// # Examples
	///
	/// ```
	/// use formweave::Attributes;
	///
	/// let attributes = Attributes::new().with("type", "text").with("required", true);
	/// assert_eq!(attributes.render(), r#" type="text" required"#);
	/// ```
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Look up an attribute by name.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	/// Remove an attribute, returning its value if present.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		let position = self.entries.iter().position(|(key, _)| key == name)?;
		Some(self.entries.remove(position).1)
	}

	/// Set, replace, or remove the `class` attribute.
	///
	/// `ClassValue::None` removes the key entirely; a list is joined with
	/// single spaces preserving order; a string is set verbatim.
	///
	/// # Examples
	///
	/// ```
	/// use formweave::Attributes;
	///
	/// let mut attributes = Attributes::new();
	/// attributes.set_class(vec!["red", "blue"]);
	/// assert_eq!(attributes.render(), r#" class="red blue""#);
	///
	/// attributes.set_class(None::<&str>);
	/// assert!(attributes.is_empty());
	/// ```
	pub fn set_class(&mut self, class: impl Into<ClassValue>) {
		match class.into().as_text() {
			Some(text) => self.insert("class", text),
			None => {
				self.remove("class");
			}
		}
	}

	/// Append a class to the existing `class` attribute, space-separated.
	/// Duplicates are allowed.
	pub fn add_class(&mut self, class: &str) {
		let text = match self.get("class").and_then(AttrValue::as_text) {
			Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
			_ => class.to_string(),
		};
		self.insert("class", text);
	}

	/// Merge `other` into a copy of this bag.
	///
	/// Keys from `other` replace keys of this bag, except `class`, which
	/// accumulates: this bag's classes followed by the other's, space-joined,
	/// without de-duplication. Pure; neither input is mutated.
	///
	/// # Examples
	///
	/// ```
	/// use formweave::Attributes;
	///
	/// let mut base = Attributes::new().with("name", "user");
	/// base.set_class(vec!["a", "b"]);
	/// let mut overrides = Attributes::new().with("name", "account");
	/// overrides.set_class("c");
	///
	/// let merged = base.merge(&overrides);
	/// assert_eq!(merged.render(), r#" name="account" class="a b c""#);
	/// ```
	pub fn merge(&self, other: &Attributes) -> Attributes {
		let mut merged = self.clone();
		for (name, value) in &other.entries {
			if name == "class" {
				if let Some(text) = value.as_text() {
					merged.add_class(&text);
				}
			} else {
				merged.insert(name.clone(), value.clone());
			}
		}
		merged
	}

	/// Render the bag as a string of ` name="value"` pairs in insertion
	/// order, with a leading space when non-empty.
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (name, value) in &self.entries {
			value.write_html(name, &mut out);
		}
		out
	}

	/// Iterate over the entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value))
	}
}

// Serialized as a JSON map; the hand-written visitor preserves document
// order, which a derived map-based implementation would not.
impl Serialize for Attributes {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, value) in &self.entries {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for Attributes {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct AttributesVisitor;

		impl<'de> Visitor<'de> for AttributesVisitor {
			type Value = Attributes;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				formatter.write_str("a map of attribute names to scalar values")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut attributes = Attributes::new();
				while let Some((name, value)) = access.next_entry::<String, AttrValue>()? {
					attributes.insert(name, value);
				}
				Ok(attributes)
			}
		}

		deserializer.deserialize_map(AttributesVisitor)
	}
}
