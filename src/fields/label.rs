//! Label sub-widget

use crate::attributes::{Attributes, ClassValue};
use crate::error::{FieldError, FieldResult};
use crate::factory::{FieldSetter, LabelSetter};
use crate::form_model::{self, FormModel};
use crate::html;

/// Configuration of a `<label>` sub-widget.
///
/// Embedded in every field's configuration and reused by the standalone
/// [`Label`] widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
	pub(crate) attributes: Attributes,
	pub(crate) set_for: bool,
	pub(crate) use_input_id: bool,
	pub(crate) content: Option<String>,
}

impl Default for LabelConfig {
	fn default() -> Self {
		Self {
			attributes: Attributes::new(),
			set_for: true,
			use_input_id: true,
			content: None,
		}
	}
}

impl LabelConfig {
	/// Attributes of the label tag. Replaces the whole bag.
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Set, replace, or remove the label's `class` attribute.
	pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
		self.attributes.set_class(class);
		self
	}

	/// Whether to emit a `for` attribute at all.
	pub fn set_for(mut self, value: bool) -> Self {
		self.set_for = value;
		self
	}

	/// Whether the `for` attribute is derived from the input's id.
	pub fn use_input_id(mut self, value: bool) -> Self {
		self.use_input_id = value;
		self
	}

	/// Explicit label text overriding the model's label.
	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	pub(crate) fn apply(self, setter: &LabelSetter) -> Self {
		match setter {
			LabelSetter::Attributes(attributes) => self.attributes(attributes.clone()),
			LabelSetter::Class(class) => self.class(class.clone()),
			LabelSetter::SetFor(value) => self.set_for(*value),
			LabelSetter::UseInputId(value) => self.use_input_id(*value),
			LabelSetter::Content(content) => self.content(content.clone()),
		}
	}
}

/// Render a label fragment for a model attribute. Empty text renders as the
/// empty string so the `{label}` placeholder collapses.
pub(crate) fn render_part(
	config: &LabelConfig,
	model: &dyn FormModel,
	attribute: &str,
	input_id: Option<&str>,
) -> String {
	let text = config
		.content
		.clone()
		.unwrap_or_else(|| model.label(attribute));
	if text.is_empty() {
		return String::new();
	}

	let mut attributes = config.attributes.clone();
	if config.set_for
		&& config.use_input_id
		&& attributes.get("for").is_none()
		&& let Some(id) = input_id
	{
		attributes.insert("for", id);
	}
	html::tag("label", &attributes, &html::escape(&text))
}

/// Standalone `<label>` widget bound to a model attribute.
#[derive(Debug)]
pub struct Label<'a> {
	pub(crate) model: &'a dyn FormModel,
	pub(crate) attribute: String,
	pub(crate) config: LabelConfig,
}

impl<'a> Label<'a> {
	/// Bind a label to a model attribute.
	pub fn new(model: &'a dyn FormModel, attribute: impl Into<String>) -> Self {
		Self {
			model,
			attribute: attribute.into(),
			config: LabelConfig::default(),
		}
	}

	/// Attributes of the label tag.
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.config = self.config.attributes(attributes);
		self
	}

	/// Set, replace, or remove the label's `class` attribute.
	pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
		self.config = self.config.class(class);
		self
	}

	/// Whether to emit a `for` attribute.
	pub fn set_for(mut self, value: bool) -> Self {
		self.config = self.config.set_for(value);
		self
	}

	/// Whether the `for` attribute is derived from the input's id.
	pub fn use_input_id(mut self, value: bool) -> Self {
		self.config = self.config.use_input_id(value);
		self
	}

	/// Explicit label text overriding the model's label.
	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.config = self.config.content(content);
		self
	}

	/// Part widgets carry no common field configuration, so every override
	/// sequence entry fails with `InvalidConfiguration` naming the option;
	/// labels are configured through `labelConfig` instead.
	pub fn apply(self, setter: &FieldSetter) -> FieldResult<Self> {
		Err(FieldError::unsupported_option(setter.name(), "Label"))
	}

	/// Render the label tag.
	pub fn render(&self) -> String {
		let input_id = form_model::input_id(self.model, &self.attribute);
		render_part(&self.config, self.model, &self.attribute, Some(&input_id))
	}
}
