//! Text input field

use crate::attributes::{Attributes, ClassValue};
use crate::error::FieldResult;
use crate::factory::FieldSetter;
use crate::field::{self, FieldConfig, InputField};
use crate::form_model::{self, FormModel};
use crate::html;

/// A `type="text"` input composed with label, hint, and error fragments.
///
/// The input's `value` comes from the model; a `placeholder` attribute is
/// emitted when the model provides placeholder text (unless suppressed via
/// `use_placeholder(false)`), and a `required` attribute when rule
/// enrichment is enabled and the model marks the attribute required.
#[derive(Debug)]
pub struct Text<'a> {
	pub(crate) model: &'a dyn FormModel,
	pub(crate) attribute: String,
	pub(crate) config: FieldConfig,
}

impl<'a> Text<'a> {
	/// Bind a text field to a model attribute.
	pub fn new(model: &'a dyn FormModel, attribute: impl Into<String>) -> Self {
		Self {
			model,
			attribute: attribute.into(),
			config: FieldConfig::default(),
		}
	}

	/// Template with `{label}`, `{input}`, `{hint}`, `{error}` placeholders.
	pub fn template(mut self, template: impl Into<String>) -> Self {
		self.config = self.config.template(template);
		self
	}

	/// Tag wrapping the composed field; `div` by default.
	pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
		self.config = self.config.container_tag(tag);
		self
	}

	/// Attributes of the container tag.
	pub fn container_attributes(mut self, attributes: Attributes) -> Self {
		self.config = self.config.container_attributes(attributes);
		self
	}

	/// Set, replace, or remove the container's `class` attribute.
	pub fn container_class(mut self, class: impl Into<ClassValue>) -> Self {
		self.config = self.config.container_class(class);
		self
	}

	/// Whether to wrap the composed field in the container tag.
	pub fn use_container(mut self, value: bool) -> Self {
		self.config = self.config.use_container(value);
		self
	}

	/// Attributes of the input tag.
	pub fn input_attributes(mut self, attributes: Attributes) -> Self {
		self.config = self.config.input_attributes(attributes);
		self
	}

	/// Set, replace, or remove the input's `class` attribute.
	pub fn input_class(mut self, class: impl Into<ClassValue>) -> Self {
		self.config = self.config.input_class(class);
		self
	}

	/// Whether to derive `id`/`for` attributes for input and label.
	pub fn set_input_id(mut self, value: bool) -> Self {
		self.config = self.config.set_input_id(value);
		self
	}

	/// Whether to emit a `placeholder` attribute from the model.
	pub fn use_placeholder(mut self, value: bool) -> Self {
		self.config = self.config.use_placeholder(value);
		self
	}

	/// Container class for the error-free state.
	pub fn valid_class(mut self, class: impl Into<Option<String>>) -> Self {
		self.config = self.config.valid_class(class);
		self
	}

	/// Container class for the errored state.
	pub fn invalid_class(mut self, class: impl Into<Option<String>>) -> Self {
		self.config = self.config.invalid_class(class);
		self
	}

	/// Apply a configuration setter; fails with `InvalidConfiguration` for
	/// setters text fields do not support.
	pub fn apply(mut self, setter: &FieldSetter) -> FieldResult<Self> {
		self.config = self.config.apply_common(setter, "Text")?;
		Ok(self)
	}
}

impl InputField for Text<'_> {
	fn config(&self) -> &FieldConfig {
		&self.config
	}

	fn model(&self) -> &dyn FormModel {
		self.model
	}

	fn attribute(&self) -> &str {
		&self.attribute
	}

	fn widget_name(&self) -> &'static str {
		"Text"
	}

	fn build_input(&self) -> FieldResult<String> {
		let config = &self.config;
		let value = self.model.value(&self.attribute);
		let value_text = field::scalar_text("Text", &value)?;

		let mut attributes = Attributes::new();
		attributes.insert("type", "text");
		if config.set_input_id {
			attributes.insert("id", form_model::input_id(self.model, &self.attribute));
		}
		if let Some(class) = config.input_attributes.get("class") {
			attributes.insert("class", class.clone());
		}
		attributes.insert("name", form_model::input_name(self.model, &self.attribute));
		attributes.insert("value", value_text);
		if config.use_placeholder
			&& let Some(placeholder) = self.model.placeholder(&self.attribute)
		{
			attributes.insert("placeholder", placeholder);
		}
		if config.enrich_from_rules && self.model.is_required(&self.attribute) {
			attributes.insert("required", true);
		}

		// Remaining configured attributes follow the computed ones; class
		// was already pulled into its slot above.
		let mut extra = config.input_attributes.clone();
		extra.remove("class");
		Ok(html::void_tag("input", &attributes.merge(&extra)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::{Value, json};

	#[derive(Debug)]
	struct PersonForm;

	impl FormModel for PersonForm {
		fn form_name(&self) -> &str {
			"PersonForm"
		}

		fn attribute_names(&self) -> Vec<String> {
			vec!["name".to_string(), "tags".to_string()]
		}

		fn value(&self, attribute: &str) -> Value {
			match attribute {
				"tags" => json!(["a", "b"]),
				_ => json!("John"),
			}
		}

		fn placeholder(&self, attribute: &str) -> Option<String> {
			(attribute == "name").then(|| "Your name".to_string())
		}
	}

	#[test]
	fn test_build_input_with_value_and_placeholder() {
		let field = Text::new(&PersonForm, "name");
		assert_eq!(
			field.build_input().unwrap(),
			r#"<input type="text" id="personform-name" name="PersonForm[name]" value="John" placeholder="Your name">"#
		);
	}

	#[test]
	fn test_placeholder_suppressed() {
		let field = Text::new(&PersonForm, "name").use_placeholder(false);
		assert_eq!(
			field.build_input().unwrap(),
			r#"<input type="text" id="personform-name" name="PersonForm[name]" value="John">"#
		);
	}

	#[test]
	fn test_field_is_debuggable() {
		let field = Text::new(&PersonForm, "name");
		let rendered = format!("{field:?}");
		assert!(rendered.contains("Text"), "debug output: {rendered}");
		assert!(rendered.contains("PersonForm"), "debug output: {rendered}");
	}

	#[test]
	fn test_composite_value_fails() {
		let field = Text::new(&PersonForm, "tags");
		assert!(field.build_input().is_err());
	}

	#[test]
	fn test_custom_attributes_follow_computed_ones() {
		let field = Text::new(&PersonForm, "name")
			.set_input_id(false)
			.use_placeholder(false)
			.input_attributes(Attributes::new().with("class", "form-control").with("data-role", "input"));
		assert_eq!(
			field.build_input().unwrap(),
			r#"<input type="text" class="form-control" name="PersonForm[name]" value="John" data-role="input">"#
		);
	}
}
