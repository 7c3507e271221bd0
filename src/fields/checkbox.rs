//! Checkbox input field
//!
//! Generates the `checked` attribute by comparing the stringified model
//! value against the configured "on" value, renders a hidden companion
//! input carrying the uncheck value, and by default encloses the checkbox
//! in a `<label>` tag.

use crate::attributes::{AttrValue, Attributes, ClassValue};
use crate::error::FieldResult;
use crate::factory::FieldSetter;
use crate::field::{self, FieldConfig, InputField};
use crate::form_model::{self, FormModel};
use crate::html;

/// A `type="checkbox"` input field.
#[derive(Debug)]
pub struct Checkbox<'a> {
	pub(crate) model: &'a dyn FormModel,
	pub(crate) attribute: String,
	pub(crate) config: FieldConfig,
	pub(crate) enclosed_by_label: bool,
	pub(crate) label: Option<String>,
	pub(crate) label_attributes: Attributes,
	pub(crate) uncheck_value: AttrValue,
	pub(crate) value: AttrValue,
}

/// Booleans are coerced to 0/1 so they stringify the way form values do.
fn coerce_bool(value: AttrValue) -> AttrValue {
	match value {
		AttrValue::Bool(flag) => AttrValue::Int(flag as i64),
		other => other,
	}
}

impl<'a> Checkbox<'a> {
	/// Bind a checkbox to a model attribute. The "on" value defaults to
	/// `"1"` and the uncheck value to `"0"`.
	pub fn new(model: &'a dyn FormModel, attribute: impl Into<String>) -> Self {
		Self {
			model,
			attribute: attribute.into(),
			config: FieldConfig::default(),
			enclosed_by_label: true,
			label: None,
			label_attributes: Attributes::new(),
			uncheck_value: AttrValue::String("0".to_string()),
			value: AttrValue::String("1".to_string()),
		}
	}

	/// Whether the checkbox input is enclosed by a `<label>` tag. Enabled by
	/// default; when enabled, the field-level `{label}` placeholder
	/// collapses.
	pub fn enclosed_by_label(mut self, value: bool) -> Self {
		self.enclosed_by_label = value;
		self
	}

	/// Label text displayed next to the checkbox, overriding the model's
	/// label. Only used when the checkbox is enclosed by a label.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Attributes of the enclosing label tag.
	pub fn label_attributes(mut self, attributes: Attributes) -> Self {
		self.label_attributes = attributes;
		self
	}

	/// Value submitted for the "unchecked" state via a hidden companion
	/// input. `None` disables the hidden input; booleans are coerced to 0/1.
	pub fn uncheck_value(mut self, value: impl Into<AttrValue>) -> Self {
		self.uncheck_value = coerce_bool(value.into());
		self
	}

	/// The "on" value of the checkbox; booleans are coerced to 0/1.
	pub fn value(mut self, value: impl Into<AttrValue>) -> Self {
		self.value = coerce_bool(value.into());
		self
	}

	pub fn template(mut self, template: impl Into<String>) -> Self {
		self.config = self.config.template(template);
		self
	}

	pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
		self.config = self.config.container_tag(tag);
		self
	}

	pub fn container_attributes(mut self, attributes: Attributes) -> Self {
		self.config = self.config.container_attributes(attributes);
		self
	}

	pub fn container_class(mut self, class: impl Into<ClassValue>) -> Self {
		self.config = self.config.container_class(class);
		self
	}

	pub fn use_container(mut self, value: bool) -> Self {
		self.config = self.config.use_container(value);
		self
	}

	pub fn input_attributes(mut self, attributes: Attributes) -> Self {
		self.config = self.config.input_attributes(attributes);
		self
	}

	pub fn input_class(mut self, class: impl Into<ClassValue>) -> Self {
		self.config = self.config.input_class(class);
		self
	}

	pub fn set_input_id(mut self, value: bool) -> Self {
		self.config = self.config.set_input_id(value);
		self
	}

	pub fn valid_class(mut self, class: impl Into<Option<String>>) -> Self {
		self.config = self.config.valid_class(class);
		self
	}

	pub fn invalid_class(mut self, class: impl Into<Option<String>>) -> Self {
		self.config = self.config.invalid_class(class);
		self
	}

	/// Apply a configuration setter; fails with `InvalidConfiguration` for
	/// setters checkboxes do not support.
	pub fn apply(mut self, setter: &FieldSetter) -> FieldResult<Self> {
		match setter {
			FieldSetter::EnclosedByLabel(value) => Ok(self.enclosed_by_label(*value)),
			FieldSetter::Label(label) => Ok(self.label(label.clone())),
			FieldSetter::LabelAttributes(attributes) => Ok(self.label_attributes(attributes.clone())),
			FieldSetter::UncheckValue(value) => Ok(self.uncheck_value(value.clone())),
			FieldSetter::Value(value) => Ok(self.value(value.clone())),
			other => {
				self.config = self.config.apply_common(other, "Checkbox")?;
				Ok(self)
			}
		}
	}

	/// The configured "on" value; an explicit `value` input attribute wins
	/// over the configured one.
	fn configured_value(&self) -> AttrValue {
		self.config
			.input_attributes
			.get("value")
			.cloned()
			.map(coerce_bool)
			.unwrap_or_else(|| self.value.clone())
	}
}

impl InputField for Checkbox<'_> {
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
		"Checkbox"
	}

	fn hides_label(&self) -> bool {
		self.enclosed_by_label
	}

	fn build_input(&self) -> FieldResult<String> {
		let config = &self.config;
		let model_value = self.model.value(&self.attribute);
		let model_text = field::scalar_text("Checkbox", &model_value)?;
		let name = form_model::input_name(self.model, &self.attribute);

		let configured = self.configured_value();
		let on_text = configured.as_text().unwrap_or_default();

		let mut attributes = Attributes::new();
		attributes.insert("type", "checkbox");
		if config.set_input_id {
			attributes.insert("id", form_model::input_id(self.model, &self.attribute));
		}
		if let Some(class) = config.input_attributes.get("class") {
			attributes.insert("class", class.clone());
		}
		attributes.insert("name", name.clone());
		attributes.insert("value", configured);
		if model_text == on_text {
			attributes.insert("checked", true);
		}

		let mut extra = config.input_attributes.clone();
		extra.remove("class");
		extra.remove("value");
		let mut input = html::void_tag("input", &attributes.merge(&extra));

		if self.enclosed_by_label {
			let text = self
				.label
				.clone()
				.unwrap_or_else(|| self.model.label(&self.attribute));
			input = html::tag(
				"label",
				&self.label_attributes,
				&format!("{input} {}", html::escape(&text)),
			);
		}

		if self.uncheck_value != AttrValue::Null {
			let hidden = Attributes::new()
				.with("type", "hidden")
				.with("name", name)
				.with("value", self.uncheck_value.clone());
			input = format!("{}{input}", html::void_tag("input", &hidden));
		}

		Ok(input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FieldError;
	use rstest::rstest;
	use serde_json::{Value, json};

	#[derive(Debug)]
	struct ColorForm;

	impl FormModel for ColorForm {
		fn form_name(&self) -> &str {
			"ColorForm"
		}

		fn attribute_names(&self) -> Vec<String> {
			vec!["red".to_string(), "blue".to_string(), "age".to_string(), "object".to_string()]
		}

		fn value(&self, attribute: &str) -> Value {
			match attribute {
				"red" => json!(true),
				"blue" => json!(false),
				"age" => json!(42),
				_ => json!({"nested": true}),
			}
		}

		fn label(&self, attribute: &str) -> String {
			match attribute {
				"red" => "Red color".to_string(),
				"blue" => "Blue color".to_string(),
				_ => attribute.to_string(),
			}
		}
	}

	#[rstest]
	#[case::true_matches_default_on_value("red", true)]
	#[case::false_does_not_match("blue", false)]
	#[case::number_does_not_match_default("age", false)]
	fn test_checked_state(#[case] attribute: &str, #[case] checked: bool) {
		let field = Checkbox::new(&ColorForm, attribute);
		let input = field.build_input().unwrap();
		assert_eq!(input.contains(" checked"), checked, "input: {input}");
	}

	#[rstest]
	fn test_enclosed_by_label_output() {
		let field = Checkbox::new(&ColorForm, "red");
		assert_eq!(
			field.build_input().unwrap(),
			concat!(
				r#"<input type="hidden" name="ColorForm[red]" value="0">"#,
				r#"<label><input type="checkbox" id="colorform-red" name="ColorForm[red]" value="1" checked> Red color</label>"#,
			)
		);
	}

	#[rstest]
	fn test_bare_checkbox_without_label_or_uncheck() {
		let field = Checkbox::new(&ColorForm, "blue")
			.enclosed_by_label(false)
			.uncheck_value(None::<i64>);
		assert_eq!(
			field.build_input().unwrap(),
			r#"<input type="checkbox" id="colorform-blue" name="ColorForm[blue]" value="1">"#
		);
	}

	#[rstest]
	fn test_custom_on_value_matches_number() {
		let field = Checkbox::new(&ColorForm, "age").value(42i64);
		assert!(field.build_input().unwrap().contains(" checked"));
	}

	#[rstest]
	fn test_boolean_uncheck_value_is_coerced() {
		let field = Checkbox::new(&ColorForm, "blue").uncheck_value(false);
		assert!(
			field
				.build_input()
				.unwrap()
				.starts_with(r#"<input type="hidden" name="ColorForm[blue]" value="0">"#)
		);
	}

	#[rstest]
	fn test_object_value_fails() {
		let field = Checkbox::new(&ColorForm, "object");
		assert!(matches!(
			field.build_input().unwrap_err(),
			FieldError::InvalidInputType {
				widget: "Checkbox",
				..
			}
		));
	}

	#[rstest]
	fn test_explicit_value_attribute_wins() {
		let field = Checkbox::new(&ColorForm, "age")
			.input_attributes(Attributes::new().with("value", 42i64));
		let input = field.build_input().unwrap();
		assert!(input.contains(r#"value="42" checked"#), "input: {input}");
	}
}
