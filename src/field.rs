//! Input field base: shared configuration and render composition
//!
//! Every renderable field is built from a [`FieldConfig`] — an immutable bag
//! of container, template, and sub-widget settings — plus a concrete widget
//! that knows how to build its `{input}` fragment. The provided
//! [`InputField::render`] composes label, input, hint, and error fragments
//! into the configured template and optionally wraps the result in a
//! container tag.

use serde_json::Value;

use crate::attributes::{Attributes, ClassValue};
use crate::error::{FieldError, FieldResult};
use crate::factory::FieldSetter;
use crate::fields::error::{self as error_part, ErrorConfig};
use crate::fields::hint::{self as hint_part, HintConfig};
use crate::fields::label::{self as label_part, LabelConfig};
use crate::form_model::{self, FormModel};
use crate::html;

/// Default field template.
pub const DEFAULT_TEMPLATE: &str = "{label}\n{input}\n{hint}\n{error}";

/// Immutable configuration shared by all field types.
///
/// Every mutator consumes the receiver and returns the updated
/// configuration; the type is `Clone`, so callers branch configurations by
/// cloning before mutating.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
	pub(crate) container_tag: String,
	pub(crate) container_attributes: Attributes,
	pub(crate) use_container: bool,
	pub(crate) template: String,
	pub(crate) template_begin: String,
	pub(crate) template_end: String,
	pub(crate) input_attributes: Attributes,
	pub(crate) set_input_id: bool,
	pub(crate) use_placeholder: bool,
	pub(crate) valid_class: Option<String>,
	pub(crate) invalid_class: Option<String>,
	pub(crate) enrich_from_rules: bool,
	pub(crate) label: LabelConfig,
	pub(crate) hint: HintConfig,
	pub(crate) error: ErrorConfig,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			container_tag: "div".to_string(),
			container_attributes: Attributes::new(),
			use_container: true,
			template: DEFAULT_TEMPLATE.to_string(),
			template_begin: "{input}".to_string(),
			template_end: "{input}".to_string(),
			input_attributes: Attributes::new(),
			set_input_id: true,
			use_placeholder: true,
			valid_class: None,
			invalid_class: None,
			enrich_from_rules: false,
			label: LabelConfig::default(),
			hint: HintConfig::default(),
			error: ErrorConfig::default(),
		}
	}
}

impl FieldConfig {
	/// Template string with `{label}`, `{input}`, `{hint}`, `{error}`
	/// placeholders for the composed field body.
	pub fn template(mut self, template: impl Into<String>) -> Self {
		self.template = template.into();
		self
	}

	/// Template for the opening fragment of split rendering (`begin()`),
	/// with an `{input}` placeholder.
	pub fn template_begin(mut self, template: impl Into<String>) -> Self {
		self.template_begin = template.into();
		self
	}

	/// Template for the closing fragment of split rendering (`end()`).
	pub fn template_end(mut self, template: impl Into<String>) -> Self {
		self.template_end = template.into();
		self
	}

	/// Tag wrapping the composed field; `div` by default.
	pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
		self.container_tag = tag.into();
		self
	}

	/// Attributes of the container tag. Replaces the whole bag.
	pub fn container_attributes(mut self, attributes: Attributes) -> Self {
		self.container_attributes = attributes;
		self
	}

	/// Set, replace, or remove the container's `class` attribute.
	pub fn container_class(mut self, class: impl Into<ClassValue>) -> Self {
		self.container_attributes.set_class(class);
		self
	}

	/// Whether to wrap the composed field in the container tag.
	pub fn use_container(mut self, value: bool) -> Self {
		self.use_container = value;
		self
	}

	/// Attributes of the input tag. Replaces the whole bag.
	pub fn input_attributes(mut self, attributes: Attributes) -> Self {
		self.input_attributes = attributes;
		self
	}

	/// Set, replace, or remove the input's `class` attribute.
	pub fn input_class(mut self, class: impl Into<ClassValue>) -> Self {
		self.input_attributes.set_class(class);
		self
	}

	/// Whether to derive an `id` attribute for the input (and the matching
	/// `for` on the label).
	pub fn set_input_id(mut self, value: bool) -> Self {
		self.set_input_id = value;
		self
	}

	/// Whether to emit a `placeholder` attribute when the model provides
	/// placeholder text.
	pub fn use_placeholder(mut self, value: bool) -> Self {
		self.use_placeholder = value;
		self
	}

	/// Class appended to the container when the attribute has no validation
	/// errors.
	pub fn valid_class(mut self, class: impl Into<Option<String>>) -> Self {
		self.valid_class = class.into();
		self
	}

	/// Class appended to the container when the attribute has validation
	/// errors.
	pub fn invalid_class(mut self, class: impl Into<Option<String>>) -> Self {
		self.invalid_class = class.into();
		self
	}

	/// Whether inputs pick up a `required` attribute from the model's
	/// validation rules.
	pub fn enrich_from_rules(mut self, value: bool) -> Self {
		self.enrich_from_rules = value;
		self
	}

	/// Replace the label sub-widget configuration.
	pub fn label_config(mut self, config: LabelConfig) -> Self {
		self.label = config;
		self
	}

	/// Replace the hint sub-widget configuration.
	pub fn hint_config(mut self, config: HintConfig) -> Self {
		self.hint = config;
		self
	}

	/// Replace the error sub-widget configuration.
	pub fn error_config(mut self, config: ErrorConfig) -> Self {
		self.error = config;
		self
	}

	/// Apply a common setter, failing with `InvalidConfiguration` for
	/// setters the given widget does not support.
	pub(crate) fn apply_common(
		self,
		setter: &FieldSetter,
		widget: &'static str,
	) -> FieldResult<Self> {
		match setter {
			FieldSetter::Template(template) => Ok(self.template(template.clone())),
			FieldSetter::TemplateBegin(template) => Ok(self.template_begin(template.clone())),
			FieldSetter::TemplateEnd(template) => Ok(self.template_end(template.clone())),
			FieldSetter::ContainerTag(tag) => {
				if tag.is_empty() {
					return Err(FieldError::InvalidConfiguration(
						"container tag name cannot be empty".to_string(),
					));
				}
				Ok(self.container_tag(tag.clone()))
			}
			FieldSetter::ContainerAttributes(attributes) => {
				Ok(self.container_attributes(attributes.clone()))
			}
			FieldSetter::ContainerClass(class) => Ok(self.container_class(class.clone())),
			FieldSetter::UseContainer(value) => Ok(self.use_container(*value)),
			FieldSetter::InputAttributes(attributes) => {
				Ok(self.input_attributes(attributes.clone()))
			}
			FieldSetter::InputClass(class) => Ok(self.input_class(class.clone())),
			FieldSetter::SetInputId(value) => Ok(self.set_input_id(*value)),
			FieldSetter::UsePlaceholder(value) => Ok(self.use_placeholder(*value)),
			FieldSetter::ValidClass(class) => Ok(self.valid_class(class.clone())),
			FieldSetter::InvalidClass(class) => Ok(self.invalid_class(class.clone())),
			other => Err(FieldError::unsupported_option(other.name(), widget)),
		}
	}
}

/// A field whose `{input}` fragment is a model-bound input widget.
///
/// Implementors supply the configuration, the model binding, and the input
/// fragment; the provided [`render`](Self::render) does the composition.
pub trait InputField: std::fmt::Debug {
	/// Shared field configuration.
	fn config(&self) -> &FieldConfig;

	/// The bound form model.
	fn model(&self) -> &dyn FormModel;

	/// The bound attribute name.
	fn attribute(&self) -> &str;

	/// Widget name used in error messages.
	fn widget_name(&self) -> &'static str;

	/// Build the `{input}` fragment.
	fn build_input(&self) -> FieldResult<String>;

	/// Whether the field-level `{label}` placeholder should collapse because
	/// the widget renders the label itself (checkbox enclosed by label).
	fn hides_label(&self) -> bool {
		false
	}

	/// Compose the full field.
	///
	/// 1. Resolve the input id when `set_input_id` is enabled.
	/// 2. Build the `{input}` fragment; this is where `InvalidInputType`
	///    surfaces.
	/// 3. Render `{label}`, `{hint}`, `{error}` fragments; empty content
	///    renders as the empty string.
	/// 4. Substitute into the template, dropping lines left blank by empty
	///    fragments.
	/// 5. Append the valid or invalid class to the container attributes
	///    according to the model's error state.
	/// 6. Wrap in the container tag unless disabled.
	fn render(&self) -> FieldResult<String> {
		let config = self.config();
		let model = self.model();
		let attribute = self.attribute();

		let input_id = config
			.set_input_id
			.then(|| form_model::input_id(model, attribute));
		let input = self.build_input()?;
		let label = if self.hides_label() {
			String::new()
		} else {
			label_part::render_part(&config.label, model, attribute, input_id.as_deref())
		};
		let hint = hint_part::render_part(&config.hint, model, attribute);
		let error = error_part::render_part(&config.error, model, attribute);

		let content = substitute_template(
			&config.template,
			&[
				("{label}", label.as_str()),
				("{input}", input.as_str()),
				("{hint}", hint.as_str()),
				("{error}", error.as_str()),
			],
		);

		if !config.use_container {
			return Ok(content);
		}

		let mut container = config.container_attributes.clone();
		if model.has_errors(attribute) {
			if let Some(class) = &config.invalid_class {
				container.add_class(class);
			}
		} else if let Some(class) = &config.valid_class {
			container.add_class(class);
		}

		Ok(format!(
			"{}\n{content}\n{}",
			html::open_tag(&config.container_tag, &container),
			html::close_tag(&config.container_tag)
		))
	}
}

/// Substitute placeholders into a template and drop lines that end up
/// blank, so empty fragments leave no stray whitespace lines behind.
pub(crate) fn substitute_template(template: &str, parts: &[(&str, &str)]) -> String {
	let mut rendered = template.to_string();
	for (placeholder, fragment) in parts {
		rendered = rendered.replace(placeholder, fragment);
	}
	rendered
		.lines()
		.filter(|line| !line.trim().is_empty())
		.collect::<Vec<_>>()
		.join("\n")
}

/// Stringify a model value for use in an input's `value` attribute or a
/// checked-state comparison. Arrays and objects are not representable and
/// fail with `InvalidInputType`.
pub(crate) fn scalar_text(widget: &'static str, value: &Value) -> FieldResult<String> {
	match value {
		Value::Null => Ok(String::new()),
		Value::Bool(flag) => Ok(if *flag { "1" } else { "0" }.to_string()),
		Value::Number(number) => Ok(number.to_string()),
		Value::String(text) => Ok(text.clone()),
		Value::Array(_) => Err(FieldError::InvalidInputType {
			widget,
			found: "an array",
		}),
		Value::Object(_) => Err(FieldError::InvalidInputType {
			widget,
			found: "an object",
		}),
	}
}
