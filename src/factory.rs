//! Field factory
//!
//! The factory is the entry point of the crate: it holds factory-wide
//! defaults (shared template and container settings) plus per-field-type
//! override sequences, and hands out pre-configured fields bound to a model
//! attribute. Precedence, lowest to highest: built-in defaults, factory-wide
//! options, per-type `fieldConfigs` sequence in registration order, caller
//! overrides.
//!
//! Override sequences are closed, typed setter enums rather than
//! method-name/argument tables, so a configuration file naming an option a
//! field type does not support fails with `InvalidConfiguration` instead of
//! blowing up at call time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::attributes::{AttrValue, Attributes, ClassValue};
use crate::error::{FieldError, FieldResult};
use crate::field::{FieldConfig, InputField};
use crate::fields::error::ErrorConfig;
use crate::fields::hint::HintConfig;
use crate::fields::label::LabelConfig;
use crate::fields::{Checkbox, ErrorMessage, ErrorSummary, Fieldset, Hint, Label, Text};
use crate::form_model::FormModel;

/// Identifier of a field type, used as the key of per-type override
/// sequences and by the generic [`FieldFactory::input`] entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
	Text,
	Checkbox,
	Label,
	Hint,
	Error,
	ErrorSummary,
	Fieldset,
}

impl fmt::Display for FieldKind {
	/// The configuration-surface name of the kind.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Text => "text",
			Self::Checkbox => "checkbox",
			Self::Label => "label",
			Self::Hint => "hint",
			Self::Error => "error",
			Self::ErrorSummary => "errorSummary",
			Self::Fieldset => "fieldset",
		})
	}
}

/// A single configuration call applied to a freshly constructed field.
///
/// Serialized form is an externally tagged map, so an override sequence in
/// JSON reads as `[{"containerTag": "section"}, {"useContainer": false}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldSetter {
	Template(String),
	TemplateBegin(String),
	TemplateEnd(String),
	ContainerTag(String),
	ContainerAttributes(Attributes),
	ContainerClass(ClassValue),
	UseContainer(bool),
	InputAttributes(Attributes),
	InputClass(ClassValue),
	SetInputId(bool),
	UsePlaceholder(bool),
	ValidClass(Option<String>),
	InvalidClass(Option<String>),
	// Checkbox
	EnclosedByLabel(bool),
	Label(String),
	LabelAttributes(Attributes),
	UncheckValue(Option<AttrValue>),
	Value(AttrValue),
	// Error summary
	OnlyAttributes(Vec<String>),
	Header(String),
	// Fieldset
	Legend(String),
}

impl FieldSetter {
	/// The configuration-surface name of this setter.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Template(_) => "template",
			Self::TemplateBegin(_) => "templateBegin",
			Self::TemplateEnd(_) => "templateEnd",
			Self::ContainerTag(_) => "containerTag",
			Self::ContainerAttributes(_) => "containerAttributes",
			Self::ContainerClass(_) => "containerClass",
			Self::UseContainer(_) => "useContainer",
			Self::InputAttributes(_) => "inputAttributes",
			Self::InputClass(_) => "inputClass",
			Self::SetInputId(_) => "setInputId",
			Self::UsePlaceholder(_) => "usePlaceholder",
			Self::ValidClass(_) => "validClass",
			Self::InvalidClass(_) => "invalidClass",
			Self::EnclosedByLabel(_) => "enclosedByLabel",
			Self::Label(_) => "label",
			Self::LabelAttributes(_) => "labelAttributes",
			Self::UncheckValue(_) => "uncheckValue",
			Self::Value(_) => "value",
			Self::OnlyAttributes(_) => "onlyAttributes",
			Self::Header(_) => "header",
			Self::Legend(_) => "legend",
		}
	}
}

/// Configuration call for label sub-widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelSetter {
	Attributes(Attributes),
	Class(ClassValue),
	SetFor(bool),
	UseInputId(bool),
	Content(String),
}

/// Configuration call for hint sub-widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HintSetter {
	Tag(String),
	Attributes(Attributes),
	Class(ClassValue),
	Content(String),
}

/// Configuration call for error sub-widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorSetter {
	Tag(String),
	Attributes(Attributes),
	Class(ClassValue),
	Content(String),
}

/// The factory's named-option surface, loadable from configuration.
///
/// All keys are optional; unknown keys are rejected. `fieldConfigs` maps a
/// field kind to an ordered override sequence applied after the factory-wide
/// options; `labelConfig`/`hintConfig`/`errorConfig` configure the
/// sub-widgets of every composed field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FactoryOptions {
	pub template: Option<String>,
	pub template_begin: Option<String>,
	pub template_end: Option<String>,
	pub container_tag: Option<String>,
	pub container_attributes: Option<Attributes>,
	pub container_class: Option<ClassValue>,
	pub use_container: Option<bool>,
	pub input_attributes: Option<Attributes>,
	pub input_class: Option<ClassValue>,
	pub label_class: Option<ClassValue>,
	pub hint_class: Option<ClassValue>,
	pub error_class: Option<ClassValue>,
	pub valid_class: Option<String>,
	pub invalid_class: Option<String>,
	pub set_input_id: Option<bool>,
	pub use_placeholder: Option<bool>,
	pub enrichment_from_rules: Option<bool>,
	pub field_configs: HashMap<FieldKind, Vec<FieldSetter>>,
	pub label_config: Vec<LabelSetter>,
	pub hint_config: Vec<HintSetter>,
	pub error_config: Vec<ErrorSetter>,
}

/// Instantiates and pre-configures fields by type.
#[derive(Debug, Clone, Default)]
pub struct FieldFactory {
	options: FactoryOptions,
}

impl FieldFactory {
	/// Create a factory from an option set.
	pub fn new(options: FactoryOptions) -> Self {
		Self { options }
	}

	/// Build a factory from a JSON option map, failing with
	/// `InvalidConfiguration` on unknown option names or malformed values.
	///
	/// # Examples
	///
	/// ```
	/// use formweave::FieldFactory;
	/// use serde_json::json;
	///
	/// let factory = FieldFactory::from_value(json!({
	/// 	"containerTag": "section",
	/// 	"containerClass": ["wrapper", "red"],
	/// })).unwrap();
	/// # let _ = factory;
	///
	/// assert!(FieldFactory::from_value(json!({"containrTag": "div"})).is_err());
	/// ```
	pub fn from_value(value: serde_json::Value) -> FieldResult<Self> {
		let options: FactoryOptions = serde_json::from_value(value)
			.map_err(|error| FieldError::InvalidConfiguration(error.to_string()))?;
		Ok(Self::new(options))
	}

	/// Shared configuration after factory-wide options; per-kind sequences
	/// are applied on the concrete field.
	fn base_config(&self) -> FieldResult<FieldConfig> {
		let options = &self.options;
		let mut config = FieldConfig::default();
		if let Some(template) = &options.template {
			config = config.template(template.clone());
		}
		if let Some(template) = &options.template_begin {
			config = config.template_begin(template.clone());
		}
		if let Some(template) = &options.template_end {
			config = config.template_end(template.clone());
		}
		if let Some(tag) = &options.container_tag {
			config = config.container_tag(tag.clone());
		}
		if let Some(attributes) = &options.container_attributes {
			config = config.container_attributes(attributes.clone());
		}
		if let Some(class) = &options.container_class {
			config = config.container_class(class.clone());
		}
		if let Some(value) = options.use_container {
			config = config.use_container(value);
		}
		if let Some(attributes) = &options.input_attributes {
			config = config.input_attributes(attributes.clone());
		}
		if let Some(class) = &options.input_class {
			config = config.input_class(class.clone());
		}
		if let Some(value) = options.set_input_id {
			config = config.set_input_id(value);
		}
		if let Some(value) = options.use_placeholder {
			config = config.use_placeholder(value);
		}
		if options.valid_class.is_some() {
			config = config.valid_class(options.valid_class.clone());
		}
		if options.invalid_class.is_some() {
			config = config.invalid_class(options.invalid_class.clone());
		}
		if let Some(value) = options.enrichment_from_rules {
			config = config.enrich_from_rules(value);
		}
		config = config
			.label_config(self.label_part_config())
			.hint_config(self.hint_part_config()?)
			.error_config(self.error_part_config()?);
		Ok(config)
	}

	fn label_part_config(&self) -> LabelConfig {
		let mut config = LabelConfig::default();
		if let Some(class) = &self.options.label_class {
			config = config.class(class.clone());
		}
		for setter in &self.options.label_config {
			config = config.apply(setter);
		}
		config
	}

	fn hint_part_config(&self) -> FieldResult<HintConfig> {
		let mut config = HintConfig::default();
		if let Some(class) = &self.options.hint_class {
			config = config.class(class.clone());
		}
		for setter in &self.options.hint_config {
			config = config.apply(setter)?;
		}
		Ok(config)
	}

	fn error_part_config(&self) -> FieldResult<ErrorConfig> {
		let mut config = ErrorConfig::default();
		if let Some(class) = &self.options.error_class {
			config = config.class(class.clone());
		}
		for setter in &self.options.error_config {
			config = config.apply(setter)?;
		}
		Ok(config)
	}

	fn kind_overrides(&self, kind: FieldKind) -> impl Iterator<Item = &FieldSetter> {
		self.options
			.field_configs
			.get(&kind)
			.into_iter()
			.flatten()
	}

	/// Text field bound to a model attribute.
	pub fn text<'a>(
		&self,
		model: &'a dyn FormModel,
		attribute: &str,
	) -> FieldResult<Text<'a>> {
		debug!(attribute, "building text field");
		let mut field = Text::new(model, attribute);
		field.config = self.base_config()?;
		for setter in self.kind_overrides(FieldKind::Text) {
			field = field.apply(setter)?;
		}
		Ok(field)
	}

	/// Checkbox field bound to a model attribute.
	pub fn checkbox<'a>(
		&self,
		model: &'a dyn FormModel,
		attribute: &str,
	) -> FieldResult<Checkbox<'a>> {
		debug!(attribute, "building checkbox field");
		let mut field = Checkbox::new(model, attribute);
		field.config = self.base_config()?;
		for setter in self.kind_overrides(FieldKind::Checkbox) {
			field = field.apply(setter)?;
		}
		Ok(field)
	}

	/// Standalone label widget for a model attribute.
	pub fn label<'a>(&self, model: &'a dyn FormModel, attribute: &str) -> FieldResult<Label<'a>> {
		let mut label = Label::new(model, attribute);
		label.config = self.label_part_config();
		for setter in self.kind_overrides(FieldKind::Label) {
			label = label.apply(setter)?;
		}
		Ok(label)
	}

	/// Standalone hint widget for a model attribute.
	pub fn hint<'a>(&self, model: &'a dyn FormModel, attribute: &str) -> FieldResult<Hint<'a>> {
		let mut hint = Hint::new(model, attribute);
		hint.config = self.hint_part_config()?;
		for setter in self.kind_overrides(FieldKind::Hint) {
			hint = hint.apply(setter)?;
		}
		Ok(hint)
	}

	/// Standalone error message widget for a model attribute.
	pub fn error<'a>(
		&self,
		model: &'a dyn FormModel,
		attribute: &str,
	) -> FieldResult<ErrorMessage<'a>> {
		let mut error = ErrorMessage::new(model, attribute);
		error.config = self.error_part_config()?;
		for setter in self.kind_overrides(FieldKind::Error) {
			error = error.apply(setter)?;
		}
		Ok(error)
	}

	/// Error summary bound to a whole model.
	pub fn error_summary<'a>(&self, model: &'a dyn FormModel) -> FieldResult<ErrorSummary<'a>> {
		let mut summary = ErrorSummary::new(model);
		summary.config = self.base_config()?;
		for setter in self.kind_overrides(FieldKind::ErrorSummary) {
			summary = summary.apply(setter)?;
		}
		Ok(summary)
	}

	/// Fieldset with split begin/end rendering.
	pub fn fieldset(&self) -> FieldResult<Fieldset> {
		let mut fieldset = Fieldset::new();
		fieldset.config = self.base_config()?;
		for setter in self.kind_overrides(FieldKind::Fieldset) {
			fieldset = fieldset.apply(setter)?;
		}
		Ok(fieldset)
	}

	/// Generic input-only entry point: build a field of `kind` with caller
	/// overrides applied last. Non-input kinds fail with
	/// `InvalidWidgetType`.
	pub fn input<'a>(
		&self,
		kind: FieldKind,
		model: &'a dyn FormModel,
		attribute: &str,
		overrides: &[FieldSetter],
	) -> FieldResult<Box<dyn InputField + 'a>> {
		match kind {
			FieldKind::Text => {
				let mut field = self.text(model, attribute)?;
				for setter in overrides {
					field = field.apply(setter)?;
				}
				Ok(Box::new(field))
			}
			FieldKind::Checkbox => {
				let mut field = self.checkbox(model, attribute)?;
				for setter in overrides {
					field = field.apply(setter)?;
				}
				Ok(Box::new(field))
			}
			other => Err(FieldError::InvalidWidgetType(other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_unknown_option_is_rejected() {
		let error = FieldFactory::from_value(json!({"wrapperTag": "div"})).unwrap_err();
		assert!(matches!(error, FieldError::InvalidConfiguration(_)));
	}

	#[rstest]
	fn test_field_configs_deserialization() {
		let factory = FieldFactory::from_value(json!({
			"fieldConfigs": {
				"text": [
					{"containerTag": "section"},
					{"useContainer": false},
				],
				"errorSummary": [
					{"onlyAttributes": ["name"]},
				],
			},
		}))
		.unwrap();

		let text_overrides = &factory.options.field_configs[&FieldKind::Text];
		assert_eq!(
			text_overrides,
			&vec![
				FieldSetter::ContainerTag("section".to_string()),
				FieldSetter::UseContainer(false),
			]
		);
	}

	#[rstest]
	fn test_setter_names() {
		assert_eq!(FieldSetter::Template(String::new()).name(), "template");
		assert_eq!(
			FieldSetter::UncheckValue(None).name(),
			"uncheckValue"
		);
		assert_eq!(
			FieldSetter::OnlyAttributes(Vec::new()).name(),
			"onlyAttributes"
		);
	}

	#[rstest]
	fn test_sub_widget_config_deserialization() {
		let factory = FieldFactory::from_value(json!({
			"labelConfig": [{"setFor": false}],
			"hintConfig": [{"attributes": {"class": "info"}}],
			"errorConfig": [{"tag": "b"}],
		}))
		.unwrap();
		assert_eq!(factory.options.label_config, vec![LabelSetter::SetFor(false)]);
		assert_eq!(factory.options.error_config, vec![ErrorSetter::Tag("b".to_string())]);
	}

	#[rstest]
	fn test_empty_container_tag_is_rejected() {
		let factory = FieldFactory::from_value(json!({
			"fieldConfigs": {"text": [{"containerTag": ""}]},
		}))
		.unwrap();
		#[derive(Debug)]
		struct Empty;
		impl crate::form_model::FormModel for Empty {
			fn form_name(&self) -> &str {
				""
			}
			fn attribute_names(&self) -> Vec<String> {
				Vec::new()
			}
			fn value(&self, _attribute: &str) -> serde_json::Value {
				serde_json::Value::Null
			}
		}
		assert!(matches!(
			factory.text(&Empty, "name").unwrap_err(),
			FieldError::InvalidConfiguration(_)
		));
	}
}
