//! Hint sub-widget

use crate::attributes::{Attributes, ClassValue};
use crate::error::{FieldError, FieldResult};
use crate::factory::{FieldSetter, HintSetter};
use crate::form_model::FormModel;
use crate::html;

/// Configuration of the hint sub-widget: a single tag (default `div`) whose
/// content comes from the model's hint text.
#[derive(Debug, Clone, PartialEq)]
pub struct HintConfig {
	pub(crate) tag: String,
	pub(crate) attributes: Attributes,
	pub(crate) content: Option<String>,
}

impl Default for HintConfig {
	fn default() -> Self {
		Self {
			tag: "div".to_string(),
			attributes: Attributes::new(),
			content: None,
		}
	}
}

impl HintConfig {
	/// Tag name wrapping the hint text.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = tag.into();
		self
	}

	/// Attributes of the hint tag. Replaces the whole bag.
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Set, replace, or remove the hint's `class` attribute.
	pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
		self.attributes.set_class(class);
		self
	}

	/// Explicit hint text overriding the model's hint.
	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	pub(crate) fn apply(self, setter: &HintSetter) -> FieldResult<Self> {
		match setter {
			HintSetter::Tag(tag) => {
				if tag.is_empty() {
					return Err(FieldError::InvalidConfiguration(
						"hint tag name cannot be empty".to_string(),
					));
				}
				Ok(self.tag(tag.clone()))
			}
			HintSetter::Attributes(attributes) => Ok(self.attributes(attributes.clone())),
			HintSetter::Class(class) => Ok(self.class(class.clone())),
			HintSetter::Content(content) => Ok(self.content(content.clone())),
		}
	}
}

/// Render a hint fragment for a model attribute; empty hints render as the
/// empty string so the `{hint}` placeholder collapses.
pub(crate) fn render_part(config: &HintConfig, model: &dyn FormModel, attribute: &str) -> String {
	let text = config
		.content
		.clone()
		.or_else(|| model.hint(attribute))
		.unwrap_or_default();
	if text.is_empty() {
		return String::new();
	}
	html::tag(&config.tag, &config.attributes, &html::escape(&text))
}

/// Standalone hint widget bound to a model attribute.
#[derive(Debug)]
pub struct Hint<'a> {
	pub(crate) model: &'a dyn FormModel,
	pub(crate) attribute: String,
	pub(crate) config: HintConfig,
}

impl<'a> Hint<'a> {
	pub fn new(model: &'a dyn FormModel, attribute: impl Into<String>) -> Self {
		Self {
			model,
			attribute: attribute.into(),
			config: HintConfig::default(),
		}
	}

	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.config = self.config.tag(tag);
		self
	}

	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.config = self.config.attributes(attributes);
		self
	}

	pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
		self.config = self.config.class(class);
		self
	}

	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.config = self.config.content(content);
		self
	}

	/// Part widgets carry no common field configuration, so every override
	/// sequence entry fails with `InvalidConfiguration` naming the option;
	/// hints are configured through `hintConfig` instead.
	pub fn apply(self, setter: &FieldSetter) -> FieldResult<Self> {
		Err(FieldError::unsupported_option(setter.name(), "Hint"))
	}

	pub fn render(&self) -> String {
		render_part(&self.config, self.model, &self.attribute)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::{Value, json};

	#[derive(Debug)]
	struct NameForm;

	impl FormModel for NameForm {
		fn form_name(&self) -> &str {
			"NameForm"
		}

		fn attribute_names(&self) -> Vec<String> {
			vec!["name".to_string(), "job".to_string()]
		}

		fn value(&self, _attribute: &str) -> Value {
			json!("")
		}

		fn hint(&self, attribute: &str) -> Option<String> {
			(attribute == "name").then(|| "Input your full name.".to_string())
		}
	}

	#[test]
	fn test_hint_default_tag() {
		let hint = Hint::new(&NameForm, "name");
		assert_eq!(hint.render(), "<div>Input your full name.</div>");
	}

	#[test]
	fn test_hint_custom_tag() {
		let hint = Hint::new(&NameForm, "name").tag("b");
		assert_eq!(hint.render(), "<b>Input your full name.</b>");
	}

	#[test]
	fn test_missing_hint_renders_empty() {
		let hint = Hint::new(&NameForm, "job");
		assert_eq!(hint.render(), "");
	}

	#[test]
	fn test_hint_content_override() {
		let hint = Hint::new(&NameForm, "job").content("Current position.");
		assert_eq!(hint.render(), "<div>Current position.</div>");
	}
}
