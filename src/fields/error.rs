//! Error message sub-widget

use crate::attributes::{Attributes, ClassValue};
use crate::error::{FieldError, FieldResult};
use crate::factory::{ErrorSetter, FieldSetter};
use crate::form_model::{self, FormModel};
use crate::html;

/// Configuration of the error sub-widget: a single tag (default `div`)
/// showing the attribute's first validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorConfig {
	pub(crate) tag: String,
	pub(crate) attributes: Attributes,
	pub(crate) content: Option<String>,
}

impl Default for ErrorConfig {
	fn default() -> Self {
		Self {
			tag: "div".to_string(),
			attributes: Attributes::new(),
			content: None,
		}
	}
}

impl ErrorConfig {
	/// Tag name wrapping the error text.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = tag.into();
		self
	}

	/// Attributes of the error tag. Replaces the whole bag.
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Set, replace, or remove the error tag's `class` attribute.
	pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
		self.attributes.set_class(class);
		self
	}

	/// Explicit message overriding the model's first error.
	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	pub(crate) fn apply(self, setter: &ErrorSetter) -> FieldResult<Self> {
		match setter {
			ErrorSetter::Tag(tag) => {
				if tag.is_empty() {
					return Err(FieldError::InvalidConfiguration(
						"error tag name cannot be empty".to_string(),
					));
				}
				Ok(self.tag(tag.clone()))
			}
			ErrorSetter::Attributes(attributes) => Ok(self.attributes(attributes.clone())),
			ErrorSetter::Class(class) => Ok(self.class(class.clone())),
			ErrorSetter::Content(content) => Ok(self.content(content.clone())),
		}
	}
}

/// Render an error fragment for a model attribute; no errors render as the
/// empty string so the `{error}` placeholder collapses.
pub(crate) fn render_part(config: &ErrorConfig, model: &dyn FormModel, attribute: &str) -> String {
	let text = config
		.content
		.clone()
		.or_else(|| form_model::first_error(model, attribute))
		.unwrap_or_default();
	if text.is_empty() {
		return String::new();
	}
	html::tag(&config.tag, &config.attributes, &html::escape(&text))
}

/// Standalone error message widget bound to a model attribute.
#[derive(Debug)]
pub struct ErrorMessage<'a> {
	pub(crate) model: &'a dyn FormModel,
	pub(crate) attribute: String,
	pub(crate) config: ErrorConfig,
}

impl<'a> ErrorMessage<'a> {
	pub fn new(model: &'a dyn FormModel, attribute: impl Into<String>) -> Self {
		Self {
			model,
			attribute: attribute.into(),
			config: ErrorConfig::default(),
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
	/// error messages are configured through `errorConfig` instead.
	pub fn apply(self, setter: &FieldSetter) -> FieldResult<Self> {
		Err(FieldError::unsupported_option(setter.name(), "Error"))
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
	struct ValidatedForm;

	impl FormModel for ValidatedForm {
		fn form_name(&self) -> &str {
			"ValidatedForm"
		}

		fn attribute_names(&self) -> Vec<String> {
			vec!["name".to_string(), "job".to_string()]
		}

		fn value(&self, _attribute: &str) -> Value {
			json!("")
		}

		fn errors(&self, attribute: &str) -> Vec<String> {
			if attribute == "name" {
				vec![
					"Value cannot be blank.".to_string(),
					"Value is too short.".to_string(),
				]
			} else {
				Vec::new()
			}
		}
	}

	#[test]
	fn test_shows_first_error_only() {
		let error = ErrorMessage::new(&ValidatedForm, "name");
		assert_eq!(error.render(), "<div>Value cannot be blank.</div>");
	}

	#[test]
	fn test_no_errors_renders_empty() {
		let error = ErrorMessage::new(&ValidatedForm, "job");
		assert_eq!(error.render(), "");
	}

	#[test]
	fn test_custom_tag_and_class() {
		let error = ErrorMessage::new(&ValidatedForm, "name").tag("b").class("red");
		assert_eq!(error.render(), r#"<b class="red">Value cannot be blank.</b>"#);
	}
}
