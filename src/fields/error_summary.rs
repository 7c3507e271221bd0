//! Error summary field
//!
//! Collects validation errors across the whole model into a header
//! paragraph plus a `<ul>` list, optionally filtered to an allow-list of
//! attributes. Composed through the normal template/container pipeline; the
//! `{label}`/`{hint}`/`{error}` placeholders collapse.

use crate::attributes::{Attributes, ClassValue};
use crate::error::FieldResult;
use crate::factory::FieldSetter;
use crate::field::{self, FieldConfig};
use crate::form_model::FormModel;
use crate::html;

const DEFAULT_HEADER: &str = "Please fix the following errors:";

/// A summary of all model errors, bound to a model rather than a single
/// attribute.
#[derive(Debug)]
pub struct ErrorSummary<'a> {
	pub(crate) model: &'a dyn FormModel,
	pub(crate) config: FieldConfig,
	pub(crate) header: String,
	pub(crate) only_attributes: Vec<String>,
}

impl<'a> ErrorSummary<'a> {
	pub fn new(model: &'a dyn FormModel) -> Self {
		Self {
			model,
			config: FieldConfig::default(),
			header: DEFAULT_HEADER.to_string(),
			only_attributes: Vec::new(),
		}
	}

	/// Header text shown above the error list.
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = header.into();
		self
	}

	/// Restrict the summary to the given attributes; an empty list means
	/// all attributes.
	pub fn only_attributes<I, S>(mut self, attributes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.only_attributes = attributes.into_iter().map(Into::into).collect();
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

	/// Apply a configuration setter; fails with `InvalidConfiguration` for
	/// setters the summary does not support.
	pub fn apply(mut self, setter: &FieldSetter) -> FieldResult<Self> {
		match setter {
			FieldSetter::OnlyAttributes(attributes) => Ok(self.only_attributes(attributes.clone())),
			FieldSetter::Header(header) => Ok(self.header(header.clone())),
			other => {
				self.config = self.config.apply_common(other, "ErrorSummary")?;
				Ok(self)
			}
		}
	}

	/// Render the summary; a model without errors renders as the empty
	/// string, container included.
	pub fn render(&self) -> String {
		let mut messages = Vec::new();
		for attribute in self.model.attribute_names() {
			if !self.only_attributes.is_empty() && !self.only_attributes.contains(&attribute) {
				continue;
			}
			messages.extend(self.model.errors(&attribute));
		}
		if messages.is_empty() {
			return String::new();
		}

		let mut list = String::from("<ul>\n");
		for message in &messages {
			list.push_str("<li>");
			list.push_str(&html::escape(message));
			list.push_str("</li>\n");
		}
		list.push_str("</ul>");

		let input = format!(
			"{}\n{list}",
			html::tag("p", &Attributes::new(), &html::escape(&self.header))
		);

		let content = field::substitute_template(
			&self.config.template,
			&[
				("{label}", ""),
				("{input}", input.as_str()),
				("{hint}", ""),
				("{error}", ""),
			],
		);

		if !self.config.use_container {
			return content;
		}
		format!(
			"{}\n{content}\n{}",
			html::open_tag(&self.config.container_tag, &self.config.container_attributes),
			html::close_tag(&self.config.container_tag)
		)
	}
}
