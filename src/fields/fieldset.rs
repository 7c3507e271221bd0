//! Fieldset field with split begin/end rendering
//!
//! A fieldset is not bound to a model; its value is the ability to split
//! rendering into an opening and a closing fragment so callers can stream
//! arbitrary content in between:
//!
//! ```
//! use formweave::Fieldset;
//!
//! let fieldset = Fieldset::new();
//! let html = format!("{}hello{}", fieldset.begin(), fieldset.end());
//! assert_eq!(html, "<div>\n<fieldset>hello</fieldset>\n</div>");
//! ```

use crate::attributes::{Attributes, ClassValue};
use crate::error::FieldResult;
use crate::factory::FieldSetter;
use crate::field::{self, FieldConfig};
use crate::html;

/// A `<fieldset>` wrapper with optional legend and split rendering.
#[derive(Debug)]
pub struct Fieldset {
	pub(crate) config: FieldConfig,
	pub(crate) attributes: Attributes,
	pub(crate) legend: Option<String>,
}

impl Default for Fieldset {
	fn default() -> Self {
		Self::new()
	}
}

impl Fieldset {
	pub fn new() -> Self {
		Self {
			config: FieldConfig::default(),
			attributes: Attributes::new(),
			legend: None,
		}
	}

	/// Attributes of the `<fieldset>` tag itself.
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Legend rendered as the first child of the fieldset.
	pub fn legend(mut self, legend: impl Into<String>) -> Self {
		self.legend = Some(legend.into());
		self
	}

	/// Template for the opening fragment, with an `{input}` placeholder.
	pub fn template_begin(mut self, template: impl Into<String>) -> Self {
		self.config = self.config.template_begin(template);
		self
	}

	/// Template for the closing fragment, with an `{input}` placeholder.
	pub fn template_end(mut self, template: impl Into<String>) -> Self {
		self.config = self.config.template_end(template);
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
	/// setters fieldsets do not support.
	pub fn apply(mut self, setter: &FieldSetter) -> FieldResult<Self> {
		match setter {
			FieldSetter::Legend(legend) => Ok(self.legend(legend.clone())),
			other => {
				self.config = self.config.apply_common(other, "Fieldset")?;
				Ok(self)
			}
		}
	}

	fn opening_input(&self) -> String {
		let mut open = html::open_tag("fieldset", &self.attributes);
		if let Some(legend) = &self.legend {
			open.push('\n');
			open.push_str(&html::tag(
				"legend",
				&Attributes::new(),
				&html::escape(legend),
			));
		}
		open
	}

	/// Opening fragment: container open tag plus the `template_begin`
	/// substitution around `<fieldset>`.
	pub fn begin(&self) -> String {
		let opening = field::substitute_template(
			&self.config.template_begin,
			&[("{input}", self.opening_input().as_str())],
		);
		if self.config.use_container {
			format!(
				"{}\n{opening}",
				html::open_tag(&self.config.container_tag, &self.config.container_attributes)
			)
		} else {
			opening
		}
	}

	/// Closing fragment: the `template_end` substitution around
	/// `</fieldset>` plus the container close tag.
	pub fn end(&self) -> String {
		let closing =
			field::substitute_template(&self.config.template_end, &[("{input}", "</fieldset>")]);
		if self.config.use_container {
			format!("{closing}\n{}", html::close_tag(&self.config.container_tag))
		} else {
			closing
		}
	}

	/// Full render with empty content between the fragments.
	pub fn render(&self) -> String {
		format!("{}\n{}", self.begin(), self.end())
	}
}
