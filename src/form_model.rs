//! Form model accessor
//!
//! The [`FormModel`] trait is the boundary between this crate and whatever
//! owns the data: it supplies current values, labels, hints, placeholders,
//! and validation errors for named attributes. Widgets only read from it.

use serde_json::Value;
use std::fmt;

/// Read-only view of a form's data for rendering.
///
/// Only [`form_name`](Self::form_name), [`attribute_names`](Self::attribute_names),
/// and [`value`](Self::value) are required; the rest default to "nothing to
/// show". Models must be `Debug` so the widgets bound to them are too.
///
/// # Examples
///
/// ```
/// use formweave::FormModel;
/// use serde_json::{Value, json};
///
/// #[derive(Debug)]
/// struct LoginForm;
///
/// impl FormModel for LoginForm {
/// 	fn form_name(&self) -> &str {
/// 		"LoginForm"
/// 	}
///
/// 	fn attribute_names(&self) -> Vec<String> {
/// 		vec!["login".to_string()]
/// 	}
///
/// 	fn value(&self, _attribute: &str) -> Value {
/// 		json!("")
/// 	}
/// }
///
/// let model = LoginForm;
/// assert_eq!(model.label("login"), "Login");
/// assert!(!model.has_errors("login"));
/// ```
pub trait FormModel: fmt::Debug {
	/// Form name used to derive input names and ids. May be empty for
	/// anonymous forms, in which case the bare attribute name is used.
	fn form_name(&self) -> &str;

	/// All attribute names of the model, in declaration order.
	fn attribute_names(&self) -> Vec<String>;

	/// Current value of an attribute.
	fn value(&self, attribute: &str) -> Value;

	/// Human-readable label. Defaults to the attribute name with its first
	/// letter capitalized.
	fn label(&self, attribute: &str) -> String {
		let mut chars = attribute.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	}

	/// Hint text shown next to the input, if any.
	fn hint(&self, _attribute: &str) -> Option<String> {
		None
	}

	/// Placeholder text for scalar inputs, if any.
	fn placeholder(&self, _attribute: &str) -> Option<String> {
		None
	}

	/// Validation error messages for an attribute, in detection order.
	fn errors(&self, _attribute: &str) -> Vec<String> {
		Vec::new()
	}

	/// Whether the attribute currently has validation errors.
	fn has_errors(&self, attribute: &str) -> bool {
		!self.errors(attribute).is_empty()
	}

	/// Whether validation rules mark the attribute as required. Feeds the
	/// factory's rule enrichment (`required` attribute on inputs).
	fn is_required(&self, _attribute: &str) -> bool {
		false
	}
}

/// HTML `name` attribute for an attribute of a model: `FormName[attribute]`,
/// or the bare attribute when the form name is empty.
pub fn input_name(model: &dyn FormModel, attribute: &str) -> String {
	let form_name = model.form_name();
	if form_name.is_empty() {
		attribute.to_string()
	} else {
		format!("{form_name}[{attribute}]")
	}
}

/// HTML `id` attribute for an attribute of a model: lowercased
/// `formname-attribute`, or the lowercased attribute when the form name is
/// empty.
pub fn input_id(model: &dyn FormModel, attribute: &str) -> String {
	let form_name = model.form_name();
	if form_name.is_empty() {
		attribute.to_lowercase()
	} else {
		format!("{}-{}", form_name.to_lowercase(), attribute.to_lowercase())
	}
}

/// First validation error for an attribute, if any.
pub fn first_error(model: &dyn FormModel, attribute: &str) -> Option<String> {
	model.errors(attribute).into_iter().next()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[derive(Debug)]
	struct NamedForm;

	impl FormModel for NamedForm {
		fn form_name(&self) -> &str {
			"TextForm"
		}

		fn attribute_names(&self) -> Vec<String> {
			vec!["fullName".to_string()]
		}

		fn value(&self, _attribute: &str) -> Value {
			json!("")
		}

		fn errors(&self, attribute: &str) -> Vec<String> {
			if attribute == "fullName" {
				vec![
					"Value cannot be blank.".to_string(),
					"Value is too short.".to_string(),
				]
			} else {
				Vec::new()
			}
		}
	}

	#[derive(Debug)]
	struct AnonymousForm;

	impl FormModel for AnonymousForm {
		fn form_name(&self) -> &str {
			""
		}

		fn attribute_names(&self) -> Vec<String> {
			vec!["age".to_string()]
		}

		fn value(&self, _attribute: &str) -> Value {
			json!(42)
		}
	}

	#[test]
	fn test_input_name_with_form_name() {
		assert_eq!(input_name(&NamedForm, "fullName"), "TextForm[fullName]");
	}

	#[test]
	fn test_input_name_anonymous() {
		assert_eq!(input_name(&AnonymousForm, "age"), "age");
	}

	#[test]
	fn test_input_id_is_lowercased() {
		assert_eq!(input_id(&NamedForm, "fullName"), "textform-fullname");
		assert_eq!(input_id(&AnonymousForm, "age"), "age");
	}

	#[test]
	fn test_first_error() {
		assert_eq!(
			first_error(&NamedForm, "fullName").as_deref(),
			Some("Value cannot be blank.")
		);
		assert_eq!(first_error(&AnonymousForm, "age"), None);
	}

	#[test]
	fn test_default_label_capitalizes() {
		assert_eq!(AnonymousForm.label("age"), "Age");
	}
}
