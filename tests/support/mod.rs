//! Fixture form models shared by the integration tests.

#![allow(dead_code)]

use formweave::FormModel;
use serde_json::{Value, json};

/// Text form with a hinted, placeholdered `name` attribute, a required
/// `company` attribute, and a plain `job` attribute.
#[derive(Debug)]
pub struct TextForm {
	validated: bool,
}

impl TextForm {
	pub fn new() -> Self {
		Self { validated: false }
	}

	/// The form after a failed validation pass: `name` and `company` carry
	/// "not blank" errors.
	pub fn validated() -> Self {
		Self { validated: true }
	}
}

impl FormModel for TextForm {
	fn form_name(&self) -> &str {
		"TextForm"
	}

	fn attribute_names(&self) -> Vec<String> {
		vec!["name".to_string(), "company".to_string(), "job".to_string()]
	}

	fn value(&self, _attribute: &str) -> Value {
		json!("")
	}

	fn label(&self, attribute: &str) -> String {
		match attribute {
			"name" => "Name".to_string(),
			"company" => "Company".to_string(),
			"job" => "Job".to_string(),
			other => other.to_string(),
		}
	}

	fn hint(&self, attribute: &str) -> Option<String> {
		(attribute == "name").then(|| "Input your full name.".to_string())
	}

	fn placeholder(&self, attribute: &str) -> Option<String> {
		(attribute == "name").then(|| "Typed your name here".to_string())
	}

	fn errors(&self, attribute: &str) -> Vec<String> {
		if self.validated && matches!(attribute, "name" | "company") {
			vec!["Value cannot be blank.".to_string()]
		} else {
			Vec::new()
		}
	}

	fn is_required(&self, attribute: &str) -> bool {
		matches!(attribute, "name" | "company")
	}
}

/// Checkbox form with boolean, numeric, and non-scalar attributes.
#[derive(Debug)]
pub struct CheckboxForm;

impl FormModel for CheckboxForm {
	fn form_name(&self) -> &str {
		"CheckboxForm"
	}

	fn attribute_names(&self) -> Vec<String> {
		vec![
			"red".to_string(),
			"blue".to_string(),
			"age".to_string(),
			"object".to_string(),
		]
	}

	fn value(&self, attribute: &str) -> Value {
		match attribute {
			"red" => json!(true),
			"blue" => json!(false),
			"age" => json!(42),
			_ => json!({}),
		}
	}

	fn label(&self, attribute: &str) -> String {
		match attribute {
			"red" => "Red color".to_string(),
			"blue" => "Blue color".to_string(),
			"age" => "Your age 42?".to_string(),
			other => other.to_string(),
		}
	}

	fn hint(&self, attribute: &str) -> Option<String> {
		(attribute == "red").then(|| "If need red color.".to_string())
	}
}

/// Form used by the error summary tests; both attributes fail validation.
#[derive(Debug)]
pub struct ErrorSummaryForm {
	validated: bool,
}

impl ErrorSummaryForm {
	pub fn new() -> Self {
		Self { validated: false }
	}

	pub fn validated() -> Self {
		Self { validated: true }
	}
}

impl FormModel for ErrorSummaryForm {
	fn form_name(&self) -> &str {
		"ErrorSummaryForm"
	}

	fn attribute_names(&self) -> Vec<String> {
		vec!["name".to_string(), "year".to_string()]
	}

	fn value(&self, attribute: &str) -> Value {
		match attribute {
			"year" => json!(2010),
			_ => json!(""),
		}
	}

	fn errors(&self, attribute: &str) -> Vec<String> {
		if !self.validated {
			return Vec::new();
		}
		match attribute {
			"name" => vec!["Value cannot be blank.".to_string()],
			"year" => vec!["Value must be no less than 1990.".to_string()],
			_ => Vec::new(),
		}
	}
}
