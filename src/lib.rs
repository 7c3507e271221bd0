//! Composable, immutable HTML form field rendering
//!
//! This crate turns a form model — anything implementing [`FormModel`] —
//! into HTML form controls composed of an input widget plus label, hint,
//! and error fragments, optionally wrapped in a container tag:
//! - Immutable builder configuration: every setter consumes and returns the
//!   field, so configurations branch by cloning and never mutate in place
//! - A [`FieldFactory`] holding factory-wide defaults plus per-field-type
//!   override sequences, loadable from JSON configuration
//! - Template-driven composition (`{label}`, `{input}`, `{hint}`, `{error}`)
//!   with blank-line collapsing for empty fragments
//! - Deterministic, byte-exact markup: ordered attribute bags and a
//!   class-accumulating merge rule
//!
//! # Examples
//!
//! ```
//! use formweave::{FieldFactory, FormModel, InputField};
//! use serde_json::{Value, json};
//!
//! #[derive(Debug)]
//! struct SignupForm;
//!
//! impl FormModel for SignupForm {
//! 	fn form_name(&self) -> &str {
//! 		"SignupForm"
//! 	}
//!
//! 	fn attribute_names(&self) -> Vec<String> {
//! 		vec!["name".to_string()]
//! 	}
//!
//! 	fn value(&self, _attribute: &str) -> Value {
//! 		json!("")
//! 	}
//!
//! 	fn hint(&self, _attribute: &str) -> Option<String> {
//! 		Some("Input your full name.".to_string())
//! 	}
//! }
//!
//! let factory = FieldFactory::default();
//! let html = factory.text(&SignupForm, "name").unwrap().render().unwrap();
//! assert_eq!(
//! 	html,
//! 	"<div>\n\
//! 	 <label for=\"signupform-name\">Name</label>\n\
//! 	 <input type=\"text\" id=\"signupform-name\" name=\"SignupForm[name]\" value>\n\
//! 	 <div>Input your full name.</div>\n\
//! 	 </div>"
//! );
//! ```

pub mod attributes;
pub mod error;
pub mod factory;
pub mod field;
pub mod fields;
pub mod form_model;
pub mod html;

pub use attributes::{AttrValue, Attributes, ClassValue};
pub use error::{FieldError, FieldResult};
pub use factory::{
	ErrorSetter, FactoryOptions, FieldFactory, FieldKind, FieldSetter, HintSetter, LabelSetter,
};
pub use field::{DEFAULT_TEMPLATE, FieldConfig, InputField};
pub use fields::{
	Checkbox, ErrorConfig, ErrorMessage, ErrorSummary, Fieldset, Hint, HintConfig, Label,
	LabelConfig, Text,
};
pub use form_model::{FormModel, first_error, input_id, input_name};
