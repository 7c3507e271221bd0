//! Error types for field construction and rendering

/// Errors raised while configuring or rendering a field.
///
/// All of these are programmer-error classes raised synchronously; rendering
/// either fully succeeds or fails before producing any output.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	/// The model value has a shape the widget cannot represent as a scalar.
	#[error("{widget} widget value cannot be {found}; a scalar value is required")]
	InvalidInputType {
		widget: &'static str,
		found: &'static str,
	},
	/// A non-input field type was requested through the input-only entry point.
	#[error("{0} field does not implement the input field interface")]
	InvalidWidgetType(crate::factory::FieldKind),
	/// An unknown or inapplicable option was passed to the factory or a
	/// sub-widget configuration.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),
}

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

impl FieldError {
	pub(crate) fn unsupported_option(option: &str, widget: &str) -> Self {
		Self::InvalidConfiguration(format!(
			"option `{option}` is not supported by the {widget} field"
		))
	}
}
