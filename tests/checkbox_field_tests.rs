//! Checkbox field integration tests
//!
//! Covers the enclosing-label markup, the hidden uncheck companion input,
//! checked-state matching against custom "on" values, and the error raised
//! for non-scalar model values.

mod support;

use formweave::{FieldError, FieldFactory, FieldKind, FieldSetter, InputField};
use rstest::rstest;
use serde_json::{Value, json};
use support::CheckboxForm;

#[rstest]
#[case::checked_with_hint(
	json!({}),
	"red",
	r#"<div>
<input type="hidden" name="CheckboxForm[red]" value="0"><label><input type="checkbox" id="checkboxform-red" name="CheckboxForm[red]" value="1" checked> Red color</label>
<div>If need red color.</div>
</div>"#
)]
#[case::unchecked(
	json!({}),
	"blue",
	r#"<div>
<input type="hidden" name="CheckboxForm[blue]" value="0"><label><input type="checkbox" id="checkboxform-blue" name="CheckboxForm[blue]" value="1"> Blue color</label>
</div>"#
)]
#[case::not_enclosed_by_label(
	json!({"fieldConfigs": {"checkbox": [{"enclosedByLabel": false}]}}),
	"blue",
	r#"<div>
<label for="checkboxform-blue">Blue color</label>
<input type="hidden" name="CheckboxForm[blue]" value="0"><input type="checkbox" id="checkboxform-blue" name="CheckboxForm[blue]" value="1">
</div>"#
)]
#[case::without_uncheck_value(
	json!({"fieldConfigs": {"checkbox": [{"uncheckValue": null}]}}),
	"red",
	r#"<div>
<label><input type="checkbox" id="checkboxform-red" name="CheckboxForm[red]" value="1" checked> Red color</label>
<div>If need red color.</div>
</div>"#
)]
#[case::custom_on_value_matching_number(
	json!({"fieldConfigs": {"checkbox": [{"value": 42}]}}),
	"age",
	r#"<div>
<input type="hidden" name="CheckboxForm[age]" value="0"><label><input type="checkbox" id="checkboxform-age" name="CheckboxForm[age]" value="42" checked> Your age 42?</label>
</div>"#
)]
fn test_checkbox(#[case] parameters: Value, #[case] attribute: &str, #[case] expected: &str) {
	let factory = FieldFactory::from_value(parameters).unwrap();

	let result = factory
		.checkbox(&CheckboxForm, attribute)
		.unwrap()
		.render()
		.unwrap();

	assert_eq!(result, expected);
}

#[rstest]
fn test_checkbox_label_override_is_escaped() {
	let factory = FieldFactory::default();

	let result = factory
		.checkbox(&CheckboxForm, "red")
		.unwrap()
		.label("Red & <shiny>")
		.render()
		.unwrap();

	assert!(
		result.contains("> Red &amp; &lt;shiny&gt;</label>"),
		"result: {result}"
	);
}

#[rstest]
fn test_checkbox_rejects_object_value() {
	let factory = FieldFactory::default();

	let error = factory
		.checkbox(&CheckboxForm, "object")
		.unwrap()
		.render()
		.unwrap_err();

	assert!(matches!(
		error,
		FieldError::InvalidInputType {
			widget: "Checkbox",
			..
		}
	));
}

#[rstest]
fn test_checkbox_through_generic_entry_point() {
	let factory = FieldFactory::default();

	let field = factory
		.input(
			FieldKind::Checkbox,
			&CheckboxForm,
			"blue",
			&[FieldSetter::EnclosedByLabel(false)],
		)
		.unwrap();

	assert_eq!(
		field.render().unwrap(),
		r#"<div>
<label for="checkboxform-blue">Blue color</label>
<input type="hidden" name="CheckboxForm[blue]" value="0"><input type="checkbox" id="checkboxform-blue" name="CheckboxForm[blue]" value="1">
</div>"#
	);
}
