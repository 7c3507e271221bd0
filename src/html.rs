//! Minimal HTML tag building
//!
//! Just enough tag assembly for form markup: escaping, paired tags, and void
//! tags. Void tags render without a self-closing slash (`<input ...>`), which
//! is part of the crate's byte-exact output contract.

use crate::attributes::Attributes;

/// Escape text for safe use in HTML content and attribute values.
///
/// # Examples
///
/// ```
/// use formweave::html::escape;
///
/// assert_eq!(escape(r#"<b>"quoted"</b>"#), "&lt;b&gt;&quot;quoted&quot;&lt;/b&gt;");
/// ```
pub fn escape(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Opening tag with rendered attributes.
pub fn open_tag(name: &str, attributes: &Attributes) -> String {
	format!("<{name}{}>", attributes.render())
}

/// Closing tag.
pub fn close_tag(name: &str) -> String {
	format!("</{name}>")
}

/// Void tag such as `<input>`; identical to [`open_tag`] since the output
/// contract uses no self-closing slash.
pub fn void_tag(name: &str, attributes: &Attributes) -> String {
	open_tag(name, attributes)
}

/// Paired tag around already-escaped content.
///
/// # Examples
///
/// ```
/// use formweave::html::tag;
/// use formweave::Attributes;
///
/// let attributes = Attributes::new().with("class", "info");
/// assert_eq!(tag("div", &attributes, "A hint."), r#"<div class="info">A hint.</div>"#);
/// ```
pub fn tag(name: &str, attributes: &Attributes, content: &str) -> String {
	format!("<{name}{}>{content}</{name}>", attributes.render())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_open_tag_without_attributes() {
		assert_eq!(open_tag("div", &Attributes::new()), "<div>");
	}

	#[test]
	fn test_void_tag_has_no_slash() {
		let attributes = Attributes::new().with("type", "text").with("value", "");
		assert_eq!(void_tag("input", &attributes), r#"<input type="text" value>"#);
	}

	#[test]
	fn test_escape_ampersand_first() {
		assert_eq!(escape("a & b &lt;"), "a &amp; b &amp;lt;");
	}
}
