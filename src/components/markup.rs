//! Escaping helpers shared by the HTML and SVG renderers.

use serde::Serialize;

use crate::error::Result;

/// Escape text for use in HTML/SVG element content and attribute values.
pub fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

/// Serialize `value` as a JSON literal that is safe to inline in a `<script>` element.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
	Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn escapes_markup() {
		assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
		assert_eq!(escape("Serviço"), "Serviço");
	}

	#[test]
	fn script_json_cannot_close_the_script() {
		let json = script_json(&["</script><b>"]).unwrap();
		assert!(!json.contains("</script>"));
		assert_eq!(json, r#"["<\/script><b>"]"#);
	}
}
