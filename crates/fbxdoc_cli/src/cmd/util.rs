use std::path::Path;

use fbxdoc::fbx::{FbxDocument, PropertyValue, Result};
use tracing::{debug, info};

/// Maximum number of array elements rendered in text output.
const MAX_ARRAY_ITEMS: usize = 16;
/// Maximum number of characters rendered for strings in text output.
const MAX_STRING_LEN: usize = 200;

/// Open and decode a document, logging size and record count.
pub(crate) fn open_document(path: &Path) -> Result<FbxDocument> {
	debug!("decoding {}", path.display());
	let document = FbxDocument::open(path)?;
	info!(
		"decoded {} records (version {}) from {}",
		document.records().len(),
		document.header.version,
		path.display()
	);
	Ok(document)
}

/// Print a serializable value as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}

/// Render a property value for text output, truncating long payloads.
pub(crate) fn render_value(value: &PropertyValue) -> String {
	let body = match value {
		PropertyValue::I16(item) => item.to_string(),
		PropertyValue::Bool(item) => item.to_string(),
		PropertyValue::I32(item) => item.to_string(),
		PropertyValue::F32(item) => item.to_string(),
		PropertyValue::F64(item) => item.to_string(),
		PropertyValue::I64(item) => item.to_string(),
		PropertyValue::U16(item) => item.to_string(),
		PropertyValue::String(item) => render_text(item),
		PropertyValue::Raw(item) => format!("0x{}", hex::encode(&item[..item.len().min(MAX_ARRAY_ITEMS)])) + ellipsis(item.len()),
		PropertyValue::F32Array(items) => render_list(items),
		PropertyValue::F64Array(items) => render_list(items),
		PropertyValue::I64Array(items) => render_list(items),
		PropertyValue::I32Array(items) => render_list(items),
		PropertyValue::ByteArray(items) => render_list(items),
	};
	format!("{}: {body}", value.type_tag())
}

fn render_text(text: &str) -> String {
	let mut out = String::from("\"");
	for ch in text.chars().take(MAX_STRING_LEN) {
		out.extend(ch.escape_debug());
	}
	if text.chars().count() > MAX_STRING_LEN {
		out.push_str("...");
	}
	out.push('"');
	out
}

fn render_list<T: ToString>(items: &[T]) -> String {
	let shown: Vec<String> = items.iter().take(MAX_ARRAY_ITEMS).map(ToString::to_string).collect();
	format!("[{}{}] (len={})", shown.join(", "), ellipsis(items.len()), items.len())
}

fn ellipsis(len: usize) -> &'static str {
	if len > MAX_ARRAY_ITEMS { ", ..." } else { "" }
}

#[cfg(test)]
mod tests {
	use fbxdoc::fbx::PropertyValue;

	use super::render_value;

	#[test]
	fn raw_renders_lowercase_unseparated_hex() {
		assert_eq!(render_value(&PropertyValue::Raw(vec![0x00, 0xAB, 0x7F])), "R: 0x00ab7f");
		assert_eq!(render_value(&PropertyValue::Raw(Vec::new())), "R: 0x");
	}

	#[test]
	fn render_prefixes_wire_tag() {
		assert_eq!(render_value(&PropertyValue::I32(42)), "I: 42");
		assert_eq!(render_value(&PropertyValue::U16(7)), "B: 7");
		assert_eq!(render_value(&PropertyValue::Raw(vec![0xCA, 0xFE])), "R: 0xcafe");
	}

	#[test]
	fn render_escapes_embedded_nul() {
		let rendered = render_value(&PropertyValue::String("ab\u{0}cd".to_owned()));
		assert_eq!(rendered, "S: \"ab\\0cd\"");
	}

	#[test]
	fn render_truncates_long_arrays() {
		let rendered = render_value(&PropertyValue::I32Array((0..20).collect()));
		assert!(rendered.starts_with("i: [0, 1, 2"), "{rendered}");
		assert!(rendered.ends_with("15, ...] (len=20)"), "{rendered}");
	}
}
