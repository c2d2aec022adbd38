use fbxdoc::fbx::{FbxDocument, FbxHeader, NodeRecord, PropertyValue};

/// Whole-document JSON view written by `convert`.
#[derive(serde::Serialize)]
pub(crate) struct DocumentJson<'a> {
	header: HeaderJson<'a>,
	records: Vec<RecordJson<'a>>,
}

impl<'a> DocumentJson<'a> {
	pub(crate) fn new(document: &'a FbxDocument) -> Self {
		Self {
			header: HeaderJson::new(&document.header),
			records: document.records().iter().map(RecordJson::new).collect(),
		}
	}
}

#[derive(serde::Serialize)]
pub(crate) struct HeaderJson<'a> {
	magic: &'a str,
	reserved: String,
	version: u32,
}

impl<'a> HeaderJson<'a> {
	pub(crate) fn new(header: &'a FbxHeader) -> Self {
		Self {
			magic: &header.magic,
			reserved: hex::encode(header.reserved),
			version: header.version,
		}
	}
}

#[derive(serde::Serialize)]
pub(crate) struct RecordJson<'a> {
	index: usize,
	name: &'a str,
	start_offset: usize,
	end_offset: i32,
	property_count: u32,
	property_list_len: i32,
	previous: Option<usize>,
	properties: Vec<PropertyJson<'a>>,
}

impl<'a> RecordJson<'a> {
	pub(crate) fn new(record: &'a NodeRecord) -> Self {
		Self {
			index: record.index,
			name: &record.name,
			start_offset: record.start_offset,
			end_offset: record.end_offset,
			property_count: record.property_count,
			property_list_len: record.property_list_len,
			previous: record.previous,
			properties: record.properties.iter().map(PropertyJson::from).collect(),
		}
	}
}

/// Property serialized as `{"type": <wire tag>, "value": ...}`.
#[derive(serde::Serialize)]
#[serde(tag = "type", content = "value")]
pub(crate) enum PropertyJson<'a> {
	#[serde(rename = "Y")]
	I16(i16),
	#[serde(rename = "C")]
	Bool(bool),
	#[serde(rename = "I")]
	I32(i32),
	#[serde(rename = "F")]
	F32(f32),
	#[serde(rename = "D")]
	F64(f64),
	#[serde(rename = "L")]
	I64(i64),
	#[serde(rename = "B")]
	U16(u16),
	#[serde(rename = "S")]
	String(&'a str),
	#[serde(rename = "R")]
	Raw(String),
	#[serde(rename = "f")]
	F32Array(&'a [f32]),
	#[serde(rename = "d")]
	F64Array(&'a [f64]),
	#[serde(rename = "l")]
	I64Array(&'a [i64]),
	#[serde(rename = "i")]
	I32Array(&'a [i32]),
	#[serde(rename = "b")]
	ByteArray(&'a [u8]),
}

impl<'a> From<&'a PropertyValue> for PropertyJson<'a> {
	fn from(value: &'a PropertyValue) -> Self {
		match value {
			PropertyValue::I16(item) => Self::I16(*item),
			PropertyValue::Bool(item) => Self::Bool(*item),
			PropertyValue::I32(item) => Self::I32(*item),
			PropertyValue::F32(item) => Self::F32(*item),
			PropertyValue::F64(item) => Self::F64(*item),
			PropertyValue::I64(item) => Self::I64(*item),
			PropertyValue::U16(item) => Self::U16(*item),
			PropertyValue::String(item) => Self::String(item),
			PropertyValue::Raw(item) => Self::Raw(hex::encode(item)),
			PropertyValue::F32Array(items) => Self::F32Array(items),
			PropertyValue::F64Array(items) => Self::F64Array(items),
			PropertyValue::I64Array(items) => Self::I64Array(items),
			PropertyValue::I32Array(items) => Self::I32Array(items),
			PropertyValue::ByteArray(items) => Self::ByteArray(items),
		}
	}
}

#[cfg(test)]
mod tests {
	use fbxdoc::fbx::{FbxDocument, PropertyValue};
	use fbxdoc_testkit::sample_document;

	use super::{DocumentJson, PropertyJson};

	#[test]
	fn property_json_uses_wire_tags() {
		let value = PropertyValue::I32Array(vec![1, 2, 3]);
		let json = serde_json::to_value(PropertyJson::from(&value)).expect("serializes");
		assert_eq!(json, serde_json::json!({ "type": "i", "value": [1, 2, 3] }));

		let raw = PropertyValue::Raw(vec![0xCA, 0xFE]);
		let json = serde_json::to_value(PropertyJson::from(&raw)).expect("serializes");
		assert_eq!(json, serde_json::json!({ "type": "R", "value": "cafe" }));
	}

	#[test]
	fn document_json_lists_records_in_decode_order() {
		let document = FbxDocument::parse(&sample_document()).expect("sample parses");
		let json = serde_json::to_value(DocumentJson::new(&document)).expect("serializes");

		assert_eq!(json["header"]["version"], 7400);
		assert_eq!(json["header"]["reserved"], "1a00");
		assert_eq!(json["records"][0]["name"], "Root");
		assert_eq!(json["records"][0]["previous"], serde_json::Value::Null);
		assert_eq!(json["records"][1]["properties"][0]["value"], 42);
		assert_eq!(json["records"][2]["previous"], 1);
		assert_eq!(json["records"][2]["properties"][1]["type"], "d");
	}
}
