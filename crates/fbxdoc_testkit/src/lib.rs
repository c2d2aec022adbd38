//! Shared test helpers for workspace crates.
//!
//! Builds synthetic binary FBX byte streams so tests never depend on
//! checked-in binary fixtures.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Magic text at the start of every binary FBX file.
pub const MAGIC: &[u8; 20] = b"Kaydara FBX Binary  ";
/// Bytes following the magic terminator.
pub const RESERVED: [u8; 2] = [0x1A, 0x00];
/// Size of the file preamble.
pub const HEADER_SIZE: usize = 27;

/// Encode the 27-byte preamble for `version`.
pub fn header(version: u32) -> Vec<u8> {
	let mut out = Vec::with_capacity(HEADER_SIZE);
	out.extend_from_slice(MAGIC);
	out.push(0);
	out.extend_from_slice(&RESERVED);
	out.extend_from_slice(&version.to_le_bytes());
	out
}

/// zlib-compress `bytes` at the default level.
pub fn zlib(bytes: &[u8]) -> Vec<u8> {
	let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
	encoder.write_all(bytes).expect("in-memory zlib write");
	encoder.finish().expect("in-memory zlib finish")
}

/// Tagged property encoders. Every function returns the tag byte followed by its payload.
pub mod prop {
	use super::zlib;

	fn tagged(tag: u8, payload: &[u8]) -> Vec<u8> {
		let mut out = Vec::with_capacity(payload.len() + 1);
		out.push(tag);
		out.extend_from_slice(payload);
		out
	}

	/// `Y` property.
	pub fn i16(value: i16) -> Vec<u8> {
		tagged(b'Y', &value.to_le_bytes())
	}

	/// `C` property.
	pub fn bool(value: bool) -> Vec<u8> {
		tagged(b'C', &[u8::from(value)])
	}

	/// `I` property.
	pub fn i32(value: i32) -> Vec<u8> {
		tagged(b'I', &value.to_le_bytes())
	}

	/// `F` property.
	pub fn f32(value: f32) -> Vec<u8> {
		tagged(b'F', &value.to_le_bytes())
	}

	/// `D` property.
	pub fn f64(value: f64) -> Vec<u8> {
		tagged(b'D', &value.to_le_bytes())
	}

	/// `L` property.
	pub fn i64(value: i64) -> Vec<u8> {
		tagged(b'L', &value.to_le_bytes())
	}

	/// `B` property, two bytes wide.
	pub fn u16(value: u16) -> Vec<u8> {
		tagged(b'B', &value.to_le_bytes())
	}

	/// `S` property with the given raw text bytes.
	pub fn string(text: &[u8]) -> Vec<u8> {
		special(b'S', text)
	}

	/// `R` property.
	pub fn raw(bytes: &[u8]) -> Vec<u8> {
		special(b'R', bytes)
	}

	fn special(tag: u8, content: &[u8]) -> Vec<u8> {
		let mut payload = (content.len() as u32).to_le_bytes().to_vec();
		payload.extend_from_slice(content);
		tagged(tag, &payload)
	}

	/// Array property with explicit header fields and content bytes.
	pub fn array_with(tag: u8, array_len: u32, encoding: u32, content: &[u8]) -> Vec<u8> {
		let mut payload = Vec::with_capacity(12 + content.len());
		payload.extend_from_slice(&array_len.to_le_bytes());
		payload.extend_from_slice(&encoding.to_le_bytes());
		payload.extend_from_slice(&(content.len() as u32).to_le_bytes());
		payload.extend_from_slice(content);
		tagged(tag, &payload)
	}

	fn array(tag: u8, count: usize, elements: Vec<u8>, compress: bool) -> Vec<u8> {
		if compress {
			array_with(tag, count as u32, 1, &zlib(&elements))
		} else {
			array_with(tag, count as u32, 0, &elements)
		}
	}

	/// `f` property.
	pub fn f32_array(values: &[f32], compress: bool) -> Vec<u8> {
		array(b'f', values.len(), values.iter().flat_map(|item| item.to_le_bytes()).collect(), compress)
	}

	/// `d` property.
	pub fn f64_array(values: &[f64], compress: bool) -> Vec<u8> {
		array(b'd', values.len(), values.iter().flat_map(|item| item.to_le_bytes()).collect(), compress)
	}

	/// `l` property.
	pub fn i64_array(values: &[i64], compress: bool) -> Vec<u8> {
		array(b'l', values.len(), values.iter().flat_map(|item| item.to_le_bytes()).collect(), compress)
	}

	/// `i` property.
	pub fn i32_array(values: &[i32], compress: bool) -> Vec<u8> {
		array(b'i', values.len(), values.iter().flat_map(|item| item.to_le_bytes()).collect(), compress)
	}

	/// `b` property.
	pub fn byte_array(values: &[u8], compress: bool) -> Vec<u8> {
		array(b'b', values.len(), values.to_vec(), compress)
	}
}

/// One record to be laid out by [`FbxBuilder`].
#[derive(Debug, Clone)]
pub struct RecordBuilder {
	name: Vec<u8>,
	props: Vec<Vec<u8>>,
	end_offset: Option<i32>,
	property_count: Option<i32>,
}

impl RecordBuilder {
	/// Start a record called `name`.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.as_bytes().to_vec(),
			props: Vec::new(),
			end_offset: None,
			property_count: None,
		}
	}

	/// Append an encoded property (see [`prop`]).
	pub fn prop(mut self, encoded: Vec<u8>) -> Self {
		self.props.push(encoded);
		self
	}

	/// Override the declared end offset.
	pub fn end_offset(mut self, value: i32) -> Self {
		self.end_offset = Some(value);
		self
	}

	/// Override the declared property count.
	pub fn property_count(mut self, value: i32) -> Self {
		self.property_count = Some(value);
		self
	}

	/// Encode the record assuming it starts at absolute file offset `start`.
	pub fn encode(&self, start: usize) -> Vec<u8> {
		let props_len: usize = self.props.iter().map(Vec::len).sum();
		let total = 13 + self.name.len() + props_len;
		let end_offset = self.end_offset.unwrap_or((start + total) as i32);

		let mut out = Vec::with_capacity(total);
		out.extend_from_slice(&end_offset.to_le_bytes());
		out.extend_from_slice(&self.property_count.unwrap_or(self.props.len() as i32).to_le_bytes());
		out.extend_from_slice(&(props_len as i32).to_le_bytes());
		out.push(self.name.len() as u8);
		out.extend_from_slice(&self.name);
		for item in &self.props {
			out.extend_from_slice(item);
		}
		out
	}
}

/// Lays out a header followed by a flat record stream.
#[derive(Debug, Clone)]
pub struct FbxBuilder {
	version: u32,
	records: Vec<RecordBuilder>,
}

impl FbxBuilder {
	/// Start a file with the given version number.
	pub fn new(version: u32) -> Self {
		Self {
			version,
			records: Vec::new(),
		}
	}

	/// Append a record.
	pub fn record(mut self, record: RecordBuilder) -> Self {
		self.records.push(record);
		self
	}

	/// Encode header and records.
	pub fn build(&self) -> Vec<u8> {
		let mut out = header(self.version);
		for record in &self.records {
			let encoded = record.encode(out.len());
			out.extend_from_slice(&encoded);
		}
		out
	}
}

/// Three-record file used across crates: `Root` (no properties),
/// `Node` (`I` 42), and `Mesh` (text, compressed doubles, raw bytes).
pub fn sample_document() -> Vec<u8> {
	FbxBuilder::new(7400)
		.record(RecordBuilder::new("Root"))
		.record(RecordBuilder::new("Node").prop(prop::i32(42)))
		.record(
			RecordBuilder::new("Mesh")
				.prop(prop::string(b"Model\x00\x01Cube"))
				.prop(prop::f64_array(&[0.0, 1.5, -2.25], true))
				.prop(prop::raw(&[0xCA, 0xFE])),
		)
		.build()
}
