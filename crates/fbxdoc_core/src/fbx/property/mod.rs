use crate::fbx::compression::MAX_DECOMPRESSED_BYTES;
use crate::fbx::{ArrayEncoding, ByteReader, Decoded, PropertyValue, Result, TextEncoding, TypeTag};

/// Size of the `length, encoding, compressed_length` array prefix.
pub const ARRAY_HEADER_SIZE: usize = 12;
/// Size of the `length` prefix of `S` and `R` payloads.
pub const SPECIAL_HEADER_SIZE: usize = 4;

/// Decoder configuration shared by properties and record names.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
	/// Character set for record names and `S` values.
	pub text_encoding: TextEncoding,
	/// Ceiling for one inflated array payload.
	pub max_decompressed_bytes: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			text_encoding: TextEncoding::Latin1,
			max_decompressed_bytes: MAX_DECOMPRESSED_BYTES,
		}
	}
}

/// Parsed prefix of an array property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayHeader {
	/// Declared element count.
	pub array_len: u32,
	/// Payload storage mode.
	pub encoding: ArrayEncoding,
	/// Number of payload bytes on the wire.
	pub compressed_len: u32,
}

/// Decodes one tagged property payload at a time.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDecoder<'a> {
	reader: ByteReader<'a>,
	options: DecodeOptions,
}

impl<'a> PropertyDecoder<'a> {
	/// Create a decoder over `reader`.
	pub fn new(reader: ByteReader<'a>, options: DecodeOptions) -> Self {
		Self { reader, options }
	}

	/// Decode the payload that follows a tag byte, starting at `offset`.
	///
	/// The returned span covers the whole payload as declared on the wire.
	/// For arrays this is `12 + compressed_len` regardless of how many
	/// content bytes the elements actually used.
	pub fn decode(&self, offset: usize, tag: TypeTag) -> Result<Decoded<PropertyValue>> {
		let reader = &self.reader;
		match tag {
			TypeTag::I16 => Ok(reader.read_i16(offset)?.map(PropertyValue::I16)),
			TypeTag::Bool => Ok(reader.read_bool(offset)?.map(PropertyValue::Bool)),
			TypeTag::I32 => Ok(reader.read_i32(offset)?.map(PropertyValue::I32)),
			TypeTag::F32 => Ok(reader.read_f32(offset)?.map(PropertyValue::F32)),
			TypeTag::F64 => Ok(reader.read_f64(offset)?.map(PropertyValue::F64)),
			TypeTag::I64 => Ok(reader.read_i64(offset)?.map(PropertyValue::I64)),
			TypeTag::U16 => Ok(reader.read_u16(offset)?.map(PropertyValue::U16)),
			TypeTag::F32Array => self.decode_array(offset, |elements, count| {
				Ok(PropertyValue::F32Array(read_elements(elements, count, ByteReader::read_f32)?))
			}),
			TypeTag::F64Array => self.decode_array(offset, |elements, count| {
				Ok(PropertyValue::F64Array(read_elements(elements, count, ByteReader::read_f64)?))
			}),
			TypeTag::I64Array => self.decode_array(offset, |elements, count| {
				Ok(PropertyValue::I64Array(read_elements(elements, count, ByteReader::read_i64)?))
			}),
			TypeTag::I32Array => self.decode_array(offset, |elements, count| {
				Ok(PropertyValue::I32Array(read_elements(elements, count, ByteReader::read_i32)?))
			}),
			TypeTag::ByteArray => self.decode_array(offset, |elements, count| {
				Ok(PropertyValue::ByteArray(read_elements(elements, count, ByteReader::read_u8)?))
			}),
			TypeTag::String => {
				let len = reader.read_u32(offset)?;
				let text = reader.read_string(len.end, len.value as usize, self.options.text_encoding)?;
				Ok(Decoded {
					value: PropertyValue::String(text.value),
					start: offset,
					end: text.end,
				})
			}
			TypeTag::Raw => {
				let len = reader.read_u32(offset)?;
				let raw = reader.read_bytes(len.end, len.value as usize)?;
				Ok(Decoded {
					value: PropertyValue::Raw(raw.value),
					start: offset,
					end: raw.end,
				})
			}
		}
	}

	/// Read the 12-byte prefix of an array payload.
	pub fn read_array_header(&self, offset: usize) -> Result<Decoded<ArrayHeader>> {
		let array_len = self.reader.read_u32(offset)?;
		let encoding = self.reader.read_u32(array_len.end)?;
		let compressed_len = self.reader.read_u32(encoding.end)?;

		Ok(Decoded {
			value: ArrayHeader {
				array_len: array_len.value,
				encoding: ArrayEncoding::from_wire(encoding.value, offset)?,
				compressed_len: compressed_len.value,
			},
			start: offset,
			end: compressed_len.end,
		})
	}

	/// `elements` receives a reader over the (inflated) content and the declared element count.
	fn decode_array(
		&self,
		offset: usize,
		elements: impl for<'b> FnOnce(&ByteReader<'b>, usize) -> Result<PropertyValue>,
	) -> Result<Decoded<PropertyValue>> {
		let header = self.read_array_header(offset)?;
		let content = self.reader.slice(header.end, header.value.compressed_len as usize)?;
		let inflated = header
			.value
			.encoding
			.decode(content.value, offset, self.options.max_decompressed_bytes)?;

		let value = elements(&ByteReader::new(&inflated), header.value.array_len as usize)?;

		Ok(Decoded {
			value,
			start: offset,
			end: content.end,
		})
	}
}

fn read_elements<'b, T>(
	elements: &ByteReader<'b>,
	count: usize,
	read: impl Fn(&ByteReader<'b>, usize) -> Result<Decoded<T>>,
) -> Result<Vec<T>> {
	let mut out = Vec::with_capacity(count.min(elements.len()));
	let mut at = 0;
	for _ in 0..count {
		let item = read(elements, at)?;
		at = item.end;
		out.push(item.value);
	}
	Ok(out)
}
