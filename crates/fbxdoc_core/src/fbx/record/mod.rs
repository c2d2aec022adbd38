use crate::fbx::{ByteReader, DecodeOptions, FbxError, PropertyDecoder, PropertyValue, Result, TypeTag};

/// Size of the fixed record prefix: three `i32` fields and the name length byte.
pub const RECORD_HEADER_SIZE: usize = 13;

/// One decoded record of the flat record stream.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
	/// Position in decode order.
	pub index: usize,
	/// Offset of the record's first byte, relative to the start of the record stream.
	pub start_offset: usize,
	/// End offset as declared by the record header. Never checked against the bytes consumed.
	pub end_offset: i32,
	/// Declared number of properties; equals `properties.len()`.
	///
	/// The wire field is an `i32`. A negative count fails the walk with
	/// [`FbxError::NegativeField`] instead of being read as zero properties.
	pub property_count: u32,
	/// Declared byte length of the property block.
	pub property_list_len: i32,
	/// Record name.
	pub name: String,
	/// Properties in wire order.
	pub properties: Vec<PropertyValue>,
	/// Index of the record decoded immediately before this one.
	pub previous: Option<usize>,
}

/// Lazily decodes records from a byte range, one after another.
///
/// Every record starts where the previous one's last property ended. The
/// iterator stops at the end of the range or after the first error.
pub struct RecordIter<'a> {
	reader: ByteReader<'a>,
	decoder: PropertyDecoder<'a>,
	options: DecodeOptions,
	cursor: usize,
	next_index: usize,
	done: bool,
}

impl<'a> RecordIter<'a> {
	/// Iterate records of `bytes` starting at `offset`.
	pub fn new(bytes: &'a [u8], offset: usize, options: DecodeOptions) -> Self {
		let reader = ByteReader::new(bytes);
		Self {
			reader,
			decoder: PropertyDecoder::new(reader, options),
			options,
			cursor: offset,
			next_index: 0,
			done: false,
		}
	}

	/// Offset where the next record would start.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	fn read_record(&self, start: usize) -> Result<(NodeRecord, usize)> {
		let reader = &self.reader;
		let end_offset = reader.read_i32(start)?;
		let property_count = reader.read_i32(end_offset.end)?;
		let property_list_len = reader.read_i32(property_count.end)?;
		let name_len = reader.read_u8(property_list_len.end)?;
		let name = reader.read_string(name_len.end, usize::from(name_len.value), self.options.text_encoding)?;

		let count = u32::try_from(property_count.value).map_err(|_| FbxError::NegativeField {
			field: "property count",
			value: property_count.value,
			at: property_count.start,
		})?;

		let mut cursor = name.end;
		let mut properties = Vec::with_capacity((count as usize).min(reader.len().saturating_sub(cursor)));
		for _ in 0..count {
			let tag = reader.read_u8(cursor)?;
			let tag_kind = TypeTag::from_byte(tag.value, tag.start)?;
			let property = self.decoder.decode(tag.end, tag_kind)?;
			cursor = property.end;
			properties.push(property.value);
		}

		let index = self.next_index;
		let record = NodeRecord {
			index,
			start_offset: start,
			end_offset: end_offset.value,
			property_count: count,
			property_list_len: property_list_len.value,
			name: name.value,
			properties,
			previous: index.checked_sub(1),
		};
		Ok((record, cursor))
	}
}

impl Iterator for RecordIter<'_> {
	type Item = Result<NodeRecord>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor >= self.reader.len() {
			self.done = true;
			return None;
		}

		match self.read_record(self.cursor) {
			Ok((record, cursor)) => {
				self.cursor = cursor;
				self.next_index += 1;
				Some(Ok(record))
			}
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}

/// Decode every record of `bytes` from `offset` to the end of the slice.
///
/// Fails as a whole on the first malformed record.
pub fn walk_records(bytes: &[u8], offset: usize, options: DecodeOptions) -> Result<Vec<NodeRecord>> {
	RecordIter::new(bytes, offset, options).collect()
}
