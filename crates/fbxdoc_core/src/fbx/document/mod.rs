use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::fbx::{DecodeOptions, FbxHeader, NodeRecord, Result, TypeTag, walk_records};

/// Decoded binary FBX file: preamble plus the flat record chain.
#[derive(Debug, Clone, PartialEq)]
pub struct FbxDocument {
	/// Parsed file preamble.
	pub header: FbxHeader,
	records: Vec<NodeRecord>,
}

impl FbxDocument {
	/// Read a whole file from disk and decode it with default options.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::parse(&bytes)
	}

	/// Decode `bytes` with default options.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		Self::parse_with(bytes, &DecodeOptions::default())
	}

	/// Decode `bytes` with explicit options.
	///
	/// Record offsets are relative to the end of the 27-byte preamble.
	pub fn parse_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		let header = FbxHeader::parse(bytes)?;
		let records = walk_records(&bytes[FbxHeader::SIZE..], 0, *options)?;
		Ok(Self { header, records })
	}

	/// Most recently decoded record, the entry point of the chain.
	pub fn tail(&self) -> Option<&NodeRecord> {
		self.records.last()
	}

	/// Record decoded immediately before `record`.
	pub fn previous(&self, record: &NodeRecord) -> Option<&NodeRecord> {
		record.previous.and_then(|index| self.records.get(index))
	}

	/// Walk the chain from the tail back to the first record.
	pub fn chain(&self) -> Chain<'_> {
		Chain {
			document: self,
			next: self.tail(),
		}
	}

	/// All records in decode order.
	pub fn records(&self) -> &[NodeRecord] {
		&self.records
	}

	/// Nearest record to the tail named `name`.
	pub fn find_by_name(&self, name: &str) -> Option<&NodeRecord> {
		self.chain().find(|record| record.name == name)
	}

	/// Count records, properties, tags, and names.
	pub fn scan_stats(&self) -> RecordStats {
		let mut stats = RecordStats {
			record_count: self.records.len(),
			property_count: 0,
			tags: HashMap::new(),
			names: HashMap::new(),
		};

		for record in &self.records {
			stats.property_count += record.properties.len();
			*stats.names.entry(record.name.clone()).or_insert(0) += 1;
			for property in &record.properties {
				*stats.tags.entry(property.type_tag()).or_insert(0) += 1;
			}
		}

		stats
	}
}

/// Iterator following previous-record links from the chain tail.
pub struct Chain<'a> {
	document: &'a FbxDocument,
	next: Option<&'a NodeRecord>,
}

impl<'a> Iterator for Chain<'a> {
	type Item = &'a NodeRecord;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = self.document.previous(current);
		Some(current)
	}
}

/// Aggregate counts from a linear scan of the record chain.
pub struct RecordStats {
	/// Number of decoded records.
	pub record_count: usize,
	/// Number of decoded properties across all records.
	pub property_count: usize,
	/// Frequency table by property type tag.
	pub tags: HashMap<TypeTag, usize>,
	/// Frequency table by record name.
	pub names: HashMap<String, usize>,
}

#[cfg(test)]
mod tests;
