use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FbxError>;

/// Errors produced while reading and decoding binary FBX data.
#[derive(Debug, Error)]
pub enum FbxError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// A read needed more bytes than the buffer holds.
	#[error("out of bounds read at offset {at}: need {need} bytes, buffer length {len}")]
	OutOfBounds {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Total buffer length.
		len: usize,
	},
	/// Header magic or reserved bytes did not match.
	#[error("header mismatch in {field}: expected {expected:02x?}, got {got:02x?}")]
	HeaderMismatch {
		/// Header field that failed comparison.
		field: &'static str,
		/// Required bytes.
		expected: Vec<u8>,
		/// Bytes found in the file.
		got: Vec<u8>,
	},
	/// Property type tag is not part of the closed tag set.
	#[error("unknown property type tag 0x{tag:02x} at offset {at}")]
	UnknownTypeTag {
		/// Raw tag byte.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Array encoding field is neither raw (0) nor zlib (1).
	#[error("invalid array encoding {encoding} at offset {at}")]
	InvalidEncoding {
		/// Parsed encoding value.
		encoding: u32,
		/// Offset of the array payload.
		at: usize,
	},
	/// zlib stream for an array payload was malformed.
	#[error("array decompression failed at offset {at}: {source}")]
	DecompressionFailure {
		/// Offset of the array payload.
		at: usize,
		/// Underlying inflate error.
		#[source]
		source: std::io::Error,
	},
	/// Inflated array payload exceeded the configured ceiling.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// A signed count field held a negative value.
	#[error("negative {field} {value} at offset {at}")]
	NegativeField {
		/// Record header field name.
		field: &'static str,
		/// Parsed signed value.
		value: i32,
		/// Offset of the field.
		at: usize,
	},
	/// No record in the chain carries the requested name.
	#[error("record not found: {name}")]
	RecordNotFound {
		/// Requested record name.
		name: String,
	},
	/// Output path already exists and overwriting was not requested.
	#[error("destination exists: {} (pass --force to overwrite)", path.display())]
	DestinationExists {
		/// Destination path.
		path: PathBuf,
	},
}
