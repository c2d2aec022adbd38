mod bytes;
mod compression;
mod document;
mod error;
mod header;
mod property;
mod record;
mod value;

/// Offset-addressed reader and its result type.
pub use bytes::{ByteReader, Decoded, TextEncoding};
/// Array payload storage modes.
pub use compression::{ArrayEncoding, MAX_DECOMPRESSED_BYTES};
/// Decoded document, chain iterator, and scan statistics.
pub use document::{Chain, FbxDocument, RecordStats};
/// Error and result aliases.
pub use error::{FbxError, Result};
/// File preamble representation.
pub use header::FbxHeader;
/// Tagged property decoding entry points and options.
pub use property::{ARRAY_HEADER_SIZE, ArrayHeader, DecodeOptions, PropertyDecoder, SPECIAL_HEADER_SIZE};
/// Record stream walking types and entry points.
pub use record::{NodeRecord, RECORD_HEADER_SIZE, RecordIter, walk_records};
/// Decoded property values and type tags.
pub use value::{PropertyValue, TagClass, TypeTag};
