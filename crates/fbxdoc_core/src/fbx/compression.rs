use std::borrow::Cow;
use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::fbx::{FbxError, Result};

/// Default ceiling for inflated array payloads.
pub const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;

/// Storage mode of an array property payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayEncoding {
	/// Elements stored back to back.
	Raw,
	/// Elements stored as one zlib stream.
	Zlib,
}

impl ArrayEncoding {
	/// Map the wire encoding field of the array payload at `at`.
	pub fn from_wire(encoding: u32, at: usize) -> Result<Self> {
		match encoding {
			0 => Ok(Self::Raw),
			1 => Ok(Self::Zlib),
			_ => Err(FbxError::InvalidEncoding { encoding, at }),
		}
	}

	/// Return the element bytes for `content`, inflating when needed.
	pub(crate) fn decode<'a>(self, content: &'a [u8], at: usize, limit: usize) -> Result<Cow<'a, [u8]>> {
		match self {
			Self::Raw => Ok(Cow::Borrowed(content)),
			Self::Zlib => inflate(content, at, limit).map(Cow::Owned),
		}
	}
}

fn inflate(content: &[u8], at: usize, limit: usize) -> Result<Vec<u8>> {
	let mut decoder = ZlibDecoder::new(content);
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(|source| FbxError::DecompressionFailure { at, source })?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(FbxError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
