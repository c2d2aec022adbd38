use crate::fbx::{ByteReader, FbxError, Result, TextEncoding};

/// Parsed binary FBX file preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FbxHeader {
	/// Magic text, always `"Kaydara FBX Binary  "` once validated.
	pub magic: String,
	/// Bytes at offsets 21..23, always `[0x1A, 0x00]` once validated.
	pub reserved: [u8; 2],
	/// File format version (for example `7400`).
	pub version: u32,
}

impl FbxHeader {
	/// Total preamble size in bytes.
	pub const SIZE: usize = 27;
	/// Required magic text (the NUL at offset 20 is not compared).
	pub const MAGIC: &'static [u8; 20] = b"Kaydara FBX Binary  ";
	/// Required reserved bytes.
	pub const RESERVED: [u8; 2] = [0x1A, 0x00];

	const RESERVED_OFFSET: usize = 21;
	const VERSION_OFFSET: usize = 23;

	/// Parse and validate the preamble at the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let reader = ByteReader::new(bytes);
		let preamble = reader.slice(0, Self::SIZE)?.value;

		let magic = &preamble[..Self::MAGIC.len()];
		if magic != Self::MAGIC {
			return Err(FbxError::HeaderMismatch {
				field: "magic",
				expected: Self::MAGIC.to_vec(),
				got: magic.to_vec(),
			});
		}

		let reserved = [preamble[Self::RESERVED_OFFSET], preamble[Self::RESERVED_OFFSET + 1]];
		if reserved != Self::RESERVED {
			return Err(FbxError::HeaderMismatch {
				field: "reserved",
				expected: Self::RESERVED.to_vec(),
				got: reserved.to_vec(),
			});
		}

		Ok(Self {
			magic: TextEncoding::Latin1.decode(magic),
			reserved,
			version: reader.read_u32(Self::VERSION_OFFSET)?.value,
		})
	}
}
