use crate::fbx::{FbxError, Result};

/// A value read at a fixed position together with the span it occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
	/// Decoded value.
	pub value: T,
	/// Offset of the first byte read.
	pub start: usize,
	/// Offset immediately following the last byte read.
	pub end: usize,
}

impl<T> Decoded<T> {
	/// Number of bytes consumed.
	pub fn width(&self) -> usize {
		self.end - self.start
	}

	/// Transform the value while keeping the span.
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
		Decoded {
			value: f(self.value),
			start: self.start,
			end: self.end,
		}
	}
}

/// Character set used to turn name and string bytes into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
	/// One byte per character, mapped to U+0000..=U+00FF.
	#[default]
	Latin1,
	/// UTF-8, with invalid sequences replaced by U+FFFD.
	Utf8Lossy,
}

impl TextEncoding {
	/// Decode `bytes` into an owned string.
	pub fn decode(self, bytes: &[u8]) -> String {
		match self {
			Self::Latin1 => bytes.iter().map(|byte| char::from(*byte)).collect(),
			Self::Utf8Lossy => String::from_utf8_lossy(bytes).into_owned(),
		}
	}
}

/// Offset-addressed little-endian reader over an immutable byte slice.
///
/// Every read is a pure function of `(bytes, offset)`. The returned
/// [`Decoded::end`] can be fed straight into the next read.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
	bytes: &'a [u8],
}

macro_rules! read_le {
	($(#[$doc:meta] $name:ident => $ty:ty),* $(,)?) => {
		$(
			#[$doc]
			pub fn $name(&self, offset: usize) -> Result<Decoded<$ty>> {
				let raw = self.array::<{ size_of::<$ty>() }>(offset)?;
				Ok(Decoded {
					value: <$ty>::from_le_bytes(raw),
					start: offset,
					end: offset + size_of::<$ty>(),
				})
			}
		)*
	};
}

impl<'a> ByteReader<'a> {
	/// Wrap a byte slice.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes }
	}

	/// Return the underlying bytes.
	pub fn bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// Return the buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether the buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Borrow exactly `n` bytes at `offset`.
	pub fn slice(&self, offset: usize, n: usize) -> Result<Decoded<&'a [u8]>> {
		let end = offset.checked_add(n).filter(|end| *end <= self.bytes.len()).ok_or(FbxError::OutOfBounds {
			at: offset,
			need: n,
			len: self.bytes.len(),
		})?;

		Ok(Decoded {
			value: &self.bytes[offset..end],
			start: offset,
			end,
		})
	}

	fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
		let raw = self.slice(offset, N)?.value;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	read_le! {
		/// Read an `i8`.
		read_i8 => i8,
		/// Read a `u8`.
		read_u8 => u8,
		/// Read a little-endian `i16`.
		read_i16 => i16,
		/// Read a little-endian `u16`.
		read_u16 => u16,
		/// Read a little-endian `i32`.
		read_i32 => i32,
		/// Read a little-endian `u32`.
		read_u32 => u32,
		/// Read a little-endian `i64`.
		read_i64 => i64,
		/// Read a little-endian `u64`.
		read_u64 => u64,
		/// Read a little-endian IEEE-754 `f32`.
		read_f32 => f32,
		/// Read a little-endian IEEE-754 `f64`.
		read_f64 => f64,
	}

	/// Read one byte as a boolean; any non-zero value is `true`.
	pub fn read_bool(&self, offset: usize) -> Result<Decoded<bool>> {
		Ok(self.read_u8(offset)?.map(|byte| byte != 0))
	}

	/// Read one byte as a character.
	pub fn read_char(&self, offset: usize) -> Result<Decoded<char>> {
		Ok(self.read_u8(offset)?.map(char::from))
	}

	/// Read `len` bytes as text.
	pub fn read_string(&self, offset: usize, len: usize, encoding: TextEncoding) -> Result<Decoded<String>> {
		Ok(self.slice(offset, len)?.map(|raw| encoding.decode(raw)))
	}

	/// Read `len` bytes as an owned byte vector.
	pub fn read_bytes(&self, offset: usize, len: usize) -> Result<Decoded<Vec<u8>>> {
		Ok(self.slice(offset, len)?.map(<[u8]>::to_vec))
	}
}

#[cfg(test)]
mod tests;
