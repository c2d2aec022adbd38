use std::fmt;

use crate::fbx::{FbxError, Result};

/// Wire-level property type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
	/// `Y`: signed 16-bit integer.
	I16,
	/// `C`: boolean stored in one byte.
	Bool,
	/// `I`: signed 32-bit integer.
	I32,
	/// `F`: 32-bit float.
	F32,
	/// `D`: 64-bit float.
	F64,
	/// `L`: signed 64-bit integer.
	I64,
	/// `B`: unsigned 16-bit integer.
	U16,
	/// `f`: array of 32-bit floats.
	F32Array,
	/// `d`: array of 64-bit floats.
	F64Array,
	/// `l`: array of signed 64-bit integers.
	I64Array,
	/// `i`: array of signed 32-bit integers.
	I32Array,
	/// `b`: array of bytes.
	ByteArray,
	/// `S`: length-prefixed text.
	String,
	/// `R`: length-prefixed raw bytes.
	Raw,
}

/// Decoding strategy selected by a [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
	/// Fixed-width scalar.
	Primitive,
	/// Length/encoding/size header followed by optionally compressed elements.
	Array,
	/// Length prefix followed by text or raw bytes.
	Special,
}

impl TypeTag {
	/// Every recognised tag, in wire-table order.
	pub const ALL: [TypeTag; 14] = [
		Self::I16,
		Self::Bool,
		Self::I32,
		Self::F32,
		Self::F64,
		Self::I64,
		Self::U16,
		Self::F32Array,
		Self::F64Array,
		Self::I64Array,
		Self::I32Array,
		Self::ByteArray,
		Self::String,
		Self::Raw,
	];

	/// Map a raw tag byte read at `at` to a tag.
	pub fn from_byte(tag: u8, at: usize) -> Result<Self> {
		Ok(match tag {
			b'Y' => Self::I16,
			b'C' => Self::Bool,
			b'I' => Self::I32,
			b'F' => Self::F32,
			b'D' => Self::F64,
			b'L' => Self::I64,
			b'B' => Self::U16,
			b'f' => Self::F32Array,
			b'd' => Self::F64Array,
			b'l' => Self::I64Array,
			b'i' => Self::I32Array,
			b'b' => Self::ByteArray,
			b'S' => Self::String,
			b'R' => Self::Raw,
			_ => return Err(FbxError::UnknownTypeTag { tag, at }),
		})
	}

	/// Wire byte for this tag.
	pub fn as_byte(self) -> u8 {
		match self {
			Self::I16 => b'Y',
			Self::Bool => b'C',
			Self::I32 => b'I',
			Self::F32 => b'F',
			Self::F64 => b'D',
			Self::I64 => b'L',
			Self::U16 => b'B',
			Self::F32Array => b'f',
			Self::F64Array => b'd',
			Self::I64Array => b'l',
			Self::I32Array => b'i',
			Self::ByteArray => b'b',
			Self::String => b'S',
			Self::Raw => b'R',
		}
	}

	/// Wire character for this tag.
	pub fn as_char(self) -> char {
		char::from(self.as_byte())
	}

	/// Decoding strategy for this tag.
	pub fn class(self) -> TagClass {
		match self {
			Self::I16 | Self::Bool | Self::I32 | Self::F32 | Self::F64 | Self::I64 | Self::U16 => TagClass::Primitive,
			Self::F32Array | Self::F64Array | Self::I64Array | Self::I32Array | Self::ByteArray => TagClass::Array,
			Self::String | Self::Raw => TagClass::Special,
		}
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

/// Decoded property payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	/// `Y`
	I16(i16),
	/// `C`
	Bool(bool),
	/// `I`
	I32(i32),
	/// `F`
	F32(f32),
	/// `D`
	F64(f64),
	/// `L`
	I64(i64),
	/// `B`
	U16(u16),
	/// `S`; embedded NUL characters are kept.
	String(String),
	/// `R`
	Raw(Vec<u8>),
	/// `f`
	F32Array(Vec<f32>),
	/// `d`
	F64Array(Vec<f64>),
	/// `l`
	I64Array(Vec<i64>),
	/// `i`
	I32Array(Vec<i32>),
	/// `b`
	ByteArray(Vec<u8>),
}

impl PropertyValue {
	/// Tag this value was decoded from.
	pub fn type_tag(&self) -> TypeTag {
		match self {
			Self::I16(_) => TypeTag::I16,
			Self::Bool(_) => TypeTag::Bool,
			Self::I32(_) => TypeTag::I32,
			Self::F32(_) => TypeTag::F32,
			Self::F64(_) => TypeTag::F64,
			Self::I64(_) => TypeTag::I64,
			Self::U16(_) => TypeTag::U16,
			Self::String(_) => TypeTag::String,
			Self::Raw(_) => TypeTag::Raw,
			Self::F32Array(_) => TypeTag::F32Array,
			Self::F64Array(_) => TypeTag::F64Array,
			Self::I64Array(_) => TypeTag::I64Array,
			Self::I32Array(_) => TypeTag::I32Array,
			Self::ByteArray(_) => TypeTag::ByteArray,
		}
	}

	/// Element count for arrays, byte/char count for special values.
	pub fn element_count(&self) -> Option<usize> {
		match self {
			Self::String(value) => Some(value.chars().count()),
			Self::Raw(value) | Self::ByteArray(value) => Some(value.len()),
			Self::F32Array(value) => Some(value.len()),
			Self::F64Array(value) => Some(value.len()),
			Self::I64Array(value) => Some(value.len()),
			Self::I32Array(value) => Some(value.len()),
			_ => None,
		}
	}
}
