use crate::fbx::{ByteReader, FbxError, TextEncoding};

#[test]
fn reads_little_endian_scalars_with_spans() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&(-2_i16).to_le_bytes());
	bytes.extend_from_slice(&0xDEAD_BEEF_u32.to_le_bytes());
	bytes.extend_from_slice(&1.5_f64.to_le_bytes());

	let reader = ByteReader::new(&bytes);
	let short = reader.read_i16(0).expect("i16 reads");
	assert_eq!(short.value, -2);
	assert_eq!((short.start, short.end), (0, 2));

	let word = reader.read_u32(short.end).expect("u32 reads");
	assert_eq!(word.value, 0xDEAD_BEEF);
	assert_eq!(word.end, 6);

	let double = reader.read_f64(word.end).expect("f64 reads");
	assert_eq!(double.value, 1.5);
	assert_eq!(double.width(), 8);
	assert_eq!(double.end, bytes.len());
}

#[test]
fn signed_byte_and_wide_unsigned_reads() {
	let mut bytes = vec![0xFF];
	bytes.extend_from_slice(&u64::MAX.to_le_bytes());

	let reader = ByteReader::new(&bytes);
	let byte = reader.read_i8(0).expect("i8 reads");
	assert_eq!(byte.value, -1);
	assert_eq!(byte.width(), 1);

	let wide = reader.read_u64(byte.end).expect("u64 reads");
	assert_eq!(wide.value, u64::MAX);
	assert_eq!((wide.start, wide.end), (1, 9));
	assert!(matches!(reader.read_u64(2), Err(FbxError::OutOfBounds { at: 2, need: 8, len: 9 })));
}

#[test]
fn bool_and_char_read_single_byte() {
	let reader = ByteReader::new(&[0x00, 0x02, b'S']);
	assert!(!reader.read_bool(0).expect("bool reads").value);
	assert!(reader.read_bool(1).expect("bool reads").value);

	let tag = reader.read_char(2).expect("char reads");
	assert_eq!(tag.value, 'S');
	assert_eq!(tag.end, 3);
}

#[test]
fn out_of_bounds_is_reported_before_reading() {
	let reader = ByteReader::new(&[1, 2, 3]);
	let err = reader.read_u32(0).expect_err("u32 needs four bytes");
	assert!(matches!(err, FbxError::OutOfBounds { at: 0, need: 4, len: 3 }));

	let err = reader.read_u8(3).expect_err("offset at end is out of range");
	assert!(matches!(err, FbxError::OutOfBounds { at: 3, need: 1, len: 3 }));

	let err = reader.slice(usize::MAX, 2).expect_err("overflowing range fails");
	assert!(matches!(err, FbxError::OutOfBounds { need: 2, .. }));
}

#[test]
fn zero_length_reads_at_end_succeed() {
	let reader = ByteReader::new(b"ab");
	let empty = reader.read_string(2, 0, TextEncoding::Latin1).expect("empty string reads");
	assert_eq!(empty.value, "");
	assert_eq!((empty.start, empty.end), (2, 2));
}

#[test]
fn latin1_maps_every_byte_to_one_char() {
	let reader = ByteReader::new(&[b'a', 0x00, 0xE9]);
	let text = reader.read_string(0, 3, TextEncoding::Latin1).expect("string reads");
	assert_eq!(text.value, "a\u{0}\u{e9}");
	assert_eq!(text.value.chars().count(), 3);
	assert_eq!(text.end, 3);
}

#[test]
fn utf8_lossy_replaces_invalid_sequences() {
	let reader = ByteReader::new(&[b'o', b'k', 0xFF]);
	let text = reader.read_string(0, 3, TextEncoding::Utf8Lossy).expect("string reads");
	assert_eq!(text.value, "ok\u{fffd}");
}
