use fbxdoc_testkit::{FbxBuilder, RecordBuilder, header, prop, sample_document};

use crate::fbx::{ByteReader, FbxDocument, FbxError, PropertyDecoder, PropertyValue, RecordIter, TypeTag};

fn root_and_node() -> Vec<u8> {
	FbxBuilder::new(7400)
		.record(RecordBuilder::new("Root"))
		.record(RecordBuilder::new("Node").prop(prop::i32(42)))
		.build()
}

#[test]
fn two_record_stream_links_tail_to_previous() {
	let document = FbxDocument::parse(&root_and_node()).expect("document parses");
	assert_eq!(document.header.version, 7400);
	assert_eq!(document.header.magic, "Kaydara FBX Binary  ");

	let tail = document.tail().expect("tail exists");
	assert_eq!(tail.name, "Node");
	assert_eq!(tail.properties, vec![PropertyValue::I32(42)]);

	let previous = document.previous(tail).expect("tail links back");
	assert_eq!(previous.name, "Root");
	assert!(previous.properties.is_empty());
	assert_eq!(previous.start_offset, 0);
	assert!(document.previous(previous).is_none());
}

#[test]
fn record_offsets_are_relative_to_stream_start() {
	let document = FbxDocument::parse(&root_and_node()).expect("document parses");
	let tail = document.tail().expect("tail exists");
	assert_eq!(tail.start_offset, 17);
	// the builder declares absolute file offsets
	assert_eq!(tail.end_offset as usize, 27 + 17 + 22);
}

#[test]
fn header_only_file_has_no_tail() {
	let document = FbxDocument::parse(&header(7100)).expect("empty stream parses");
	assert!(document.tail().is_none());
	assert_eq!(document.chain().count(), 0);
}

#[test]
fn decoding_twice_is_structurally_equal() {
	let bytes = sample_document();
	let first = FbxDocument::parse(&bytes).expect("first parse");
	let second = FbxDocument::parse(&bytes).expect("second parse");
	assert_eq!(first, second);
}

#[test]
fn chain_walks_from_tail_to_head() {
	let document = FbxDocument::parse(&sample_document()).expect("sample parses");
	let names: Vec<_> = document.chain().map(|record| record.name.as_str()).collect();
	assert_eq!(names, ["Mesh", "Node", "Root"]);
	assert_eq!(document.records().len(), 3);
}

#[test]
fn sample_mesh_properties_decode() {
	let document = FbxDocument::parse(&sample_document()).expect("sample parses");
	let mesh = document.find_by_name("Mesh").expect("mesh exists");
	assert_eq!(
		mesh.properties,
		vec![
			PropertyValue::String("Model\u{0}\u{1}Cube".to_owned()),
			PropertyValue::F64Array(vec![0.0, 1.5, -2.25]),
			PropertyValue::Raw(vec![0xCA, 0xFE]),
		]
	);
	let counts: Vec<_> = mesh.properties.iter().map(PropertyValue::element_count).collect();
	assert_eq!(counts, [Some(11), Some(3), Some(2)]);
	assert!(document.find_by_name("Missing").is_none());
}

#[test]
fn find_prefers_record_nearest_tail() {
	let bytes = FbxBuilder::new(7400)
		.record(RecordBuilder::new("Dup").prop(prop::i16(1)))
		.record(RecordBuilder::new("Dup").prop(prop::i16(2)))
		.record(RecordBuilder::new("Other"))
		.build();
	let document = FbxDocument::parse(&bytes).expect("document parses");
	let found = document.find_by_name("Dup").expect("dup exists");
	assert_eq!(found.properties, vec![PropertyValue::I16(2)]);
	assert_eq!(found.index, 1);
}

#[test]
fn stats_count_tags_and_names() {
	let document = FbxDocument::parse(&sample_document()).expect("sample parses");
	let stats = document.scan_stats();
	assert_eq!(stats.record_count, 3);
	assert_eq!(stats.property_count, 4);
	assert_eq!(stats.tags.get(&TypeTag::F64Array), Some(&1));
	assert_eq!(stats.tags.get(&TypeTag::I32), Some(&1));
	assert_eq!(stats.names.get("Root"), Some(&1));
}

#[test]
fn bad_header_walks_nothing() {
	let mut bytes = root_and_node();
	bytes[0] = b'k';
	let err = FbxDocument::parse(&bytes).expect_err("magic mismatch");
	assert!(matches!(err, FbxError::HeaderMismatch { field: "magic", .. }));
}

#[test]
fn failure_midway_returns_no_document() {
	let mut bytes = root_and_node();
	bytes.truncate(bytes.len() - 1);
	let err = FbxDocument::parse(&bytes).expect_err("tail property is cut");
	assert!(matches!(err, FbxError::OutOfBounds { .. }));
}

#[test]
fn open_missing_file_is_io_error() {
	let err = FbxDocument::open("/definitely/not/here.fbx").expect_err("missing file");
	assert!(matches!(err, FbxError::Io(_)));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn decoder_types_are_send_and_sync() {
	assert_send_sync::<FbxDocument>();
	assert_send_sync::<ByteReader<'static>>();
	assert_send_sync::<PropertyDecoder<'static>>();
	assert_send_sync::<RecordIter<'static>>();
}

#[test]
fn distinct_buffers_decode_on_separate_threads() {
	let handles: Vec<_> = [root_and_node(), sample_document()]
		.into_iter()
		.map(|bytes| std::thread::spawn(move || FbxDocument::parse(&bytes).map(|document| document.records().len())))
		.collect();
	let counts: Vec<_> = handles
		.into_iter()
		.map(|handle| handle.join().expect("thread joins").expect("document parses"))
		.collect();
	assert_eq!(counts, [2, 3]);
}
