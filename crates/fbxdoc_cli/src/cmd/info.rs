use std::path::PathBuf;

use fbxdoc::fbx::{Result, TypeTag};

use crate::cmd::json::HeaderJson;
use crate::cmd::util::{emit_json, open_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print header fields and record statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let document = open_document(&path)?;
	let stats = document.scan_stats();

	let mut tags: Vec<_> = stats.tags.into_iter().collect();
	tags.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	let mut names: Vec<_> = stats.names.into_iter().collect();
	names.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			header: HeaderJson::new(&document.header),
			record_count: stats.record_count,
			property_count: stats.property_count,
			tail: document.tail().map(|record| record.name.as_str()),
			tags: tags
				.iter()
				.map(|(tag, count)| TagCountJson {
					tag: tag.as_char(),
					count: *count,
				})
				.collect(),
			top_names: names
				.iter()
				.take(12)
				.map(|(name, count)| NameCountJson {
					name: name.as_str(),
					count: *count,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("magic: {}", document.header.magic.trim_end());
	println!("reserved: {}", hex::encode(document.header.reserved));
	println!("version: {}", document.header.version);
	println!("record_count: {}", stats.record_count);
	println!("property_count: {}", stats.property_count);
	println!("tail: {}", document.tail().map_or("-", |record| record.name.as_str()));

	println!("tags:");
	for (tag, count) in &tags {
		println!("  {} ({}): {}", tag, tag_label(*tag), count);
	}

	println!("top_names:");
	for (name, count) in names.iter().take(12) {
		println!("  {name}: {count}");
	}

	Ok(())
}

fn tag_label(tag: TypeTag) -> &'static str {
	match tag {
		TypeTag::I16 => "i16",
		TypeTag::Bool => "bool",
		TypeTag::I32 => "i32",
		TypeTag::F32 => "f32",
		TypeTag::F64 => "f64",
		TypeTag::I64 => "i64",
		TypeTag::U16 => "u16",
		TypeTag::F32Array => "f32[]",
		TypeTag::F64Array => "f64[]",
		TypeTag::I64Array => "i64[]",
		TypeTag::I32Array => "i32[]",
		TypeTag::ByteArray => "u8[]",
		TypeTag::String => "string",
		TypeTag::Raw => "raw",
	}
}

#[derive(serde::Serialize)]
struct TagCountJson {
	tag: char,
	count: usize,
}

#[derive(serde::Serialize)]
struct NameCountJson<'a> {
	name: &'a str,
	count: usize,
}

#[derive(serde::Serialize)]
struct InfoJson<'a> {
	path: String,
	header: HeaderJson<'a>,
	record_count: usize,
	property_count: usize,
	tail: Option<&'a str>,
	tags: Vec<TagCountJson>,
	top_names: Vec<NameCountJson<'a>>,
}
