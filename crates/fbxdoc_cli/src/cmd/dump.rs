use std::path::PathBuf;

use fbxdoc::fbx::Result;

use crate::cmd::json::RecordJson;
use crate::cmd::util::{emit_json, open_document, render_value};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Number of records to print, starting at the chain tail.
	#[arg(long, default_value_t = 5)]
	pub count: usize,
	#[arg(long)]
	pub json: bool,
}

/// Print up to `count` records walking back from the chain tail.
pub fn run(args: Args) -> Result<()> {
	let Args { path, count, json } = args;

	let document = open_document(&path)?;

	if json {
		let records: Vec<_> = document.chain().take(count).map(RecordJson::new).collect();
		return emit_json(&records);
	}

	for record in document.chain().take(count) {
		println!("name: {}", record.name);
		println!("start_offset: {}", record.start_offset);
		println!("end_offset: {}", record.end_offset);
		println!("property_count: {}", record.property_count);
		println!("property_list_len: {}", record.property_list_len);
		println!("name_len: {}", record.name.chars().count());
		if !record.properties.is_empty() {
			println!("properties:");
			for property in &record.properties {
				println!("  - {}", render_value(property));
			}
		}
		println!("{}", "-".repeat(20));
	}

	Ok(())
}
