use std::path::PathBuf;

use fbxdoc::fbx::{FbxError, Result};

use crate::cmd::json::RecordJson;
use crate::cmd::util::{emit_json, open_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Record name to look for.
	#[arg(long, default_value = "Vertices")]
	pub name: String,
	#[arg(long)]
	pub json: bool,
}

/// Print offsets of the record nearest the chain tail named `name`.
pub fn run(args: Args) -> Result<()> {
	let Args { path, name, json } = args;

	let document = open_document(&path)?;
	let record = document.find_by_name(&name).ok_or_else(|| FbxError::RecordNotFound { name: name.clone() })?;

	if json {
		return emit_json(&RecordJson::new(record));
	}

	println!("name: {}", record.name);
	println!("index: {}", record.index);
	println!("start_offset: {}", record.start_offset);
	println!("end_offset: {}", record.end_offset);
	Ok(())
}
