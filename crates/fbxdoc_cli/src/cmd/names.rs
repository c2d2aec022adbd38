use std::path::PathBuf;

use fbxdoc::fbx::Result;

use crate::cmd::util::{emit_json, open_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print record names from the chain tail back to the first record.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let document = open_document(&path)?;
	let names: Vec<&str> = document.chain().map(|record| record.name.as_str()).collect();

	if json {
		return emit_json(&names);
	}

	println!("{}", names.join(", "));
	Ok(())
}
