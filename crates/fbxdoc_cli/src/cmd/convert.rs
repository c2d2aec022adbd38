use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use fbxdoc::fbx::{FbxError, Result};
use tracing::{debug, info};

use crate::cmd::json::DocumentJson;
use crate::cmd::util::open_document;

#[derive(clap::Args)]
pub struct Args {
	/// Binary FBX file to read.
	pub source: PathBuf,
	/// JSON file to write.
	pub dest: PathBuf,
	/// Overwrite `dest` if it already exists.
	#[arg(long)]
	pub force: bool,
	/// Indent the JSON output.
	#[arg(long)]
	pub pretty: bool,
}

/// Decode `source` and write its JSON serialization to `dest`.
pub fn run(args: Args) -> Result<()> {
	let Args {
		source,
		dest,
		force,
		pretty,
	} = args;

	if dest.exists() && !force {
		return Err(FbxError::DestinationExists { path: dest });
	}

	let document = open_document(&source)?;
	let payload = DocumentJson::new(&document);

	debug!("writing {}", dest.display());
	let mut out = BufWriter::new(File::create(&dest)?);
	if pretty {
		serde_json::to_writer_pretty(&mut out, &payload).map_err(std::io::Error::from)?;
	} else {
		serde_json::to_writer(&mut out, &payload).map_err(std::io::Error::from)?;
	}
	out.flush()?;
	info!("wrote {}", dest.display());

	println!("converted {} records: {} -> {}", document.records().len(), source.display(), dest.display());
	Ok(())
}
