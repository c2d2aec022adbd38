#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "fbxdoc", about = "Binary FBX inspection and JSON conversion tools")]
struct Cli {
	/// Verbosity level (-v, -vv, -vvv)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert a binary FBX file into JSON.
	Convert(cmd::convert::Args),
	/// Print header fields and record statistics.
	Info(cmd::info::Args),
	/// List record names from the chain tail backwards.
	Names(cmd::names::Args),
	/// Print the first records from the chain tail backwards.
	Dump(cmd::dump::Args),
	/// Locate the record nearest the chain tail with a given name.
	Find(cmd::find::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(command: Commands) -> fbxdoc::fbx::Result<()> {
	match command {
		Commands::Convert(args) => cmd::convert::run(args),
		Commands::Info(args) => cmd::info::run(args),
		Commands::Names(args) => cmd::names::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Find(args) => cmd::find::run(args),
	}
}
