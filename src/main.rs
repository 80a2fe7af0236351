#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "protobridge", about = "Runtime-schema protobuf marshalling tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Schema {
		set: PathBuf,
		#[arg(long)]
		message: Option<String>,
		#[arg(long)]
		json: bool,
	},
	Encode {
		set: PathBuf,
		#[arg(long)]
		message: String,
		input: PathBuf,
		#[arg(long)]
		out: Option<PathBuf>,
	},
	Decode {
		set: PathBuf,
		#[arg(long)]
		message: String,
		input: PathBuf,
		#[arg(long)]
		native_int64: bool,
	},
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> protobridge::marshal::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Schema { set, message, json } => cmd::schema::run(set, message, json),
		Commands::Encode { set, message, input, out } => cmd::encode::run(set, message, input, out),
		Commands::Decode {
			set,
			message,
			input,
			native_int64,
		} => cmd::decode::run(set, message, input, native_int64),
	}
}
