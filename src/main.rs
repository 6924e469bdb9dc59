#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "plainkit", about = "Payload classification and key-case conversion tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Case {
		input: String,
		#[arg(long, default_value = "snake")]
		direction: String,
	},
	Duration {
		#[arg(allow_negative_numbers = true)]
		seconds: i64,
	},
	Classify {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
	Convert {
		path: PathBuf,
		#[arg(long, default_value = "snake")]
		direction: String,
		#[arg(long)]
		dates: bool,
	},
	Env,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> plainkit::plain::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Case { input, direction } => cmd::case::run(input, direction),
		Commands::Duration { seconds } => cmd::duration::run(seconds),
		Commands::Classify { path, json } => cmd::classify::run(path, json),
		Commands::Convert { path, direction, dates } => cmd::convert::run(path, direction, dates),
		Commands::Env => cmd::env::run(),
	}
}
