#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "specimen", about = "Sample JSON generation from Java class declarations")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Sample(cmd::sample::Args),
	Classes {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
	Fields {
		path: PathBuf,
		#[arg(long = "class")]
		class_name: Option<String>,
	},
}

fn main() {
	if let Err(err) = run() {
		if err.is_known() {
			eprintln!("warning: {err}");
		} else {
			eprintln!("error: conversion failed");
			eprintln!("cause: {err}");
		}
		std::process::exit(1);
	}
}

fn run() -> specimen::sample::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Sample(args) => cmd::sample::run(args),
		Commands::Classes { path, json } => cmd::classes::run(path, json),
		Commands::Fields { path, class_name } => cmd::fields::run(path, class_name),
	}
}
