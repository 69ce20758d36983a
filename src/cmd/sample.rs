use std::path::PathBuf;

use specimen::sample::{ResolveOptions, Resolver, SampleError, parse_file, render, simple_types, to_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "class")]
	pub class_name: Option<String>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Generate a sample document for one class and print it to stdout.
///
/// The first class declared in the file is the default target. Nothing
/// is written to stdout unless resolution fully succeeds.
pub fn run(args: Args) -> specimen::sample::Result<()> {
	let model = parse_file(&args.file)?;
	let class = match &args.class_name {
		Some(name) => model.class_by_name(name).ok_or_else(|| SampleError::ClassNotFound { name: name.clone() })?,
		None => model.first_class().ok_or_else(|| SampleError::NoClassDeclared { path: args.file.clone() })?,
	};

	let mut options = ResolveOptions::default();
	if let Some(max_depth) = args.max_depth {
		options.max_depth = max_depth;
	}

	let resolver = Resolver::new(&model, simple_types(), options);
	let sample = resolver.sample_class(class)?;

	if args.json {
		let text = serde_json::to_string_pretty(&to_json(&sample)).map_err(std::io::Error::other)?;
		println!("{text}");
	} else {
		println!("{}", render(&sample));
	}
	eprintln!("converted {} to sample JSON", class.name);

	Ok(())
}
