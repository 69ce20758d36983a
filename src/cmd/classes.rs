use std::path::PathBuf;

use serde::Serialize;
use specimen::sample::parse_file;

#[derive(Serialize)]
struct ClassRow<'a> {
	name: &'a str,
	kind: &'a str,
	fields: usize,
	constants: usize,
}

/// List the class-like declarations found in a source file.
pub fn run(path: PathBuf, json: bool) -> specimen::sample::Result<()> {
	let model = parse_file(&path)?;

	let rows: Vec<ClassRow<'_>> = model
		.classes
		.iter()
		.map(|class| ClassRow {
			name: &class.name,
			kind: class.kind.as_str(),
			fields: class.fields.len(),
			constants: class.enum_constants.len(),
		})
		.collect();

	if json {
		let text = serde_json::to_string_pretty(&rows).map_err(std::io::Error::other)?;
		println!("{text}");
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("classes: {}", rows.len());
	for row in rows {
		if row.constants > 0 {
			println!("  {} {} ({} fields, {} constants)", row.kind, row.name, row.fields, row.constants);
		} else {
			println!("  {} {} ({} fields)", row.kind, row.name, row.fields);
		}
	}

	Ok(())
}
