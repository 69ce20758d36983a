use std::path::PathBuf;

use specimen::sample::{SampleError, parse_file};

/// Print the enumerated (own plus inherited) fields of one class.
pub fn run(path: PathBuf, class_name: Option<String>) -> specimen::sample::Result<()> {
	let model = parse_file(&path)?;
	let class = match &class_name {
		Some(name) => model.class_by_name(name).ok_or_else(|| SampleError::ClassNotFound { name: name.clone() })?,
		None => model.first_class().ok_or_else(|| SampleError::NoClassDeclared { path: path.clone() })?,
	};

	let fields = model.all_fields(class);
	println!("path: {}", path.display());
	println!("class: {}", class.name);
	println!("field_count: {}", fields.len());
	for field in fields {
		match field.doc.as_deref() {
			Some(doc) => println!("  {} {}  // {}", field.ty.presentable(), field.name, doc),
			None => println!("  {} {}", field.ty.presentable(), field.name),
		}
	}

	Ok(())
}
