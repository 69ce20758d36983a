use crate::sample::value::{Note, Sample};

/// Render a sample tree as pretty object notation with trailing comments.
///
/// Two-space indentation. Annotated leaves render as `value, //type:doc`;
/// the comma belongs to the comment and is emitted even on an object's
/// final entry. Unannotated values take a comma only when another entry
/// follows.
pub fn render(sample: &Sample) -> String {
	let mut out = String::new();
	write_value(&mut out, sample, 0);
	out
}

fn write_value(out: &mut String, sample: &Sample, indent: usize) {
	match sample {
		Sample::Literal { .. } | Sample::Enum { .. } => {
			write_scalar(out, sample);
		}
		Sample::Object(fields) => {
			if fields.is_empty() {
				out.push_str("{}");
				return;
			}
			out.push_str("{\n");
			let pad = " ".repeat(indent + 2);
			for (idx, field) in fields.iter().enumerate() {
				out.push_str(&pad);
				out.push('"');
				out.push_str(&json_escape(&field.name));
				out.push_str("\": ");
				write_value(out, &field.value, indent + 2);
				write_suffix(out, &field.value, idx + 1 == fields.len());
				out.push('\n');
			}
			out.push_str(&" ".repeat(indent));
			out.push('}');
		}
		Sample::Array(items) => {
			if items.is_empty() {
				out.push_str("[]");
				return;
			}
			out.push_str("[\n");
			let pad = " ".repeat(indent + 2);
			for (idx, item) in items.iter().enumerate() {
				out.push_str(&pad);
				write_value(out, item, indent + 2);
				write_suffix(out, item, idx + 1 == items.len());
				out.push('\n');
			}
			out.push_str(&" ".repeat(indent));
			out.push(']');
		}
	}
}

fn write_scalar(out: &mut String, sample: &Sample) {
	match sample {
		Sample::Literal { text, quoted, .. } => {
			if *quoted {
				out.push('"');
				out.push_str(&json_escape(text));
				out.push('"');
			} else {
				out.push_str(text);
			}
		}
		Sample::Enum { name, .. } => {
			out.push('"');
			out.push_str(&json_escape(name));
			out.push('"');
		}
		Sample::Object(_) | Sample::Array(_) => {}
	}
}

fn write_suffix(out: &mut String, sample: &Sample, is_last: bool) {
	let note = match sample {
		Sample::Literal { note, .. } | Sample::Enum { note, .. } => note.as_ref(),
		Sample::Object(_) | Sample::Array(_) => None,
	};
	match note {
		Some(Note { type_name, doc }) => {
			out.push_str(", //");
			out.push_str(type_name);
			out.push(':');
			out.push_str(doc);
		}
		None => {
			if !is_last {
				out.push(',');
			}
		}
	}
}

/// Convert a sample tree to comment-free JSON.
///
/// Unquoted literals become real booleans/numbers when their text parses
/// as one; date/time texts fall back to strings.
pub fn to_json(sample: &Sample) -> serde_json::Value {
	match sample {
		Sample::Literal { text, quoted, .. } => {
			if *quoted {
				return serde_json::Value::String(text.to_string());
			}
			if let Ok(value) = text.parse::<bool>() {
				return serde_json::Value::Bool(value);
			}
			if let Ok(value) = text.parse::<i64>() {
				return serde_json::Value::from(value);
			}
			if let Ok(value) = text.parse::<f64>() {
				return serde_json::Value::from(value);
			}
			serde_json::Value::String(text.to_string())
		}
		Sample::Enum { name, .. } => serde_json::Value::String(name.to_string()),
		Sample::Object(fields) => {
			let mut map = serde_json::Map::new();
			for field in fields {
				map.insert(field.name.to_string(), to_json(&field.value));
			}
			serde_json::Value::Object(map)
		}
		Sample::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
	}
}

/// Escape text for embedding in JSON string values.
fn json_escape(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
			c => out.push(c),
		}
	}
	out
}
