use std::sync::OnceLock;

use chrono::{DateTime, Local};

use crate::sample::types::Primitive;

/// Literal placeholder text plus its JSON quoting behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
	/// Rendered literal text.
	pub text: Box<str>,
	/// Whether the renderer wraps the text in JSON quotes.
	pub quoted: bool,
}

impl Placeholder {
	fn raw(text: impl Into<Box<str>>) -> Self {
		Self {
			text: text.into(),
			quoted: false,
		}
	}

	fn quoted(text: impl Into<Box<str>>) -> Self {
		Self {
			text: text.into(),
			quoted: true,
		}
	}
}

/// Placeholder table for recognized terminal ("simple") types.
///
/// Date/time entries are baked from the wall-clock snapshot passed to
/// [`SimpleTypes::seeded_at`]; the process-wide instance takes that
/// snapshot once and never refreshes it.
#[derive(Debug)]
pub struct SimpleTypes {
	rows: Vec<(Box<str>, Placeholder)>,
}

impl SimpleTypes {
	/// Build the table with date/time placeholders reflecting `now`.
	pub fn seeded_at(now: DateTime<Local>) -> Self {
		let millis = now.timestamp_millis().to_string();
		let rows = vec![
			("Boolean".into(), Placeholder::raw("false")),
			("Float".into(), Placeholder::raw("0.00")),
			("Double".into(), Placeholder::raw("0.00")),
			("BigDecimal".into(), Placeholder::raw("0.00")),
			("Number".into(), Placeholder::raw("0")),
			("CharSequence".into(), Placeholder::quoted("")),
			("Date".into(), Placeholder::raw(millis.clone())),
			("Temporal".into(), Placeholder::raw(millis.clone())),
			("LocalDateTime".into(), Placeholder::raw(millis)),
			("LocalDate".into(), Placeholder::raw(now.format("%Y-%m-%d").to_string())),
			("LocalTime".into(), Placeholder::raw(now.format("%H:%M:%S").to_string())),
		];
		Self { rows }
	}

	/// Placeholder for a recognized simple-type name, exact match only.
	pub fn get(&self, name: &str) -> Option<&Placeholder> {
		self.rows.iter().find(|(known, _)| known.as_ref() == name).map(|(_, value)| value)
	}
}

/// Process-wide table, seeded from the wall clock on first use.
pub fn simple_types() -> &'static SimpleTypes {
	static TABLE: OnceLock<SimpleTypes> = OnceLock::new();
	TABLE.get_or_init(|| SimpleTypes::seeded_at(Local::now()))
}

/// Default literal for a primitive kind, depth-independent.
pub fn primitive_default(kind: Primitive) -> Placeholder {
	match kind {
		Primitive::Boolean => Placeholder::raw("false"),
		Primitive::Byte | Primitive::Char | Primitive::Short | Primitive::Int | Primitive::Long => Placeholder::raw("0"),
		Primitive::Float | Primitive::Double => Placeholder::raw("0.00"),
	}
}
