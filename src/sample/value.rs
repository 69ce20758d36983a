/// Annotation attached to a leaf sample value.
///
/// Rendered as a trailing `//type_name:doc` comment next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
	/// Short name of the field's declared type.
	pub type_name: Box<str>,
	/// Flattened field documentation, empty when absent.
	pub doc: Box<str>,
}

/// One entry of an object sample, in field declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleField {
	/// Field name.
	pub name: Box<str>,
	/// Resolved sample value.
	pub value: Sample,
}

/// Recursive sample value produced by type resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
	/// Literal placeholder with quoting behavior and optional annotation.
	Literal {
		/// Placeholder text.
		text: Box<str>,
		/// Whether the renderer wraps the text in JSON quotes.
		quoted: bool,
		/// Trailing-comment annotation, when the leaf carries one.
		note: Option<Note>,
	},
	/// Representative enum constant name, rendered quoted.
	Enum {
		/// First declared constant's name.
		name: Box<str>,
		/// Trailing-comment annotation.
		note: Option<Note>,
	},
	/// Ordered field-name to value mapping.
	Object(Vec<SampleField>),
	/// Element-shape sequence; the resolver always emits one element.
	Array(Vec<Sample>),
}

impl Sample {
	/// Empty object, the shape of an unresolvable class reference.
	pub fn empty_object() -> Self {
		Self::Object(Vec::new())
	}
}
