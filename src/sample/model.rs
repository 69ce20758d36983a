use std::collections::{HashMap, HashSet};

use crate::sample::types::{TypeRef, simple_segment};

/// Declaration kind of a parsed class-like member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
	/// `class` declaration.
	Class,
	/// `interface` declaration.
	Interface,
	/// `enum` declaration.
	Enum,
}

impl ClassKind {
	/// Source keyword for this kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Class => "class",
			Self::Interface => "interface",
			Self::Enum => "enum",
		}
	}
}

/// One parsed class, interface, or enum declaration.
#[derive(Debug)]
pub struct ClassDecl {
	/// Declared simple name.
	pub name: Box<str>,
	/// Declaration kind.
	pub kind: ClassKind,
	/// `extends` clause text, as written.
	pub extends: Option<Box<str>>,
	/// `implements` clause texts in source order.
	pub implements: Vec<Box<str>>,
	/// Enum constant names in declaration order.
	pub enum_constants: Vec<Box<str>>,
	/// Field declarations in source order.
	pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
	/// Whether this declaration is an enum.
	pub fn is_enum(&self) -> bool {
		self.kind == ClassKind::Enum
	}

	/// Declared supertype texts, `extends` first then `implements`.
	pub fn supertype_texts(&self) -> impl Iterator<Item = &str> {
		self.extends.as_deref().into_iter().chain(self.implements.iter().map(|text| text.as_ref()))
	}
}

/// One parsed field declaration.
#[derive(Debug)]
pub struct FieldDecl {
	/// Field name.
	pub name: Box<str>,
	/// Declared type.
	pub ty: TypeRef,
	/// Flattened documentation comment text, when present.
	pub doc: Option<Box<str>>,
}

/// Serialization-identity field excluded from enumeration.
const SERIAL_VERSION_UID: &str = "serialVersionUID";

/// Parsed class declarations with by-name lookup.
#[derive(Debug)]
pub struct ClassModel {
	/// Declarations in source order, nested members flattened after their owner.
	pub classes: Vec<ClassDecl>,
	by_name: HashMap<Box<str>, usize>,
}

impl ClassModel {
	/// Build the lookup table over parsed declarations.
	///
	/// The first declaration of a name wins when simple names collide.
	pub fn new(classes: Vec<ClassDecl>) -> Self {
		let mut by_name = HashMap::new();
		for (idx, class) in classes.iter().enumerate() {
			by_name.entry(class.name.clone()).or_insert(idx);
		}
		Self { classes, by_name }
	}

	/// Look up a declaration by name; qualifiers are ignored.
	pub fn class_by_name(&self, name: &str) -> Option<&ClassDecl> {
		self.by_name.get(simple_segment(name)).map(|idx| &self.classes[*idx])
	}

	/// First declaration in the source, the default selection target.
	pub fn first_class(&self) -> Option<&ClassDecl> {
		self.classes.first()
	}

	/// Enumerate own then inherited fields in stable declaration order.
	///
	/// Walks the `extends` chain through source-declared classes,
	/// skipping `serialVersionUID` everywhere. Unknown superclass names
	/// end the chain; a revisited class does too, so a malformed cyclic
	/// chain cannot loop.
	pub fn all_fields<'a>(&'a self, class: &'a ClassDecl) -> Vec<&'a FieldDecl> {
		let mut out = Vec::new();
		let mut seen = HashSet::new();
		let mut current = Some(class);

		while let Some(decl) = current {
			if !seen.insert(decl.name.as_ref()) {
				break;
			}
			out.extend(decl.fields.iter().filter(|field| field.name.as_ref() != SERIAL_VERSION_UID));
			current = decl
				.extends
				.as_deref()
				.and_then(|text| self.class_by_name(strip_type_args(text)));
		}

		out
	}
}

/// Drop a trailing type-argument list from a supertype text.
fn strip_type_args(text: &str) -> &str {
	match text.find('<') {
		Some(idx) => text[..idx].trim_end(),
		None => text,
	}
}

#[cfg(test)]
mod tests {
	use super::{ClassDecl, ClassKind, ClassModel, FieldDecl};
	use crate::sample::types::TypeRef;

	fn field(name: &str, ty: &str) -> FieldDecl {
		FieldDecl {
			name: name.into(),
			ty: TypeRef::parse(ty).expect("type parses"),
			doc: None,
		}
	}

	fn class(name: &str, extends: Option<&str>, fields: Vec<FieldDecl>) -> ClassDecl {
		ClassDecl {
			name: name.into(),
			kind: ClassKind::Class,
			extends: extends.map(Into::into),
			implements: Vec::new(),
			enum_constants: Vec::new(),
			fields,
		}
	}

	#[test]
	fn own_fields_precede_inherited_fields() {
		let model = ClassModel::new(vec![
			class("Child", Some("Base"), vec![field("c1", "int"), field("c2", "long")]),
			class("Base", None, vec![field("b1", "boolean"), field("b2", "String")]),
		]);
		let child = model.class_by_name("Child").expect("child exists");
		let names: Vec<_> = model.all_fields(child).iter().map(|f| f.name.as_ref()).collect();
		assert_eq!(names, ["c1", "c2", "b1", "b2"]);
	}

	#[test]
	fn serial_version_uid_is_filtered_at_every_level() {
		let model = ClassModel::new(vec![
			class("Child", Some("Base"), vec![field("serialVersionUID", "long"), field("own", "int")]),
			class("Base", None, vec![field("serialVersionUID", "long")]),
		]);
		let child = model.class_by_name("Child").expect("child exists");
		let names: Vec<_> = model.all_fields(child).iter().map(|f| f.name.as_ref()).collect();
		assert_eq!(names, ["own"]);
	}

	#[test]
	fn cyclic_extends_chain_terminates() {
		let model = ClassModel::new(vec![
			class("A", Some("B"), vec![field("a", "int")]),
			class("B", Some("A"), vec![field("b", "int")]),
		]);
		let a = model.class_by_name("A").expect("A exists");
		let names: Vec<_> = model.all_fields(a).iter().map(|f| f.name.as_ref()).collect();
		assert_eq!(names, ["a", "b"]);
	}

	#[test]
	fn generic_superclass_text_still_resolves() {
		let model = ClassModel::new(vec![
			class("Child", Some("Base<String>"), vec![field("own", "int")]),
			class("Base", None, vec![field("inherited", "int")]),
		]);
		let child = model.class_by_name("Child").expect("child exists");
		assert_eq!(model.all_fields(child).len(), 2);
	}
}
