use crate::sample::builtins::supertypes_of;
use crate::sample::model::{ClassDecl, ClassModel, FieldDecl};
use crate::sample::simple::{SimpleTypes, primitive_default};
use crate::sample::types::{TypeRef, simple_segment};
use crate::sample::value::{Note, Sample, SampleField};
use crate::sample::{Result, SampleError};

/// Runtime limits for recursive sample resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
	/// Maximum recursive resolution depth before giving up on the graph.
	pub max_depth: u32,
}

impl Default for ResolveOptions {
	fn default() -> Self {
		Self { max_depth: 500 }
	}
}

/// Recursive type-to-sample-value resolver over a parsed class model.
pub struct Resolver<'a> {
	model: &'a ClassModel,
	simple: &'a SimpleTypes,
	options: ResolveOptions,
}

impl<'a> Resolver<'a> {
	/// Create a resolver over `model` with the given placeholder table.
	pub fn new(model: &'a ClassModel, simple: &'a SimpleTypes, options: ResolveOptions) -> Self {
		Self { model, simple, options }
	}

	/// Build the root object sample for one class declaration.
	pub fn sample_class(&self, class: &ClassDecl) -> Result<Sample> {
		let mut out = Vec::new();
		for field in self.model.all_fields(class) {
			out.push(SampleField {
				name: field.name.clone(),
				value: self.resolve(&field.ty, 0, field)?,
			});
		}
		Ok(Sample::Object(out))
	}

	/// Resolve one declared type into its sample shape.
	///
	/// Depth is incremented once on entry; recursive calls pass the
	/// incremented value through unchanged, so each nesting level costs
	/// exactly one step toward the ceiling. Classification order is
	/// load-bearing: the simple-type table must beat composite
	/// expansion, and the enum check must beat both.
	pub fn resolve(&self, ty: &TypeRef, depth: u32, field: &FieldDecl) -> Result<Sample> {
		let depth = depth + 1;

		let name = match ty {
			TypeRef::Primitive(kind) => {
				let value = primitive_default(*kind);
				return Ok(Sample::Literal {
					text: value.text,
					quoted: value.quoted,
					note: leaf_note(ty, field),
				});
			}
			// Multi-dimensional arrays collapse to their innermost element.
			TypeRef::Array { .. } => {
				return Ok(Sample::Array(vec![self.resolve(ty.deepest_component(), depth, field)?]));
			}
			TypeRef::Named { name, .. } => name,
		};

		let source_class = self.model.class_by_name(name);
		let builtin_supers = supertypes_of(simple_segment(name));
		if source_class.is_none() && builtin_supers.is_none() {
			return Ok(Sample::empty_object());
		}

		if let Some(class) = source_class
			&& class.is_enum()
		{
			return Ok(match class.enum_constants.first() {
				Some(constant) => Sample::Enum {
					name: constant.clone(),
					note: leaf_note(ty, field),
				},
				None => Sample::Literal {
					text: "".into(),
					quoted: true,
					note: None,
				},
			});
		}

		// Candidate names for shape sniffing: own presentable text first,
		// then direct declared supertype texts in source order.
		let mut candidates = vec![ty.presentable()];
		match source_class {
			Some(class) => candidates.extend(class.supertype_texts().map(str::to_owned)),
			None => candidates.extend(builtin_supers.unwrap_or(&[]).iter().map(|text| (*text).to_owned())),
		}

		if candidates.iter().any(|name| name.starts_with("Collection") || name.starts_with("Iterable")) {
			let elem = ty.first_type_argument().ok_or_else(|| SampleError::MissingElementType {
				type_name: ty.presentable(),
			})?;
			return Ok(Sample::Array(vec![self.resolve(elem, depth, field)?]));
		}

		if let Some(value) = candidates.iter().find_map(|name| self.simple.get(name)) {
			return Ok(Sample::Literal {
				text: value.text.clone(),
				quoted: value.quoted,
				note: leaf_note(ty, field),
			});
		}

		if depth > self.options.max_depth {
			return Err(SampleError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}

		let Some(class) = source_class else {
			// Registered library type with no sampled shape (Map and friends).
			return Ok(Sample::empty_object());
		};

		let mut out = Vec::new();
		for member in self.model.all_fields(class) {
			out.push(SampleField {
				name: member.name.clone(),
				value: self.resolve(&member.ty, depth, member)?,
			});
		}
		Ok(Sample::Object(out))
	}
}

/// Trailing-comment annotation for a leaf resolved from `field`.
fn leaf_note(ty: &TypeRef, field: &FieldDecl) -> Option<Note> {
	Some(Note {
		type_name: ty.short_name().into_boxed_str(),
		doc: field.doc.as_deref().unwrap_or("").into(),
	})
}

#[cfg(test)]
mod tests {
	use chrono::Local;

	use super::{ResolveOptions, Resolver};
	use crate::sample::model::{ClassDecl, ClassKind, ClassModel, FieldDecl};
	use crate::sample::simple::SimpleTypes;
	use crate::sample::types::TypeRef;
	use crate::sample::value::Sample;
	use crate::sample::SampleError;

	fn field(name: &str, ty: &str) -> FieldDecl {
		FieldDecl {
			name: name.into(),
			ty: TypeRef::parse(ty).expect("type parses"),
			doc: None,
		}
	}

	fn plain_class(name: &str, fields: Vec<FieldDecl>) -> ClassDecl {
		ClassDecl {
			name: name.into(),
			kind: ClassKind::Class,
			extends: None,
			implements: Vec::new(),
			enum_constants: Vec::new(),
			fields,
		}
	}

	#[test]
	fn primitive_defaults_are_depth_independent() {
		let model = ClassModel::new(Vec::new());
		let simple = SimpleTypes::seeded_at(Local::now());
		let resolver = Resolver::new(&model, &simple, ResolveOptions::default());
		let owner = field("x", "int");

		for depth in [0, 7, 499] {
			let value = resolver.resolve(&owner.ty, depth, &owner).expect("resolves");
			let Sample::Literal { text, quoted, .. } = value else {
				panic!("expected literal");
			};
			assert_eq!(text.as_ref(), "0");
			assert!(!quoted);
		}
	}

	#[test]
	fn self_reference_fails_with_depth_error() {
		let model = ClassModel::new(vec![plain_class("Node", vec![field("next", "Node")])]);
		let simple = SimpleTypes::seeded_at(Local::now());
		let resolver = Resolver::new(&model, &simple, ResolveOptions::default());
		let node = model.class_by_name("Node").expect("Node exists");

		let err = resolver.sample_class(node).expect_err("must exceed depth");
		assert!(matches!(err, SampleError::DepthExceeded { max_depth: 500 }));
		assert!(err.is_known());
	}

	#[test]
	fn missing_element_type_is_an_error() {
		let model = ClassModel::new(vec![plain_class("Holder", vec![field("items", "List")])]);
		let simple = SimpleTypes::seeded_at(Local::now());
		let resolver = Resolver::new(&model, &simple, ResolveOptions::default());
		let holder = model.class_by_name("Holder").expect("Holder exists");

		let err = resolver.sample_class(holder).expect_err("raw List has no element type");
		assert!(matches!(err, SampleError::MissingElementType { .. }));
		assert!(!err.is_known());
	}

	#[test]
	fn unresolvable_reference_is_an_empty_object() {
		let model = ClassModel::new(Vec::new());
		let simple = SimpleTypes::seeded_at(Local::now());
		let resolver = Resolver::new(&model, &simple, ResolveOptions::default());
		let owner = field("w", "Widget");

		let value = resolver.resolve(&owner.ty, 0, &owner).expect("resolves");
		assert_eq!(value, Sample::empty_object());
	}
}
