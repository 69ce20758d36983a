use std::fmt;

/// Java primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
	/// `boolean`
	Boolean,
	/// `byte`
	Byte,
	/// `char`
	Char,
	/// `short`
	Short,
	/// `int`
	Int,
	/// `long`
	Long,
	/// `float`
	Float,
	/// `double`
	Double,
}

impl Primitive {
	/// Map a type keyword to its primitive kind.
	pub fn from_keyword(word: &str) -> Option<Self> {
		Some(match word {
			"boolean" => Self::Boolean,
			"byte" => Self::Byte,
			"char" => Self::Char,
			"short" => Self::Short,
			"int" => Self::Int,
			"long" => Self::Long,
			"float" => Self::Float,
			"double" => Self::Double,
			_ => return None,
		})
	}

	/// Source keyword for this primitive kind.
	pub fn keyword(self) -> &'static str {
		match self {
			Self::Boolean => "boolean",
			Self::Byte => "byte",
			Self::Char => "char",
			Self::Short => "short",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
		}
	}
}

/// Declared type reference, the closed shape classification input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
	/// Primitive kind (`int`, `boolean`, ...).
	Primitive(Primitive),
	/// Array of an element type; nested for multi-dimensional arrays.
	Array {
		/// Element type, itself possibly an array.
		elem: Box<TypeRef>,
	},
	/// Class or interface reference, possibly qualified and parameterized.
	Named {
		/// Name as written, qualifier included when present.
		name: Box<str>,
		/// Type arguments in declaration order.
		args: Vec<TypeRef>,
	},
}

impl TypeRef {
	/// Parse declaration type text (`java.util.List<String>[]`).
	pub fn parse(text: &str) -> Option<TypeRef> {
		let mut scan = TypeScan { text, pos: 0 };
		let parsed = scan.parse_type()?;
		scan.skip_ws();
		if scan.pos < scan.text.len() {
			return None;
		}
		Some(parsed)
	}

	/// Unqualified name of the outermost type, type arguments dropped.
	pub fn short_name(&self) -> String {
		match self {
			Self::Primitive(kind) => kind.keyword().to_owned(),
			Self::Array { elem } => format!("{}[]", elem.short_name()),
			Self::Named { name, .. } => simple_segment(name).to_owned(),
		}
	}

	/// Short display text with shortened type arguments (`List<String>`).
	pub fn presentable(&self) -> String {
		match self {
			Self::Primitive(kind) => kind.keyword().to_owned(),
			Self::Array { elem } => format!("{}[]", elem.presentable()),
			Self::Named { name, args } => {
				let mut out = simple_segment(name).to_owned();
				if !args.is_empty() {
					out.push('<');
					for (idx, arg) in args.iter().enumerate() {
						if idx > 0 {
							out.push_str(", ");
						}
						out.push_str(&arg.presentable());
					}
					out.push('>');
				}
				out
			}
		}
	}

	/// Innermost element type of a (possibly multi-dimensional) array.
	pub fn deepest_component(&self) -> &TypeRef {
		match self {
			Self::Array { elem } => elem.deepest_component(),
			other => other,
		}
	}

	/// First type argument of a parameterized reference.
	pub fn first_type_argument(&self) -> Option<&TypeRef> {
		match self {
			Self::Named { args, .. } => args.first(),
			_ => None,
		}
	}
}

impl fmt::Display for TypeRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primitive(kind) => f.write_str(kind.keyword()),
			Self::Array { elem } => write!(f, "{elem}[]"),
			Self::Named { name, args } => {
				f.write_str(name)?;
				if !args.is_empty() {
					f.write_str("<")?;
					for (idx, arg) in args.iter().enumerate() {
						if idx > 0 {
							f.write_str(", ")?;
						}
						write!(f, "{arg}")?;
					}
					f.write_str(">")?;
				}
				Ok(())
			}
		}
	}
}

/// Last dot-separated segment of a possibly qualified name.
pub(crate) fn simple_segment(name: &str) -> &str {
	name.rsplit('.').next().unwrap_or(name)
}

struct TypeScan<'a> {
	text: &'a str,
	pos: usize,
}

impl<'a> TypeScan<'a> {
	fn parse_type(&mut self) -> Option<TypeRef> {
		self.skip_ws();

		// Wildcards degrade to their bound, bare `?` to Object.
		if self.eat_str("?") {
			self.skip_ws();
			if self.eat_word("extends") || self.eat_word("super") {
				let bound = self.parse_type()?;
				return self.array_suffix(bound);
			}
			let base = TypeRef::Named {
				name: "Object".into(),
				args: Vec::new(),
			};
			return self.array_suffix(base);
		}

		let name = self.parse_qualified_name()?;
		if let Some(kind) = Primitive::from_keyword(&name) {
			return self.array_suffix(TypeRef::Primitive(kind));
		}

		let mut args = Vec::new();
		self.skip_ws();
		if self.eat_str("<") {
			loop {
				let arg = self.parse_type()?;
				args.push(arg);
				self.skip_ws();
				if self.eat_str(",") {
					continue;
				}
				if self.eat_str(">") {
					break;
				}
				return None;
			}
		}

		self.array_suffix(TypeRef::Named {
			name: name.into_boxed_str(),
			args,
		})
	}

	fn array_suffix(&mut self, mut base: TypeRef) -> Option<TypeRef> {
		loop {
			self.skip_ws();
			if self.eat_str("[") {
				self.skip_ws();
				if !self.eat_str("]") {
					return None;
				}
				base = TypeRef::Array { elem: Box::new(base) };
			} else {
				return Some(base);
			}
		}
	}

	fn parse_qualified_name(&mut self) -> Option<String> {
		let mut out = String::new();
		loop {
			let word = self.parse_ident()?;
			out.push_str(word);
			let mark = self.pos;
			self.skip_ws();
			if self.eat_str(".") {
				out.push('.');
				self.skip_ws();
			} else {
				self.pos = mark;
				return Some(out);
			}
		}
	}

	fn parse_ident(&mut self) -> Option<&'a str> {
		let rest = &self.text[self.pos..];
		let end = rest
			.char_indices()
			.take_while(|(_, ch)| ch.is_alphanumeric() || *ch == '_' || *ch == '$')
			.map(|(idx, ch)| idx + ch.len_utf8())
			.last()?;
		let word = &rest[..end];
		if word.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
			return None;
		}
		self.pos += end;
		Some(word)
	}

	fn eat_word(&mut self, word: &str) -> bool {
		let mark = self.pos;
		match self.parse_ident() {
			Some(found) if found == word => true,
			_ => {
				self.pos = mark;
				false
			}
		}
	}

	fn eat_str(&mut self, token: &str) -> bool {
		if self.text[self.pos..].starts_with(token) {
			self.pos += token.len();
			true
		} else {
			false
		}
	}

	fn skip_ws(&mut self) {
		let rest = &self.text[self.pos..];
		let trimmed = rest.trim_start();
		self.pos += rest.len() - trimmed.len();
	}
}
