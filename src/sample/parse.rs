use std::fs;
use std::path::Path;

use crate::sample::model::{ClassDecl, ClassKind, ClassModel, FieldDecl};
use crate::sample::types::TypeRef;
use crate::sample::{Result, SampleError};

/// Parse a source file into a class model.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ClassModel> {
	let text = fs::read_to_string(path)?;
	parse_source(&text)
}

/// Parse source text covering the declaration subset this tool targets.
///
/// Handled: package/import lines, top-level and nested class/interface/
/// enum declarations with extends/implements clauses, enum constant
/// lists, field declarations with optional initializers, javadoc
/// attachment, and method/constructor/initializer bodies skipped by
/// brace matching. Annotations are skipped wherever they appear.
pub fn parse_source(text: &str) -> Result<ClassModel> {
	let mut scan = Scanner::new(text);
	let mut classes = Vec::new();

	loop {
		scan.skip_trivia()?;
		let Some(ch) = scan.peek() else {
			break;
		};

		if ch == '@' {
			scan.skip_annotation()?;
			continue;
		}
		if ch == ';' {
			scan.bump();
			continue;
		}

		let line = scan.line;
		let Some(word) = scan.read_word() else {
			return Err(SampleError::Syntax {
				line,
				message: format!("unexpected character `{ch}`"),
			});
		};

		match word {
			"package" | "import" => scan.skip_statement()?,
			word if is_modifier(word) => {}
			"class" => classes.extend(parse_class(&mut scan, ClassKind::Class)?),
			"interface" => classes.extend(parse_class(&mut scan, ClassKind::Interface)?),
			"enum" => classes.extend(parse_class(&mut scan, ClassKind::Enum)?),
			other => {
				return Err(SampleError::Syntax {
					line,
					message: format!("unexpected `{other}` at top level"),
				});
			}
		}
	}

	Ok(ClassModel::new(classes))
}

/// Parse one class-like declaration; returns the owner followed by any
/// nested declarations found in its body.
fn parse_class(scan: &mut Scanner<'_>, kind: ClassKind) -> Result<Vec<ClassDecl>> {
	scan.take_doc();
	scan.skip_trivia()?;
	let line = scan.line;
	let Some(name) = scan.read_word() else {
		return Err(SampleError::Syntax {
			line,
			message: "expected a declaration name".to_owned(),
		});
	};
	let name = name.to_owned();

	scan.skip_trivia()?;
	if scan.peek() == Some('<') {
		scan.skip_balanced('<', '>')?;
	}

	let mut extends = Vec::new();
	let mut implements = Vec::new();
	loop {
		scan.skip_trivia()?;
		match scan.peek() {
			Some('{') => {
				scan.bump();
				break;
			}
			Some(_) => {
				let line = scan.line;
				match scan.read_word() {
					Some("extends") => extends.extend(scan.read_type_text_list()?),
					Some("implements") => implements.extend(scan.read_type_text_list()?),
					Some("permits") => {
						let _ = scan.read_type_text_list()?;
					}
					_ => {
						return Err(SampleError::Syntax {
							line,
							message: format!("malformed header of `{name}`"),
						});
					}
				}
			}
			None => {
				return Err(SampleError::UnbalancedBraces { line });
			}
		}
	}

	// Interfaces extend multiple supertypes; classes at most one.
	let (extends_text, mut trailing) = match kind {
		ClassKind::Interface => (None, extends),
		_ => {
			let mut iter = extends.into_iter();
			(iter.next(), iter.collect())
		}
	};
	trailing.append(&mut implements);

	let mut decl = ClassDecl {
		name: name.into_boxed_str(),
		kind,
		extends: extends_text.map(String::into_boxed_str),
		implements: trailing.into_iter().map(String::into_boxed_str).collect(),
		enum_constants: Vec::new(),
		fields: Vec::new(),
	};
	let mut nested = Vec::new();

	if kind == ClassKind::Enum {
		parse_enum_constants(scan, &mut decl)?;
	}
	parse_members(scan, &mut decl, &mut nested)?;

	let mut out = vec![decl];
	out.append(&mut nested);
	Ok(out)
}

/// Parse the constant list at the head of an enum body.
fn parse_enum_constants(scan: &mut Scanner<'_>, decl: &mut ClassDecl) -> Result<()> {
	loop {
		scan.skip_trivia()?;
		scan.take_doc();
		match scan.peek() {
			Some('}') | Some(';') => return Ok(()),
			Some('@') => {
				scan.skip_annotation()?;
				continue;
			}
			Some(',') => {
				scan.bump();
				continue;
			}
			Some(_) => {}
			None => return Err(SampleError::UnbalancedBraces { line: scan.line }),
		}

		let line = scan.line;
		let Some(name) = scan.read_word() else {
			return Err(SampleError::Syntax {
				line,
				message: "expected an enum constant name".to_owned(),
			});
		};
		decl.enum_constants.push(name.to_owned().into_boxed_str());

		scan.skip_trivia()?;
		if scan.peek() == Some('(') {
			scan.skip_balanced('(', ')')?;
			scan.skip_trivia()?;
		}
		if scan.peek() == Some('{') {
			scan.skip_balanced('{', '}')?;
		}
	}
}

/// Parse class body members until the closing brace.
fn parse_members(scan: &mut Scanner<'_>, decl: &mut ClassDecl, nested: &mut Vec<ClassDecl>) -> Result<()> {
	loop {
		scan.skip_trivia()?;
		match scan.peek() {
			Some('}') => {
				scan.bump();
				return Ok(());
			}
			Some(';') => {
				scan.bump();
				continue;
			}
			Some('@') => {
				scan.skip_annotation()?;
				continue;
			}
			Some('{') => {
				// Instance or static initializer block.
				scan.skip_balanced('{', '}')?;
				scan.take_doc();
				continue;
			}
			Some('<') => {
				// Generic method type parameters.
				scan.skip_balanced('<', '>')?;
				continue;
			}
			Some(_) => {}
			None => return Err(SampleError::UnbalancedBraces { line: scan.line }),
		}

		let doc = scan.take_doc();
		let mark = scan.save();
		let line = scan.line;
		match scan.read_word() {
			Some("class") => nested.append(&mut parse_class(scan, ClassKind::Class)?),
			Some("interface") => nested.append(&mut parse_class(scan, ClassKind::Interface)?),
			Some("enum") => nested.append(&mut parse_class(scan, ClassKind::Enum)?),
			Some("static") => {
				// Either a static initializer block or a field modifier.
				if peek_block(scan)? {
					scan.skip_balanced('{', '}')?;
				} else {
					scan.restore_doc(doc);
				}
			}
			Some(word) if is_modifier(word) => {
				scan.restore_doc(doc);
			}
			Some(_) => {
				scan.restore(mark);
				parse_member(scan, decl, doc, line)?;
			}
			None => {
				return Err(SampleError::Syntax {
					line,
					message: "unexpected character in class body".to_owned(),
				});
			}
		}
	}
}

/// Whether the scanner sits immediately before a `{` after trivia.
fn peek_block(scan: &mut Scanner<'_>) -> Result<bool> {
	scan.skip_trivia()?;
	Ok(scan.peek() == Some('{'))
}

/// Parse one non-modifier member: a field declaration is recorded, a
/// method or constructor is skipped.
fn parse_member(scan: &mut Scanner<'_>, decl: &mut ClassDecl, doc: Option<Box<str>>, line: usize) -> Result<()> {
	let (text, end) = scan.read_member_decl()?;

	match end {
		MemberEnd::Paren => {
			scan.skip_balanced('(', ')')?;
			skip_method_tail(scan)?;
		}
		MemberEnd::Eq => {
			let mut text = text;
			loop {
				scan.bump();
				match scan.skip_initializer()? {
					InitEnd::Semi => break,
					InitEnd::Comma => {}
				}
				// A top-level comma means another declarator follows.
				let (next, next_end) = scan.read_member_decl()?;
				text.push_str(", ");
				text.push_str(&next);
				match next_end {
					MemberEnd::Eq => {}
					MemberEnd::Semi => {
						scan.bump();
						break;
					}
					MemberEnd::Paren => {
						return Err(SampleError::Syntax {
							line: scan.line,
							message: "unexpected `(` in a field declarator list".to_owned(),
						});
					}
				}
			}
			record_fields(decl, &text, doc, line)?;
		}
		MemberEnd::Semi => {
			scan.bump();
			record_fields(decl, &text, doc, line)?;
		}
	}
	Ok(())
}

/// Consume a method's throws clause and body (or abstract semicolon).
fn skip_method_tail(scan: &mut Scanner<'_>) -> Result<()> {
	loop {
		scan.skip_trivia()?;
		match scan.peek() {
			Some('{') => {
				scan.skip_balanced('{', '}')?;
				return Ok(());
			}
			Some(';') => {
				scan.bump();
				return Ok(());
			}
			Some(_) => {
				if scan.read_word().is_none() {
					scan.bump();
				}
			}
			None => return Err(SampleError::UnbalancedBraces { line: scan.line }),
		}
	}
}

/// Split a field declaration's raw text into typed named declarators.
fn record_fields(decl: &mut ClassDecl, text: &str, doc: Option<Box<str>>, line: usize) -> Result<()> {
	let mut parts = split_top_level(text);
	if parts.is_empty() {
		return Err(SampleError::Syntax {
			line,
			message: "empty field declaration".to_owned(),
		});
	}

	let first = parts.remove(0);
	let (type_text, name, dims) = split_declarator(&first).ok_or_else(|| SampleError::Syntax {
		line,
		message: format!("cannot read field declaration `{first}`"),
	})?;
	let base = TypeRef::parse(&type_text).ok_or_else(|| SampleError::Syntax {
		line,
		message: format!("cannot parse type `{type_text}`"),
	})?;

	decl.fields.push(FieldDecl {
		name: name.into_boxed_str(),
		ty: apply_dims(base.clone(), dims),
		doc: doc.clone(),
	});

	// Further comma-separated declarators share the base type.
	for part in parts {
		let trimmed = part.trim();
		let (name, dims) = trailing_dims(trimmed);
		if name.is_empty() || !name.chars().all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$') {
			return Err(SampleError::Syntax {
				line,
				message: format!("cannot read field declarator `{trimmed}`"),
			});
		}
		decl.fields.push(FieldDecl {
			name: name.to_owned().into_boxed_str(),
			ty: apply_dims(base.clone(), dims),
			doc: doc.clone(),
		});
	}
	Ok(())
}

/// Split `modifiers Type name[]` into type text, name, and C-style dims.
fn split_declarator(text: &str) -> Option<(String, String, usize)> {
	let (head, dims) = trailing_dims(text.trim());
	let head = head.trim_end();
	let name_start = head.rfind(|ch: char| !(ch.is_alphanumeric() || ch == '_' || ch == '$')).map(|idx| idx + 1)?;
	let name = &head[name_start..];
	if name.is_empty() {
		return None;
	}

	let mut type_text = head[..name_start].trim();
	loop {
		let word_end = type_text
			.char_indices()
			.take_while(|(_, ch)| ch.is_alphanumeric() || *ch == '_')
			.map(|(idx, ch)| idx + ch.len_utf8())
			.last()
			.unwrap_or(0);
		if word_end > 0 && is_modifier(&type_text[..word_end]) && type_text[word_end..].starts_with(char::is_whitespace) {
			type_text = type_text[word_end..].trim_start();
		} else {
			break;
		}
	}
	if type_text.is_empty() {
		return None;
	}
	Some((type_text.to_owned(), name.to_owned(), dims))
}

/// Strip trailing `[]` groups, returning the remainder and their count.
fn trailing_dims(text: &str) -> (&str, usize) {
	let mut rest = text.trim_end();
	let mut dims = 0;
	while rest.ends_with(']') {
		let Some(open) = rest.rfind('[') else {
			break;
		};
		if !rest[open + 1..rest.len() - 1].trim().is_empty() {
			break;
		}
		rest = rest[..open].trim_end();
		dims += 1;
	}
	(rest, dims)
}

fn apply_dims(mut base: TypeRef, dims: usize) -> TypeRef {
	for _ in 0..dims {
		base = TypeRef::Array { elem: Box::new(base) };
	}
	base
}

/// Split on commas outside angle brackets and parentheses.
fn split_top_level(text: &str) -> Vec<String> {
	let mut out = Vec::new();
	let mut depth = 0_i32;
	let mut current = String::new();
	for ch in text.chars() {
		match ch {
			'<' | '(' | '[' => depth += 1,
			'>' | ')' | ']' => depth -= 1,
			',' if depth == 0 => {
				out.push(std::mem::take(&mut current));
				continue;
			}
			_ => {}
		}
		current.push(ch);
	}
	if !current.trim().is_empty() {
		out.push(current);
	}
	out
}

fn is_modifier(word: &str) -> bool {
	matches!(
		word,
		"public" | "private" | "protected" | "static" | "final" | "abstract" | "transient" | "volatile" | "synchronized" | "native" | "strictfp" | "default" | "sealed"
	)
}

/// How an initializer expression ended.
enum InitEnd {
	/// Top-level `,`: another declarator of the same type follows.
	Comma,
	/// Terminating `;`.
	Semi,
}

/// How a member declaration's leading text ended.
enum MemberEnd {
	/// `(` follows: method or constructor.
	Paren,
	/// `=` follows: field with an initializer.
	Eq,
	/// `;` follows: plain field.
	Semi,
}

struct Scanner<'a> {
	text: &'a str,
	pos: usize,
	line: usize,
	pending_doc: Option<Box<str>>,
}

struct ScanMark {
	pos: usize,
	line: usize,
}

impl<'a> Scanner<'a> {
	fn new(text: &'a str) -> Self {
		Self {
			text,
			pos: 0,
			line: 1,
			pending_doc: None,
		}
	}

	fn peek(&self) -> Option<char> {
		self.text[self.pos..].chars().next()
	}

	fn bump(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += ch.len_utf8();
		if ch == '\n' {
			self.line += 1;
		}
		Some(ch)
	}

	fn save(&self) -> ScanMark {
		ScanMark { pos: self.pos, line: self.line }
	}

	fn restore(&mut self, mark: ScanMark) {
		self.pos = mark.pos;
		self.line = mark.line;
	}

	fn restore_doc(&mut self, doc: Option<Box<str>>) {
		if doc.is_some() {
			self.pending_doc = doc;
		}
	}

	/// Take the most recent javadoc captured by trivia skipping.
	fn take_doc(&mut self) -> Option<Box<str>> {
		self.pending_doc.take()
	}

	/// Skip whitespace and comments, capturing javadoc text.
	fn skip_trivia(&mut self) -> Result<()> {
		loop {
			match self.peek() {
				Some(ch) if ch.is_whitespace() => {
					self.bump();
				}
				Some('/') => {
					let rest = &self.text[self.pos..];
					if rest.starts_with("//") {
						while let Some(ch) = self.bump() {
							if ch == '\n' {
								break;
							}
						}
					} else if rest.starts_with("/**") && !rest.starts_with("/**/") {
						let start_line = self.line;
						self.pos += 3;
						let body_start = self.pos;
						let Some(end) = self.text[self.pos..].find("*/") else {
							return Err(SampleError::UnbalancedBraces { line: start_line });
						};
						let body = &self.text[body_start..body_start + end];
						self.line += body.matches('\n').count();
						self.pos = body_start + end + 2;
						self.pending_doc = flatten_doc(body);
					} else if rest.starts_with("/*") {
						let start_line = self.line;
						self.pos += 2;
						let Some(end) = self.text[self.pos..].find("*/") else {
							return Err(SampleError::UnbalancedBraces { line: start_line });
						};
						self.line += self.text[self.pos..self.pos + end].matches('\n').count();
						self.pos += end + 2;
					} else {
						return Ok(());
					}
				}
				_ => return Ok(()),
			}
		}
	}

	fn read_word(&mut self) -> Option<&'a str> {
		let rest = &self.text[self.pos..];
		let end = rest
			.char_indices()
			.take_while(|(_, ch)| ch.is_alphanumeric() || *ch == '_' || *ch == '$')
			.map(|(idx, ch)| idx + ch.len_utf8())
			.last()?;
		self.pos += end;
		Some(&rest[..end])
	}

	/// Skip `@Name` or `@Name(...)`, qualifiers included.
	fn skip_annotation(&mut self) -> Result<()> {
		self.bump();
		loop {
			self.read_word();
			if self.peek() == Some('.') {
				self.bump();
			} else {
				break;
			}
		}
		self.skip_trivia()?;
		if self.peek() == Some('(') {
			self.skip_balanced('(', ')')?;
		}
		Ok(())
	}

	/// Skip to the end of the current `;`-terminated statement.
	fn skip_statement(&mut self) -> Result<()> {
		loop {
			match self.bump() {
				Some(';') => return Ok(()),
				Some(_) => {}
				None => return Err(SampleError::UnbalancedBraces { line: self.line }),
			}
		}
	}

	/// Skip a balanced bracket pair, string and char literals included.
	fn skip_balanced(&mut self, open: char, close: char) -> Result<()> {
		let start_line = self.line;
		let mut depth = 0_usize;
		loop {
			self.skip_trivia()?;
			match self.bump() {
				Some(ch) if ch == open => depth += 1,
				Some(ch) if ch == close => {
					depth -= 1;
					if depth == 0 {
						return Ok(());
					}
				}
				Some('"') => self.skip_string('"')?,
				Some('\'') => self.skip_string('\'')?,
				Some(_) => {}
				None => return Err(SampleError::UnbalancedBraces { line: start_line }),
			}
		}
	}

	/// Skip a field initializer expression, reporting whether it ended at
	/// a top-level `,` (another declarator follows) or the terminating `;`.
	fn skip_initializer(&mut self) -> Result<InitEnd> {
		let start_line = self.line;
		let mut depth = 0_usize;
		loop {
			self.skip_trivia()?;
			match self.bump() {
				Some('(') | Some('{') | Some('[') => depth += 1,
				Some(')') | Some('}') | Some(']') => {
					depth = depth.checked_sub(1).ok_or(SampleError::UnbalancedBraces { line: start_line })?;
				}
				Some(',') if depth == 0 => return Ok(InitEnd::Comma),
				Some(';') if depth == 0 => return Ok(InitEnd::Semi),
				Some('"') => self.skip_string('"')?,
				Some('\'') => self.skip_string('\'')?,
				Some(_) => {}
				None => return Err(SampleError::UnbalancedBraces { line: start_line }),
			}
		}
	}

	/// Skip a string or char literal body; the opening quote is consumed.
	fn skip_string(&mut self, quote: char) -> Result<()> {
		let start_line = self.line;
		loop {
			match self.bump() {
				Some('\\') => {
					self.bump();
				}
				Some(ch) if ch == quote => return Ok(()),
				Some(_) => {}
				None => return Err(SampleError::UnbalancedBraces { line: start_line }),
			}
		}
	}

	/// Read comma-separated supertype texts up to `{` or `implements`.
	fn read_type_text_list(&mut self) -> Result<Vec<String>> {
		let mut out = Vec::new();
		let mut current = String::new();
		let mut angle = 0_i32;
		loop {
			self.skip_trivia()?;
			match self.peek() {
				Some('{') if angle == 0 => break,
				Some(',') if angle == 0 => {
					self.bump();
					push_part(&mut out, &mut current);
					continue;
				}
				Some('<') => {
					angle += 1;
					current.push('<');
					self.bump();
				}
				Some('>') => {
					angle -= 1;
					current.push('>');
					self.bump();
				}
				Some(ch) if ch.is_alphanumeric() || ch == '_' || ch == '$' => {
					let mark = self.save();
					let word = self.read_word().unwrap_or("");
					if angle == 0 && matches!(word, "implements" | "permits") {
						self.restore(mark);
						break;
					}
					if current.chars().last().is_some_and(|last| last.is_alphanumeric() || last == '_' || last == '$') {
						current.push(' ');
					}
					current.push_str(word);
				}
				Some(ch @ ('.' | ',' | '?' | '[' | ']' | '&')) => {
					current.push(ch);
					self.bump();
				}
				_ => break,
			}
		}
		push_part(&mut out, &mut current);
		Ok(out)
	}

	/// Read raw member text until `(`, `=`, or `;` at bracket depth zero.
	fn read_member_decl(&mut self) -> Result<(String, MemberEnd)> {
		let mut out = String::new();
		let mut angle = 0_i32;
		loop {
			self.skip_trivia()?;
			match self.peek() {
				Some('(') if angle == 0 => return Ok((out, MemberEnd::Paren)),
				Some('=') if angle == 0 => return Ok((out, MemberEnd::Eq)),
				Some(';') if angle == 0 => return Ok((out, MemberEnd::Semi)),
				Some('@') => self.skip_annotation()?,
				Some('<') => {
					angle += 1;
					out.push('<');
					self.bump();
				}
				Some('>') => {
					angle -= 1;
					out.push('>');
					self.bump();
				}
				Some(ch) if ch.is_alphanumeric() || ch == '_' || ch == '$' => {
					let word = self.read_word().unwrap_or("");
					if out.chars().last().is_some_and(|last| last.is_alphanumeric() || last == '_' || last == '$') {
						out.push(' ');
					}
					out.push_str(word);
				}
				Some(ch @ ('.' | ',' | '?' | '[' | ']' | '&')) => {
					out.push(ch);
					self.bump();
				}
				Some(ch) => {
					return Err(SampleError::Syntax {
						line: self.line,
						message: format!("unexpected character `{ch}` in member declaration"),
					});
				}
				None => return Err(SampleError::UnbalancedBraces { line: self.line }),
			}
		}
	}
}

fn push_part(out: &mut Vec<String>, current: &mut String) {
	let trimmed = current.trim();
	if !trimmed.is_empty() {
		out.push(trimmed.to_owned());
	}
	current.clear();
}

/// Flatten javadoc interior text into one line.
///
/// Per-line comment furniture is stripped and whitespace runs collapsed;
/// the `@see` tag word is removed while its reference text survives.
fn flatten_doc(body: &str) -> Option<Box<str>> {
	let mut words = Vec::new();
	for line in body.lines() {
		let line = line.trim().trim_start_matches('*').trim();
		for word in line.split_whitespace() {
			words.push(word);
		}
	}

	let mut out: Vec<&str> = Vec::new();
	let mut idx = 0;
	while idx < words.len() {
		if words[idx] == "@see" {
			// Drop the tag word itself; its reference stays in the text.
			idx += 1;
			continue;
		}
		out.push(words[idx]);
		idx += 1;
	}

	let joined = out.join(" ");
	if joined.is_empty() { None } else { Some(joined.into_boxed_str()) }
}
