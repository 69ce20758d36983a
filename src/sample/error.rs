use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SampleError>;

/// Errors produced while parsing declarations and resolving sample values.
#[derive(Debug, Error)]
pub enum SampleError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Recursive resolution exceeded the configured depth ceiling.
	#[error("class reference depth exceeds the maximum limit or the class has nested references")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Collection-shaped type without an extractable element type argument.
	#[error("cannot extract an element type from {type_name}")]
	MissingElementType {
		/// Presentable text of the container type.
		type_name: String,
	},
	/// Requested class name was not declared in the parsed source.
	#[error("class not found: {name}")]
	ClassNotFound {
		/// Requested class name.
		name: String,
	},
	/// Source file contained no class declaration at all.
	#[error("no class declared in {}", path.display())]
	NoClassDeclared {
		/// Offending source path.
		path: PathBuf,
	},
	/// Declaration syntax the parser could not make sense of.
	#[error("syntax error at line {line}: {message}")]
	Syntax {
		/// One-based source line of the failure.
		line: usize,
		/// Human-readable description.
		message: String,
	},
	/// Source ended while braces or a comment were still open.
	#[error("unbalanced braces or unterminated comment starting near line {line}")]
	UnbalancedBraces {
		/// One-based line where the unclosed region began.
		line: usize,
	},
}

impl SampleError {
	/// Whether this is a domain-expected failure safe to surface verbatim.
	///
	/// Known errors are reported to the user as warnings with their
	/// original message; everything else collapses into a generic
	/// conversion failure.
	pub fn is_known(&self) -> bool {
		matches!(self, SampleError::DepthExceeded { .. })
	}
}
