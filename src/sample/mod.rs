mod builtins;
mod error;
mod model;
mod parse;
mod render;
mod resolve;
mod simple;
mod types;
mod value;

/// Error and result aliases.
pub use error::{Result, SampleError};
/// Parsed class model and field enumeration.
pub use model::{ClassDecl, ClassKind, ClassModel, FieldDecl};
/// Source parsing entry points.
pub use parse::{parse_file, parse_source};
/// Commented and comment-free output rendering.
pub use render::{render, to_json};
/// Recursive sample resolution entry points and options.
pub use resolve::{ResolveOptions, Resolver};
/// Placeholder tables for simple types and primitives.
pub use simple::{Placeholder, SimpleTypes, primitive_default, simple_types};
/// Declared type representation.
pub use types::{Primitive, TypeRef};
/// Sample value tree.
pub use value::{Note, Sample, SampleField};
