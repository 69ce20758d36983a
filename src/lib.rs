//! Sample JSON generation from Java class declarations.
//!
//! Parses a declaration subset of Java source, then recursively resolves
//! a selected class's field types into representative placeholder values:
//! defaults for primitives, expanded objects for nested classes,
//! one-element arrays for arrays and collections, and first-constant
//! names for enums. The rendered document annotates each leaf with the
//! field type and any documentation comment as a trailing `//` comment.

/// Class model, type resolution, and rendering.
pub mod sample;
