/// Declared-class listing command.
pub mod classes;
/// Field enumeration command.
pub mod fields;
/// Sample JSON generation command.
pub mod sample;
