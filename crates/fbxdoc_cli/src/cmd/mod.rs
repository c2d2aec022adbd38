/// Binary-to-JSON conversion command.
pub mod convert;
/// Record listing command.
pub mod dump;
/// Record lookup by name.
pub mod find;
/// File-level information command.
pub mod info;
/// Serializable views of decoded documents.
pub mod json;
/// Record name listing command.
pub mod names;
/// Shared helpers for command modules.
pub mod util;
