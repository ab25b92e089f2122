pub mod document;
pub mod text;

pub use document::{Document, read_document, write_document};
pub use text::{format_field, parse_or_zero};
