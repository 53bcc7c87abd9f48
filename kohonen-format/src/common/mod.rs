//! Contains functionality shared by the text format and json configuration.

mod definition;
pub use self::definition::*;

mod text_reader;
pub(crate) use self::text_reader::*;
