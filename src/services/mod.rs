pub mod json_writer;
pub mod tutorial_parser;
pub mod warn_writer;

pub use json_writer::{classic_file_name, tutorial_file_name, JsonWriter};
pub use tutorial_parser::parse_tutorial;
pub use warn_writer::WarnWriter;
