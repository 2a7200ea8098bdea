pub mod markdown_loader;

pub use markdown_loader::{load_tutorial_source, source_path};
