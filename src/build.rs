mod builder;
mod document;
mod enhance;
mod highlight;
mod index;
mod markdown;
mod paths;
pub mod pipeline;
mod render;

pub use builder::{Builder, FileOutcome};
pub use paths::{base_path_from_config, output_file_name, resolve_against};
