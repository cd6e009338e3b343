//! JSON output generation for split files.

mod writer;

pub use writer::{to_pretty_json, write_json_file};
