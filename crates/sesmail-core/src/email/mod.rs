/// Message preparation: JSON hand-off and file reference inlining
pub mod inline;
pub mod json;

pub use inline::expand_file_references;
pub use json::{RawJson, render_raw_json};
