pub mod dialog;
pub mod stl;

pub use dialog::{choose_model_source, pick_model_file, resolve_model_source};
pub use stl::{load_stl_file, parse_ascii_stl, parse_binary_stl, parse_stl, StlFormat, StlMesh};
