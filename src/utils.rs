pub mod helpers;

pub use helpers::{ensure_directory_exists, init_tracing, write_to_file};
