pub mod args;

pub use args::{Args, DEFAULT_INPUT, DEFAULT_OUTPUT};
