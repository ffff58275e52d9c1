// This module holds the specification document model and its file I/O.

pub mod io;
pub mod model;

pub use io::{
    document_to_string,
    load_document,
    parse_document,
    save_document,
    DocumentError,
    Result,
};

pub use model::{
    Definition,
    Document,
    Operation,
    Parameter,
    PathItem,
    Property,
};
