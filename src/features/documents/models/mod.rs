mod document;

pub use document::{CreateDocument, Document};
