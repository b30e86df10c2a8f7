//! I/O layer for reading LPGS MTL metadata records.
//! Provides the line tokenizer and the record reader that produces a
//! normalized [`SceneMetadata`](crate::core::scene::SceneMetadata).
pub mod mtl;
pub use mtl::{read_mtl, read_mtl_file, tokenize};
