// file: src/parser/mod.rs
// description: raw document decoding module exports
// reference: internal module structure

pub mod decoder;
pub mod schema;

pub use decoder::DocumentDecoder;
