// src/extractors/mod.rs
pub mod document;
pub mod fields;
pub mod parsed;
pub mod table;
