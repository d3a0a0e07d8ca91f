pub mod assembler;
pub mod colophon;
pub mod morphology;
pub mod parser;
pub mod token;
pub mod tokenizer;

pub use assembler::{assemble_book, assemble_verse, AssemblyOptions};
pub use colophon::{segment, segment_verse, Segmentation};
pub use tokenizer::tokenize;
