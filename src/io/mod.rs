pub mod interaction_reader;
pub use interaction_reader::*;

pub mod dot_writer;
pub use dot_writer::DotWriter;
