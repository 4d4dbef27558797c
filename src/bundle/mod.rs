pub mod dump_model;
pub mod reader;
pub mod version;
pub mod writer;
