pub mod semantic_model;
