pub mod classifier;
pub mod role_tables;
pub mod scorer;
