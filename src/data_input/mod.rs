// src/data_input/mod.rs

pub mod csv_loader;
pub mod trajectory;

// src/data_input/mod.rs
