// src/data_analysis/mod.rs

pub mod best_position;
pub mod replay;
pub mod segments;

// src/data_analysis/mod.rs
