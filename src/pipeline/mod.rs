// src/pipeline/mod.rs

pub mod readers;
pub mod token;
pub mod writers;
