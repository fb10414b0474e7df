#![allow(non_snake_case)]

// Declare the modules that form the library's public API
pub mod config;
pub mod data_model;
pub mod error;
pub mod executor;
pub mod observer;
pub mod pipeline;
pub mod utils;

pub mod preprocess_logic;
pub mod resolver;
pub mod shelf;

pub use error::{PipelineError, Result};
