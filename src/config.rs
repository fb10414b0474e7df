// src/config.rs

pub mod bookids;
pub mod pipeline;
pub mod preprocess;

pub use pipeline::{
    load_pipeline_config, AnnotatorConfig, FilterConfig, InputConfig, InputFormat, LoggingConfig,
    OutputConfig, PipelineConfig,
};
