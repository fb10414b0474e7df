// src/pipeline/token/mod.rs

pub mod annotator;
pub mod processor;
pub mod rule_annotator;

pub use annotator::{Annotator, Token, TokenAttributes, TokenStream};
pub use processor::RecordProcessor;
pub use rule_annotator::RuleAnnotator;
