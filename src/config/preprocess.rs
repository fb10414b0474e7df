// --- Command-Line Arguments for the `preprocess` binary ---
use std::path::PathBuf;

use clap::Parser;

use crate::config::pipeline::{load_pipeline_config, InputFormat, PipelineConfig};
use crate::error::Result;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Clean review text for topic modeling", long_about = None)]
pub struct Args {
    /// Optional path to a pipeline configuration YAML file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Path to the input file (json, csv or parquet)
    #[arg(short, long)]
    pub input_file: Option<PathBuf>,

    /// Name of the column holding the review text
    #[arg(long)]
    pub text_column: Option<String>,

    /// Input format; inferred from the file extension if omitted
    #[arg(long)]
    pub format: Option<String>,

    /// Directory the cleaned CSV is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name prefix of the cleaned CSV
    #[arg(long)]
    pub output_prefix: Option<String>,

    /// Directory for the debug log file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Validate the configuration and exit
    #[arg(long)]
    pub validate_config: bool,
}

impl Args {
    /// Loads the YAML config (if any) and applies command-line overrides on top.
    pub fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => load_pipeline_config(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(path) = &self.input_file {
            config.input.path = path.clone();
        }
        if let Some(column) = &self.text_column {
            config.input.text_column = column.clone();
        }
        if let Some(format) = &self.format {
            config.input.format = Some(InputFormat::parse(format)?);
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(prefix) = &self.output_prefix {
            config.output.prefix = prefix.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.logging.dir = dir.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
