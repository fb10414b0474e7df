use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Character limit applied by the default annotator, matching the limit of
/// common NLP toolkits.
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

/// Represents the overall preprocessing configuration read from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub input: InputConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
    pub annotator: AnnotatorConfig,
    pub logging: LoggingConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        self.input.validate()?;
        self.output.validate()?;
        self.annotator.validate()?;
        Ok(())
    }
}

/// Supported input file formats.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    Csv,
    Parquet,
}

impl InputFormat {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(InputFormat::Json),
            "csv" => Some(InputFormat::Csv),
            "parquet" | "pq" => Some(InputFormat::Parquet),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            "parquet" => Ok(InputFormat::Parquet),
            other => Err(PipelineError::ConfigError(format!(
                "Unknown input format '{}', expected one of: json, csv, parquet",
                other
            ))),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub path: PathBuf,
    pub text_column: String,
    /// Explicit format; inferred from the file extension when absent.
    pub format: Option<InputFormat>,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            path: PathBuf::new(),
            text_column: "text".to_string(),
            format: None,
        }
    }
}

impl InputConfig {
    /// The configured format, falling back to the path's extension.
    pub fn resolved_format(&self) -> Result<InputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        InputFormat::from_path(&self.path).ok_or_else(|| {
            PipelineError::ConfigError(format!(
                "Cannot infer input format from '{}'; set input.format explicitly",
                self.path.display()
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(PipelineError::ConfigValidationError(
                "InputConfig: path must not be empty".to_string(),
            ));
        }
        if self.text_column.trim().is_empty() {
            return Err(PipelineError::ConfigValidationError(
                "InputConfig: text_column must not be empty".to_string(),
            ));
        }
        self.resolved_format().map_err(|e| match e {
            PipelineError::ConfigError(msg) => PipelineError::ConfigValidationError(msg),
            other => other,
        })?;
        Ok(())
    }
}

/// Token filtering and normalization options. Fixed for a whole run.
///
/// `stopwords`, `punctuation` and `numbers` state whether tokens of that class
/// are kept (`true`) or dropped (`false`).
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(alias = "lemm")]
    pub lemmatize: bool,
    #[serde(alias = "lower")]
    pub lowercase: bool,
    pub stopwords: bool,
    #[serde(alias = "punctuations")]
    pub punctuation: bool,
    pub numbers: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            lemmatize: true,
            lowercase: true,
            stopwords: true,
            punctuation: false,
            numbers: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from("input_topicmodel"),
            prefix: "preprocessed_simple".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(PipelineError::ConfigValidationError(
                "OutputConfig: prefix must not be empty".to_string(),
            ));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(PipelineError::ConfigValidationError(format!(
                "OutputConfig: prefix must be a plain file name, got '{}'",
                self.prefix
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AnnotatorConfig {
    pub max_length: usize,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        AnnotatorConfig {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl AnnotatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(PipelineError::ConfigValidationError(
                "AnnotatorConfig: max_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            dir: PathBuf::from("logs"),
        }
    }
}

/// Loads and parses the pipeline configuration YAML file.
pub fn load_pipeline_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineConfig> {
    let path_ref = config_path.as_ref();
    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to read pipeline config file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    serde_yaml::from_str(&config_content).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to parse pipeline config YAML from '{}': {}",
            path_ref.display(),
            e
        ))
    })
}
