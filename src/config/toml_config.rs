use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    pub limits: LimitsConfig,
    pub files: FilesConfig,
    pub output: OutputConfig,
}

/// Capacities every user-supplied size is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_elements: usize,
    pub max_matrix_dim: usize,
    pub max_line_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_elements: 100,
            max_matrix_dim: 10,
            max_line_length: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub workdir: String,
    pub append_target: String,
    pub uppercase_input: String,
    pub uppercase_output: String,
    pub records_path: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            workdir: ".".to_string(),
            append_target: "example.txt".to_string(),
            uppercase_input: "input.txt".to_string(),
            uppercase_output: "output.txt".to_string(),
            records_path: "students.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl DrillConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DRILLS_WORKDIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Output format for this run; a `--format` flag wins over `[output]`.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.output.format)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number("limits.max_elements", self.limits.max_elements, 1)?;
        validate_positive_number("limits.max_matrix_dim", self.limits.max_matrix_dim, 1)?;
        validate_positive_number("limits.max_line_length", self.limits.max_line_length, 1)?;

        validate_path("files.workdir", &self.files.workdir)?;
        validate_path("files.append_target", &self.files.append_target)?;
        validate_path("files.uppercase_input", &self.files.uppercase_input)?;
        validate_path("files.uppercase_output", &self.files.uppercase_output)?;
        validate_path("files.records_path", &self.files.records_path)?;

        if self.files.uppercase_input == self.files.uppercase_output {
            return Err(DrillError::InvalidConfigValueError {
                field: "files.uppercase_output".to_string(),
                value: self.files.uppercase_output.clone(),
                reason: "Output must differ from files.uppercase_input".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for DrillConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
