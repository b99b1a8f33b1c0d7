use crate::core::ConfigProvider;
use crate::domain::model::{DuctDimensions, ZeroSheetPolicy};
use crate::utils::error::{EstimatorError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_output_formats, validate_path,
    validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub duct: DuctConfig,
    pub display: Option<DisplayConfig>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuctConfig {
    pub width: f64,
    pub depth: f64,
    pub length: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub visualize: Option<bool>,
    pub zero_sheets: Option<ZeroSheetPolicy>,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EstimatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DUCT_WIDTH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EstimatorError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_negative("duct.width", self.duct.width)?;
        validate_non_negative("duct.depth", self.duct.depth)?;
        validate_non_negative("duct.length", self.duct.length)?;

        validate_path("output.output_path", &self.output.output_path)?;
        validate_output_formats("output.output_formats", &self.output.output_formats)?;

        if let Some(compression) = &self.output.compression {
            if compression.enabled {
                validate_non_empty_string("output.compression.filename", &compression.filename)?;
            }
        }

        validate_range("display.precision", self.precision(), 0, 6)?;

        Ok(())
    }

    fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn is_visualize(&self) -> bool {
        self.display().visualize.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn dimensions(&self) -> DuctDimensions {
        DuctDimensions::new(self.duct.width, self.duct.depth, self.duct.length)
    }

    fn visualize(&self) -> bool {
        self.is_visualize()
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn zero_sheet_policy(&self) -> ZeroSheetPolicy {
        self.display().zero_sheets.unwrap_or_default()
    }

    fn precision(&self) -> usize {
        self.display().precision.unwrap_or(2)
    }

    fn archive_name(&self) -> Option<&str> {
        self.output
            .compression
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| c.filename.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
