pub mod local_storage;
pub mod toml_config;

pub use local_storage::LocalStorage;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::ConfigProvider;
    use crate::domain::model::{DuctDimensions, ZeroSheetPolicy};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_non_negative, validate_output_formats, validate_path, validate_range, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "gi-sheet")]
    #[command(about = "Estimate GI sheets for a rectangular duct and plan the cutting layout")]
    pub struct CliConfig {
        /// Duct width (m)
        #[arg(long, default_value = "0")]
        pub width: f64,

        /// Duct depth (m)
        #[arg(long, default_value = "0")]
        pub depth: f64,

        /// Duct run length (m)
        #[arg(long, default_value = "0")]
        pub length: f64,

        /// Plan the 2D cutting layout
        #[arg(long)]
        pub visualize: bool,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_delimiter = ',', default_value = "txt")]
        pub output_formats: Vec<String>,

        /// Bundle report files into one ZIP archive
        #[arg(long)]
        pub zip: bool,

        #[arg(long, value_enum, default_value = "show")]
        pub zero_sheets: ZeroSheetPolicy,

        /// Decimal places in the text report
        #[arg(long, default_value = "2")]
        pub precision: usize,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn dimensions(&self) -> DuctDimensions {
            DuctDimensions::new(self.width, self.depth, self.length)
        }

        fn visualize(&self) -> bool {
            self.visualize
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.output_formats
        }

        fn zero_sheet_policy(&self) -> ZeroSheetPolicy {
            self.zero_sheets
        }

        fn precision(&self) -> usize {
            self.precision
        }

        fn archive_name(&self) -> Option<&str> {
            self.zip.then_some("duct_report.zip")
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_negative("width", self.width)?;
            validate_non_negative("depth", self.depth)?;
            validate_non_negative("length", self.length)?;
            validate_path("output_path", &self.output_path)?;
            validate_output_formats("output_formats", &self.output_formats)?;
            validate_range("precision", self.precision, 0, 6)?;
            Ok(())
        }
    }

}
