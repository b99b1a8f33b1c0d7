pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::ReportPipeline;
pub use config::{toml_config::TomlConfig, LocalStorage};
pub use crate::core::{
    engine::{evaluate, EstimatorEngine, SessionOutcome},
    estimation::estimate,
    layout::plan,
    usage::usage,
};
pub use domain::model::{
    DrawPrimitive, DuctDimensions, DuctReport, EstimationResult, GuideKind, GuideLine, LayoutPlan,
    LineColor, SheetRectangle, SheetSpec, UsageBreakdown, ZeroSheetPolicy,
};
pub use utils::error::{EstimatorError, Result};
