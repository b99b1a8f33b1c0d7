pub mod engine;
pub mod estimation;
pub mod layout;
pub mod usage;

pub use crate::domain::model::{DuctReport, RenderedReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
