use crate::domain::model::{DuctDimensions, DuctReport, RenderedReport, ZeroSheetPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn dimensions(&self) -> DuctDimensions;
    /// The explicit "visualize now" trigger; layout is only planned when set.
    fn visualize(&self) -> bool;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn zero_sheet_policy(&self) -> ZeroSheetPolicy;
    fn precision(&self) -> usize;
    /// Archive name when report files should be bundled into one ZIP.
    fn archive_name(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn compute(&self) -> Result<DuctReport>;
    async fn render(&self, report: &DuctReport) -> Result<RenderedReport>;
    async fn load(&self, rendered: RenderedReport) -> Result<String>;
}
