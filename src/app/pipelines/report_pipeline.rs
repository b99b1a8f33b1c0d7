use crate::app::render::{
    render_json, render_layout_table, render_text, render_usage_table, JSON_FILE, LAYOUT_TABLE,
    TEXT_FILE, USAGE_TABLE,
};
use crate::core::engine::evaluate;
use crate::core::{ConfigProvider, DuctReport, Pipeline, RenderedReport, Storage};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Computes one session, renders the configured formats and writes them through storage.
pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn bundle(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, data) in files {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(data)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn compute(&self) -> Result<DuctReport> {
        let dimensions = self.config.dimensions();
        tracing::debug!(
            "Computing estimate for width={} depth={} length={} visualize={}",
            dimensions.width,
            dimensions.depth,
            dimensions.length,
            self.config.visualize()
        );
        evaluate(dimensions, self.config.visualize())
    }

    async fn render(&self, report: &DuctReport) -> Result<RenderedReport> {
        let mut rendered = RenderedReport::default();

        for format in self.config.output_formats() {
            match format.as_str() {
                "txt" => {
                    let text = render_text(
                        report,
                        self.config.zero_sheet_policy(),
                        self.config.precision(),
                    );
                    rendered.push(TEXT_FILE, text);
                }
                "csv" | "tsv" => {
                    let delimiter = if format == "tsv" { b'\t' } else { b',' };
                    rendered.push(
                        format!("{}.{}", USAGE_TABLE, format),
                        render_usage_table(report, delimiter)?,
                    );
                    if let Some(layout) = &report.layout {
                        rendered.push(
                            format!("{}.{}", LAYOUT_TABLE, format),
                            render_layout_table(layout, delimiter)?,
                        );
                    }
                }
                "json" => rendered.push(JSON_FILE, render_json(report)?),
                other => {
                    tracing::warn!("Skipping unsupported output format: {}", other);
                }
            }
        }

        Ok(rendered)
    }

    async fn load(&self, rendered: RenderedReport) -> Result<String> {
        let base = self.config.output_path();

        if let Some(archive) = self.config.archive_name() {
            let zip_data = Self::bundle(&rendered.files)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive, &zip_data).await?;
            return Ok(format!("{}/{}", base, archive));
        }

        for (name, data) in &rendered.files {
            self.storage.write_file(name, data).await?;
        }

        Ok(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DuctDimensions, ZeroSheetPolicy};
    use crate::utils::error::EstimatorError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                EstimatorError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        dimensions: DuctDimensions,
        visualize: bool,
        formats: Vec<String>,
        archive: Option<String>,
    }

    impl TestConfig {
        fn new(width: f64, depth: f64, length: f64, formats: &[&str]) -> Self {
            Self {
                dimensions: DuctDimensions::new(width, depth, length),
                visualize: false,
                formats: formats.iter().map(|f| f.to_string()).collect(),
                archive: None,
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn dimensions(&self) -> DuctDimensions {
            self.dimensions
        }

        fn visualize(&self) -> bool {
            self.visualize
        }

        fn output_path(&self) -> &str {
            "mem"
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn zero_sheet_policy(&self) -> ZeroSheetPolicy {
            ZeroSheetPolicy::Show
        }

        fn precision(&self) -> usize {
            2
        }

        fn archive_name(&self) -> Option<&str> {
            self.archive.as_deref()
        }
    }

    #[tokio::test]
    async fn test_render_skips_layout_table_without_visualize() {
        let pipeline = ReportPipeline::new(
            MockStorage::default(),
            TestConfig::new(0.5, 0.3, 5.0, &["csv", "json"]),
        );

        let report = pipeline.compute().await.unwrap();
        let rendered = pipeline.render(&report).await.unwrap();

        assert!(rendered.get("duct_usage.csv").is_some());
        assert!(rendered.get("duct_layout.csv").is_none());
        assert!(rendered.get("duct_report.json").is_some());
    }

    #[tokio::test]
    async fn test_render_layout_table_when_visualized() {
        let mut config = TestConfig::new(0.8, 0.8, 3.0, &["tsv"]);
        config.visualize = true;
        let pipeline = ReportPipeline::new(MockStorage::default(), config);

        let report = pipeline.compute().await.unwrap();
        let rendered = pipeline.render(&report).await.unwrap();

        assert!(rendered.get("duct_usage.tsv").is_some());
        assert!(rendered.get("duct_layout.tsv").is_some());
    }

    #[tokio::test]
    async fn test_load_writes_each_file() {
        let storage = MockStorage::default();
        let pipeline = ReportPipeline::new(
            storage.clone(),
            TestConfig::new(0.5, 0.3, 5.0, &["txt", "json"]),
        );

        let report = pipeline.compute().await.unwrap();
        let rendered = pipeline.render(&report).await.unwrap();
        let output = pipeline.load(rendered).await.unwrap();

        assert_eq!(output, "mem");
        let text = storage.read_file("duct_report.txt").await.unwrap();
        assert!(String::from_utf8(text).unwrap().contains("5 sheets"));
        assert!(storage.read_file("duct_report.json").await.is_ok());
    }

    #[tokio::test]
    async fn test_load_bundles_zip_archive() {
        let storage = MockStorage::default();
        let mut config = TestConfig::new(0.8, 0.8, 3.0, &["txt", "csv"]);
        config.visualize = true;
        config.archive = Some("bundle.zip".to_string());
        let pipeline = ReportPipeline::new(storage.clone(), config);

        let report = pipeline.compute().await.unwrap();
        let rendered = pipeline.render(&report).await.unwrap();
        let output = pipeline.load(rendered).await.unwrap();

        assert_eq!(output, "mem/bundle.zip");
        assert!(storage.read_file("duct_report.txt").await.is_err());

        let zip_data = storage.read_file("bundle.zip").await.unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(
            names,
            vec!["duct_layout.csv", "duct_report.txt", "duct_usage.csv"]
        );
    }

    #[tokio::test]
    async fn test_compute_rejects_negative_dimensions() {
        let pipeline = ReportPipeline::new(
            MockStorage::default(),
            TestConfig::new(0.5, -0.3, 5.0, &["txt"]),
        );
        assert!(matches!(
            pipeline.compute().await,
            Err(EstimatorError::InvalidInputError { .. })
        ));
    }
}
