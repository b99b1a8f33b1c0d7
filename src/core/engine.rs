use crate::core::estimation::estimate_dimensions;
use crate::core::layout::plan;
use crate::core::usage::usage;
use crate::core::Pipeline;
use crate::domain::model::{DuctDimensions, DuctReport, SheetSpec};
use crate::utils::error::Result;

/// Recomputes estimation and usage for one set of inputs, and plans the layout only
/// when the caller asked to visualize.
pub fn evaluate(dimensions: DuctDimensions, visualize: bool) -> Result<DuctReport> {
    let estimation = estimate_dimensions(&dimensions)?;
    let usage = usage(
        dimensions.width,
        dimensions.depth,
        estimation.folding_length,
    )?;

    let layout = if visualize {
        Some(plan(
            dimensions.width,
            dimensions.depth,
            estimation.folding_length,
            estimation.sheet_count,
        )?)
    } else {
        None
    };

    Ok(DuctReport {
        dimensions,
        sheet: SheetSpec::STANDARD,
        estimation,
        usage,
        layout,
        generated_at: chrono::Utc::now(),
    })
}

/// What one engine run produced: the computed report and where it was written.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub report: DuctReport,
    pub output_path: String,
}

pub struct EstimatorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EstimatorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SessionOutcome> {
        tracing::info!("Starting estimation session");

        let report = self.pipeline.compute().await?;
        tracing::info!(
            "Folding length {:.2} m, {} sheet(s) required",
            report.estimation.folding_length,
            report.estimation.sheet_count
        );

        let rendered = self.pipeline.render(&report).await?;
        tracing::info!("Rendered {} report file(s)", rendered.files.len());

        let output_path = self.pipeline.load(rendered).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(SessionOutcome {
            report,
            output_path,
        })
    }
}
