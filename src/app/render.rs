//! Report renderers: text summary, delimited usage/layout tables, JSON.

use crate::domain::model::{DrawPrimitive, DuctReport, LayoutPlan, SheetRectangle, ZeroSheetPolicy};
use crate::utils::error::{EstimatorError, Result};

pub const TEXT_FILE: &str = "duct_report.txt";
pub const JSON_FILE: &str = "duct_report.json";
pub const USAGE_TABLE: &str = "duct_usage";
pub const LAYOUT_TABLE: &str = "duct_layout";

/// Operator-facing summary, mirroring the result, usage and 2D display panels.
pub fn render_text(report: &DuctReport, policy: ZeroSheetPolicy, precision: usize) -> String {
    let p = precision;
    let dims = &report.dimensions;
    let mut lines = vec![
        "GI Sheet Estimate".to_string(),
        format!(
            "Duct: width {:.p$} m, depth {:.p$} m, length {:.p$} m",
            dims.width, dims.depth, dims.length
        ),
        format!(
            "Sheet: {:.2} m x {:.2} m",
            report.sheet.max_length, report.sheet.width
        ),
        String::new(),
    ];

    if report.is_empty_duct() && policy == ZeroSheetPolicy::Suppress {
        lines.push("No duct to fabricate: length is zero, no sheets required.".to_string());
        return lines.join("\n") + "\n";
    }

    let est = &report.estimation;
    lines.push("Result".to_string());
    lines.push(format!(
        "  Calculated total length required to fold the duct: {:.p$} meters",
        est.folding_length
    ));
    lines.push(format!(
        "  Sheets needed based on the length of duct: {:.p$} sheets",
        est.raw_sheet_count
    ));
    lines.push(format!(
        "  Total sheets needed ({}): {} sheets",
        est.sheets_per_section(),
        est.sheet_count
    ));
    lines.push(String::new());

    let usage = &report.usage;
    lines.push("Usage".to_string());
    lines.push(format!("  {:<18}{:>12}{:>10}", "Description", "Value (m)", "Share"));
    lines.push(format!(
        "  {:<18}{:>12.p$}{:>9.1}%",
        "Loss Length (m)",
        usage.loss_length,
        usage.loss_percent()
    ));
    lines.push(format!(
        "  {:<18}{:>12.p$}{:>9.1}%",
        "Used Length (m)",
        usage.used_length,
        usage.used_percent()
    ));

    if let Some(layout) = &report.layout {
        lines.push(String::new());
        lines.push("2D Display".to_string());
        lines.push(format!(
            "  Sheets shown: {} (axis extent {:.p$} m)",
            layout.sheets_to_show,
            layout.x_extent()
        ));
        for primitive in &layout.primitives {
            lines.push(match primitive {
                DrawPrimitive::GuideLine(line) => format!(
                    "  line   x = {:>8.p$}  {:<7} {}",
                    line.x,
                    line.color.as_str(),
                    line.label
                ),
                DrawPrimitive::SheetRectangle(rect) => format!(
                    "  sheet  [{:.p$}, {:.p$}] x [{:.p$}, {:.p$}]  {}",
                    rect.x_start,
                    rect.x_end,
                    rect.y_start,
                    rect.y_end,
                    SheetRectangle::COLOR.as_str()
                ),
            });
        }
    }

    lines.join("\n") + "\n"
}

/// Usage table: `Description, Value (m), Share (%)`.
pub fn render_usage_table(report: &DuctReport, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["Description", "Value (m)", "Share (%)"])?;
    writer.write_record([
        "Loss Length (m)".to_string(),
        report.usage.loss_length.to_string(),
        format!("{:.1}", report.usage.loss_percent()),
    ])?;
    writer.write_record([
        "Used Length (m)".to_string(),
        report.usage.used_length.to_string(),
        format!("{:.1}", report.usage.used_percent()),
    ])?;

    finish(writer)
}

/// One row per draw primitive, in drawing order.
pub fn render_layout_table(layout: &LayoutPlan, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record([
        "primitive",
        "x_start",
        "x_end",
        "y_start",
        "y_end",
        "color",
        "label",
    ])?;

    for primitive in &layout.primitives {
        match primitive {
            DrawPrimitive::GuideLine(line) => writer.write_record([
                "guide_line".to_string(),
                line.x.to_string(),
                line.x.to_string(),
                String::new(),
                String::new(),
                line.color.as_str().to_string(),
                line.label.clone(),
            ])?,
            DrawPrimitive::SheetRectangle(rect) => writer.write_record([
                "sheet_rectangle".to_string(),
                rect.x_start.to_string(),
                rect.x_end.to_string(),
                rect.y_start.to_string(),
                rect.y_end.to_string(),
                SheetRectangle::COLOR.as_str().to_string(),
                String::new(),
            ])?,
        }
    }

    finish(writer)
}

pub fn render_json(report: &DuctReport) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(report)?)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer.into_inner().map_err(|e| EstimatorError::ReportError {
        message: format!("Failed to flush table: {}", e),
    })
}
